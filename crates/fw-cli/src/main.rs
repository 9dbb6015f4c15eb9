//! Terminal frontend for the Fernweh text adventure.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "fernweh",
    about = "Fernweh: a small text adventure for the terminal",
    version,
    propagate_version = true,
    args_conflicts_with_subcommands = true
)]
struct Cli {
    /// Log filter, e.g. "debug" or "fw_engine=debug" (default: $RUST_LOG or "warn")
    #[arg(long, global = true, value_name = "FILTER")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    play: PlayArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the game (the default when no subcommand is given)
    Play(PlayArgs),

    /// Validate a world file and print a summary
    Check {
        /// World file (default: the bundled demo world)
        #[arg(short, long)]
        world: Option<PathBuf>,
    },

    /// List rooms, exits and objects as a table
    Rooms {
        /// World file (default: the bundled demo world)
        #[arg(short, long)]
        world: Option<PathBuf>,
    },
}

#[derive(Args, Clone)]
struct PlayArgs {
    /// World file (default: the bundled demo world)
    #[arg(short, long)]
    world: Option<PathBuf>,

    /// RNG seed for reproducible responses
    #[arg(short, long)]
    seed: Option<u64>,

    /// Clock hour at the start of the game
    #[arg(long, default_value = "8.0")]
    start_hour: f64,

    /// File that remembers the light/dark display mode
    #[arg(long, default_value = "fernweh-prefs.json")]
    prefs: PathBuf,
}

fn init_logging(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    let result = match cli.command {
        Some(Commands::Play(args)) => play(&args),
        Some(Commands::Check { world }) => commands::check::run(world.as_deref()),
        Some(Commands::Rooms { world }) => commands::rooms::run(world.as_deref()),
        None => play(&cli.play),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn play(args: &PlayArgs) -> Result<(), String> {
    commands::play::run(args.world.as_deref(), args.seed, args.start_hour, &args.prefs)
}
