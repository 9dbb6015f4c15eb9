use std::io::{self, BufRead, IsTerminal, Write};
use std::path::Path;

use colored::{Color, Colorize};
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use tracing::debug;

use fw_engine::{DisplayMode, EngineConfig, FilePreferences, GameSession, Response};

/// Text colors for one display mode.
struct Palette {
    text: Color,
    accent: Color,
    status: Color,
}

impl Palette {
    fn for_mode(mode: DisplayMode) -> Self {
        match mode {
            DisplayMode::Light => Self {
                text: Color::Black,
                accent: Color::Blue,
                status: Color::BrightBlack,
            },
            DisplayMode::Dark => Self {
                text: Color::BrightWhite,
                accent: Color::Yellow,
                status: Color::White,
            },
        }
    }
}

pub fn run(world_path: Option<&Path>, seed: Option<u64>, start_hour: f64, prefs: &Path) -> Result<(), String> {
    let world = super::load_world(world_path)?;

    let mut config = EngineConfig::default().with_start_hour(start_hour);
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    let mut session = GameSession::new(world, config)
        .map_err(|e| format!("failed to start session: {e}"))?
        .with_preferences(FilePreferences::new(prefs));
    debug!(
        prefs = %prefs.display(),
        mode = %session.state().display_mode,
        move_hours = session.config().move_hours,
        "session ready"
    );

    let interactive = io::stdout().is_terminal();
    let mut out = io::stdout();

    if let Some(title) = &session.world().title {
        println!("  {}", title.bold());
    }
    println!("  Type 'help' for commands, 'quit' to exit.\n");

    let opening = session.start().map_err(|e| e.to_string())?;
    render(&mut out, &opening, session.state().display_mode, interactive).map_err(|e| e.to_string())?;

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    while !session.is_finished() {
        let palette = Palette::for_mode(session.state().display_mode);
        println!("\n{}", session.status().to_string().color(palette.status));
        print!("> ");
        out.flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let responses = session.process(&line).map_err(|e| e.to_string())?;
        render(&mut out, &responses, session.state().display_mode, interactive).map_err(|e| e.to_string())?;
    }

    Ok(())
}

fn render(out: &mut impl Write, responses: &[Response], mode: DisplayMode, interactive: bool) -> io::Result<()> {
    let palette = Palette::for_mode(mode);
    for response in responses {
        match response {
            Response::Text(text) => writeln!(out, "{}", text.color(palette.text))?,
            Response::Listing { heading, items } => {
                if let Some(heading) = heading {
                    writeln!(out, "{}", heading.color(palette.accent).bold())?;
                }
                for item in items {
                    writeln!(out, "  {} {}", "-".color(palette.accent), item.color(palette.text))?;
                }
            }
            Response::Clear if interactive => execute!(out, Clear(ClearType::All), MoveTo(0, 0))?,
            Response::Clear => writeln!(out)?,
        }
    }
    out.flush()
}
