use std::path::Path;

use fw_engine::{EngineConfig, GameSession};

pub fn run(world_path: Option<&Path>) -> Result<(), String> {
    let world = super::load_world(world_path)?;
    let title = world.title.clone().unwrap_or_else(|| "untitled world".to_string());
    let summary = format!(
        "{} rooms, {} exits, {} objects, {} time periods",
        world.rooms.len(),
        world.exit_count(),
        world.objects.len(),
        world.time_periods.len()
    );

    GameSession::new(world, EngineConfig::default()).map_err(|e| e.to_string())?;

    println!("  All checks passed for '{title}'.");
    println!("  {summary}");

    Ok(())
}
