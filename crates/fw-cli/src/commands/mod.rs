pub mod check;
pub mod play;
pub mod rooms;

use std::path::Path;

use fw_world::WorldData;
use tracing::info;

/// Load a world file, or the bundled demo world when no path is given.
fn load_world(path: Option<&Path>) -> Result<WorldData, String> {
    let world = match path {
        Some(path) => WorldData::load(path).map_err(|e| e.to_string())?,
        None => WorldData::demo().map_err(|e| format!("bundled world is broken: {e}"))?,
    };
    info!(
        source = %path.map_or_else(|| "demo".to_string(), |p| p.display().to_string()),
        rooms = world.rooms.len(),
        objects = world.objects.len(),
        "loaded world"
    );
    Ok(world)
}
