use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(world_path: Option<&Path>) -> Result<(), String> {
    let world = super::load_world(world_path)?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Name", "Outside", "Exits", "Objects"]);

    for (id, room) in &world.rooms {
        let exits = room
            .exits
            .iter()
            .map(|(direction, target)| format!("{} → {target}", direction.token()))
            .collect::<Vec<_>>()
            .join(", ");
        let objects = world
            .objects
            .iter()
            .filter(|object| object.location.is_in(id))
            .map(|object| object.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let outside = if room.outside { "yes" } else { "no" };

        table.add_row(vec![
            id.to_string(),
            room.name.clone(),
            outside.to_string(),
            or_dash(exits),
            or_dash(objects),
        ]);
    }

    println!("{table}");
    println!();
    let start = world
        .room(&world.start_room)
        .map_or(world.start_room.as_str(), |room| room.name.as_str());
    println!("  {} rooms, starting in {start}", world.rooms.len());

    Ok(())
}

fn or_dash(text: String) -> String {
    if text.is_empty() { "-".to_string() } else { text }
}
