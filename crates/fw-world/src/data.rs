use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{WorldError, WorldResult};
use crate::object::{GameObject, ObjectLocation};
use crate::period::TimeTable;
use crate::room::{Room, RoomId};

const DEMO_WORLD: &str = include_str!("../data/demo.json");

fn default_start_room() -> RoomId {
    RoomId::new("startRoom")
}

/// The static content of a game: rooms, objects, and message tables.
///
/// Loaded once from a JSON document and never mutated; the engine clones
/// the object list into its own state when a session starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldData {
    /// Optional title shown by tooling.
    #[serde(default)]
    pub title: Option<String>,
    /// Room the player starts in.
    #[serde(default = "default_start_room")]
    pub start_room: RoomId,
    /// Room table keyed by identifier.
    pub rooms: BTreeMap<RoomId, Room>,
    /// Every object, with its initial location.
    #[serde(default)]
    pub objects: Vec<GameObject>,
    /// Lines shown when a session starts.
    #[serde(default)]
    pub welcome_messages: Vec<String>,
    /// Pool of replies to unrecognized commands.
    #[serde(default)]
    pub responses: Vec<String>,
    /// Messages keyed by the awakeness value just reached.
    #[serde(default)]
    pub awakeness_messages: BTreeMap<u32, String>,
    /// Pool of messages shown on waking up.
    #[serde(default)]
    pub wake_up_messages: Vec<String>,
    /// Ordered time-of-day periods.
    #[serde(default)]
    pub time_periods: TimeTable,
}

impl WorldData {
    /// Create a world containing only its start room.
    pub fn new(start_room: impl Into<String>, room: Room) -> Self {
        let start_room = RoomId::new(start_room);
        let mut rooms = BTreeMap::new();
        rooms.insert(start_room.clone(), room);
        Self {
            title: None,
            start_room,
            rooms,
            objects: Vec::new(),
            welcome_messages: Vec::new(),
            responses: Vec::new(),
            awakeness_messages: BTreeMap::new(),
            wake_up_messages: Vec::new(),
            time_periods: TimeTable::default(),
        }
    }

    /// Parse world data from a JSON string.
    pub fn from_json(json: &str) -> WorldResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON world file.
    pub fn load(path: &Path) -> WorldResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| WorldError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// The world bundled with the crate.
    pub fn demo() -> WorldResult<Self> {
        Self::from_json(DEMO_WORLD)
    }

    /// Add a room.
    pub fn with_room(mut self, id: impl Into<String>, room: Room) -> Self {
        self.rooms.insert(RoomId::new(id), room);
        self
    }

    /// Add an object.
    pub fn with_object(mut self, object: GameObject) -> Self {
        self.objects.push(object);
        self
    }

    /// Look up a room by identifier.
    pub fn room(&self, id: &RoomId) -> Option<&Room> {
        self.rooms.get(id)
    }

    /// The message registered for an awakeness value, if any.
    pub fn awakeness_message(&self, awakeness: u32) -> Option<&str> {
        self.awakeness_messages.get(&awakeness).map(String::as_str)
    }

    /// Check that every reference in the data resolves.
    pub fn validate(&self) -> WorldResult<()> {
        if !self.rooms.contains_key(&self.start_room) {
            return Err(WorldError::MissingStartRoom(self.start_room.clone()));
        }

        for (id, room) in &self.rooms {
            for (direction, target) in &room.exits {
                if !self.rooms.contains_key(target) {
                    return Err(WorldError::DanglingExit {
                        room: id.clone(),
                        direction: *direction,
                        target: target.clone(),
                    });
                }
            }
        }

        let misplaced = self
            .objects
            .iter()
            .find_map(|object| match &object.location {
                ObjectLocation::Room(room) if !self.rooms.contains_key(room) => {
                    Some((object, room))
                }
                _ => None,
            });
        if let Some((object, room)) = misplaced {
            return Err(WorldError::UnknownObjectRoom {
                object: object.name.clone(),
                room: room.clone(),
            });
        }

        if let Some(period) = self
            .time_periods
            .periods()
            .iter()
            .find(|p| !(0.0..24.0).contains(&p.start_hour))
        {
            return Err(WorldError::PeriodOutOfRange {
                name: period.name.clone(),
                hour: period.start_hour,
            });
        }
        if !self.time_periods.is_sorted() {
            return Err(WorldError::UnsortedTimeTable);
        }

        Ok(())
    }

    /// Number of exits across all rooms.
    pub fn exit_count(&self) -> usize {
        self.rooms.values().map(|room| room.exits.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Direction;
    use crate::period::TimePeriod;

    fn two_rooms() -> WorldData {
        WorldData::new(
            "start",
            Room::new("Start").with_exit(Direction::North, "hall"),
        )
        .with_room("hall", Room::new("Hall").with_exit(Direction::South, "start"))
    }

    #[test]
    fn valid_world_passes() {
        assert!(two_rooms().validate().is_ok());
    }

    #[test]
    fn missing_start_room() {
        let mut world = two_rooms();
        world.start_room = RoomId::new("nowhere");
        assert!(matches!(
            world.validate(),
            Err(WorldError::MissingStartRoom(id)) if id.as_str() == "nowhere"
        ));
    }

    #[test]
    fn dangling_exit() {
        let world = two_rooms().with_room("cellar", Room::new("Cellar").with_exit(Direction::Up, "attic"));
        let err = world.validate().unwrap_err();
        assert!(matches!(err, WorldError::DanglingExit { direction: Direction::Up, .. }));
        assert!(err.to_string().contains("attic"));
    }

    #[test]
    fn object_in_unknown_room() {
        let world = two_rooms().with_object(GameObject::new("key", "vault"));
        assert!(matches!(
            world.validate(),
            Err(WorldError::UnknownObjectRoom { .. })
        ));
    }

    #[test]
    fn unsorted_time_table() {
        let mut world = two_rooms();
        world.time_periods = TimeTable::new(vec![
            TimePeriod::new(12.0, "Noon", ""),
            TimePeriod::new(6.0, "Dawn", ""),
        ]);
        assert!(matches!(world.validate(), Err(WorldError::UnsortedTimeTable)));
    }

    #[test]
    fn period_out_of_range() {
        let mut world = two_rooms();
        world.time_periods = TimeTable::new(vec![TimePeriod::new(25.0, "Never", "")]);
        assert!(matches!(
            world.validate(),
            Err(WorldError::PeriodOutOfRange { .. })
        ));
    }

    #[test]
    fn parse_minimal_document() {
        let world = WorldData::from_json(
            r#"{ "rooms": { "startRoom": { "name": "Porch", "outside": true } } }"#,
        )
        .unwrap();
        assert_eq!(world.start_room.as_str(), "startRoom");
        assert!(world.validate().is_ok());
        assert!(world.objects.is_empty());
    }

    #[test]
    fn awakeness_messages_use_numeric_keys() {
        let world = WorldData::from_json(
            r#"{
                "rooms": { "startRoom": { "name": "Porch" } },
                "awakenessMessages": { "5": "You yawn.", "1": "Your eyelids droop." }
            }"#,
        )
        .unwrap();
        assert_eq!(world.awakeness_message(5), Some("You yawn."));
        assert_eq!(world.awakeness_message(4), None);
    }

    #[test]
    fn invalid_json_is_reported() {
        assert!(matches!(
            WorldData::from_json("{ not json"),
            Err(WorldError::Json(_))
        ));
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = WorldData::load(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, WorldError::Io { .. }));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("world.json");
        std::fs::write(&path, r#"{ "rooms": { "startRoom": { "name": "Porch" } } }"#).unwrap();
        let world = WorldData::load(&path).unwrap();
        assert_eq!(world.rooms.len(), 1);
    }

    #[test]
    fn demo_world_is_valid() {
        let world = WorldData::demo().unwrap();
        world.validate().unwrap();
        assert!(!world.welcome_messages.is_empty());
        assert!(!world.responses.is_empty());
        assert!(!world.wake_up_messages.is_empty());
        assert!(!world.time_periods.is_empty());
        assert!(world.exit_count() > 0);
    }
}
