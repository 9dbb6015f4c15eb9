use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::direction::Direction;

/// Identifier of a room, as used for keys of the world's room table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(pub String);

impl RoomId {
    /// Create a room identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RoomId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A location the player can stand in. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    /// Display name, shown every time the room is displayed.
    pub name: String,
    /// Full prose description.
    #[serde(default)]
    pub description: String,
    /// Exit table: direction to target room.
    #[serde(default)]
    pub exits: BTreeMap<Direction, RoomId>,
    /// Custom messages for directions without an exit.
    #[serde(default)]
    pub exit_errors: BTreeMap<Direction, String>,
    /// Whether the room is outdoors. Changes the default no-exit wording.
    #[serde(default)]
    pub outside: bool,
}

impl Room {
    /// Create a room with a name and no exits.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            exits: BTreeMap::new(),
            exit_errors: BTreeMap::new(),
            outside: false,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Add an exit.
    pub fn with_exit(mut self, direction: Direction, target: impl Into<String>) -> Self {
        self.exits.insert(direction, RoomId::new(target));
        self
    }

    /// Add a custom message for a direction without an exit.
    pub fn with_exit_error(mut self, direction: Direction, message: impl Into<String>) -> Self {
        self.exit_errors.insert(direction, message.into());
        self
    }

    /// Mark the room as outdoors.
    pub fn outdoors(mut self) -> Self {
        self.outside = true;
        self
    }

    /// The room an exit in `direction` leads to, if any.
    pub fn exit(&self, direction: Direction) -> Option<&RoomId> {
        self.exits.get(&direction)
    }

    /// The room-specific failure message for `direction`, if any.
    pub fn exit_error(&self, direction: Direction) -> Option<&str> {
        self.exit_errors.get(&direction).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_room_from_camel_case() {
        let json = r#"{
            "name": "Garden",
            "description": "Roses everywhere.",
            "exits": { "n": "hall", "up": "treehouse" },
            "exitErrors": { "s": "The hedge is too thick." },
            "outside": true
        }"#;
        let room: Room = serde_json::from_str(json).unwrap();
        assert_eq!(room.name, "Garden");
        assert_eq!(room.exit(Direction::North), Some(&RoomId::new("hall")));
        assert_eq!(room.exit(Direction::Up), Some(&RoomId::new("treehouse")));
        assert_eq!(room.exit(Direction::East), None);
        assert_eq!(
            room.exit_error(Direction::South),
            Some("The hedge is too thick.")
        );
        assert!(room.outside);
    }

    #[test]
    fn optional_fields_default() {
        let room: Room = serde_json::from_str(r#"{ "name": "Closet" }"#).unwrap();
        assert!(room.description.is_empty());
        assert!(room.exits.is_empty());
        assert!(!room.outside);
    }

    #[test]
    fn builder_methods() {
        let room = Room::new("Hall")
            .with_description("A long hall.")
            .with_exit(Direction::South, "start")
            .with_exit_error(Direction::North, "A locked door.")
            .outdoors();
        assert_eq!(room.exit(Direction::South).map(RoomId::as_str), Some("start"));
        assert_eq!(room.exit_error(Direction::North), Some("A locked door."));
        assert!(room.outside);
    }
}
