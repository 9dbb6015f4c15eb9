//! World data model for Fernweh.
//!
//! Rooms, objects, message pools, and the time-of-day table that a text
//! adventure is built from. The data is static: it is loaded from a JSON
//! document (or built programmatically), validated once, and handed to the
//! engine, which owns all mutable game state.

/// World document: room table, objects, and message tables.
pub mod data;
/// Movement directions.
pub mod direction;
/// Error types used throughout the crate.
pub mod error;
/// Objects the player can see and carry.
pub mod object;
/// Time-of-day periods.
pub mod period;
/// Rooms and room identifiers.
pub mod room;

pub use data::WorldData;
pub use direction::Direction;
pub use error::{WorldError, WorldResult};
pub use object::{Article, GameObject, ObjectLocation};
pub use period::{TimePeriod, TimeTable};
pub use room::{Room, RoomId};
