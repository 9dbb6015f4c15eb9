use std::path::PathBuf;

use crate::direction::Direction;
use crate::room::RoomId;

/// Alias for `Result<T, WorldError>`.
pub type WorldResult<T> = Result<T, WorldError>;

/// Errors raised while loading or validating world data.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// The world file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The document is not valid world JSON.
    #[error("invalid world data: {0}")]
    Json(#[from] serde_json::Error),

    /// The configured start room is not in the room table.
    #[error("start room \"{0}\" is not defined")]
    MissingStartRoom(RoomId),

    /// An exit points at a room that does not exist.
    #[error("room \"{room}\" has a {direction} exit to unknown room \"{target}\"")]
    DanglingExit {
        /// Room holding the exit.
        room: RoomId,
        /// Direction of the exit.
        direction: Direction,
        /// Missing target room.
        target: RoomId,
    },

    /// An object is placed in a room that does not exist.
    #[error("object \"{object}\" is placed in unknown room \"{room}\"")]
    UnknownObjectRoom {
        /// Object name.
        object: String,
        /// Missing room.
        room: RoomId,
    },

    /// Time periods are not ordered by start hour.
    #[error("time periods must be ordered by start hour")]
    UnsortedTimeTable,

    /// A time period starts outside 0..24.
    #[error("time period \"{name}\" starts at {hour}, outside 0..24")]
    PeriodOutOfRange {
        /// Period name.
        name: String,
        /// Offending start hour.
        hour: f64,
    },
}
