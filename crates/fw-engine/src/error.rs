//! Error types for the game engine.
//!
//! Nothing a player types produces an error: refused actions are narrated as
//! ordinary responses. These variants cover bad world data and broken
//! internal invariants.

use std::path::PathBuf;

use fw_world::{RoomId, WorldError};
use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while running a game session.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The world data failed validation.
    #[error(transparent)]
    World(#[from] WorldError),

    /// A room referenced by the current state is missing from the world.
    #[error("room not found: {0}")]
    RoomNotFound(RoomId),

    /// Objects that start in the inventory weigh more than it can hold.
    #[error("starting inventory weighs {weight}, more than the capacity of {max}")]
    InventoryOverCapacity {
        /// Total weight of the starting inventory.
        weight: u32,
        /// Configured capacity.
        max: u32,
    },

    /// The preference file could not be written.
    #[error("failed to write preferences to {path}: {source}")]
    PreferenceIo {
        /// Preference file path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The preferences could not be serialized.
    #[error("failed to encode preferences: {0}")]
    PreferenceFormat(#[from] serde_json::Error),
}
