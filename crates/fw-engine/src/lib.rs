//! Command interpreter and world-state simulation for Fernweh.
//!
//! Turns free-text input into commands, runs them against a single
//! [`WorldState`], and reports the outcome as a list of [`Response`]
//! records for a presentation layer to render. Moves advance a 24-hour
//! clock, regenerate health and announce periods of the day; late-night
//! moves wear down awakeness until the player falls asleep.

/// Time of day.
pub mod clock;
/// Session tuning constants.
pub mod config;
/// Error types for the engine.
pub mod error;
/// Weight-limited inventory.
pub mod inventory;
/// Narration settings and message templates.
pub mod narrator;
/// Response records and the status line.
pub mod output;
/// Input parsing, the verb registry and object resolution.
pub mod parser;
/// Persisted display-mode preference.
pub mod preferences;
/// Injectable uniform random choice.
pub mod random;
/// Game session and command execution.
pub mod session;
/// Mutable simulation state.
pub mod state;
/// Health and awakeness.
pub mod vitals;

pub use clock::GameClock;
pub use config::EngineConfig;
pub use error::{EngineError, EngineResult};
pub use inventory::{Inventory, ObjectKey};
pub use narrator::Verbosity;
pub use output::{Response, StatusLine, transcript};
pub use parser::{Command, ParsedInput, parse_input};
pub use preferences::{DisplayMode, FilePreferences, MemoryPreferences, PreferenceStore};
pub use random::{Chooser, RandomChooser, SequenceChooser};
pub use session::GameSession;
pub use state::WorldState;
pub use vitals::{Awakeness, Health, HealthBand};
