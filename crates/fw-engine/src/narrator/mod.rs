//! Narration: verbosity and message templates.

mod config;
pub mod templates;

pub use config::Verbosity;
