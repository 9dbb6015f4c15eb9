//! Command parsing and object resolution.

mod command;
mod input;
mod resolver;

pub use command::{Command, REGISTRY};
pub use input::{ParsedInput, SYNONYMS, normalize_verb, parse_input};
pub use resolver::resolve_object;
