//! Display-mode preference, the one value that survives between sessions.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EngineError, EngineResult};

/// Light or dark presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Light background.
    #[default]
    Light,
    /// Dark background.
    Dark,
}

impl DisplayMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the display mode is kept between sessions.
pub trait PreferenceStore {
    /// The stored mode, or the default if nothing usable is stored.
    fn load_mode(&self) -> DisplayMode;
    /// Persist the mode. Last write wins.
    fn save_mode(&mut self, mode: DisplayMode) -> EngineResult<()>;
}

/// Keeps the mode in memory only.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    mode: DisplayMode,
}

impl MemoryPreferences {
    /// Start with a given mode.
    pub fn new(mode: DisplayMode) -> Self {
        Self { mode }
    }
}

impl PreferenceStore for MemoryPreferences {
    fn load_mode(&self) -> DisplayMode {
        self.mode
    }

    fn save_mode(&mut self, mode: DisplayMode) -> EngineResult<()> {
        self.mode = mode;
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PreferenceFile {
    game_mode: DisplayMode,
}

/// Stores the mode as a small JSON document on disk.
#[derive(Debug, Clone)]
pub struct FilePreferences {
    path: PathBuf,
}

impl FilePreferences {
    /// Use the file at `path`. It need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for FilePreferences {
    fn load_mode(&self) -> DisplayMode {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "no stored preferences");
                return DisplayMode::default();
            }
        };
        match serde_json::from_str::<PreferenceFile>(&contents) {
            Ok(file) => file.game_mode,
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "ignoring unreadable preferences");
                DisplayMode::default()
            }
        }
    }

    fn save_mode(&mut self, mode: DisplayMode) -> EngineResult<()> {
        let json = serde_json::to_string_pretty(&PreferenceFile { game_mode: mode })?;
        std::fs::write(&self.path, json).map_err(|source| EngineError::PreferenceIo {
            path: self.path.clone(),
            source,
        })
    }
}
