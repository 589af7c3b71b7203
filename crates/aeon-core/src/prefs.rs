//! Persisted viewer preferences.
//!
//! A single small JSON file holds the settings that survive between
//! sessions. Everything else about the viewer is transient state.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

/// Viewer preferences persisted between sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prefs {
    /// Whether the dark palette is active.
    #[serde(default = "default_dark_mode")]
    pub dark_mode: bool,
}

fn default_dark_mode() -> bool {
    true
}

impl Default for Prefs {
    fn default() -> Self {
        Self { dark_mode: true }
    }
}

impl Prefs {
    /// Load preferences from a file.
    pub fn load(path: &Path) -> Result<Self, PrefsError> {
        let content = std::fs::read_to_string(path).map_err(PrefsError::Io)?;
        serde_json::from_str(&content).map_err(PrefsError::Parse)
    }

    /// Load preferences, falling back to defaults on a missing or bad file.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(prefs) => prefs,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to load prefs, using defaults");
                Self::default()
            }
        }
    }

    /// Save preferences to a file, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), PrefsError> {
        let content = serde_json::to_string_pretty(self).map_err(PrefsError::Serialize)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(PrefsError::Io)?;
        }
        std::fs::write(path, content).map_err(PrefsError::Io)
    }
}

/// Errors that can occur when working with preferences.
#[derive(Debug, thiserror::Error)]
pub enum PrefsError {
    /// I/O error reading or writing the prefs file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing the prefs JSON.
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// Error serializing prefs to JSON.
    #[error("Serialize error: {0}")]
    Serialize(#[source] serde_json::Error),
}
