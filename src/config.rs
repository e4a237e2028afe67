//! Game settings loaded from an optional TOML file.

use crate::theme::ThemeName;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// User-tunable settings.
///
/// Every field has a default, so a missing file and a partial file
/// both work.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seconds each side has per turn before the turn is skipped.
    #[serde(default = "default_turn_seconds")]
    turn_seconds: u64,

    /// Artificial thinking delay before the AI moves, in milliseconds.
    #[serde(default = "default_ai_delay_ms")]
    ai_delay_ms: u64,

    /// Color theme.
    #[serde(default)]
    theme: ThemeName,

    /// Where the match-result log is persisted.
    #[serde(default = "default_history_path")]
    history_path: PathBuf,
}

fn default_turn_seconds() -> u64 {
    30
}

fn default_ai_delay_ms() -> u64 {
    1000
}

fn default_history_path() -> PathBuf {
    PathBuf::from("noughts_history.json")
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            turn_seconds: default_turn_seconds(),
            ai_delay_ms: default_ai_delay_ms(),
            theme: ThemeName::default(),
            history_path: default_history_path(),
        }
    }
}

impl GameConfig {
    /// Loads settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;

        info!(
            turn_seconds = config.turn_seconds,
            theme = config.theme.label(),
            "Settings loaded"
        );
        Ok(config)
    }

    /// Overrides the per-turn time limit.
    pub fn set_turn_seconds(&mut self, seconds: u64) {
        self.turn_seconds = seconds;
    }

    /// Overrides the theme.
    pub fn set_theme(&mut self, theme: ThemeName) {
        self.theme = theme;
    }

    /// Overrides the result-log path.
    pub fn set_history_path(&mut self, path: PathBuf) {
        self.history_path = path;
    }
}

/// Settings error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where the error occurred.
    pub line: u32,
    /// Source file where the error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new settings error with caller location tracking.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
