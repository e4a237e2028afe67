//! Persisted match-result log.
//!
//! An append-only JSON file of `{ recorded_at, result }` entries. The
//! session host appends one entry per finished game and never reads
//! the log back for game logic; the TUI shows it as the history table.

use crate::game::Mark;
use chrono::{DateTime, Utc};
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Result-log error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("History error: {} at {}:{}", message, file, line)]
pub struct HistoryError {
    /// Error message.
    pub message: String,
    /// Line number where the error occurred.
    pub line: u32,
    /// Source file where the error occurred.
    pub file: &'static str,
}

impl HistoryError {
    /// Creates a new result-log error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Outcome of a finished game as stored in the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordedResult {
    /// A win for the given mark.
    Win(Mark),
    /// Neither side won.
    Tie,
}

impl RecordedResult {
    /// Converts the result to the string stored in the log file:
    /// the winner's mark, or `"Tie"`.
    pub fn to_log_string(&self) -> &'static str {
        match self {
            Self::Win(Mark::X) => "X",
            Self::Win(Mark::O) => "O",
            Self::Tie => "Tie",
        }
    }

    /// Parses a result from the string stored in the log file.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError`] if the string is not a valid result.
    pub fn from_log_string(s: &str) -> Result<Self, HistoryError> {
        match s {
            "X" => Ok(Self::Win(Mark::X)),
            "O" => Ok(Self::Win(Mark::O)),
            "Tie" => Ok(Self::Tie),
            _ => Err(HistoryError::new(format!("Invalid result: '{}'", s))),
        }
    }
}

/// One line of the result log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct HistoryEntry {
    recorded_at: DateTime<Utc>,
    result: String,
}

impl HistoryEntry {
    /// Parses the stored result string into a [`RecordedResult`].
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError`] if the stored string is not a valid
    /// result value.
    pub fn parse_result(&self) -> Result<RecordedResult, HistoryError> {
        RecordedResult::from_log_string(self.result())
    }
}

/// Append-only result log persisted as a JSON file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryStore {
    path: PathBuf,
    entries: Vec<HistoryEntry>,
}

impl HistoryStore {
    /// Opens the log at `path`, loading existing entries.
    ///
    /// A missing file is an empty log, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError`] if an existing file cannot be read or
    /// parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self, HistoryError> {
        let path = path.as_ref().to_path_buf();

        let entries = if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| {
                HistoryError::new(format!("Failed to read '{}': {}", path.display(), e))
            })?;
            serde_json::from_str(&content).map_err(|e| {
                HistoryError::new(format!("Failed to parse '{}': {}", path.display(), e))
            })?
        } else {
            debug!("No existing result log");
            Vec::new()
        };

        info!(count = entries.len(), "Result log opened");
        Ok(Self { path, entries })
    }

    /// Entries oldest-first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Appends a result stamped with the current time and persists the
    /// whole log.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError`] if the log file cannot be written.
    #[instrument(skip(self))]
    pub fn append(&mut self, result: RecordedResult) -> Result<(), HistoryError> {
        let entry = HistoryEntry::new(Utc::now(), result.to_log_string().to_string());
        self.entries.push(entry);
        self.save()?;
        info!(
            result = result.to_log_string(),
            count = self.entries.len(),
            "Result recorded"
        );
        Ok(())
    }

    /// Drops every entry and removes the log file.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError`] if the file exists but cannot be
    /// removed.
    #[instrument(skip(self))]
    pub fn clear(&mut self) -> Result<(), HistoryError> {
        self.entries.clear();
        if self.path.exists() {
            std::fs::remove_file(&self.path).map_err(|e| {
                HistoryError::new(format!("Failed to remove '{}': {}", self.path.display(), e))
            })?;
        }
        info!("Result log cleared");
        Ok(())
    }

    fn save(&self) -> Result<(), HistoryError> {
        let json = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| HistoryError::new(format!("Failed to serialize log: {}", e)))?;
        std::fs::write(&self.path, json).map_err(|e| {
            HistoryError::new(format!("Failed to write '{}': {}", self.path.display(), e))
        })?;
        Ok(())
    }
}
