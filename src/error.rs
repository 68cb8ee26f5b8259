//! Error types for daybook

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the daybook application
#[derive(Debug, Error)]
pub enum DaybookError {
    #[error("Not a daybook directory: {0}")]
    NotDaybookDirectory(PathBuf),

    #[error("No entry found with id: {0}")]
    EntryNotFound(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid entry kind: {0}")]
    InvalidEntryKind(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl DaybookError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            DaybookError::NotDaybookDirectory(_) => 2,
            DaybookError::EntryNotFound(_) => 3,
            DaybookError::InvalidDate(_) | DaybookError::InvalidEntryKind(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            DaybookError::NotDaybookDirectory(path) => {
                format!(
                    "Not a daybook directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'daybook init' in this directory to create a new journal\n\
                    • Navigate to an existing daybook directory\n\
                    • Set DAYBOOK_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            DaybookError::EntryNotFound(id) => {
                format!(
                    "No entry found with id: '{}'\n\n\
                    Suggestions:\n\
                    • Use 'daybook list' to see available entries and their ids\n\
                    • Entry ids look like 'morning-1700000000000'",
                    id
                )
            }
            DaybookError::InvalidDate(date) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Expected format: YYYY-MM-DD\n\
                    Example: daybook new morning --date 2025-01-17",
                    date
                )
            }
            DaybookError::InvalidEntryKind(kind) => {
                format!(
                    "Invalid entry kind: '{}'\n\n\
                    Valid kinds: morning, evening\n\
                    Example: daybook new evening",
                    kind
                )
            }
            DaybookError::Store(msg) => {
                format!(
                    "Failed to update the journal file: {}\n\n\
                    Suggestions:\n\
                    • Check that the journal directory is writable\n\
                    • Check available disk space",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using DaybookError
pub type Result<T> = std::result::Result<T, DaybookError>;
