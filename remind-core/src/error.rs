//! Error types for the remind ecosystem.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur in remind operations.
#[derive(Error, Debug)]
pub enum RemindError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Event store at {path} is unavailable: {source}")]
    StorageUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Event title cannot be empty")]
    EmptyTitle,

    #[error("Event title cannot contain the '|' field separator")]
    TitleContainsDelimiter,

    #[error("Invalid date format '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid time format '{0}'. Expected HH:MM")]
    InvalidTime(String),
}

/// Result type alias for remind operations.
pub type RemindResult<T> = Result<T, RemindError>;
