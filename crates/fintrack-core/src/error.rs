//! Error types for Fintrack core operations.
//!
//! The core raises these and never prints them; the CLI layer maps each
//! variant to a user-facing message and exit code.

use thiserror::Error;

/// Result type alias for Fintrack operations.
pub type Result<T> = std::result::Result<T, TrackerError>;

/// Core error type for Fintrack operations.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// Bad date, month, kind, category or amount
    #[error("Validation error: {0}")]
    Validation(String),

    /// Position outside the current entry list
    #[error("Index {index} is out of range (ledger has {len} entries)")]
    Index { index: usize, len: usize },

    /// File missing, unreadable, malformed, or not writable
    #[error("Storage error: {0}")]
    Storage(String),
}

impl TrackerError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        TrackerError::Validation(message.into())
    }

    pub(crate) fn storage(message: impl Into<String>) -> Self {
        TrackerError::Storage(message.into())
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        TrackerError::Storage(err.to_string())
    }
}

impl From<csv::Error> for TrackerError {
    fn from(err: csv::Error) -> Self {
        TrackerError::Storage(err.to_string())
    }
}
