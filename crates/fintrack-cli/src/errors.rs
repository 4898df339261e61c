//! CLI error types for structured error handling.
//!
//! `CliError` covers failures that originate in the CLI itself; core
//! `TrackerError`s travel through `anyhow` untouched. Both map to exit codes
//! and hints here.

use std::fmt;
use std::io;

use fintrack_core::TrackerError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found (data file, destination)
    NotFound { message: String, hint: String },

    /// Invalid user input
    InvalidInput(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, .. } => write!(f, "{}", message),
            CliError::InvalidInput(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
        }
    }
}

/// Exit code for any error returned by a command handler.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if is_interrupted(err) {
        return exit_codes::INTERRUPTED;
    }
    for cause in err.chain() {
        if let Some(cli) = cause.downcast_ref::<CliError>() {
            return cli.exit_code();
        }
        if let Some(core) = cause.downcast_ref::<TrackerError>() {
            return match core {
                TrackerError::Validation(_) => exit_codes::INVALID_INPUT,
                TrackerError::Index { .. } => exit_codes::NOT_FOUND,
                TrackerError::Storage(_) => exit_codes::STORAGE_FAILED,
            };
        }
    }
    1
}

/// Contextual hint for an error, if one applies.
pub fn hint_for(err: &anyhow::Error) -> Option<String> {
    for cause in err.chain() {
        if let Some(CliError::NotFound { hint, .. }) = cause.downcast_ref::<CliError>() {
            return Some(hint.clone());
        }
        if let Some(core) = cause.downcast_ref::<TrackerError>() {
            return match core {
                TrackerError::Index { .. } => {
                    Some("Run `fintrack list` to see entry positions.".to_string())
                }
                TrackerError::Storage(_) => {
                    Some("Run `fintrack files` to see the available data files.".to_string())
                }
                TrackerError::Validation(_) => None,
            };
        }
    }
    None
}

/// True when the error chain carries a user interrupt (Ctrl-C at a prompt).
pub fn is_interrupted(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        if let Some(dialoguer::Error::IO(io_err)) = cause.downcast_ref::<dialoguer::Error>() {
            return io_err.kind() == io::ErrorKind::Interrupted;
        }
        cause
            .downcast_ref::<io::Error>()
            .map(|io_err| io_err.kind() == io::ErrorKind::Interrupted)
            .unwrap_or(false)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_map_to_exit_codes() {
        let err = anyhow::Error::new(TrackerError::Index { index: 2, len: 2 });
        assert_eq!(exit_code(&err), exit_codes::NOT_FOUND);

        let err = anyhow::Error::new(TrackerError::Validation("bad".into()));
        assert_eq!(exit_code(&err), exit_codes::INVALID_INPUT);

        let err = anyhow::Error::new(TrackerError::Storage("disk".into()));
        assert_eq!(exit_code(&err), exit_codes::STORAGE_FAILED);
    }

    #[test]
    fn test_context_does_not_hide_core_error() {
        let err = anyhow::Error::new(TrackerError::Storage("disk".into())).context("Saving failed");
        assert_eq!(exit_code(&err), exit_codes::STORAGE_FAILED);
    }

    #[test]
    fn test_cli_error_codes() {
        let err = anyhow::Error::new(CliError::invalid_input("nope"));
        assert_eq!(exit_code(&err), exit_codes::INVALID_INPUT);
        assert_eq!(exit_code(&anyhow::anyhow!("other")), 1);
    }

    #[test]
    fn test_interrupt_detected() {
        let io_err = io::Error::new(io::ErrorKind::Interrupted, "read interrupted");
        let err = anyhow::Error::new(dialoguer::Error::IO(io_err));
        assert!(is_interrupted(&err));
        assert_eq!(exit_code(&err), exit_codes::INTERRUPTED);
    }

    #[test]
    fn test_hints() {
        let err = anyhow::Error::new(TrackerError::Index { index: 9, len: 1 });
        assert!(hint_for(&err).unwrap().contains("fintrack list"));

        let err = anyhow::Error::new(CliError::not_found("No destination", "Pass --save"));
        assert_eq!(hint_for(&err).as_deref(), Some("Pass --save"));

        assert!(hint_for(&anyhow::anyhow!("plain")).is_none());
    }
}
