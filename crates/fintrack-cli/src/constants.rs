//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used for unclassified errors)
/// - 2: Misuse of shell command (reserved by shells, used by clap)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// No entry at the requested position, or a file that does not exist.
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// A data file could not be read, parsed, or written.
    pub const STORAGE_FAILED: i32 = 5;

    /// Interrupted by the user (128 + SIGINT).
    pub const INTERRUPTED: i32 = 130;
}

/// Farewell printed when the interactive session ends.
pub const FAREWELL: &str = "Thank you for using the finance tracker!";
