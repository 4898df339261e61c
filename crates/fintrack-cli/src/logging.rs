//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Default filter for a `-v` count.
fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Initialize logging to stderr so stdout stays clean for command output.
///
/// `RUST_LOG` wins over the verbosity flag. Safe to call multiple times.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
