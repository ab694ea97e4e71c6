//! Diagnostic logging setup
//!
//! Events go to stderr so they never mix with the shell transcript on stdout.
//! No amounts or balances are ever logged, only operation names and error
//! kinds.

use tracing_subscriber::EnvFilter;

use crate::config::DEFAULT_LOG_LEVEL;

/// Install the global tracing subscriber
///
/// An unparsable filter directive falls back to the default level.
pub fn init(log_level: &str) {
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    if installed.is_err() {
        eprintln!("Logging already initialized");
    }
}
