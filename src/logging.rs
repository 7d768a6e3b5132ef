//! Tracing/logging initialization.
//!
//! Logs go to stderr so they never interleave with the menu on stdout.

use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging for the process.
///
/// `RUST_LOG` takes precedence; otherwise only warnings are shown, or debug
/// events with `verbose`. Safe to call multiple times (subsequent calls are
/// no-ops).
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
