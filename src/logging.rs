//! Diagnostic logging
//!
//! Logs go to stderr and are filtered by the `WORDLE_LOG` environment variable
//! (same syntax as `RUST_LOG`). The default level is `warn`, which keeps the
//! terminal UI clean.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "WORDLE_LOG";

/// Install the global subscriber
///
/// Safe to call more than once; later calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
