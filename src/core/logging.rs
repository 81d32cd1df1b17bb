//! Tracing setup
//!
//! Diagnostics go to stderr so stdout carries nothing but findings.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "DUMP_TODO_LOG";

/// Initialize the tracing subscriber.
///
/// Respects `DUMP_TODO_LOG` (e.g. `debug`, `dump_todo=trace`).
/// Defaults to `warn` if not set.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
