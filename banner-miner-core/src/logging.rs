use std::io;
use tracing_subscriber::{EnvFilter, fmt};

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize the logging system with JSON formatting and environment-based filtering
///
/// - Uses `RUST_LOG` for level filtering (defaults to "info" if not set)
/// - Emits flattened JSON events
/// - Writes to stderr; stdout is reserved for the count table
pub fn init_logging() {
    fmt()
        .with_env_filter(env_filter())
        .json()
        .flatten_event(true)
        .with_writer(io::stderr)
        .init();
}

/// Plain-text logging captured by the test harness. Safe to call repeatedly.
pub fn init_test_logging() {
    let _ = fmt()
        .with_env_filter(env_filter())
        .with_test_writer()
        .try_init();
}
