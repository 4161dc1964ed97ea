//! # Logging
//!
//! Installs the `tracing` subscriber for the binary.

use tracing_subscriber::EnvFilter;

/// Initializes logging to stderr, filtered by `RUST_LOG` (default `warn`).
///
/// Stdout is reserved for the generated document.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
