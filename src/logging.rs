// src/logging.rs
// =============================================================================
// tracing setup shared by both binaries.
//
// Logs always go to stderr: the MCP server owns stdout for JSON-RPC frames and
// the docs CLI prints its report there.
// =============================================================================

use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

// Maps the number of -v flags to a filter directive
pub fn filter_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the global subscriber. RUST_LOG wins over the verbosity flag.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_for(verbosity)));

    // try_init so tests or embedding code that already set a subscriber
    // don't panic
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(verbosity >= 2)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init();
}
