//! Shared logging initialization for pane binaries.

use std::sync::OnceLock;

static INIT: OnceLock<()> = OnceLock::new();

/// Parse a level name as accepted by `PANE_LOG`.
///
/// Unknown values fall back to `INFO`.
pub fn parse_level(raw: &str) -> tracing::Level {
    match raw.trim().to_ascii_lowercase().as_str() {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "warn" => tracing::Level::WARN,
        "error" => tracing::Level::ERROR,
        _ => tracing::Level::INFO,
    }
}

fn env_level() -> tracing::Level {
    parse_level(&std::env::var("PANE_LOG").unwrap_or_else(|_| "info".to_string()))
}

/// Initialize process-level tracing output from `PANE_LOG`.
///
/// Safe to call multiple times; only the first call installs the subscriber.
pub fn init() {
    init_with_level(env_level());
}

/// Initialize tracing with an explicit level (used by `--verbose`).
pub fn init_with_level(level: tracing::Level) {
    if INIT.get().is_some() {
        return;
    }
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
    let _ = INIT.set(());
}
