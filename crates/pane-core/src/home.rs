//! Home directory resolution for pane configuration
//!
//! # Precedence
//!
//! 1. `PANE_HOME` environment variable (if set and non-empty)
//! 2. `dirs::home_dir()` platform default
//!
//! Integration tests set `PANE_HOME` to a temp directory so the global config
//! at `~/.config/pane/config.toml` never leaks into test runs.

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Get the home directory used to locate the global config.
///
/// # Errors
///
/// Returns an error if `PANE_HOME` is not set and the platform home directory
/// cannot be determined.
pub fn get_home_dir() -> Result<PathBuf> {
    if let Ok(home) = std::env::var("PANE_HOME") {
        let trimmed = home.trim();
        if !trimmed.is_empty() {
            return Ok(PathBuf::from(trimmed));
        }
    }

    dirs::home_dir().context("Could not determine home directory")
}
