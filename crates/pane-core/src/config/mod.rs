//! Configuration resolution
//!
//! Resolves configuration from multiple sources with priority:
//! 1. Command-line flags (passed as parameters)
//! 2. Environment variables
//! 3. Explicit config file (`--config`)
//! 4. Repo-local config (.pane.toml)
//! 5. Global config (~/.config/pane/config.toml)
//! 6. Defaults

mod discovery;
mod types;

pub use discovery::{resolve_config, ConfigError, ConfigOverrides};
pub use types::{Config, HostConfig, ListSourceKind, ListsConfig, SiteConfig, UserConfig};
