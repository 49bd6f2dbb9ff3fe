//! Configuration discovery and resolution

use super::types::{Config, ListSourceKind};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Repo-local config file name
pub const REPO_CONFIG_FILE: &str = ".pane.toml";

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Explicit config file does not exist
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Site URL is not an absolute http(s) URL
    #[error("Invalid site URL '{url}': {reason}")]
    InvalidSiteUrl { url: String, reason: String },
}

/// Command-line overrides for configuration
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    /// Override site URL
    pub site_url: Option<String>,
    /// Override REST access token
    pub access_token: Option<String>,
    /// Override embedded flag
    pub embedded: Option<bool>,
    /// Override host name (implies embedded unless `embedded` says otherwise)
    pub host_name: Option<String>,
    /// Override local dev flag
    pub local_dev: Option<bool>,
    /// Override list source
    pub list_source: Option<ListSourceKind>,
    /// Path to config file override
    pub config_path: Option<PathBuf>,
}

/// Resolve configuration from all sources
///
/// Priority (highest to lowest):
/// 1. Command-line overrides
/// 2. Environment variables
/// 3. Explicit config file (`overrides.config_path`)
/// 4. Repo-local config (.pane.toml in current dir or up to git root)
/// 5. Global config (~/.config/pane/config.toml)
/// 6. Defaults
///
/// Unreadable or malformed discovered files are logged and skipped. An
/// explicit config path that is missing or malformed is an error.
pub fn resolve_config(
    overrides: &ConfigOverrides,
    current_dir: &Path,
    home_dir: &Path,
) -> Result<Config, ConfigError> {
    let mut config = Config::default();

    // 5. Global config
    let global_config_path = home_dir.join(".config/pane/config.toml");
    if global_config_path.exists() {
        match load_config_file(&global_config_path) {
            Ok(file_config) => merge_config(&mut config, file_config),
            Err(e) => warn!("Failed to parse global config at {global_config_path:?}: {e}"),
        }
    }

    // 4. Repo-local config
    if let Some(repo_config) = find_repo_local_config(current_dir) {
        match load_config_file(&repo_config) {
            Ok(file_config) => {
                debug!("Loaded repo config from {repo_config:?}");
                merge_config(&mut config, file_config);
            }
            Err(e) => warn!("Failed to parse repo config at {repo_config:?}: {e}"),
        }
    }

    // 3. Explicit config file
    if let Some(path) = &overrides.config_path {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.clone()));
        }
        let file_config = load_config_file(path)?;
        merge_config(&mut config, file_config);
    }

    // 2. Environment variables
    apply_env_overrides(&mut config);

    // 1. Command-line overrides
    apply_cli_overrides(&mut config, overrides);

    Ok(config)
}

/// Find repo-local config file
///
/// Searches current directory and parent directories up to git root
fn find_repo_local_config(current_dir: &Path) -> Option<PathBuf> {
    let mut dir = current_dir;

    loop {
        let config_path = dir.join(REPO_CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }

        if dir.join(".git").exists() {
            break;
        }

        dir = dir.parent()?;
    }

    None
}

/// Load config from a TOML file
fn load_config_file(path: &Path) -> Result<Config, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)?;
    Ok(config)
}

/// Merge file config into base config, field by field
fn merge_config(base: &mut Config, file: Config) {
    if file.site.absolute_url.is_some() {
        base.site.absolute_url = file.site.absolute_url;
    }
    if file.site.access_token.is_some() {
        base.site.access_token = file.site.access_token;
    }

    if file.host.embedded.is_some() {
        base.host.embedded = file.host.embedded;
    }
    if file.host.name.is_some() {
        base.host.name = file.host.name;
    }
    if file.host.local_dev.is_some() {
        base.host.local_dev = file.host.local_dev;
    }

    if file.lists.source.is_some() {
        base.lists.source = file.lists.source;
    }
    if file.lists.include_hidden.is_some() {
        base.lists.include_hidden = file.lists.include_hidden;
    }
    if file.lists.static_delay_ms.is_some() {
        base.lists.static_delay_ms = file.lists.static_delay_ms;
    }

    if file.user.display_name.is_some() {
        base.user.display_name = file.user.display_name;
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Apply environment variable overrides
fn apply_env_overrides(config: &mut Config) {
    if let Ok(url) = std::env::var("PANE_SITE_URL") {
        config.site.absolute_url = Some(url);
    }

    if let Ok(token) = std::env::var("PANE_ACCESS_TOKEN") {
        config.site.access_token = Some(token);
    }

    if let Ok(host) = std::env::var("PANE_HOST") {
        config.host.name = Some(host);
        config.host.embedded = Some(true);
    }

    if let Ok(raw) = std::env::var("PANE_LOCAL_DEV") {
        match parse_flag(&raw) {
            Some(flag) => config.host.local_dev = Some(flag),
            None => warn!("Ignoring PANE_LOCAL_DEV={raw:?}: expected true or false"),
        }
    }
}

/// Apply command-line overrides
fn apply_cli_overrides(config: &mut Config, overrides: &ConfigOverrides) {
    if let Some(ref url) = overrides.site_url {
        config.site.absolute_url = Some(url.clone());
    }

    if let Some(ref token) = overrides.access_token {
        config.site.access_token = Some(token.clone());
    }

    if let Some(ref host) = overrides.host_name {
        config.host.name = Some(host.clone());
        config.host.embedded = Some(true);
    }

    if let Some(embedded) = overrides.embedded {
        config.host.embedded = Some(embedded);
    }

    if let Some(local_dev) = overrides.local_dev {
        config.host.local_dev = Some(local_dev);
    }

    if let Some(source) = overrides.list_source {
        config.lists.source = Some(source);
    }
}
