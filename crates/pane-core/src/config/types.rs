//! Configuration types
//!
//! Every leaf is optional so that layered files only override what they set.
//! Accessors supply the defaults.

use super::discovery::ConfigError;
use crate::context::{HostContext, HostName};
use serde::{Deserialize, Serialize};

/// Default delay of the static list source, matching the demo loader.
pub const DEFAULT_STATIC_DELAY_MS: u64 = 2000;

/// Complete configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Site the web part is added to
    #[serde(default)]
    pub site: SiteConfig,
    /// Host signals
    #[serde(default)]
    pub host: HostConfig,
    /// Option list loading
    #[serde(default)]
    pub lists: ListsConfig,
    /// Current user
    #[serde(default)]
    pub user: UserConfig,
}

/// Site configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute URL of the web, e.g. `https://contoso.sharepoint.com/sites/team`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub absolute_url: Option<String>,
    /// Bearer token sent with REST requests
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

impl SiteConfig {
    /// Parsed site URL, if configured.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidSiteUrl` when the value is not an absolute
    /// http(s) URL.
    pub fn site_url(&self) -> Result<Option<url::Url>, ConfigError> {
        let Some(raw) = self.absolute_url.as_deref() else {
            return Ok(None);
        };
        let parsed = url::Url::parse(raw.trim()).map_err(|e| ConfigError::InvalidSiteUrl {
            url: raw.to_string(),
            reason: e.to_string(),
        })?;
        match parsed.scheme() {
            "http" | "https" => Ok(Some(parsed)),
            other => Err(ConfigError::InvalidSiteUrl {
                url: raw.to_string(),
                reason: format!("unsupported scheme '{other}'"),
            }),
        }
    }
}

/// Host signal configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HostConfig {
    /// Hosted inside a container application
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedded: Option<bool>,
    /// Container name as reported by the host SDK (`Teams`, `Outlook`, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Served from a local dev server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_dev: Option<bool>,
}

impl HostConfig {
    /// Build the host context these settings describe.
    pub fn host_context(&self) -> HostContext {
        HostContext {
            is_embedded_host: self.embedded.unwrap_or(false),
            host_name: self
                .name
                .as_deref()
                .map(HostName::from_host_str)
                .unwrap_or(HostName::Unknown),
            is_local_dev: self.local_dev.unwrap_or(false),
        }
    }
}

/// Which option source backs the list dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListSourceKind {
    /// Site lists REST endpoint
    #[default]
    Rest,
    /// Canned lists served after a delay
    Static,
}

/// Option list loading configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<ListSourceKind>,
    /// Include hidden lists in REST results
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_hidden: Option<bool>,
    /// Delay before the static source answers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub static_delay_ms: Option<u64>,
}

impl ListsConfig {
    pub fn source(&self) -> ListSourceKind {
        self.source.unwrap_or_default()
    }

    pub fn include_hidden(&self) -> bool {
        self.include_hidden.unwrap_or(false)
    }

    pub fn static_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.static_delay_ms.unwrap_or(DEFAULT_STATIC_DELAY_MS))
    }
}

/// Current user configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl UserConfig {
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or("")
    }
}
