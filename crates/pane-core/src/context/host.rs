//! Host identification

use serde::{Deserialize, Serialize};

/// Container application hosting an embedded web part
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HostName {
    /// Modern collaboration-suite tab
    Suite,
    /// Mail client
    Mail,
    /// Office document host
    Document,
    /// Legacy collaboration-suite tab
    SuiteLegacy,
    /// Any host without a dedicated mapping
    Unknown,
}

impl HostName {
    /// Every host name, in declaration order.
    pub const ALL: [HostName; 5] = [
        HostName::Suite,
        HostName::Mail,
        HostName::Document,
        HostName::SuiteLegacy,
        HostName::Unknown,
    ];

    /// Map a host name reported by the embedding SDK.
    ///
    /// Matching is case-insensitive. Unrecognized names map to `Unknown`.
    pub fn from_host_str(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "teamsmodern" => HostName::Suite,
            "teams" => HostName::SuiteLegacy,
            "outlook" => HostName::Mail,
            "office" => HostName::Document,
            _ => HostName::Unknown,
        }
    }

    /// SDK-facing name for this host.
    pub fn as_host_str(&self) -> &'static str {
        match self {
            HostName::Suite => "TeamsModern",
            HostName::SuiteLegacy => "Teams",
            HostName::Mail => "Outlook",
            HostName::Document => "Office",
            HostName::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for HostName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_host_str())
    }
}

/// Host-provided signals describing where a web part is running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostContext {
    /// Running inside a container application rather than the portal page
    pub is_embedded_host: bool,
    /// Which container, only meaningful when embedded
    pub host_name: HostName,
    /// Served from a local development server
    pub is_local_dev: bool,
}

impl HostContext {
    /// Standalone portal page.
    pub fn portal(is_local_dev: bool) -> Self {
        Self {
            is_embedded_host: false,
            host_name: HostName::Unknown,
            is_local_dev,
        }
    }

    /// Embedded in the given container application.
    pub fn embedded(host_name: HostName, is_local_dev: bool) -> Self {
        Self {
            is_embedded_host: true,
            host_name,
            is_local_dev,
        }
    }
}

impl Default for HostContext {
    fn default() -> Self {
        Self::portal(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_host_str_known_names() {
        assert_eq!(HostName::from_host_str("Teams"), HostName::SuiteLegacy);
        assert_eq!(HostName::from_host_str("TeamsModern"), HostName::Suite);
        assert_eq!(HostName::from_host_str("Outlook"), HostName::Mail);
        assert_eq!(HostName::from_host_str("Office"), HostName::Document);
    }

    #[test]
    fn test_from_host_str_is_case_insensitive() {
        assert_eq!(HostName::from_host_str("OUTLOOK"), HostName::Mail);
        assert_eq!(HostName::from_host_str(" teamsmodern "), HostName::Suite);
    }

    #[test]
    fn test_from_host_str_unknown() {
        assert_eq!(HostName::from_host_str("Skype"), HostName::Unknown);
        assert_eq!(HostName::from_host_str(""), HostName::Unknown);
    }

    #[test]
    fn test_host_str_round_trip() {
        for host in HostName::ALL {
            assert_eq!(HostName::from_host_str(host.as_host_str()), host);
        }
    }

    #[test]
    fn test_host_context_json_is_camel_case() {
        let ctx = HostContext::embedded(HostName::Mail, true);
        let json = serde_json::to_value(ctx).unwrap();
        assert_eq!(json["isEmbeddedHost"], true);
        assert_eq!(json["hostName"], "Mail");
        assert_eq!(json["isLocalDev"], true);
    }

    #[test]
    fn test_default_is_production_portal() {
        let ctx = HostContext::default();
        assert!(!ctx.is_embedded_host);
        assert!(!ctx.is_local_dev);
    }
}
