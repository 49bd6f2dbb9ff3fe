//! Environment message decision table

use super::host::{HostContext, HostName};
use serde::{Deserialize, Serialize};

/// Running-context message key
///
/// Keys are opaque and enumerable; turning them into display text is the
/// rendering shell's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnvironmentMessage {
    SharePointLocal,
    SharePointProd,
    OfficeLocal,
    OfficeProd,
    OutlookLocal,
    OutlookProd,
    SuiteLocal,
    SuiteProd,
    UnknownEnvironment,
}

impl EnvironmentMessage {
    /// Every message key, in declaration order.
    pub const ALL: [EnvironmentMessage; 9] = [
        EnvironmentMessage::SharePointLocal,
        EnvironmentMessage::SharePointProd,
        EnvironmentMessage::OfficeLocal,
        EnvironmentMessage::OfficeProd,
        EnvironmentMessage::OutlookLocal,
        EnvironmentMessage::OutlookProd,
        EnvironmentMessage::SuiteLocal,
        EnvironmentMessage::SuiteProd,
        EnvironmentMessage::UnknownEnvironment,
    ];

    /// Stable string key, as used by the web part string tables.
    pub fn key(&self) -> &'static str {
        match self {
            EnvironmentMessage::SharePointLocal => "AppLocalEnvironmentSharePoint",
            EnvironmentMessage::SharePointProd => "AppSharePointEnvironment",
            EnvironmentMessage::OfficeLocal => "AppLocalEnvironmentOffice",
            EnvironmentMessage::OfficeProd => "AppOfficeEnvironment",
            EnvironmentMessage::OutlookLocal => "AppLocalEnvironmentOutlook",
            EnvironmentMessage::OutlookProd => "AppOutlookEnvironment",
            EnvironmentMessage::SuiteLocal => "AppLocalEnvironmentTeams",
            EnvironmentMessage::SuiteProd => "AppTeamsTabEnvironment",
            EnvironmentMessage::UnknownEnvironment => "UnknownEnvironment",
        }
    }

    /// Look a message up by its string key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.key() == key)
    }
}

impl std::fmt::Display for EnvironmentMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Resolve the running-context message for a host.
///
/// Total and side-effect free: every input maps to exactly one key, and an
/// embedded host without a dedicated mapping yields `UnknownEnvironment`
/// regardless of locality.
pub fn resolve(host: &HostContext) -> EnvironmentMessage {
    let local = host.is_local_dev;

    if !host.is_embedded_host {
        return pick(
            local,
            EnvironmentMessage::SharePointLocal,
            EnvironmentMessage::SharePointProd,
        );
    }

    match host.host_name {
        HostName::Document => pick(
            local,
            EnvironmentMessage::OfficeLocal,
            EnvironmentMessage::OfficeProd,
        ),
        HostName::Mail => pick(
            local,
            EnvironmentMessage::OutlookLocal,
            EnvironmentMessage::OutlookProd,
        ),
        HostName::Suite | HostName::SuiteLegacy => pick(
            local,
            EnvironmentMessage::SuiteLocal,
            EnvironmentMessage::SuiteProd,
        ),
        HostName::Unknown => EnvironmentMessage::UnknownEnvironment,
    }
}

fn pick(
    local: bool,
    when_local: EnvironmentMessage,
    when_prod: EnvironmentMessage,
) -> EnvironmentMessage {
    if local { when_local } else { when_prod }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mail_local_is_outlook_local() {
        let host = HostContext::embedded(HostName::Mail, true);
        assert_eq!(resolve(&host), EnvironmentMessage::OutlookLocal);
    }

    #[test]
    fn test_portal_prod_ignores_host_name() {
        let host = HostContext {
            is_embedded_host: false,
            host_name: HostName::Unknown,
            is_local_dev: false,
        };
        assert_eq!(resolve(&host), EnvironmentMessage::SharePointProd);

        let host = HostContext {
            is_embedded_host: false,
            host_name: HostName::Mail,
            is_local_dev: true,
        };
        assert_eq!(resolve(&host), EnvironmentMessage::SharePointLocal);
    }

    #[test]
    fn test_embedded_unknown_is_unknown_for_both_localities() {
        for local in [true, false] {
            let host = HostContext::embedded(HostName::Unknown, local);
            assert_eq!(resolve(&host), EnvironmentMessage::UnknownEnvironment);
        }
    }

    #[test]
    fn test_suite_and_legacy_suite_share_messages() {
        for local in [true, false] {
            assert_eq!(
                resolve(&HostContext::embedded(HostName::Suite, local)),
                resolve(&HostContext::embedded(HostName::SuiteLegacy, local))
            );
        }
        assert_eq!(
            resolve(&HostContext::embedded(HostName::Suite, false)),
            EnvironmentMessage::SuiteProd
        );
    }

    #[test]
    fn test_document_host() {
        assert_eq!(
            resolve(&HostContext::embedded(HostName::Document, true)),
            EnvironmentMessage::OfficeLocal
        );
        assert_eq!(
            resolve(&HostContext::embedded(HostName::Document, false)),
            EnvironmentMessage::OfficeProd
        );
    }

    #[test]
    fn test_keys_are_unique_and_reversible() {
        for message in EnvironmentMessage::ALL {
            assert_eq!(EnvironmentMessage::from_key(message.key()), Some(message));
        }
        assert_eq!(EnvironmentMessage::from_key("AppSomewhereElse"), None);
    }

    #[test]
    fn test_display_uses_key() {
        assert_eq!(
            EnvironmentMessage::SuiteProd.to_string(),
            "AppTeamsTabEnvironment"
        );
    }
}
