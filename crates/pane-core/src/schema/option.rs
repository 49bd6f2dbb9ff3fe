//! Option list types

use serde::{Deserialize, Serialize};

/// One entry of a dropdown-like selector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectableOption {
    /// Opaque identifier, unique within a result set
    pub key: String,
    /// Display label
    pub label: String,
}

impl SelectableOption {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// Raw item returned by an option source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceItem {
    pub identifier: String,
    pub display_name: String,
}

impl SourceItem {
    pub fn new(identifier: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            display_name: display_name.into(),
        }
    }
}

impl From<SourceItem> for SelectableOption {
    fn from(item: SourceItem) -> Self {
        Self {
            key: item.identifier,
            label: item.display_name,
        }
    }
}

/// A list as returned by the site lists REST endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListInfo {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "Title")]
    pub title: String,
}

impl From<ListInfo> for SourceItem {
    fn from(list: ListInfo) -> Self {
        Self {
            identifier: list.id,
            display_name: list.title,
        }
    }
}

/// Response body of the site lists REST endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListCollection {
    #[serde(default)]
    pub value: Vec<ListInfo>,
}
