//! Property pane model
//!
//! Serializable description of the pages, groups and fields a web part shows
//! in its configuration pane. The shell renders it; web parts only build it.

use property_pane_core::{PrincipalType, SelectableOption};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyPaneConfiguration {
    pub pages: Vec<PropertyPanePage>,
}

impl PropertyPaneConfiguration {
    /// Find a field by the property it edits, across all pages and groups.
    pub fn field(&self, target_property: &str) -> Option<&PropertyPaneField> {
        self.pages
            .iter()
            .flat_map(|page| &page.groups)
            .flat_map(|group| &group.group_fields)
            .find(|field| field.target_property() == target_property)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyPanePage {
    pub header: PageHeader,
    pub groups: Vec<PropertyPaneGroup>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageHeader {
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyPaneGroup {
    pub group_name: String,
    pub group_fields: Vec<PropertyPaneField>,
}

/// Dropdown entry as the pane displays it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownOption {
    pub key: String,
    pub text: String,
}

impl DropdownOption {
    pub fn new(key: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            text: text.into(),
        }
    }
}

impl From<SelectableOption> for DropdownOption {
    fn from(option: SelectableOption) -> Self {
        Self {
            key: option.key,
            text: option.label,
        }
    }
}

/// A single editable field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PropertyPaneField {
    #[serde(rename_all = "camelCase")]
    TextField {
        target_property: String,
        label: String,
    },
    #[serde(rename_all = "camelCase")]
    Dropdown {
        target_property: String,
        label: String,
        options: Vec<DropdownOption>,
        disabled: bool,
    },
    #[serde(rename_all = "camelCase")]
    PeoplePicker {
        target_property: String,
        label: String,
        multi_select: bool,
        allow_duplicate: bool,
        principal_types: Vec<PrincipalType>,
    },
}

impl PropertyPaneField {
    pub fn text_field(target_property: &str, label: &str) -> Self {
        PropertyPaneField::TextField {
            target_property: target_property.to_string(),
            label: label.to_string(),
        }
    }

    pub fn dropdown(
        target_property: &str,
        label: &str,
        options: Vec<DropdownOption>,
        disabled: bool,
    ) -> Self {
        PropertyPaneField::Dropdown {
            target_property: target_property.to_string(),
            label: label.to_string(),
            options,
            disabled,
        }
    }

    /// Property this field edits
    pub fn target_property(&self) -> &str {
        match self {
            PropertyPaneField::TextField {
                target_property, ..
            }
            | PropertyPaneField::Dropdown {
                target_property, ..
            }
            | PropertyPaneField::PeoplePicker {
                target_property, ..
            } => target_property,
        }
    }

    /// Whether the control is currently disabled
    pub fn is_disabled(&self) -> bool {
        matches!(self, PropertyPaneField::Dropdown { disabled: true, .. })
    }
}
