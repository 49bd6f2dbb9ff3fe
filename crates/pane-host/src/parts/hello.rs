//! Hello property pane web part
//!
//! Shows a description, a color, a list picked from the site and one person.
//! The list dropdown is backed by an [`OptionsCache`] that is filled the first
//! time the property pane opens; until then the dropdown stays disabled.

use crate::options::{OptionsCache, ReadyCallback};
use crate::pane::{
    DropdownOption, PageHeader, PropertyPaneConfiguration, PropertyPaneField, PropertyPaneGroup,
    PropertyPanePage,
};
use crate::webpart::{
    ErasedHostContextProvider, Theme, WebPart, WebPartContext, WebPartError, WebPartManifest,
};
use property_pane_core::context::resolve;
use property_pane_core::text::validate_description;
use property_pane_core::{EnvironmentMessage, PersonOrGroup, PrincipalType, SelectableOption};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, info};

/// Keys offered by the color dropdown
pub const COLOR_OPTIONS: [&str; 3] = ["Red", "Green", "Blue"];

const ALIAS: &str = "hello-property-pane";

/// Persisted property bag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HelloProperties {
    pub description: String,
    pub color: String,
    pub list: String,
    pub users: Vec<PersonOrGroup>,
}

impl Default for HelloProperties {
    fn default() -> Self {
        Self {
            description: "HelloPropertyPane".to_string(),
            color: String::new(),
            list: String::new(),
            users: Vec::new(),
        }
    }
}

impl HelloProperties {
    /// Full name of the selected person, or empty unless exactly one is picked.
    pub fn user_name(&self) -> &str {
        match self.users.as_slice() {
            [only] => &only.full_name,
            _ => "",
        }
    }
}

/// View model produced by `render`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HelloView {
    pub description: String,
    pub color: String,
    pub list: String,
    pub user: String,
    pub is_dark_theme: bool,
    /// Environment message key
    pub environment_message: String,
    pub has_teams_context: bool,
    pub user_display_name: String,
}

/// Per-activation state, built in `init` and dropped in `dispose`
struct Activation {
    environment: EnvironmentMessage,
    has_teams_context: bool,
    user_display_name: String,
    lists: OptionsCache,
}

pub struct HelloPropertyPane {
    properties: HelloProperties,
    is_dark_theme: bool,
    activation: Option<Activation>,
    refreshes: Arc<AtomicUsize>,
}

impl HelloPropertyPane {
    pub fn new() -> Self {
        Self::with_properties(HelloProperties::default())
    }

    pub fn with_properties(properties: HelloProperties) -> Self {
        Self {
            properties,
            is_dark_theme: false,
            activation: None,
            refreshes: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn properties(&self) -> &HelloProperties {
        &self.properties
    }

    /// Environment resolved at init, if active
    pub fn environment(&self) -> Option<EnvironmentMessage> {
        self.activation.as_ref().map(|a| a.environment)
    }

    /// Number of times loaded options asked the pane to refresh
    pub fn refresh_count(&self) -> usize {
        self.refreshes.load(Ordering::SeqCst)
    }

    /// Shared refresh counter, readable after the web part moves into a host
    pub fn refresh_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.refreshes)
    }

    fn list_field(&self) -> PropertyPaneField {
        let (options, disabled) = match &self.activation {
            Some(activation) => (
                activation
                    .lists
                    .snapshot()
                    .into_iter()
                    .map(DropdownOption::from)
                    .collect(),
                activation.lists.is_disabled(),
            ),
            None => (Vec::new(), true),
        };
        PropertyPaneField::dropdown("list", "List", options, disabled)
    }
}

impl Default for HelloPropertyPane {
    fn default() -> Self {
        Self::new()
    }
}

fn expect_string(property: &str, value: serde_json::Value) -> Result<String, WebPartError> {
    match value {
        serde_json::Value::String(s) => Ok(s),
        other => Err(WebPartError::Property {
            property: property.to_string(),
            message: format!("expected a string, got {other}"),
        }),
    }
}

impl WebPart for HelloPropertyPane {
    type View = HelloView;

    fn manifest(&self) -> WebPartManifest {
        WebPartManifest {
            id: "5c8a2f4e-3b1d-4e7a-9f60-2d8c41b7e913",
            alias: ALIAS,
            version: "1.0",
            description: "Property pane demo with lazily loaded site lists",
        }
    }

    async fn init(&mut self, ctx: &WebPartContext) -> Result<(), WebPartError> {
        let host = ctx.host.host_context().await?;
        let environment = resolve(&host);
        info!("Initializing {ALIAS} in {environment}");

        let refreshes = Arc::clone(&self.refreshes);
        let on_ready: ReadyCallback = Arc::new(move |options: &[SelectableOption]| {
            refreshes.fetch_add(1, Ordering::SeqCst);
            debug!(count = options.len(), "list options ready, refreshing pane");
        });

        self.activation = Some(Activation {
            environment,
            has_teams_context: host.is_embedded_host,
            user_display_name: ctx.page.user_display_name.clone(),
            lists: OptionsCache::with_on_ready(Arc::clone(&ctx.lists), on_ready),
        });
        Ok(())
    }

    fn render(&self) -> Result<HelloView, WebPartError> {
        let activation = self.activation.as_ref().ok_or_else(|| WebPartError::Render {
            message: "web part is not initialized".to_string(),
            source: None,
        })?;

        Ok(HelloView {
            description: self.properties.description.clone(),
            color: self.properties.color.clone(),
            list: self.properties.list.clone(),
            user: self.properties.user_name().to_string(),
            is_dark_theme: self.is_dark_theme,
            environment_message: activation.environment.key().to_string(),
            has_teams_context: activation.has_teams_context,
            user_display_name: activation.user_display_name.clone(),
        })
    }

    async fn dispose(&mut self) -> Result<(), WebPartError> {
        if self.activation.take().is_some() {
            debug!("Disposed {ALIAS} activation");
        }
        Ok(())
    }

    fn property_pane_configuration(&self) -> PropertyPaneConfiguration {
        let colors = COLOR_OPTIONS
            .iter()
            .map(|c| DropdownOption::new(*c, *c))
            .collect();

        PropertyPaneConfiguration {
            pages: vec![PropertyPanePage {
                header: PageHeader {
                    description: "Description".to_string(),
                },
                groups: vec![PropertyPaneGroup {
                    group_name: "Basic Group".to_string(),
                    group_fields: vec![
                        PropertyPaneField::text_field("description", "Description Field"),
                        PropertyPaneField::dropdown("color", "Color", colors, false),
                        self.list_field(),
                        PropertyPaneField::PeoplePicker {
                            target_property: "users".to_string(),
                            label: "User".to_string(),
                            multi_select: false,
                            allow_duplicate: false,
                            principal_types: vec![
                                PrincipalType::Users,
                                PrincipalType::SharePoint,
                                PrincipalType::Security,
                            ],
                        },
                    ],
                }],
            }],
        }
    }

    fn set_property(&mut self, name: &str, value: serde_json::Value) -> Result<(), WebPartError> {
        match name {
            "description" => {
                let description = expect_string(name, value)?;
                if let Some(message) = validate_description(&description) {
                    return Err(WebPartError::Property {
                        property: name.to_string(),
                        message,
                    });
                }
                self.properties.description = description;
            }
            "color" => {
                let color = expect_string(name, value)?;
                if !COLOR_OPTIONS.contains(&color.as_str()) {
                    return Err(WebPartError::Property {
                        property: name.to_string(),
                        message: format!("'{color}' is not one of {}", COLOR_OPTIONS.join(", ")),
                    });
                }
                self.properties.color = color;
            }
            "list" => {
                self.properties.list = expect_string(name, value)?;
            }
            "users" => {
                self.properties.users =
                    serde_json::from_value(value).map_err(|e| WebPartError::Property {
                        property: name.to_string(),
                        message: e.to_string(),
                    })?;
            }
            _ => {
                return Err(WebPartError::Property {
                    property: name.to_string(),
                    message: "unknown property".to_string(),
                });
            }
        }
        Ok(())
    }

    fn on_property_pane_configuration_start(&mut self) {
        if let Some(activation) = &self.activation {
            activation.lists.request();
        }
    }

    async fn property_pane_settled(&self) {
        if let Some(activation) = &self.activation {
            activation.lists.settled().await;
        }
    }

    fn on_theme_changed(&mut self, theme: Option<&Theme>) {
        if let Some(theme) = theme {
            self.is_dark_theme = theme.is_inverted;
        }
    }
}
