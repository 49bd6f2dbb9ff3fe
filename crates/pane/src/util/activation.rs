//! One activation of the hello web part, built from resolved configuration

use anyhow::{Context, Result};
use property_pane_core::config::Config;
use property_pane_core::text::validate_description;
use property_pane_host::options::source_from_config;
use property_pane_host::pane::PropertyPaneConfiguration;
use property_pane_host::parts::{HelloProperties, HelloPropertyPane};
use property_pane_host::webpart::{
    PageContext, StaticHostContext, Theme, WebPartContext, WebPartHost, WebPartManifest,
};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

const ALIAS: &str = "hello-property-pane";

/// Host with the hello web part registered and initialized
pub struct Activation {
    host: WebPartHost,
}

impl Activation {
    /// Register and initialize the web part.
    pub async fn start(config: &Config, properties: Option<&Path>) -> Result<Self> {
        let properties = match properties {
            Some(path) => load_properties(path)?,
            None => HelloProperties::default(),
        };

        let lists = source_from_config(config).context("Invalid list source configuration")?;
        let ctx = WebPartContext::new(
            Arc::new(StaticHostContext(config.host.host_context())),
            Arc::new(PageContext {
                user_display_name: config.user.display_name().to_string(),
            }),
            lists,
        );
        debug!("Activating {ALIAS} with {ctx:?}");

        let mut host = WebPartHost::new();
        host.register(HelloPropertyPane::with_properties(properties));
        host.init_all(&ctx)
            .await
            .context("Failed to initialize web part")?;
        Ok(Self { host })
    }

    /// Open the pane; dependent dropdowns may still be disabled.
    pub fn open_property_pane(&mut self) -> Result<PropertyPaneConfiguration> {
        Ok(self.host.open_property_pane(ALIAS)?)
    }

    /// Wait for option loads and return the refreshed pane.
    pub async fn settle_property_pane(&self) -> Result<PropertyPaneConfiguration> {
        self.host.property_pane_settled(ALIAS).await?;
        Ok(self.host.property_pane(ALIAS)?)
    }

    pub fn apply_theme(&mut self, theme: Theme) {
        self.host.apply_theme(Some(&theme));
    }

    /// Identity of the activated web part
    pub fn manifest(&self) -> Result<WebPartManifest> {
        let (manifest, _) = self
            .host
            .get_by_alias(ALIAS)
            .with_context(|| format!("No web part registered as {ALIAS}"))?;
        Ok(manifest)
    }

    pub fn render(&self) -> Result<serde_json::Value> {
        Ok(self.host.render(ALIAS)?)
    }

    /// Dispose the web part.
    pub async fn finish(mut self) -> Result<()> {
        self.host
            .dispose_all()
            .await
            .context("Failed to dispose web part")
    }
}

fn load_properties(path: &Path) -> Result<HelloProperties> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read properties file {}", path.display()))?;
    let properties: HelloProperties = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid properties file {}", path.display()))?;
    if let Some(message) = validate_description(&properties.description) {
        warn!("{}: {message}", path.display());
    }
    Ok(properties)
}
