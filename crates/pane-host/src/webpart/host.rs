use super::traits::ErasedWebPart;
use super::{Theme, WebPart, WebPartContext, WebPartError, WebPartManifest, WebPartState};
use crate::pane::PropertyPaneConfiguration;
use tracing::{debug, info, warn};

/// Entry in the host tracking a web part and its state
struct WebPartEntry {
    part: Box<dyn ErasedWebPart>,
    state: WebPartState,
}

/// Hosts web parts and drives their lifecycle
pub struct WebPartHost {
    parts: Vec<WebPartEntry>,
}

impl WebPartHost {
    pub fn new() -> Self {
        Self { parts: Vec::new() }
    }

    /// Register a web part. It starts in Created state.
    pub fn register<P: WebPart + 'static>(&mut self, part: P) {
        self.parts.push(WebPartEntry {
            part: Box::new(part),
            state: WebPartState::Created,
        });
    }

    /// Initialize every web part still in Created state.
    ///
    /// Stops at the first failure; the failing web part is marked Failed.
    pub async fn init_all(&mut self, ctx: &WebPartContext) -> Result<(), WebPartError> {
        for entry in &mut self.parts {
            if entry.state != WebPartState::Created {
                continue;
            }
            let manifest = entry.part.manifest();
            let alias = manifest.alias;
            match entry.part.init(ctx).await {
                Ok(()) => {
                    debug!(
                        id = manifest.id,
                        version = manifest.version,
                        "Initialized web part {alias}"
                    );
                    entry.state = WebPartState::Initialized;
                }
                Err(e) => {
                    warn!("Web part {alias} failed to initialize: {e}");
                    entry.state = WebPartState::Failed;
                    return Err(e);
                }
            }
        }
        Ok(())
    }

    /// Render an initialized web part to its JSON view model.
    pub fn render(&self, alias: &str) -> Result<serde_json::Value, WebPartError> {
        let entry = self.initialized(alias, "render")?;
        entry.part.render()
    }

    /// Open the property pane: notify the web part, then return the pane as
    /// it looks right now (dependent controls may still be disabled).
    pub fn open_property_pane(
        &mut self,
        alias: &str,
    ) -> Result<PropertyPaneConfiguration, WebPartError> {
        let entry = self.initialized_mut(alias, "configure")?;
        entry.part.on_property_pane_configuration_start();
        Ok(entry.part.property_pane_configuration())
    }

    /// Current property pane of an initialized web part.
    pub fn property_pane(&self, alias: &str) -> Result<PropertyPaneConfiguration, WebPartError> {
        let entry = self.initialized(alias, "configure")?;
        Ok(entry.part.property_pane_configuration())
    }

    /// Wait for loads started by `open_property_pane` to settle.
    pub async fn property_pane_settled(&self, alias: &str) -> Result<(), WebPartError> {
        let entry = self.initialized(alias, "configure")?;
        entry.part.property_pane_settled().await;
        Ok(())
    }

    /// Set one property on a web part.
    pub fn set_property(
        &mut self,
        alias: &str,
        name: &str,
        value: serde_json::Value,
    ) -> Result<(), WebPartError> {
        let entry = self.find_mut(alias)?;
        entry.part.set_property(name, value)
    }

    /// Forward a theme change to every initialized web part.
    pub fn apply_theme(&mut self, theme: Option<&Theme>) {
        for entry in &mut self.parts {
            if entry.state == WebPartState::Initialized {
                entry.part.on_theme_changed(theme);
            }
        }
    }

    /// Dispose every initialized web part.
    ///
    /// All web parts are attempted; the first error is returned.
    pub async fn dispose_all(&mut self) -> Result<(), WebPartError> {
        let mut first_error = None;
        for entry in &mut self.parts {
            if entry.state != WebPartState::Initialized {
                continue;
            }
            let alias = entry.part.manifest().alias;
            match entry.part.dispose().await {
                Ok(()) => {
                    info!("Disposed web part {alias}");
                    entry.state = WebPartState::Disposed;
                }
                Err(e) => {
                    warn!("Web part {alias} failed to dispose: {e}");
                    entry.state = WebPartState::Failed;
                    first_error.get_or_insert(e);
                }
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Get web part manifest and state by alias
    pub fn get_by_alias(&self, alias: &str) -> Option<(WebPartManifest, WebPartState)> {
        self.parts
            .iter()
            .find(|e| e.part.manifest().alias == alias)
            .map(|e| (e.part.manifest(), e.state))
    }

    /// Get the state of a web part by alias
    pub fn state_of(&self, alias: &str) -> Option<WebPartState> {
        self.parts
            .iter()
            .find(|e| e.part.manifest().alias == alias)
            .map(|e| e.state)
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    fn find(&self, alias: &str) -> Result<&WebPartEntry, WebPartError> {
        self.parts
            .iter()
            .find(|e| e.part.manifest().alias == alias)
            .ok_or_else(|| WebPartError::NotFound {
                alias: alias.to_string(),
            })
    }

    fn find_mut(&mut self, alias: &str) -> Result<&mut WebPartEntry, WebPartError> {
        self.parts
            .iter_mut()
            .find(|e| e.part.manifest().alias == alias)
            .ok_or_else(|| WebPartError::NotFound {
                alias: alias.to_string(),
            })
    }

    fn initialized(
        &self,
        alias: &str,
        operation: &'static str,
    ) -> Result<&WebPartEntry, WebPartError> {
        let entry = self.find(alias)?;
        ensure_initialized(entry, alias, operation)?;
        Ok(entry)
    }

    fn initialized_mut(
        &mut self,
        alias: &str,
        operation: &'static str,
    ) -> Result<&mut WebPartEntry, WebPartError> {
        let entry = self.find_mut(alias)?;
        ensure_initialized(entry, alias, operation)?;
        Ok(entry)
    }
}

fn ensure_initialized(
    entry: &WebPartEntry,
    alias: &str,
    operation: &'static str,
) -> Result<(), WebPartError> {
    if entry.state == WebPartState::Initialized {
        Ok(())
    } else {
        Err(WebPartError::InvalidState {
            alias: alias.to_string(),
            state: entry.state,
            operation,
        })
    }
}

impl Default for WebPartHost {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::MockOptionSource;
    use crate::webpart::{PageContext, StaticHostContext};
    use serde::Serialize;
    use std::sync::Arc;

    #[derive(Serialize)]
    struct CounterView {
        value: i64,
        dark: Option<bool>,
    }

    struct CounterPart {
        alias: &'static str,
        value: i64,
        fail_init: bool,
        dark: Option<bool>,
    }

    impl CounterPart {
        fn new(alias: &'static str) -> Self {
            Self {
                alias,
                value: 0,
                fail_init: false,
                dark: None,
            }
        }
    }

    impl WebPart for CounterPart {
        type View = CounterView;

        fn manifest(&self) -> WebPartManifest {
            WebPartManifest {
                id: "00000000-0000-0000-0000-000000000001",
                alias: self.alias,
                version: "0.1.0",
                description: "counter",
            }
        }

        async fn init(&mut self, _ctx: &WebPartContext) -> Result<(), WebPartError> {
            if self.fail_init {
                return Err(WebPartError::Init {
                    message: "refused".to_string(),
                    source: None,
                });
            }
            Ok(())
        }

        fn render(&self) -> Result<CounterView, WebPartError> {
            Ok(CounterView {
                value: self.value,
                dark: self.dark,
            })
        }

        async fn dispose(&mut self) -> Result<(), WebPartError> {
            Ok(())
        }

        fn property_pane_configuration(&self) -> PropertyPaneConfiguration {
            PropertyPaneConfiguration { pages: Vec::new() }
        }

        fn set_property(
            &mut self,
            name: &str,
            value: serde_json::Value,
        ) -> Result<(), WebPartError> {
            match (name, value.as_i64()) {
                ("value", Some(v)) => {
                    self.value = v;
                    Ok(())
                }
                _ => Err(WebPartError::Property {
                    property: name.to_string(),
                    message: "expected integer 'value'".to_string(),
                }),
            }
        }

        fn on_theme_changed(&mut self, theme: Option<&Theme>) {
            if let Some(theme) = theme {
                self.dark = Some(theme.is_inverted);
            }
        }
    }

    fn ctx() -> WebPartContext {
        WebPartContext::new(
            Arc::new(StaticHostContext::default()),
            Arc::new(PageContext::default()),
            Arc::new(MockOptionSource::new()),
        )
    }

    #[tokio::test]
    async fn test_lifecycle_states() {
        let mut host = WebPartHost::new();
        assert!(host.is_empty());
        host.register(CounterPart::new("counter"));
        assert_eq!(host.len(), 1);
        assert_eq!(host.state_of("counter"), Some(WebPartState::Created));

        host.init_all(&ctx()).await.unwrap();
        assert_eq!(host.state_of("counter"), Some(WebPartState::Initialized));

        host.dispose_all().await.unwrap();
        assert_eq!(host.state_of("counter"), Some(WebPartState::Disposed));
    }

    #[tokio::test]
    async fn test_render_before_init_is_invalid_state() {
        let mut host = WebPartHost::new();
        host.register(CounterPart::new("counter"));

        let err = host.render("counter").unwrap_err();
        assert!(matches!(
            err,
            WebPartError::InvalidState {
                state: WebPartState::Created,
                operation: "render",
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_render_unknown_alias() {
        let host = WebPartHost::new();
        assert!(matches!(
            host.render("missing"),
            Err(WebPartError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_set_property_then_render() {
        let mut host = WebPartHost::new();
        host.register(CounterPart::new("counter"));
        host.init_all(&ctx()).await.unwrap();

        host.set_property("counter", "value", serde_json::json!(7))
            .unwrap();
        let view = host.render("counter").unwrap();
        assert_eq!(view["value"], 7);

        let err = host
            .set_property("counter", "value", serde_json::json!("seven"))
            .unwrap_err();
        assert!(matches!(err, WebPartError::Property { .. }));
    }

    #[tokio::test]
    async fn test_init_failure_marks_failed() {
        let mut host = WebPartHost::new();
        let mut broken = CounterPart::new("broken");
        broken.fail_init = true;
        host.register(broken);

        let err = host.init_all(&ctx()).await.unwrap_err();
        assert!(matches!(err, WebPartError::Init { .. }));
        assert_eq!(host.state_of("broken"), Some(WebPartState::Failed));
        assert!(host.open_property_pane("broken").is_err());

        // Failed parts are not disposed
        host.dispose_all().await.unwrap();
        assert_eq!(host.state_of("broken"), Some(WebPartState::Failed));
    }

    #[tokio::test]
    async fn test_apply_theme_reaches_initialized_parts() {
        let mut host = WebPartHost::new();
        host.register(CounterPart::new("counter"));
        host.init_all(&ctx()).await.unwrap();

        host.apply_theme(Some(&Theme { is_inverted: true }));
        assert_eq!(host.render("counter").unwrap()["dark"], true);

        host.apply_theme(None);
        assert_eq!(host.render("counter").unwrap()["dark"], true);
    }

    #[tokio::test]
    async fn test_get_by_alias() {
        let mut host = WebPartHost::default();
        host.register(CounterPart::new("counter"));
        let (manifest, state) = host.get_by_alias("counter").unwrap();
        assert_eq!(manifest.alias, "counter");
        assert_eq!(state, WebPartState::Created);
        assert!(host.get_by_alias("other").is_none());
    }
}
