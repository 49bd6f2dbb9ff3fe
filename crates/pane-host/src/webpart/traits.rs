use super::{Theme, WebPartContext, WebPartError, WebPartManifest};
use crate::pane::PropertyPaneConfiguration;
use serde::Serialize;
use std::future::Future;
use std::pin::Pin;

/// Core web part trait. All hosted web parts implement this.
///
/// Lifecycle: init() → render()* → dispose()
///
/// Uses RPITIT (Return Position Impl Trait in Traits) with explicit Send bounds.
pub trait WebPart: Send + Sync {
    /// View model produced by `render`
    type View: Serialize;

    /// Return web part identity.
    fn manifest(&self) -> WebPartManifest;

    /// One-time setup per activation. Resolve host signals, prepare caches.
    fn init(
        &mut self,
        ctx: &WebPartContext,
    ) -> impl Future<Output = Result<(), WebPartError>> + Send;

    /// Build the current view model from properties and activation state.
    fn render(&self) -> Result<Self::View, WebPartError>;

    /// Tear down the activation.
    fn dispose(&mut self) -> impl Future<Output = Result<(), WebPartError>> + Send;

    /// Describe the property pane as it should currently appear.
    fn property_pane_configuration(&self) -> PropertyPaneConfiguration;

    /// Update one property from the pane.
    fn set_property(&mut self, name: &str, value: serde_json::Value) -> Result<(), WebPartError>;

    /// Called when the property pane opens. Default does nothing.
    fn on_property_pane_configuration_start(&mut self) {}

    /// Wait until anything started by `on_property_pane_configuration_start`
    /// has settled. Default returns immediately.
    fn property_pane_settled(&self) -> impl Future<Output = ()> + Send {
        async {}
    }

    /// Called when the page theme changes. Default ignores it.
    fn on_theme_changed(&mut self, _theme: Option<&Theme>) {}
}

/// Object-safe version of WebPart for type erasure in the host.
///
/// Implemented automatically for all types that implement WebPart. The view
/// model is erased to JSON.
pub trait ErasedWebPart: Send + Sync {
    fn manifest(&self) -> WebPartManifest;
    fn init<'a>(
        &'a mut self,
        ctx: &'a WebPartContext,
    ) -> Pin<Box<dyn Future<Output = Result<(), WebPartError>> + Send + 'a>>;
    fn render(&self) -> Result<serde_json::Value, WebPartError>;
    fn dispose<'a>(
        &'a mut self,
    ) -> Pin<Box<dyn Future<Output = Result<(), WebPartError>> + Send + 'a>>;
    fn property_pane_configuration(&self) -> PropertyPaneConfiguration;
    fn set_property(&mut self, name: &str, value: serde_json::Value) -> Result<(), WebPartError>;
    fn on_property_pane_configuration_start(&mut self);
    fn property_pane_settled<'a>(&'a self) -> Pin<Box<dyn Future<Output = ()> + Send + 'a>>;
    fn on_theme_changed(&mut self, theme: Option<&Theme>);
}

impl<T: WebPart> ErasedWebPart for T {
    fn manifest(&self) -> WebPartManifest {
        WebPart::manifest(self)
    }

    fn init<'a>(
        &'a mut self,
        ctx: &'a WebPartContext,
    ) -> Pin<Box<dyn Future<Output = Result<(), WebPartError>> + Send + 'a>> {
        Box::pin(WebPart::init(self, ctx))
    }

    fn render(&self) -> Result<serde_json::Value, WebPartError> {
        let view = WebPart::render(self)?;
        serde_json::to_value(view).map_err(|e| WebPartError::Render {
            message: format!("view model is not serializable: {e}"),
            source: Some(Box::new(e)),
        })
    }

    fn dispose<'a>(
        &'a mut self,
    ) -> Pin<Box<dyn Future<Output = Result<(), WebPartError>> + Send + 'a>> {
        Box::pin(WebPart::dispose(self))
    }

    fn property_pane_configuration(&self) -> PropertyPaneConfiguration {
        WebPart::property_pane_configuration(self)
    }

    fn set_property(&mut self, name: &str, value: serde_json::Value) -> Result<(), WebPartError> {
        WebPart::set_property(self, name, value)
    }

    fn on_property_pane_configuration_start(&mut self) {
        WebPart::on_property_pane_configuration_start(self)
    }

    fn property_pane_settled<'a>(&'a self) -> Pin<Box<dyn Future<Output = ()> + Send + 'a>> {
        Box::pin(WebPart::property_pane_settled(self))
    }

    fn on_theme_changed(&mut self, theme: Option<&Theme>) {
        WebPart::on_theme_changed(self, theme)
    }
}
