//! Services handed to web parts at activation

use super::WebPartError;
use crate::options::ErasedOptionSource;
use property_pane_core::HostContext;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Supplies the host signals once per activation.
///
/// The embedding SDK may need a round trip to answer, hence async.
pub trait HostContextProvider: Send + Sync + std::fmt::Debug {
    fn host_context(&self) -> impl Future<Output = Result<HostContext, WebPartError>> + Send;
}

/// Object-safe version of HostContextProvider for type erasure.
pub trait ErasedHostContextProvider: Send + Sync + std::fmt::Debug {
    fn host_context<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<HostContext, WebPartError>> + Send + 'a>>;
}

impl<T: HostContextProvider> ErasedHostContextProvider for T {
    fn host_context<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<HostContext, WebPartError>> + Send + 'a>> {
        Box::pin(HostContextProvider::host_context(self))
    }
}

/// Provider answering with a fixed, already-resolved context
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticHostContext(pub HostContext);

impl HostContextProvider for StaticHostContext {
    async fn host_context(&self) -> Result<HostContext, WebPartError> {
        Ok(self.0)
    }
}

/// Page the web part is placed on
#[derive(Debug, Clone, Default)]
pub struct PageContext {
    /// Current user's display name
    pub user_display_name: String,
}

/// Shared services available to web parts during init
#[derive(Clone)]
pub struct WebPartContext {
    /// Host signal provider
    pub host: Arc<dyn ErasedHostContextProvider>,
    /// Page and user
    pub page: Arc<PageContext>,
    /// Source backing list pickers
    pub lists: Arc<dyn ErasedOptionSource>,
}

impl WebPartContext {
    pub fn new(
        host: Arc<dyn ErasedHostContextProvider>,
        page: Arc<PageContext>,
        lists: Arc<dyn ErasedOptionSource>,
    ) -> Self {
        Self { host, page, lists }
    }
}

impl std::fmt::Debug for WebPartContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebPartContext")
            .field("host", &self.host)
            .field("page", &self.page)
            .field("lists", &self.lists.source_name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use property_pane_core::HostName;

    #[tokio::test]
    async fn test_static_host_context() {
        let provider: Arc<dyn ErasedHostContextProvider> =
            Arc::new(StaticHostContext(HostContext::embedded(HostName::Mail, false)));
        let ctx = provider.host_context().await.unwrap();
        assert_eq!(ctx, HostContext::embedded(HostName::Mail, false));
    }
}
