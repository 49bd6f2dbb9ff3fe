//! Fetch collaborator trait for option lists

use property_pane_core::SourceItem;
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// Why an option source could not produce items
#[derive(Debug, Error)]
pub enum SourceError {
    /// Transport-level failure
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Non-success HTTP status
    #[error("request to {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// Response body did not match the expected shape
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// Source cannot be reached at all (not configured, no runtime)
    #[error("option source unavailable: {message}")]
    Unavailable { message: String },

    /// Source-specific failure
    #[error("option source failed: {message}")]
    Failed { message: String },
}

/// Async fetch collaborator behind an options cache.
///
/// Returns raw items in source order. Uses RPITIT with explicit Send bounds.
pub trait OptionSource: Send + Sync + std::fmt::Debug {
    /// Fetch the full option list
    fn fetch_options(&self) -> impl Future<Output = Result<Vec<SourceItem>, SourceError>> + Send;

    /// Source name for logging/display
    fn source_name(&self) -> &str;
}

/// Object-safe version of OptionSource for type erasure.
///
/// Implemented automatically for all types that implement OptionSource.
pub trait ErasedOptionSource: Send + Sync + std::fmt::Debug {
    fn fetch_options<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<SourceItem>, SourceError>> + Send + 'a>>;

    fn source_name(&self) -> &str;
}

impl<T: OptionSource> ErasedOptionSource for T {
    fn fetch_options<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<SourceItem>, SourceError>> + Send + 'a>> {
        Box::pin(OptionSource::fetch_options(self))
    }

    fn source_name(&self) -> &str {
        OptionSource::source_name(self)
    }
}

/// Source that always fails, standing in for one that cannot be built
#[derive(Debug, Clone)]
pub struct UnavailableSource {
    reason: String,
}

impl UnavailableSource {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl OptionSource for UnavailableSource {
    async fn fetch_options(&self) -> Result<Vec<SourceItem>, SourceError> {
        Err(SourceError::Unavailable {
            message: self.reason.clone(),
        })
    }

    fn source_name(&self) -> &str {
        "unavailable"
    }
}
