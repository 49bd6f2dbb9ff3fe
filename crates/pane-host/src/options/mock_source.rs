//! Mock option source for testing

use super::source::{OptionSource, SourceError};
use property_pane_core::SourceItem;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Notify;

/// Call-counting option source returning canned data.
#[derive(Debug, Clone, Default)]
pub struct MockOptionSource {
    /// Items returned on success
    pub items: Vec<SourceItem>,
    /// If set, fetches fail with this message
    pub error: Option<String>,
    /// If set, fetches wait for a notification before answering
    pub gate: Option<Arc<Notify>>,
    calls: Arc<AtomicUsize>,
}

impl MockOptionSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<SourceItem>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    /// Make every fetch fail with `error`
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Hold every fetch until `gate` is notified
    pub fn with_gate(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    /// Shared counter of `fetch_options` calls, usable after the source has
    /// been moved into a cache.
    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl OptionSource for MockOptionSource {
    async fn fetch_options(&self) -> Result<Vec<SourceItem>, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        if let Some(err) = &self.error {
            return Err(SourceError::Failed {
                message: err.clone(),
            });
        }

        Ok(self.items.clone())
    }

    fn source_name(&self) -> &str {
        "mock"
    }
}
