//! Canned list source answering after a delay

use super::source::{OptionSource, SourceError};
use property_pane_core::SourceItem;
use std::time::Duration;
use tracing::debug;

/// Lists served by [`StaticListSource::demo`]
pub const DEMO_LISTS: [(&str, &str); 2] = [
    ("b9762b33-e651-413a-9916-afb465b4ed42", "Shared Documents"),
    ("7a31cac5-8cef-41a8-91ad-41e793ecd3ac", "Site Assets"),
];

/// Option source with fixed items, useful offline and in local dev.
#[derive(Debug, Clone)]
pub struct StaticListSource {
    items: Vec<SourceItem>,
    delay: Duration,
}

impl StaticListSource {
    pub fn new(items: Vec<SourceItem>, delay: Duration) -> Self {
        Self { items, delay }
    }

    /// The demo site's document libraries.
    pub fn demo(delay: Duration) -> Self {
        let items = DEMO_LISTS
            .iter()
            .map(|(id, title)| SourceItem::new(*id, *title))
            .collect();
        Self::new(items, delay)
    }
}

impl OptionSource for StaticListSource {
    async fn fetch_options(&self) -> Result<Vec<SourceItem>, SourceError> {
        if !self.delay.is_zero() {
            debug!("static lists answering in {:?}", self.delay);
            tokio::time::sleep(self.delay).await;
        }
        Ok(self.items.clone())
    }

    fn source_name(&self) -> &str {
        "static"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_demo_lists_after_delay() {
        let source = StaticListSource::demo(Duration::from_secs(2));
        let started = tokio::time::Instant::now();

        let items = source.fetch_options().await.unwrap();

        assert!(started.elapsed() >= Duration::from_secs(2));
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].display_name, "Shared Documents");
        assert_eq!(items[1].identifier, "7a31cac5-8cef-41a8-91ad-41e793ecd3ac");
    }

    #[tokio::test]
    async fn test_zero_delay_answers_immediately() {
        let source = StaticListSource::new(vec![SourceItem::new("x", "X")], Duration::ZERO);
        let items = source.fetch_options().await.unwrap();
        assert_eq!(items, vec![SourceItem::new("x", "X")]);
    }
}
