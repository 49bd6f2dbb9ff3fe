//! Option loading for property pane dropdowns
//!
//! An [`OptionsCache`] owns one activation's option list and loads it once
//! from an injected [`OptionSource`].

mod cache;
mod mock_source;
mod rest;
mod source;
mod static_lists;

pub use cache::{CacheState, OptionsCache, ReadyCallback};
pub use mock_source::MockOptionSource;
pub use rest::RestListSource;
pub use source::{ErasedOptionSource, OptionSource, SourceError, UnavailableSource};
pub use static_lists::{StaticListSource, DEMO_LISTS};

use property_pane_core::config::{Config, ConfigError, ListSourceKind};
use std::sync::Arc;
use tracing::debug;

/// Build the list source described by `config`.
///
/// A REST source without a site URL becomes an [`UnavailableSource`], so the
/// cache fails softly and the dropdown stays disabled.
///
/// # Errors
///
/// Returns `ConfigError::InvalidSiteUrl` if a site URL is set but malformed.
pub fn source_from_config(config: &Config) -> Result<Arc<dyn ErasedOptionSource>, ConfigError> {
    match config.lists.source() {
        ListSourceKind::Static => {
            let delay = config.lists.static_delay();
            debug!("Using static list source (delay {delay:?})");
            Ok(Arc::new(StaticListSource::demo(delay)))
        }
        ListSourceKind::Rest => {
            let Some(site_url) = config.site.site_url()? else {
                return Ok(Arc::new(UnavailableSource::new(
                    "no site URL configured (set [site] absolute_url or PANE_SITE_URL)",
                )));
            };
            debug!("Using REST list source for {site_url}");
            let mut source =
                RestListSource::new(site_url).include_hidden(config.lists.include_hidden());
            if let Some(token) = &config.site.access_token {
                source = source.with_access_token(token.clone());
            }
            Ok(Arc::new(source))
        }
    }
}
