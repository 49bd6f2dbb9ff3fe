//! Load-once option cache
//!
//! State machine: `Empty → Loading → Ready | Failed`, taken at most once per
//! instance. The `Empty → Loading` step is a single `send_if_modified` on the
//! watch channel, so concurrent requests dispatch exactly one fetch.
//!
//! Fetch failures are logged and absorbed: the cache ends up `Failed`, the
//! snapshot is empty and the dependent control stays disabled. There is no
//! retry and no timeout; a fresh instance is needed to try again.

use super::source::{ErasedOptionSource, SourceError};
use property_pane_core::{SelectableOption, SourceItem};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, warn};

/// Lifecycle of an options cache
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheState {
    /// Nothing requested yet
    Empty,
    /// Fetch in flight
    Loading,
    /// Options available, in source order
    Ready(Vec<SelectableOption>),
    /// Fetch failed; treated as no options
    Failed,
}

/// Callback invoked once when options become available
pub type ReadyCallback = Arc<dyn Fn(&[SelectableOption]) + Send + Sync>;

struct CacheInner {
    source: Arc<dyn ErasedOptionSource>,
    state: watch::Sender<CacheState>,
    on_ready: Option<ReadyCallback>,
}

impl CacheInner {
    /// Claim the single `Empty → Loading` transition.
    fn begin(&self) -> bool {
        self.state.send_if_modified(|state| {
            if matches!(state, CacheState::Empty) {
                *state = CacheState::Loading;
                true
            } else {
                false
            }
        })
    }

    async fn complete(&self) {
        let result = self.source.fetch_options().await;
        self.finish(result);
    }

    fn finish(&self, result: Result<Vec<SourceItem>, SourceError>) {
        match result {
            Ok(items) => {
                let options: Vec<SelectableOption> =
                    items.into_iter().map(SelectableOption::from).collect();
                debug!(
                    source = self.source.source_name(),
                    count = options.len(),
                    "options loaded"
                );
                self.state.send_replace(CacheState::Ready(options.clone()));
                if let Some(callback) = &self.on_ready {
                    callback(&options);
                }
            }
            Err(e) => {
                warn!(
                    source = self.source.source_name(),
                    "option load failed, continuing without options: {e}"
                );
                self.state.send_replace(CacheState::Failed);
            }
        }
    }
}

/// Lazily loaded option list owned by one activation
pub struct OptionsCache {
    inner: Arc<CacheInner>,
}

impl OptionsCache {
    /// Create an empty cache over `source`. Nothing is fetched until
    /// [`request`](Self::request) or [`load`](Self::load).
    pub fn new(source: Arc<dyn ErasedOptionSource>) -> Self {
        let (state, _) = watch::channel(CacheState::Empty);
        Self {
            inner: Arc::new(CacheInner {
                source,
                state,
                on_ready: None,
            }),
        }
    }

    /// Create a cache that calls `on_ready` after a successful load.
    pub fn with_on_ready(source: Arc<dyn ErasedOptionSource>, on_ready: ReadyCallback) -> Self {
        let (state, _) = watch::channel(CacheState::Empty);
        Self {
            inner: Arc::new(CacheInner {
                source,
                state,
                on_ready: Some(on_ready),
            }),
        }
    }

    /// Start loading in the background. No-op unless the cache is `Empty`.
    ///
    /// Must be called from within a Tokio runtime; without one the load cannot
    /// be dispatched and the cache moves straight to `Failed`.
    pub fn request(&self) {
        if !self.inner.begin() {
            debug!(
                source = self.inner.source.source_name(),
                "options already requested"
            );
            return;
        }

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let inner = Arc::clone(&self.inner);
                handle.spawn(async move {
                    inner.complete().await;
                });
            }
            Err(e) => {
                self.inner.finish(Err(SourceError::Unavailable {
                    message: format!("no async runtime to load options: {e}"),
                }));
            }
        }
    }

    /// Request the load and wait for the outcome.
    ///
    /// The fetch runs on its own task, so dropping this future (a timeout, a
    /// lost `select!`) leaves the load in flight and the cache still settles.
    pub async fn load(&self) {
        self.request();
        self.settled().await;
    }

    /// Wait until the cache is no longer `Loading`.
    pub async fn settled(&self) {
        let mut rx = self.inner.state.subscribe();
        loop {
            let loading = matches!(*rx.borrow_and_update(), CacheState::Loading);
            if !loading {
                return;
            }
            if rx.changed().await.is_err() {
                return;
            }
        }
    }

    /// Current state
    pub fn state(&self) -> CacheState {
        self.inner.state.borrow().clone()
    }

    pub fn is_ready(&self) -> bool {
        matches!(*self.inner.state.borrow(), CacheState::Ready(_))
    }

    /// Gate for the dependent control: disabled until a successful load.
    pub fn is_disabled(&self) -> bool {
        !self.is_ready()
    }

    /// Loaded options in source order; empty unless `Ready`.
    pub fn snapshot(&self) -> Vec<SelectableOption> {
        match &*self.inner.state.borrow() {
            CacheState::Ready(options) => options.clone(),
            _ => Vec::new(),
        }
    }

    /// Name of the backing source
    pub fn source_name(&self) -> &str {
        self.inner.source.source_name()
    }
}

impl std::fmt::Debug for OptionsCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OptionsCache")
            .field("source", &self.inner.source.source_name())
            .field("state", &*self.inner.state.borrow())
            .finish()
    }
}
