//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::SiteConfig;
use crate::store::{MemStorage, Storage};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// the configuration and the storage backend. It is built once in `main`
/// and handed to the router; there is no global store.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: SiteConfig,
    storage: Arc<dyn Storage>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `config` - Site configuration
    /// * `storage` - Storage backend used by every route
    #[must_use]
    pub fn new(config: SiteConfig, storage: Arc<dyn Storage>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, storage }),
        }
    }

    /// Create state backed by a fresh in-memory store.
    ///
    /// The store is seeded unless `config.seed_content` is false.
    #[must_use]
    pub fn in_memory(config: SiteConfig) -> Self {
        let storage = if config.seed_content {
            MemStorage::new()
        } else {
            MemStorage::empty()
        };
        Self::new(config, Arc::new(storage))
    }

    /// Get a reference to the site configuration.
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.inner.config
    }

    /// Get a reference to the storage backend.
    #[must_use]
    pub fn storage(&self) -> &dyn Storage {
        self.inner.storage.as_ref()
    }
}
