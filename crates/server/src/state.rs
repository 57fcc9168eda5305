//! Application state shared across handlers.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::config::FixtureConfig;
use crate::store::FixtureStore;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. Owns the configuration and the in-memory
/// store; there is no process-wide singleton.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: FixtureConfig,
    store: Mutex<FixtureStore>,
}

impl AppState {
    /// Create application state with a freshly seeded store.
    #[must_use]
    pub fn new(config: FixtureConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                store: Mutex::new(FixtureStore::new()),
            }),
        }
    }

    /// Get a reference to the fixture configuration.
    #[must_use]
    pub fn config(&self) -> &FixtureConfig {
        &self.inner.config
    }

    /// Lock the store for the duration of a request.
    ///
    /// A single coarse lock serializes all access to the shared collections;
    /// no operation blocks on I/O while holding it, so contention is not a
    /// concern for a test fixture.
    pub fn store(&self) -> MutexGuard<'_, FixtureStore> {
        self.inner
            .store
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
