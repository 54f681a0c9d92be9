//! Server types and shared state.

use std::sync::Arc;

use crate::config::Config;
use crate::traits::StepStore;

/// Shared application state for all request handlers.
///
/// Holds the injected storage handle; no handler reaches for a global.
#[derive(Clone)]
pub struct AppState {
    /// Storage backend for step records.
    pub store: Arc<dyn StepStore>,
    /// Server configuration.
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates a new application state.
    ///
    /// # Arguments
    ///
    /// * `store` - The storage backend
    /// * `config` - Server configuration
    #[must_use]
    pub fn new(store: Arc<dyn StepStore>, config: Config) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
