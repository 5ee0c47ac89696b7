//! Application state for the Cairn REST API.
//!
//! Holds the search store and server configuration shared by every handler.

use std::sync::Arc;

use cairn_persistence::core::SearchStore;

use crate::config::ServerConfig;

/// Shared application state for the REST API.
///
/// # Type Parameters
///
/// * `S` - The store backend type (must implement [`SearchStore`])
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use cairn_persistence::backends::memory::MemoryBackend;
/// use cairn_rest::{AppState, ServerConfig};
///
/// let state = AppState::new(Arc::new(MemoryBackend::new()), ServerConfig::default());
/// assert_eq!(state.default_realm(), "default");
/// ```
pub struct AppState<S> {
    store: Arc<S>,
    config: Arc<ServerConfig>,
}

// S sits behind an Arc and need not be Clone
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            config: Arc::clone(&self.config),
        }
    }
}

impl<S: SearchStore> AppState<S> {
    /// Creates a new AppState with the given store and configuration.
    pub fn new(store: Arc<S>, config: ServerConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Returns the default realm from configuration.
    pub fn default_realm(&self) -> &str {
        &self.config.default_realm
    }

    /// Returns the page size for a search that requested `limit`.
    pub fn page_size(&self, limit: Option<u32>) -> u32 {
        self.config.page_size(limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cairn_persistence::backends::memory::MemoryBackend;

    #[test]
    fn test_app_state_creation() {
        let state = AppState::new(Arc::new(MemoryBackend::new()), ServerConfig::default());

        assert_eq!(state.store().backend_name(), "memory");
        assert_eq!(state.default_realm(), "default");
    }

    #[test]
    fn test_app_state_config_access() {
        let config = ServerConfig {
            default_realm: "acme".to_string(),
            default_page_size: 50,
            max_page_size: 500,
            ..Default::default()
        };
        let state = AppState::new(Arc::new(MemoryBackend::new()), config);

        assert_eq!(state.default_realm(), "acme");
        assert_eq!(state.page_size(None), 50);
        assert_eq!(state.page_size(Some(900)), 500);
    }

    #[test]
    fn test_app_state_clone() {
        let state = AppState::new(Arc::new(MemoryBackend::new()), ServerConfig::default());
        let cloned = state.clone();

        assert_eq!(state.default_realm(), cloned.default_realm());
        assert!(Arc::ptr_eq(&state.store, &cloned.store));
    }
}
