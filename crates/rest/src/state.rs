//! Application state for the sizing API.
//!
//! Handlers share one read-only catalog snapshot and the server configuration.
//! Both are built once at startup and never mutated, so requests need no locking.

use std::sync::Arc;

use pxc_core::Catalog;

use crate::config::ServerConfig;

/// Shared application state for the REST API.
///
/// # Example
///
/// ```rust
/// use pxc_core::Catalog;
/// use pxc_rest::{AppState, ServerConfig};
/// use std::sync::Arc;
///
/// let state = AppState::new(Arc::new(Catalog::build()), ServerConfig::default());
/// assert!(state.pretty_json());
/// ```
#[derive(Debug)]
pub struct AppState {
    /// The catalog every request is resolved against.
    catalog: Arc<Catalog>,

    /// Server configuration.
    config: Arc<ServerConfig>,
}

// Clone only bumps the Arcs
impl Clone for AppState {
    fn clone(&self) -> Self {
        Self {
            catalog: Arc::clone(&self.catalog),
            config: Arc::clone(&self.config),
        }
    }
}

impl AppState {
    /// Creates a new AppState with the given catalog and configuration.
    ///
    /// # Arguments
    ///
    /// * `catalog` - The catalog snapshot (wrapped in Arc)
    /// * `config` - Server configuration
    pub fn new(catalog: Arc<Catalog>, config: ServerConfig) -> Self {
        Self {
            catalog,
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Returns whether JSON responses are indented.
    pub fn pretty_json(&self) -> bool {
        self.config.pretty_json
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_creation() {
        let catalog = Arc::new(Catalog::build());
        let state = AppState::new(Arc::clone(&catalog), ServerConfig::for_testing());

        assert_eq!(state.catalog().len(), catalog.len());
        assert!(!state.pretty_json());
    }

    #[test]
    fn test_clone_shares_catalog() {
        let state = AppState::new(Arc::new(Catalog::build()), ServerConfig::default());
        let cloned = state.clone();
        assert!(std::ptr::eq(state.catalog(), cloned.catalog()));
    }
}
