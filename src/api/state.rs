//! Application state for the payroll API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::store::InMemoryStore;

/// Shared application state.
///
/// Holds the employee and payroll store shared by every request handler.
/// The service configuration is consumed at startup and not kept here.
#[derive(Clone)]
pub struct AppState {
    store: Arc<InMemoryStore>,
}

impl AppState {
    /// Creates a new application state around a store.
    pub fn new(store: InMemoryStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Returns the shared store.
    pub fn store(&self) -> &InMemoryStore {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::EmployeeRepository;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_clones_share_one_store() {
        let state = AppState::new(InMemoryStore::new());
        let clone = state.clone();

        assert!(std::ptr::eq(state.store(), clone.store()));
        assert!(clone.store().list_active_employees().unwrap().is_empty());
    }
}
