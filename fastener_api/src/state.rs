//! Shared handler state.

use std::sync::Arc;

use fastener_core::ReferenceStore;

/// State cloned into every handler.
///
/// The store is loaded before the server starts and never mutated, so it is
/// shared without locking.
#[derive(Clone)]
pub struct AppState {
    store: Arc<ReferenceStore>,
}

impl AppState {
    pub fn new(store: ReferenceStore) -> Self {
        AppState {
            store: Arc::new(store),
        }
    }

    pub fn store(&self) -> &ReferenceStore {
        &self.store
    }
}
