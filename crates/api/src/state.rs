//! Application state shared across handlers.

use std::sync::Arc;

use crate::store::DocumentStore;

/// Application state shared across all handlers.
///
/// Cheaply cloneable; carries the document store handle chosen at startup.
/// Handlers only ever see the [`DocumentStore`] trait, which is what lets
/// tests run the full pipeline against an in-memory store.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn DocumentStore>,
}

impl AppState {
    /// Create application state around an injected store.
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Get a reference to the document store.
    #[must_use]
    pub fn store(&self) -> &dyn DocumentStore {
        self.store.as_ref()
    }
}
