//! Application state - Dependency injection container.
//!
//! The entity store is owned here and injected into the router explicitly;
//! nothing in the application reaches for ambient global state.

use crate::store::{EntityStore, SharedStore};

/// Application state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    /// The single entity store instance behind its lock
    pub store: SharedStore,
}

impl AppState {
    /// Create application state around an existing store handle
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Create application state with an empty store
    pub fn empty() -> Self {
        Self::new(EntityStore::shared())
    }

    /// Create application state with the seed fixture loaded
    pub fn seeded() -> Self {
        Self::new(EntityStore::seeded())
    }
}
