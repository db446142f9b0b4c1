//! Shared application state handed to every request handler.

pub mod stopwatch;

use std::sync::Arc;

use crate::dao::sqlite::SqliteStore;

/// Cheaply clonable handle to the application state.
pub type SharedState = Arc<AppState>;

/// Central application state holding the database handle.
pub struct AppState {
    store: SqliteStore,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    pub fn new(store: SqliteStore) -> SharedState {
        Arc::new(Self { store })
    }

    /// Handle to the SQLite store.
    pub fn store(&self) -> &SqliteStore {
        &self.store
    }
}
