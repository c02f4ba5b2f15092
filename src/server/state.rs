/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the `FromRef` trait for Axum state extraction.
 */

use axum::extract::FromRef;

use crate::store::SharedStore;

/// State shared by all handlers.
///
/// Holds the process-wide store handle. Handlers extract the store directly
/// via `State<SharedStore>` thanks to the `FromRef` impl below, so they stay
/// decoupled from the rest of the state.
#[derive(Clone)]
pub struct AppState {
    /// Document store used by every handler.
    pub store: SharedStore,
}

impl AppState {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }
}

impl FromRef<AppState> for SharedStore {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.store.clone()
    }
}
