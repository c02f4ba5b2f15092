/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server.
 * One configuration-driven initializer: pick the store, build the state,
 * assemble the router. This is the single boot path for both the binary
 * and the integration tests.
 */

use std::sync::Arc;

use axum::Router;

use crate::routes::create_router;
use crate::server::config::{load_database, ServerConfig};
use crate::server::state::AppState;
use crate::store::{MemStore, PgStore, SharedStore};

/// Create the application router from configuration.
///
/// Connects to Postgres when `DATABASE_URL` is configured. If the
/// connection is missing or fails, the server still comes up, backed by the
/// in-memory store, so a broken database never turns into a crash loop.
pub async fn create_app(config: &ServerConfig) -> Router {
    let store: SharedStore = match load_database(config).await {
        Some(pool) => Arc::new(PgStore::new(pool)),
        None => {
            tracing::warn!("no database available, using in-memory store");
            Arc::new(MemStore::new())
        }
    };

    create_router(AppState::new(store))
}
