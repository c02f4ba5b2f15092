/**
 * Server Configuration
 *
 * This module handles loading of server configuration and the optional
 * PostgreSQL database connection.
 *
 * Configuration comes from environment variables with development
 * defaults. Database connection failures are logged and never gate
 * startup: the server comes up regardless and falls back to the in-memory
 * store.
 */

use sqlx::PgPool;

/// Configuration read from the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listening port (`PORT`, default 3000).
    pub port: u16,
    /// Postgres connection string (`DATABASE_URL`), if configured.
    pub database_url: Option<String>,
}

impl ServerConfig {
    /// Read configuration from environment variables.
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000);
        let database_url = std::env::var("DATABASE_URL").ok();

        Self { port, database_url }
    }
}

/// Connect to Postgres and run migrations.
///
/// Returns `None` if no `DATABASE_URL` is configured or the connection
/// fails; either way the caller continues without the database. Migration
/// failures are logged and tolerated as well, since the schema may already
/// be in place.
pub async fn load_database(config: &ServerConfig) -> Option<PgPool> {
    let database_url = match &config.database_url {
        Some(url) => url,
        None => {
            tracing::warn!("DATABASE_URL not set, database disabled");
            return None;
        }
    };

    tracing::info!("connecting to database");
    let pool = match PgPool::connect(database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("failed to connect to database: {e}");
            return None;
        }
    };
    tracing::info!("database connected");

    if let Err(e) = sqlx::migrate!().run(&pool).await {
        tracing::error!("failed to run migrations: {e}");
        tracing::warn!("continuing, schema may be stale");
    }

    Some(pool)
}
