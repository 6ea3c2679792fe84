//! PostgreSQL pool for the document store.

use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

use cardoctor_core::config::PostgresConfig;
use cardoctor_core::error::{AppError, ErrorKind};

/// Pool shared by every `PgCollection`.
#[derive(Debug, Clone)]
pub struct DatabasePool {
    pool: PgPool,
}

impl DatabasePool {
    /// Opens the pool described by `config`.
    pub async fn connect(config: &PostgresConfig) -> Result<Self, AppError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .idle_timeout(Duration::from_secs(config.idle_timeout_seconds))
            .connect(&config.url)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Document store is unreachable", e)
            })?;

        info!(
            max_connections = config.max_connections,
            min_connections = config.min_connections,
            "Document store pool ready"
        );
        Ok(Self { pool })
    }

    /// The underlying sqlx pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
