use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;
use thiserror::Error;

use crate::config::AppConfig;

pub mod clientes;
pub mod models;
pub mod produtos;

/// Errors raised by the data access layer. Driver failures are wrapped
/// unchanged; classification into HTTP semantics happens in `error.rs`.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Missing configuration: {0}")]
    ConfigMissing(&'static str),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Build the process-wide connection pool from `DATABASE_URL`.
///
/// The pool connects lazily: the server can start before the database is
/// reachable, and queries fail individually until it is.
pub fn connect(config: &AppConfig) -> Result<PgPool, StorageError> {
    let url = std::env::var("DATABASE_URL").map_err(|_| StorageError::ConfigMissing("DATABASE_URL"))?;

    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .acquire_timeout(Duration::from_secs(config.database.acquire_timeout_secs))
        .connect_lazy(&url)?;

    Ok(pool)
}

/// Pings the pool to ensure connectivity
pub async fn health_check(pool: &PgPool) -> Result<(), StorageError> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
