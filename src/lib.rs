pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;

use sqlx::PgPool;

/// Shared application state handed to every handler through axum.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
}
