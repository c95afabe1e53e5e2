pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod routes;
pub mod services;

use sqlx::PgPool;

/// Shared application state passed to all Axum handlers.
///
/// Holds the single process-wide connection pool; handlers borrow it and
/// never open connections of their own.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: config::AppConfig,
}
