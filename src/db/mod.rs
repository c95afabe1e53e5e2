//! Database connection pool.
//!
//! The pool is created once at process start and shared through
//! [`crate::AppState`]; callers drain it with [`sqlx::PgPool::close`] on
//! shutdown.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Create a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(3))
        .connect(database_url)
        .await
}
