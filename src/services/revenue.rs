//! Revenue snapshots for the revenue chart.

use sqlx::PgPool;

use crate::errors::{AppError, FetchTarget};
use crate::models::revenue::Revenue;

/// Every revenue snapshot, in storage order.
pub async fn get_revenue(pool: &PgPool) -> Result<Vec<Revenue>, AppError> {
    let rows = sqlx::query_as::<_, Revenue>("SELECT period, amount FROM revenue")
        .fetch_all(pool)
        .await
        .map_err(|e| AppError::fetch(FetchTarget::Revenue, e))?;

    tracing::debug!(periods = rows.len(), "Fetched revenue snapshots");
    Ok(rows)
}
