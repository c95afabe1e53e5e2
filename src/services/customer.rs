//! Customer reads: the selection list and the aggregated customers table.

use sqlx::PgPool;

use crate::errors::{AppError, FetchTarget};
use crate::models::customer::{CustomerField, CustomerTableRecord, CustomerTableRow};
use crate::services::currency::format_currency;
use crate::services::search::contains_pattern;

/// All customers as `{id, name}`, sorted by name.
pub async fn get_customers(pool: &PgPool) -> Result<Vec<CustomerField>, AppError> {
    sqlx::query_as::<_, CustomerField>("SELECT id, name FROM customers ORDER BY name ASC")
        .fetch_all(pool)
        .await
        .map_err(|e| AppError::fetch(FetchTarget::Customers, e))
}

/// Customers whose name or email contains `query`, with invoice totals.
///
/// Customers without invoices are listed with zero totals.
pub async fn get_filtered_customers(
    pool: &PgPool,
    query: &str,
) -> Result<Vec<CustomerTableRow>, AppError> {
    let rows = sqlx::query_as::<_, CustomerTableRecord>(
        r#"
        SELECT
            c.id,
            c.name,
            c.email,
            c.image_url,
            COUNT(i.id) AS total_invoices,
            COALESCE(SUM(CASE WHEN i.status = 'pending' THEN i.amount ELSE 0 END), 0) AS total_pending,
            COALESCE(SUM(CASE WHEN i.status = 'paid'    THEN i.amount ELSE 0 END), 0) AS total_paid
        FROM customers c
        LEFT JOIN invoices i ON i.customer_id = c.id
        WHERE c.name ILIKE $1 OR c.email ILIKE $1
        GROUP BY c.id, c.name, c.email, c.image_url
        ORDER BY c.name ASC, c.id ASC
        "#,
    )
    .bind(contains_pattern(query))
    .fetch_all(pool)
    .await
    .map_err(|e| AppError::fetch(FetchTarget::CustomerTable, e))?;

    Ok(rows
        .into_iter()
        .map(|row| CustomerTableRow {
            id: row.id,
            name: row.name,
            email: row.email,
            image_url: row.image_url,
            total_invoices: row.total_invoices,
            total_pending: format_currency(row.total_pending),
            total_paid: format_currency(row.total_paid),
        })
        .collect())
}
