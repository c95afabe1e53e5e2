//! Invoice reads: latest invoices, filtered listing, page count and the
//! edit-form lookup.

use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::{AppError, FetchTarget};
use crate::models::invoice::{
    InvoiceForm, InvoiceFormRecord, InvoiceWithCustomer, LatestInvoice, LatestInvoiceRecord,
};
use crate::models::pagination::{page_offset, total_pages, PAGE_SIZE};
use crate::services::currency::format_currency;
use crate::services::search::InvoiceSearch;

/// Number of invoices on the "latest invoices" card.
const LATEST_LIMIT: i64 = 5;

/// The five most recently issued invoices with their customer.
pub async fn get_latest_invoices(pool: &PgPool) -> Result<Vec<LatestInvoice>, AppError> {
    let rows = sqlx::query_as::<_, LatestInvoiceRecord>(
        r#"
        SELECT i.id, i.amount, c.name, c.email, c.image_url
        FROM invoices i
        JOIN customers c ON c.id = i.customer_id
        ORDER BY i.date DESC, i.id ASC
        LIMIT $1
        "#,
    )
    .bind(LATEST_LIMIT)
    .fetch_all(pool)
    .await
    .map_err(|e| AppError::fetch(FetchTarget::LatestInvoices, e))?;

    Ok(rows
        .into_iter()
        .map(|row| LatestInvoice {
            id: row.id,
            amount: format_currency(i64::from(row.amount)),
            name: row.name,
            email: row.email,
            image_url: row.image_url,
        })
        .collect())
}

/// One page of invoices matching `query`, newest first.
///
/// When nothing matches by name, email, amount or status and `query` is a
/// calendar date, invoices issued on that date are listed instead.
pub async fn get_filtered_invoices(
    pool: &PgPool,
    query: &str,
    page: i64,
) -> Result<Vec<InvoiceWithCustomer>, AppError> {
    let offset = page_offset(page)?;
    fetch_filtered(pool, query, offset)
        .await
        .map_err(|e| AppError::fetch(FetchTarget::Invoices, e))
}

/// Number of pages [`get_filtered_invoices`] yields for `query`.
pub async fn get_invoices_page_count(pool: &PgPool, query: &str) -> Result<i64, AppError> {
    let count = count_filtered(pool, query)
        .await
        .map_err(|e| AppError::fetch(FetchTarget::InvoiceCount, e))?;
    Ok(total_pages(count))
}

/// Invoice for the edit form, or `None` when no invoice has this id.
pub async fn get_invoice_by_id(pool: &PgPool, id: Uuid) -> Result<Option<InvoiceForm>, AppError> {
    let record = sqlx::query_as::<_, InvoiceFormRecord>(
        "SELECT id, customer_id, amount, status FROM invoices WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(|e| AppError::fetch(FetchTarget::Invoice, e))?;

    Ok(record.map(InvoiceForm::from))
}

async fn fetch_filtered(
    pool: &PgPool,
    query: &str,
    offset: i64,
) -> Result<Vec<InvoiceWithCustomer>, sqlx::Error> {
    let primary = InvoiceSearch::primary(query);
    let rows = fetch_page(pool, &primary, offset).await?;
    if !rows.is_empty() {
        return Ok(rows);
    }

    let Some(fallback) = InvoiceSearch::date_fallback(query) else {
        return Ok(rows);
    };

    // Past page 1 an empty page may just be the end of a non-empty match set.
    if offset > 0 && count_matches(pool, &primary).await? > 0 {
        return Ok(rows);
    }

    tracing::debug!(query, offset, "No primary invoice matches, retrying with date equality");
    fetch_page(pool, &fallback, offset).await
}

async fn count_filtered(pool: &PgPool, query: &str) -> Result<i64, sqlx::Error> {
    let count = count_matches(pool, &InvoiceSearch::primary(query)).await?;
    if count > 0 {
        return Ok(count);
    }

    match InvoiceSearch::date_fallback(query) {
        Some(fallback) => {
            tracing::debug!(query, "No primary invoice matches, counting by date equality");
            count_matches(pool, &fallback).await
        }
        None => Ok(count),
    }
}

async fn fetch_page(
    pool: &PgPool,
    search: &InvoiceSearch,
    offset: i64,
) -> Result<Vec<InvoiceWithCustomer>, sqlx::Error> {
    let sql = format!(
        "SELECT i.id, i.customer_id, i.amount, i.status, i.date, c.name, c.email, c.image_url \
         FROM invoices i JOIN customers c ON c.id = i.customer_id \
         {} ORDER BY i.date DESC, i.id ASC LIMIT {PAGE_SIZE} OFFSET {offset}",
        search.where_clause()
    );

    search
        .bind_rows(sqlx::query_as::<_, InvoiceWithCustomer>(&sql))
        .fetch_all(pool)
        .await
}

async fn count_matches(pool: &PgPool, search: &InvoiceSearch) -> Result<i64, sqlx::Error> {
    let sql = format!(
        "SELECT COUNT(*) FROM invoices i JOIN customers c ON c.id = i.customer_id {}",
        search.where_clause()
    );

    search
        .bind_scalar(sqlx::query_scalar::<_, i64>(&sql))
        .fetch_one(pool)
        .await
}
