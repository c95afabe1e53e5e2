//! Invoice routes: latest card, searchable listing, page count and lookup.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;

use crate::errors::{ApiResponse, AppError};
use crate::models::invoice::{InvoiceForm, InvoiceWithCustomer, LatestInvoice};
use crate::models::pagination::InvoiceQuery;
use crate::services::invoice as invoice_service;
use crate::AppState;

/// GET /api/v1/invoices — one page of invoices matching `query`.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<InvoiceQuery>,
) -> Result<Json<ApiResponse<Vec<InvoiceWithCustomer>>>, AppError> {
    let invoices = invoice_service::get_filtered_invoices(
        &state.db,
        params.search_text(),
        params.current_page(),
    )
    .await?;
    Ok(ApiResponse::success(invoices))
}

/// GET /api/v1/invoices/latest — the five most recent invoices.
pub async fn latest(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<LatestInvoice>>>, AppError> {
    let invoices = invoice_service::get_latest_invoices(&state.db).await?;
    Ok(ApiResponse::success(invoices))
}

/// GET /api/v1/invoices/pages — page count for `query`.
pub async fn page_count(
    State(state): State<AppState>,
    Query(params): Query<InvoiceQuery>,
) -> Result<Json<ApiResponse<i64>>, AppError> {
    let pages = invoice_service::get_invoices_page_count(&state.db, params.search_text()).await?;
    Ok(ApiResponse::success(pages))
}

/// GET /api/v1/invoices/{id} — invoice for the edit form.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<InvoiceForm>>, AppError> {
    let invoice = invoice_service::get_invoice_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Invoice '{id}' not found")))?;
    Ok(ApiResponse::success(invoice))
}
