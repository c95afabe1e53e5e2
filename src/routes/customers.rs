//! Customer routes: selection list and customers table.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::errors::{ApiResponse, AppError};
use crate::models::customer::{CustomerField, CustomerTableRow};
use crate::services::customer as customer_service;
use crate::AppState;

/// Search text for the customers table.
#[derive(Debug, Default, Deserialize)]
pub struct CustomerQuery {
    pub query: Option<String>,
}

/// GET /api/v1/customers — all customers as `{id, name}`.
pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<CustomerField>>>, AppError> {
    let customers = customer_service::get_customers(&state.db).await?;
    Ok(ApiResponse::success(customers))
}

/// GET /api/v1/customers/table — customers matching `query` with totals.
pub async fn table(
    State(state): State<AppState>,
    Query(params): Query<CustomerQuery>,
) -> Result<Json<ApiResponse<Vec<CustomerTableRow>>>, AppError> {
    let query = params.query.as_deref().unwrap_or("");
    let rows = customer_service::get_filtered_customers(&state.db, query).await?;
    Ok(ApiResponse::success(rows))
}
