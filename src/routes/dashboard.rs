//! Dashboard routes: card figures and the revenue chart.

use axum::{extract::State, Json};

use crate::errors::{ApiResponse, AppError};
use crate::models::revenue::Revenue;
use crate::services::dashboard::{self, CardSummary};
use crate::services::revenue;
use crate::AppState;

/// GET /api/v1/dashboard/cards — headline card figures.
pub async fn cards(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<CardSummary>>, AppError> {
    let summary = dashboard::get_card_summary(&state.db).await?;
    Ok(ApiResponse::success(summary))
}

/// GET /api/v1/revenue — revenue snapshots per period.
pub async fn revenue(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Revenue>>>, AppError> {
    let rows = revenue::get_revenue(&state.db).await?;
    Ok(ApiResponse::success(rows))
}
