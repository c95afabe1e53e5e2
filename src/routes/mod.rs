//! Route definitions for the dashboard API.

pub mod customers;
pub mod dashboard;
pub mod health;
pub mod invoices;

use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::AppState;

/// Build the API router. CORS is layered on by the binary.
pub fn router(state: AppState) -> Router {
    let timeout = Duration::from_secs(state.config.request_timeout_secs);

    let api_routes = Router::new()
        .route("/revenue", get(dashboard::revenue))
        .route("/dashboard/cards", get(dashboard::cards))
        .route("/invoices", get(invoices::list))
        .route("/invoices/latest", get(invoices::latest))
        .route("/invoices/pages", get(invoices::page_count))
        .route("/invoices/{id}", get(invoices::get_by_id))
        .route("/customers", get(customers::list))
        .route("/customers/table", get(customers::table));

    let routes = Router::new()
        .route("/health/live", get(health::live))
        .route("/health/ready", get(health::ready))
        .nest("/api/v1", api_routes);

    with_middleware(routes, timeout).with_state(state)
}

/// Requests still running after `timeout` are answered with 408.
fn with_middleware(routes: Router<AppState>, timeout: Duration) -> Router<AppState> {
    routes
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            timeout,
        ))
        .layer(TraceLayer::new_for_http())
}
