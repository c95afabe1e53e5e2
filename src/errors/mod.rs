//! Unified error handling with consistent API response envelope.

use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Error detail in the API response envelope.
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

/// Consistent JSON envelope for all API responses.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: Option<T>,
    pub error: Option<ApiError>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Wrap a successful result in the envelope.
    pub fn success(data: T) -> Json<Self> {
        Json(Self {
            data: Some(data),
            error: None,
        })
    }
}

/// The read operation a store failure belongs to.
///
/// Its display text is the only part of a store failure callers ever see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchTarget {
    Revenue,
    LatestInvoices,
    Summary,
    Invoices,
    InvoiceCount,
    Invoice,
    Customers,
    CustomerTable,
}

impl FetchTarget {
    pub fn message(self) -> &'static str {
        match self {
            Self::Revenue => "Failed to fetch revenue data.",
            Self::LatestInvoices => "Failed to fetch the latest invoices.",
            Self::Summary => "Failed to fetch summary data.",
            Self::Invoices => "Failed to fetch invoices.",
            Self::InvoiceCount => "Failed to fetch invoice count.",
            Self::Invoice => "Failed to fetch invoice.",
            Self::Customers => "Failed to fetch customers.",
            Self::CustomerTable => "Failed to fetch customer table.",
        }
    }
}

impl fmt::Display for FetchTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Application error type mapping to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// A data-store round trip failed. The underlying error is kept as the
    /// source for diagnostics and left out of the display text.
    #[error("{target}")]
    Fetch {
        target: FetchTarget,
        #[source]
        source: sqlx::Error,
    },
}

impl AppError {
    /// Log a store failure with its cause and wrap it for `target`.
    pub fn fetch(target: FetchTarget, source: sqlx::Error) -> Self {
        tracing::error!(error = %source, operation = ?target, "Database error");
        Self::Fetch { target, source }
    }

    /// The operation a store failure belongs to, if this is one.
    pub fn fetch_target(&self) -> Option<FetchTarget> {
        match self {
            Self::Fetch { target, .. } => Some(*target),
            _ => None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            AppError::Fetch { target, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "FETCH_FAILED",
                target.message().to_string(),
            ),
        };

        let body = ApiResponse::<()> {
            data: None,
            error: Some(ApiError {
                code: code.to_string(),
                message,
            }),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn api_response_success() {
        let response = ApiResponse::success("hello");
        let json = serde_json::to_value(&response.0).unwrap();
        assert_eq!(json["data"], "hello");
        assert!(json["error"].is_null());
    }

    #[test]
    fn not_found_renders_error_envelope() {
        let err = AppError::NotFound("Invoice not found".to_string());
        assert!(err.fetch_target().is_none());

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes =
            tokio_test::block_on(axum::body::to_bytes(response.into_body(), usize::MAX)).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(json["data"].is_null());
        assert_eq!(json["error"]["code"], "NOT_FOUND");
        assert_eq!(json["error"]["message"], "Invoice not found");
    }

    #[test]
    fn fetch_error_hides_store_detail() {
        let err = AppError::fetch(FetchTarget::Invoices, sqlx::Error::PoolTimedOut);
        assert_eq!(err.to_string(), "Failed to fetch invoices.");
        assert_eq!(err.fetch_target(), Some(FetchTarget::Invoices));
    }

    #[test]
    fn fetch_error_keeps_source() {
        let err = AppError::fetch(FetchTarget::Summary, sqlx::Error::RowNotFound);
        let source = err.source().expect("store error kept as source");
        assert!(source.downcast_ref::<sqlx::Error>().is_some());
    }

    #[test]
    fn fetch_error_response_is_generic_500() {
        let err = AppError::fetch(FetchTarget::CustomerTable, sqlx::Error::PoolClosed);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes =
            tokio_test::block_on(axum::body::to_bytes(response.into_body(), usize::MAX)).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"]["code"], "FETCH_FAILED");
        assert_eq!(json["error"]["message"], "Failed to fetch customer table.");
    }

    #[test]
    fn validation_error_maps_to_400() {
        let err = AppError::Validation("page must be at least 1".to_string());
        assert_eq!(err.to_string(), "Validation error: page must be at least 1");
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
