//! Pagination primitives for the invoice listing.

use serde::Deserialize;

use crate::errors::AppError;

/// Rows per invoice page.
pub const PAGE_SIZE: i64 = 6;

/// Search and page query parameters for invoice listings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InvoiceQuery {
    pub query: Option<String>,
    pub page: Option<i64>,
}

impl InvoiceQuery {
    pub fn search_text(&self) -> &str {
        self.query.as_deref().unwrap_or("")
    }

    pub fn current_page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }
}

/// Row offset of a 1-based page.
pub fn page_offset(page: i64) -> Result<i64, AppError> {
    if page < 1 {
        return Err(AppError::Validation(format!(
            "page must be at least 1, got {page}"
        )));
    }
    (page - 1)
        .checked_mul(PAGE_SIZE)
        .ok_or_else(|| AppError::Validation(format!("page {page} is out of range")))
}

/// Number of pages needed to show `count` rows.
pub fn total_pages(count: i64) -> i64 {
    (count.max(0) + PAGE_SIZE - 1) / PAGE_SIZE
}
