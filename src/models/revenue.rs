use serde::Serialize;
use sqlx::FromRow;

/// Total revenue booked for one period (one row per period label).
#[derive(Debug, Clone, Serialize, FromRow, PartialEq, Eq)]
pub struct Revenue {
    pub period: String,
    pub amount: i32,
}
