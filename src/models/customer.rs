use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// Customer identity fields embedded in invoice listings.
#[derive(Debug, Clone, Serialize, FromRow, PartialEq, Eq)]
pub struct CustomerIdentity {
    pub name: String,
    pub email: String,
    pub image_url: String,
}

/// Customer projection for selection widgets.
#[derive(Debug, Clone, Serialize, FromRow, PartialEq, Eq)]
pub struct CustomerField {
    pub id: Uuid,
    pub name: String,
}

/// Customer with invoice totals, as aggregated by the store (cents).
#[derive(Debug, FromRow)]
pub(crate) struct CustomerTableRecord {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub total_invoices: i64,
    pub total_pending: i64,
    pub total_paid: i64,
}

/// Row of the customers table with formatted totals.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CustomerTableRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub total_invoices: i64,
    pub total_pending: String,
    pub total_paid: String,
}
