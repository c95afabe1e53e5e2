//! Invoice rows and the display shapes built from them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::customer::CustomerIdentity;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq)]
#[sqlx(type_name = "invoice_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Pending,
    Paid,
}

/// Invoice with the identity of the customer it is billed to.
///
/// `amount` stays in cents.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct InvoiceWithCustomer {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub amount: i32,
    pub status: InvoiceStatus,
    pub date: NaiveDate,
    #[sqlx(flatten)]
    pub customer: CustomerIdentity,
}

/// Row behind the "latest invoices" card.
#[derive(Debug, FromRow)]
pub(crate) struct LatestInvoiceRecord {
    pub id: Uuid,
    pub amount: i32,
    pub name: String,
    pub email: String,
    pub image_url: String,
}

/// Latest invoice with its amount formatted for display.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LatestInvoice {
    pub id: Uuid,
    pub amount: String,
    pub name: String,
    pub email: String,
    pub image_url: String,
}

/// Row behind the invoice edit form.
#[derive(Debug, FromRow)]
pub(crate) struct InvoiceFormRecord {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub amount: i32,
    pub status: InvoiceStatus,
}

/// Invoice as consumed by the edit form, with `amount` in dollars.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct InvoiceForm {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub amount: f64,
    pub status: InvoiceStatus,
}

impl From<InvoiceFormRecord> for InvoiceForm {
    fn from(record: InvoiceFormRecord) -> Self {
        Self {
            id: record.id,
            customer_id: record.customer_id,
            amount: f64::from(record.amount) / 100.0,
            status: record.status,
        }
    }
}
