//! Database models and display DTOs for customers, invoices and revenue.

pub mod customer;
pub mod invoice;
pub mod pagination;
pub mod revenue;
