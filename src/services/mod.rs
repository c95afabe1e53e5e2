//! Read operations behind the dashboard pages.

pub mod currency;
pub mod customer;
pub mod dashboard;
pub mod invoice;
pub mod revenue;
pub mod search;
