//! Groceries domain module.
//!
//! This crate holds the grocery item model: the closed category taxonomy, the
//! flat wire/storage record, the validated domain value, and the conversion
//! between the two. Everything here is deterministic domain logic (no IO, no
//! UI, no storage).

pub mod category;
pub mod convert;
pub mod domain;
pub mod insights;
pub mod record;

pub use category::Category;
pub use convert::{to_domain, to_record};
pub use domain::{DATE_FORMAT, ExpirationDate, GroceryDomain, ItemName};
pub use insights::{
    ConversionFailure, ExpiryStatus, InventorySummary, ItemAlert, RejectedRecord, summarize,
    summarize_entries,
};
pub use record::GroceryRecord;
