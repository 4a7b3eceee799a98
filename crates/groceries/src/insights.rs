//! Freshness and restock computations over domain values.

use chrono::NaiveDate;

use pantry_core::DomainError;

use crate::category::Category;
use crate::convert::to_domain;
use crate::domain::{GroceryDomain, ItemName};
use crate::record::GroceryRecord;

/// Where an item stands relative to its expiration date.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ExpiryStatus {
    /// The item has no expiration date.
    NoDate,
    Fresh { days_left: i64 },
    /// Expires within the window (today included).
    ExpiringSoon { days_left: i64 },
    Expired { days_ago: i64 },
}

impl GroceryDomain {
    /// Signed days from `today` to the expiration date (negative once expired).
    pub fn days_until_expiration(&self, today: NaiveDate) -> Option<i64> {
        self.expiration_date
            .map(|date| date.as_naive_date().signed_duration_since(today).num_days())
    }

    pub fn expiry_status(&self, today: NaiveDate, window_days: u32) -> ExpiryStatus {
        match self.days_until_expiration(today) {
            None => ExpiryStatus::NoDate,
            Some(days) if days < 0 => ExpiryStatus::Expired { days_ago: -days },
            Some(days) if days <= i64::from(window_days) => {
                ExpiryStatus::ExpiringSoon { days_left: days }
            }
            Some(days) => ExpiryStatus::Fresh { days_left: days },
        }
    }

    /// Days until the usual buying interval has elapsed (negative when overdue).
    ///
    /// `None` unless both day counts are known.
    pub fn days_until_restock(&self) -> Option<i64> {
        match (self.last_time_bought_days, self.average_buying_days) {
            (Some(last), Some(average)) => Some(i64::from(average) - i64::from(last)),
            _ => None,
        }
    }

    pub fn is_due_for_restock(&self) -> bool {
        self.days_until_restock().is_some_and(|days| days <= 0)
    }
}

/// A record that could not be converted, by its position in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionFailure {
    pub index: usize,
    pub name: String,
    pub error: DomainError,
}

/// A record rejected before conversion, e.g. because its wire form did not
/// decode. Carries whatever name could be recovered (possibly empty).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRecord {
    pub name: String,
    pub error: DomainError,
}

/// One flagged item in a summary. `days` is relative to the list it is in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemAlert {
    pub name: ItemName,
    pub category: Category,
    pub days: i64,
}

impl ItemAlert {
    fn new(item: &GroceryDomain, days: i64) -> Self {
        Self {
            name: item.name.clone(),
            category: item.category,
            days,
        }
    }
}

/// Result of checking a batch of records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventorySummary {
    /// Number of records that converted.
    pub valid: usize,
    pub failures: Vec<ConversionFailure>,
    /// `days` = days since expiry, longest-expired first.
    pub expired: Vec<ItemAlert>,
    /// `days` = days left, soonest first.
    pub expiring_soon: Vec<ItemAlert>,
    /// `days` = days overdue, most overdue first.
    pub restock_due: Vec<ItemAlert>,
}

impl InventorySummary {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Convert a batch of records and flag items that need attention.
///
/// A record that fails conversion is collected into `failures` and does not
/// stop the rest of the batch.
pub fn summarize<I>(records: I, today: NaiveDate, window_days: u32) -> InventorySummary
where
    I: IntoIterator<Item = GroceryRecord>,
{
    summarize_entries(records.into_iter().map(Ok), today, window_days)
}

/// Like [`summarize`], for input where some entries were already rejected
/// upstream. Rejections keep their position and land in `failures`.
pub fn summarize_entries<I>(entries: I, today: NaiveDate, window_days: u32) -> InventorySummary
where
    I: IntoIterator<Item = Result<GroceryRecord, RejectedRecord>>,
{
    let mut summary = InventorySummary::default();

    for (index, entry) in entries.into_iter().enumerate() {
        let record = match entry {
            Ok(record) => record,
            Err(RejectedRecord { name, error }) => {
                summary.failures.push(ConversionFailure { index, name, error });
                continue;
            }
        };
        let name = record.name.clone();
        let item = match to_domain(record) {
            Ok(item) => item,
            Err(error) => {
                summary.failures.push(ConversionFailure { index, name, error });
                continue;
            }
        };
        summary.valid += 1;

        match item.expiry_status(today, window_days) {
            ExpiryStatus::Expired { days_ago } => {
                summary.expired.push(ItemAlert::new(&item, days_ago))
            }
            ExpiryStatus::ExpiringSoon { days_left } => {
                summary.expiring_soon.push(ItemAlert::new(&item, days_left))
            }
            ExpiryStatus::Fresh { .. } | ExpiryStatus::NoDate => {}
        }

        if let Some(days) = item.days_until_restock().filter(|days| *days <= 0) {
            summary.restock_due.push(ItemAlert::new(&item, -days));
        }
    }

    summary.expired.sort_by(|a, b| b.days.cmp(&a.days));
    summary.expiring_soon.sort_by_key(|alert| alert.days);
    summary.restock_due.sort_by(|a, b| b.days.cmp(&a.days));
    summary
}
