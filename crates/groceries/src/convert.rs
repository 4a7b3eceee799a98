//! Conversion between the wire record and the validated domain value.
//!
//! Both directions are pure. `to_domain` is the only place wire input is
//! validated; `to_record` cannot fail because the domain types already carry
//! their invariants.

use pantry_core::{DomainError, DomainResult};

use crate::domain::{ExpirationDate, GroceryDomain, ItemName};
use crate::record::GroceryRecord;

/// Validate a record and lift it into the domain shape.
///
/// # Errors
///
/// - [`DomainError::Validation`] if `name` is blank.
/// - [`DomainError::MalformedDate`] if `expirationDate` is present but is not a
///   strict `YYYY-MM-DD` calendar date. Absent dates are never parsed.
/// - [`DomainError::InvalidQuantity`] if a day count is negative or does not
///   fit in a `u32`.
pub fn to_domain(record: GroceryRecord) -> DomainResult<GroceryDomain> {
    let GroceryRecord {
        name,
        category,
        expiration_date,
        last_time_bought_days,
        average_buying_days,
    } = record;

    Ok(GroceryDomain {
        name: ItemName::new(name)?,
        category,
        expiration_date: expiration_date
            .as_deref()
            .map(ExpirationDate::parse)
            .transpose()?,
        last_time_bought_days: day_count("lastTimeBoughtDays", last_time_bought_days)?,
        average_buying_days: day_count("averageBuyingDays", average_buying_days)?,
    })
}

/// Lower a domain value back to its wire record.
pub fn to_record(domain: &GroceryDomain) -> GroceryRecord {
    GroceryRecord {
        name: domain.name.as_str().to_owned(),
        category: domain.category,
        expiration_date: domain.expiration_date.map(|date| date.format()),
        last_time_bought_days: domain.last_time_bought_days.map(i64::from),
        average_buying_days: domain.average_buying_days.map(i64::from),
    }
}

fn day_count(field: &'static str, value: Option<i64>) -> DomainResult<Option<u32>> {
    value
        .map(|days| u32::try_from(days).map_err(|_| DomainError::invalid_quantity(field, days)))
        .transpose()
}

impl TryFrom<GroceryRecord> for GroceryDomain {
    type Error = DomainError;

    fn try_from(record: GroceryRecord) -> Result<Self, Self::Error> {
        to_domain(record)
    }
}

impl From<GroceryDomain> for GroceryRecord {
    fn from(domain: GroceryDomain) -> Self {
        to_record(&domain)
    }
}
