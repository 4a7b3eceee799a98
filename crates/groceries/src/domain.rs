use chrono::{Datelike, NaiveDate};

use pantry_core::{DomainError, DomainResult, ValueObject};

use crate::category::Category;
use crate::record::GroceryRecord;

/// Wire format for expiration dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Non-empty item name.
///
/// Blank (whitespace-only) names are rejected; the text is otherwise kept
/// verbatim so it converts back to the exact record it came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemName(String);

impl ItemName {
    pub fn new(name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for ItemName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ItemName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl ValueObject for ItemName {}

/// Calendar date (no time of day, no timezone) an item expires on.
///
/// Restricted to years that print as exactly four digits, so every value
/// formats to text that parses back to the same date.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExpirationDate(NaiveDate);

impl ExpirationDate {
    pub const MIN_YEAR: i32 = 0;
    pub const MAX_YEAR: i32 = 9999;

    pub fn new(date: NaiveDate) -> DomainResult<Self> {
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&date.year()) {
            return Err(DomainError::out_of_range(format!(
                "expiration year {} is outside {}..={}",
                date.year(),
                Self::MIN_YEAR,
                Self::MAX_YEAR
            )));
        }
        Ok(Self(date))
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> DomainResult<Self> {
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            DomainError::validation(format!("{year}-{month}-{day} is not a calendar date"))
        })?;
        Self::new(date)
    }

    /// Strict `YYYY-MM-DD` parse.
    ///
    /// The shape is checked before handing off to chrono, which on its own
    /// would also accept single-digit fields, signs and wider years.
    pub fn parse(text: &str) -> DomainResult<Self> {
        if !has_iso_date_shape(text) {
            return Err(DomainError::malformed_date(text));
        }
        let date = NaiveDate::parse_from_str(text, DATE_FORMAT)
            .map_err(|_| DomainError::malformed_date(text))?;
        Self::new(date).map_err(|_| DomainError::malformed_date(text))
    }

    pub fn format(&self) -> String {
        self.0.format(DATE_FORMAT).to_string()
    }

    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }
}

impl TryFrom<NaiveDate> for ExpirationDate {
    type Error = DomainError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        Self::new(date)
    }
}

impl From<ExpirationDate> for NaiveDate {
    fn from(value: ExpirationDate) -> Self {
        value.0
    }
}

impl core::fmt::Display for ExpirationDate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0.format(DATE_FORMAT), f)
    }
}

impl ValueObject for ExpirationDate {}

fn has_iso_date_shape(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Validated, in-memory shape of a grocery item.
///
/// Never persisted directly: obtain one with [`crate::to_domain`], compute with
/// it, and hand a [`GroceryRecord`] back to storage/UI via [`crate::to_record`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroceryDomain {
    pub name: ItemName,
    pub category: Category,
    pub expiration_date: Option<ExpirationDate>,
    pub last_time_bought_days: Option<u32>,
    pub average_buying_days: Option<u32>,
}

impl GroceryDomain {
    pub fn new(name: ItemName, category: Category) -> Self {
        Self {
            name,
            category,
            expiration_date: None,
            last_time_bought_days: None,
            average_buying_days: None,
        }
    }

    pub fn with_expiration_date(mut self, date: ExpirationDate) -> Self {
        self.expiration_date = Some(date);
        self
    }

    pub fn with_last_time_bought_days(mut self, days: u32) -> Self {
        self.last_time_bought_days = Some(days);
        self
    }

    pub fn with_average_buying_days(mut self, days: u32) -> Self {
        self.average_buying_days = Some(days);
        self
    }

    pub fn to_record(&self) -> GroceryRecord {
        crate::convert::to_record(self)
    }
}

impl ValueObject for GroceryDomain {}
