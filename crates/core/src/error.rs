//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, caller-input failures. Nothing in the
/// domain crates logs these; surfacing them is the caller's job.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A date string was not a strict `YYYY-MM-DD` calendar date.
    #[error("malformed date: {text:?} is not a YYYY-MM-DD calendar date")]
    MalformedDate { text: String },

    /// A day count was negative or too large to represent.
    #[error("invalid quantity for {field}: {value}")]
    InvalidQuantity { field: &'static str, value: i64 },

    /// A value failed validation (e.g. blank name, unknown category id).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A value falls outside the representable range.
    #[error("out of range: {0}")]
    OutOfRange(String),
}

impl DomainError {
    pub fn malformed_date(text: impl Into<String>) -> Self {
        Self::MalformedDate { text: text.into() }
    }

    pub fn invalid_quantity(field: &'static str, value: i64) -> Self {
        Self::InvalidQuantity { field, value }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn out_of_range(msg: impl Into<String>) -> Self {
        Self::OutOfRange(msg.into())
    }
}
