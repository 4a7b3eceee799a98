use serde::{Deserialize, Serialize};

use pantry_core::{DomainResult, ValueObject};

use crate::category::Category;
use crate::domain::GroceryDomain;

/// Wire/storage shape of one grocery item.
///
/// This is what persistence and UI collaborators exchange. Every field is
/// primitive-typed; the date stays as text and the day counts stay signed so
/// bad input reaches [`crate::to_domain`] instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroceryRecord {
    pub name: String,
    pub category: Category,
    #[serde(default)]
    pub expiration_date: Option<String>, // YYYY-MM-DD
    #[serde(default)]
    pub last_time_bought_days: Option<i64>,
    #[serde(default)]
    pub average_buying_days: Option<i64>,
}

impl GroceryRecord {
    /// A record with only the required fields set.
    pub fn new(name: impl Into<String>, category: Category) -> Self {
        Self {
            name: name.into(),
            category,
            expiration_date: None,
            last_time_bought_days: None,
            average_buying_days: None,
        }
    }

    pub fn with_expiration_date(mut self, date: impl Into<String>) -> Self {
        self.expiration_date = Some(date.into());
        self
    }

    pub fn with_last_time_bought_days(mut self, days: i64) -> Self {
        self.last_time_bought_days = Some(days);
        self
    }

    pub fn with_average_buying_days(mut self, days: i64) -> Self {
        self.average_buying_days = Some(days);
        self
    }

    /// Validate and convert into the domain shape.
    pub fn to_domain(&self) -> DomainResult<GroceryDomain> {
        crate::convert::to_domain(self.clone())
    }
}

impl ValueObject for GroceryRecord {}
