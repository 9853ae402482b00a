//! Contract filter composed from listing query parameters.
//!
//! Every condition applies to the vehicle's rental contract and conditions are
//! AND-combined, so a vehicle without a contract never matches a non-empty
//! filter.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::rental_contract::RentalContract;
use crate::domain::types::parse_calendar_date;

/// How the customer name substring is compared.
///
/// `CaseInsensitive` folds ASCII letters only, the same as SQLite `LIKE`;
/// other characters must match exactly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameMatch {
    #[default]
    CaseSensitive,
    CaseInsensitive,
}

impl NameMatch {
    pub fn from_case_sensitive(case_sensitive: bool) -> Self {
        if case_sensitive {
            NameMatch::CaseSensitive
        } else {
            NameMatch::CaseInsensitive
        }
    }
}

/// Errors raised while turning raw parameters into a [`ContractFilter`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("startDate is not a valid date: {0}")]
    InvalidStartDate(String),

    #[error("endDate is not a valid date: {0}")]
    InvalidEndDate(String),
}

/// Substring condition on the contract's customer name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CustomerNameFilter {
    pub needle: String,
    pub mode: NameMatch,
}

impl CustomerNameFilter {
    pub fn matches(&self, customer_name: &str) -> bool {
        match self.mode {
            NameMatch::CaseSensitive => customer_name.contains(&self.needle),
            NameMatch::CaseInsensitive => customer_name
                .to_ascii_lowercase()
                .contains(&self.needle.to_ascii_lowercase()),
        }
    }
}

/// AND-combined conditions on a vehicle's rental contract.
///
/// Never empty: [`ContractFilter::build`] returns `None` instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContractFilter {
    pub customer_name: Option<CustomerNameFilter>,
    /// Inclusive lower bound on the contract start date.
    pub start_date_from: Option<NaiveDate>,
    /// Inclusive upper bound on the contract end date.
    pub end_date_until: Option<NaiveDate>,
}

/// Treats absent and empty parameters alike.
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

impl ContractFilter {
    /// Composes a filter from raw listing parameters.
    ///
    /// Returns `Ok(None)` when no condition is present, so callers attach no
    /// contract filter to the query at all.
    pub fn build(
        customer_name: Option<&str>,
        start_date: Option<&str>,
        end_date: Option<&str>,
        mode: NameMatch,
    ) -> Result<Option<Self>, FilterError> {
        let customer_name = customer_name
            .filter(|name| !name.is_empty())
            .map(|name| CustomerNameFilter {
                needle: name.to_string(),
                mode,
            });

        let start_date_from = present(start_date)
            .map(|raw| {
                parse_calendar_date(raw).map_err(|_| FilterError::InvalidStartDate(raw.to_string()))
            })
            .transpose()?;

        let end_date_until = present(end_date)
            .map(|raw| {
                parse_calendar_date(raw).map_err(|_| FilterError::InvalidEndDate(raw.to_string()))
            })
            .transpose()?;

        if customer_name.is_none() && start_date_from.is_none() && end_date_until.is_none() {
            return Ok(None);
        }

        Ok(Some(Self {
            customer_name,
            start_date_from,
            end_date_until,
        }))
    }

    /// Evaluates the filter against a vehicle's contract.
    pub fn matches(&self, contract: Option<&RentalContract>) -> bool {
        let Some(contract) = contract else {
            return false;
        };

        self.customer_name
            .as_ref()
            .is_none_or(|filter| filter.matches(&contract.customer_name))
            && self
                .start_date_from
                .is_none_or(|from| contract.start_date >= from)
            && self
                .end_date_until
                .is_none_or(|until| contract.end_date <= until)
    }
}
