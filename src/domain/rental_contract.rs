use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::types::{RentalContractId, TypeConstraintError};

/// Rental contract attached to exactly one vehicle.
///
/// No ordering between `start_date` and `end_date` is enforced.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RentalContract {
    pub id: RentalContractId,
    pub customer_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl RentalContract {
    /// Builds a contract from raw storage values, validating the identifier.
    pub fn try_new(
        id: i32,
        customer_name: String,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            id: RentalContractId::new(id)?,
            customer_name,
            start_date,
            end_date,
        })
    }
}

/// Contract data supplied when creating a vehicle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewRentalContract {
    pub customer_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl NewRentalContract {
    #[must_use]
    pub fn new(customer_name: String, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            customer_name,
            start_date,
            end_date,
        }
    }
}
