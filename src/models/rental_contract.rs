//! Diesel models for rental contracts.

use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::{
    rental_contract::{
        NewRentalContract as DomainNewRentalContract, RentalContract as DomainRentalContract,
    },
    types::TypeConstraintError,
};
use crate::models::vehicle::Vehicle;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(belongs_to(Vehicle, foreign_key = vehicle_id))]
#[diesel(table_name = crate::schema::rental_contracts)]
pub struct RentalContract {
    pub id: i32,
    pub vehicle_id: i32,
    pub customer_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::rental_contracts)]
pub struct NewRentalContract<'a> {
    pub vehicle_id: i32,
    pub customer_name: &'a str,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl<'a> NewRentalContract<'a> {
    /// Binds contract data to the vehicle row it belongs to.
    pub fn for_vehicle(vehicle_id: i32, contract: &'a DomainNewRentalContract) -> Self {
        Self {
            vehicle_id,
            customer_name: contract.customer_name.as_str(),
            start_date: contract.start_date,
            end_date: contract.end_date,
        }
    }
}

impl TryFrom<RentalContract> for DomainRentalContract {
    type Error = TypeConstraintError;

    fn try_from(contract: RentalContract) -> Result<Self, Self::Error> {
        DomainRentalContract::try_new(
            contract.id,
            contract.customer_name,
            contract.start_date,
            contract.end_date,
        )
    }
}
