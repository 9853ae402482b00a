use serde::{Deserialize, Serialize};

use crate::domain::rental_contract::{NewRentalContract, RentalContract};
use crate::domain::types::{Brand, LicensePlate, TypeConstraintError, VehicleId, VehicleModel};

/// Vehicle joined with its optional rental contract.
///
/// Listing and creation both return this shape, so clients can render either
/// response with the same code.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: VehicleId,
    pub license_plate: LicensePlate,
    pub brand: Brand,
    pub model: VehicleModel,
    pub rental_contract: Option<RentalContract>,
}

impl Vehicle {
    /// Builds a vehicle from raw storage values.
    pub fn try_new(
        id: i32,
        license_plate: String,
        brand: String,
        model: String,
        rental_contract: Option<RentalContract>,
    ) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            id: VehicleId::new(id)?,
            license_plate: LicensePlate::new(license_plate)?,
            brand: Brand::new(brand)?,
            model: VehicleModel::new(model)?,
            rental_contract,
        })
    }
}

/// Validated data for a vehicle that has not been persisted yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewVehicle {
    pub license_plate: LicensePlate,
    pub brand: Brand,
    pub model: VehicleModel,
    pub rental_contract: Option<NewRentalContract>,
}

impl NewVehicle {
    #[must_use]
    pub fn new(
        license_plate: LicensePlate,
        brand: Brand,
        model: VehicleModel,
        rental_contract: Option<NewRentalContract>,
    ) -> Self {
        Self {
            license_plate,
            brand,
            model,
            rental_contract,
        }
    }

    /// Builds a new vehicle from raw strings, trimming and rejecting blanks.
    pub fn try_new(
        license_plate: impl Into<String>,
        brand: impl Into<String>,
        model: impl Into<String>,
        rental_contract: Option<NewRentalContract>,
    ) -> Result<Self, TypeConstraintError> {
        Ok(Self::new(
            LicensePlate::new(license_plate)?,
            Brand::new(brand)?,
            VehicleModel::new(model)?,
            rental_contract,
        ))
    }
}
