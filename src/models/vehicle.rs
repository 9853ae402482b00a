use diesel::prelude::*;

use crate::domain::{
    rental_contract::RentalContract as DomainRentalContract,
    types::TypeConstraintError,
    vehicle::{NewVehicle as DomainNewVehicle, Vehicle as DomainVehicle},
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::vehicles)]
/// Diesel model for [`crate::domain::vehicle::Vehicle`].
pub struct Vehicle {
    pub id: i32,
    pub license_plate: String,
    pub brand: String,
    pub model: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::vehicles)]
/// Insertable form of [`Vehicle`].
pub struct NewVehicle<'a> {
    pub license_plate: &'a str,
    pub brand: &'a str,
    pub model: &'a str,
}

impl Vehicle {
    /// Joins the stored row with its contract into a domain vehicle.
    pub fn into_domain(
        self,
        rental_contract: Option<DomainRentalContract>,
    ) -> Result<DomainVehicle, TypeConstraintError> {
        DomainVehicle::try_new(
            self.id,
            self.license_plate,
            self.brand,
            self.model,
            rental_contract,
        )
    }
}

impl TryFrom<Vehicle> for DomainVehicle {
    type Error = TypeConstraintError;

    fn try_from(vehicle: Vehicle) -> Result<Self, Self::Error> {
        vehicle.into_domain(None)
    }
}

impl<'a> From<&'a DomainNewVehicle> for NewVehicle<'a> {
    fn from(vehicle: &'a DomainNewVehicle) -> Self {
        Self {
            license_plate: vehicle.license_plate.as_str(),
            brand: vehicle.brand.as_str(),
            model: vehicle.model.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn from_domain_new_creates_new_vehicle() {
        let domain = DomainNewVehicle::try_new("AB-1", "Toyota", "Yaris", None).unwrap();
        let new: NewVehicle = (&domain).into();
        assert_eq!(new.license_plate, "AB-1");
        assert_eq!(new.brand, "Toyota");
        assert_eq!(new.model, "Yaris");
    }

    #[test]
    fn vehicle_into_domain_attaches_contract() {
        let db_vehicle = Vehicle {
            id: 3,
            license_plate: "CD-2".to_string(),
            brand: "Honda".to_string(),
            model: "Jazz".to_string(),
        };
        let contract = DomainRentalContract::try_new(
            9,
            "Lee".to_string(),
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
        )
        .unwrap();

        let domain = db_vehicle.into_domain(Some(contract.clone())).unwrap();
        assert_eq!(domain.id.get(), 3);
        assert_eq!(domain.brand.as_str(), "Honda");
        assert_eq!(domain.rental_contract, Some(contract));
    }

    #[test]
    fn invalid_row_is_rejected() {
        let db_vehicle = Vehicle {
            id: 0,
            license_plate: "CD-2".to_string(),
            brand: "Honda".to_string(),
            model: "Jazz".to_string(),
        };
        let result: Result<DomainVehicle, _> = db_vehicle.try_into();
        assert_eq!(result, Err(TypeConstraintError::NonPositiveId));
    }
}
