use serde::Deserialize;
use validator::Validate;

use crate::domain::rental_contract::NewRentalContract;
use crate::domain::types::{
    Brand, LicensePlate, TypeConstraintError, VehicleModel, parse_calendar_date,
};
use crate::domain::vehicle::NewVehicle;
use crate::forms::FormError;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// JSON payload for creating a vehicle with an optional contract.
pub struct CreateVehicleForm {
    #[validate(required(message = "licensePlate is required"))]
    pub license_plate: Option<String>,
    #[validate(required(message = "brand is required"))]
    pub brand: Option<String>,
    #[validate(required(message = "model is required"))]
    pub model: Option<String>,
    /// `null` and a missing key both mean "no contract".
    #[serde(default)]
    #[validate(nested)]
    pub rental_contract: Option<RentalContractForm>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Contract part of [`CreateVehicleForm`].
pub struct RentalContractForm {
    /// May be empty, but must be present.
    #[validate(required(message = "customerName is required"))]
    pub customer_name: Option<String>,
    #[validate(required(message = "startDate is required"))]
    pub start_date: Option<String>,
    #[validate(required(message = "endDate is required"))]
    pub end_date: Option<String>,
}

fn field<T>(
    name: &'static str,
    value: Option<String>,
    build: impl FnOnce(String) -> Result<T, TypeConstraintError>,
) -> Result<T, FormError> {
    let value = value.ok_or(FormError::MissingField(name))?;
    build(value).map_err(|source| FormError::InvalidField {
        field: name,
        source,
    })
}

impl TryFrom<RentalContractForm> for NewRentalContract {
    type Error = FormError;

    fn try_from(form: RentalContractForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let customer_name = field("customerName", form.customer_name, Ok)?;
        let start_date = field("startDate", form.start_date, |raw| {
            parse_calendar_date(&raw)
        })?;
        let end_date = field("endDate", form.end_date, |raw| parse_calendar_date(&raw))?;

        Ok(NewRentalContract::new(customer_name, start_date, end_date))
    }
}

impl TryFrom<CreateVehicleForm> for NewVehicle {
    type Error = FormError;

    /// Validates the payload and converts it into a [`NewVehicle`]. Fails on
    /// the first problem found; nothing is partially accepted.
    fn try_from(form: CreateVehicleForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let license_plate = field("licensePlate", form.license_plate, LicensePlate::new)?;
        let brand = field("brand", form.brand, Brand::new)?;
        let model = field("model", form.model, VehicleModel::new)?;
        let rental_contract = form
            .rental_contract
            .map(NewRentalContract::try_from)
            .transpose()?;

        Ok(NewVehicle::new(license_plate, brand, model, rental_contract))
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde_json::json;

    use super::*;

    fn parse(value: serde_json::Value) -> Result<NewVehicle, FormError> {
        let form: CreateVehicleForm = serde_json::from_value(value).unwrap();
        NewVehicle::try_from(form)
    }

    #[test]
    fn payload_with_contract_converts() {
        let vehicle = parse(json!({
            "licensePlate": " KT-1234 ",
            "brand": "Toyota",
            "model": "Fortuner",
            "rentalContract": {
                "customerName": "Somphong",
                "startDate": "2025-01-01",
                "endDate": "2025-06-01"
            }
        }))
        .unwrap();

        assert_eq!(vehicle.license_plate.as_str(), "KT-1234");
        let contract = vehicle.rental_contract.unwrap();
        assert_eq!(contract.customer_name, "Somphong");
        assert_eq!(contract.start_date, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        assert_eq!(contract.end_date, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
    }

    #[test]
    fn missing_or_null_contract_means_none() {
        let without = parse(json!({"licensePlate": "A", "brand": "B", "model": "C"})).unwrap();
        assert!(without.rental_contract.is_none());

        let null = parse(json!({
            "licensePlate": "A", "brand": "B", "model": "C", "rentalContract": null
        }))
        .unwrap();
        assert!(null.rental_contract.is_none());
    }

    #[test]
    fn missing_scalar_field_fails() {
        let err = parse(json!({"licensePlate": "A", "model": "C"})).unwrap_err();
        assert!(matches!(err, FormError::Validation(_)));
        assert!(err.to_string().contains("brand is required"));
    }

    #[test]
    fn blank_scalar_field_fails() {
        let err = parse(json!({"licensePlate": "  ", "brand": "B", "model": "C"})).unwrap_err();
        assert!(matches!(
            err,
            FormError::InvalidField {
                field: "licensePlate",
                source: TypeConstraintError::EmptyString
            }
        ));
    }

    #[test]
    fn invalid_contract_date_fails() {
        let err = parse(json!({
            "licensePlate": "A", "brand": "B", "model": "C",
            "rentalContract": {"customerName": "X", "startDate": "soon", "endDate": "2025-01-01"}
        }))
        .unwrap_err();
        assert!(matches!(
            err,
            FormError::InvalidField {
                field: "startDate",
                ..
            }
        ));
    }

    #[test]
    fn contract_without_dates_fails() {
        let err = parse(json!({
            "licensePlate": "A", "brand": "B", "model": "C",
            "rentalContract": {"customerName": "X"}
        }))
        .unwrap_err();
        assert!(matches!(err, FormError::Validation(_)));
    }

    #[test]
    fn empty_customer_name_is_accepted() {
        let vehicle = parse(json!({
            "licensePlate": "A", "brand": "B", "model": "C",
            "rentalContract": {"customerName": "", "startDate": "2025-01-01", "endDate": "2025-01-02"}
        }))
        .unwrap();
        assert_eq!(vehicle.rental_contract.unwrap().customer_name, "");
    }
}
