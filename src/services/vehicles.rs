//! Listing and creation workflows for vehicles.

use crate::domain::filter::ContractFilter;
use crate::domain::vehicle::{NewVehicle, Vehicle};
use crate::dto::vehicles::{VehicleListParams, VehicleListResponse};
use crate::forms::vehicle::CreateVehicleForm;
use crate::models::config::ListingOptions;
use crate::pagination::{PageRequest, Paginated};
use crate::repository::{VehicleListQuery, VehicleReader, VehicleWriter};
use crate::services::ServiceResult;

/// Returns one page of vehicles matching the contract filter in `params`.
///
/// Pagination is validated before the filter; the first problem found is
/// reported and the store is not queried.
pub fn list_vehicles<R>(
    repo: &R,
    params: VehicleListParams,
    options: &ListingOptions,
) -> ServiceResult<VehicleListResponse>
where
    R: VehicleReader + ?Sized,
{
    let page = PageRequest::parse(
        params.page.as_deref(),
        params.limit.as_deref(),
        options.default_page_size,
        options.max_page_size,
    )?;

    let filter = ContractFilter::build(
        params.customer_name.as_deref(),
        params.start_date.as_deref(),
        params.end_date.as_deref(),
        options.name_match,
    )?;

    let query = VehicleListQuery::new().filter(filter).paginate(page);

    let (total, vehicles) = repo.list_vehicles(query).map_err(|err| {
        log::error!("Failed to list vehicles: {err}");
        err
    })?;

    Ok(Paginated::new(vehicles, page, total))
}

/// Validates the payload and persists the vehicle with its optional contract.
pub fn create_vehicle<R>(repo: &R, form: CreateVehicleForm) -> ServiceResult<Vehicle>
where
    R: VehicleWriter + ?Sized,
{
    let new_vehicle = NewVehicle::try_from(form).map_err(|err| {
        log::warn!("Rejected vehicle payload: {err}");
        err
    })?;

    let vehicle = repo.create_vehicle(&new_vehicle).map_err(|err| {
        log::error!("Failed to create vehicle: {err}");
        err
    })?;

    log::info!("Created vehicle {}", vehicle.id);

    Ok(vehicle)
}
