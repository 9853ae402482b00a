use actix_web::{HttpResponse, Responder, get, post, web};
use log::error;

use crate::dto::vehicles::{ErrorResponse, VehicleListParams};
use crate::forms::vehicle::CreateVehicleForm;
use crate::models::config::ListingOptions;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::vehicles as vehicle_service;

const LIST_FAILURE: &str = "Failed to fetch vehicles";
const CREATE_FAILURE: &str = "Failed to create vehicle";

#[get("/rental")]
pub async fn list_vehicles(
    params: web::Query<VehicleListParams>,
    repo: web::Data<DieselRepository>,
    options: web::Data<ListingOptions>,
) -> impl Responder {
    let params = params.into_inner();
    let options = *options.get_ref();

    // Diesel is blocking; if the client goes away the query still finishes
    // and its result is dropped.
    let result =
        web::block(move || vehicle_service::list_vehicles(repo.get_ref(), params, &options)).await;

    match result {
        Ok(Ok(page)) => HttpResponse::Ok().json(page),
        Ok(Err(err)) => error_response(err, LIST_FAILURE),
        Err(err) => {
            error!("Listing task failed: {err}");
            HttpResponse::InternalServerError().json(ErrorResponse::new(LIST_FAILURE))
        }
    }
}

#[post("/rental")]
pub async fn create_vehicle(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CreateVehicleForm>,
) -> impl Responder {
    let result = web::block(move || vehicle_service::create_vehicle(repo.get_ref(), form)).await;

    match result {
        Ok(Ok(vehicle)) => HttpResponse::Created().json(vehicle),
        Ok(Err(err)) => error_response(err, CREATE_FAILURE),
        Err(err) => {
            error!("Creation task failed: {err}");
            HttpResponse::InternalServerError().json(ErrorResponse::new(CREATE_FAILURE))
        }
    }
}
