//! HTTP surface of the rental service.

use actix_web::error::{InternalError, JsonPayloadError, QueryPayloadError};
use actix_web::{HttpRequest, HttpResponse, web};

use crate::dto::vehicles::ErrorResponse;
use crate::services::ServiceError;

pub mod vehicles;

/// Registers the API routes together with extractor settings that keep every
/// failure in the `{"error": ...}` shape.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .service(
            web::scope("/api")
                .service(vehicles::list_vehicles)
                .service(vehicles::create_vehicle),
        );
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = HttpResponse::BadRequest().json(ErrorResponse::new(err.to_string()));
    InternalError::from_response(err, response).into()
}

fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = HttpResponse::BadRequest().json(ErrorResponse::new(err.to_string()));
    InternalError::from_response(err, response).into()
}

/// Maps a service failure to a response. Store errors are logged and replaced
/// by `failure` so no store details leak to the client.
pub fn error_response(err: ServiceError, failure: &str) -> HttpResponse {
    match err {
        ServiceError::Validation(message) => {
            HttpResponse::BadRequest().json(ErrorResponse::new(message))
        }
        ServiceError::InvalidPagination(err) => {
            HttpResponse::BadRequest().json(ErrorResponse::new(err.to_string()))
        }
        ServiceError::NotFound => HttpResponse::NotFound().json(ErrorResponse::new("Not found")),
        ServiceError::Store(err) => {
            log::error!("{failure}: {err}");
            HttpResponse::InternalServerError().json(ErrorResponse::new(failure))
        }
    }
}
