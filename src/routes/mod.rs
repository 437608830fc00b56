//! HTTP route handlers.

use actix_web::HttpResponse;
use serde_json::json;

use crate::services::ServiceError;

pub mod main;
pub mod member;

/// Map a service failure onto an HTTP response.
///
/// Invalid input is reported back to the caller; storage failures are logged
/// and answered with an empty 500.
pub fn service_error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::InvalidArgument(msg) => {
            HttpResponse::BadRequest().json(json!({ "error": msg }))
        }
        ServiceError::NotFound => HttpResponse::NotFound().finish(),
        ServiceError::DataAccess(err) => {
            log::error!("Data access failure: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
