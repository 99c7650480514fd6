pub mod assistant_handler;
pub mod health_handler;

use actix_web::{error::JsonPayloadError, web, HttpRequest};

use crate::errors::AppError;

pub use assistant_handler::{ask, hotspots, list_fields, list_languages};
pub use health_handler::{health_check, health_check_live};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(ask)
        .service(list_languages)
        .service(list_fields)
        .service(hotspots)
        .service(health_check)
        .service(health_check_live);
}

/// Renders body decode failures with the same JSON error shape as handler errors.
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::debug!("Rejected request body: {}", err);
    AppError::ValidationError(format!("Invalid JSON body: {}", err)).into()
}
