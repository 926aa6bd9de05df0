use actix_web::{HttpResponse, error, web};

use crate::routes::api::{ErrorResponse, show_price};

pub mod api;

/// Registers the public API under `/api`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(query_config())
            .service(show_price),
    );
}

/// Query extraction failures answer with the same JSON error body as the handlers.
fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        log::debug!("Rejected query string: {err}");
        let response =
            HttpResponse::BadRequest().json(ErrorResponse::new("Invalid query string"));
        error::InternalError::from_response(err, response).into()
    })
}
