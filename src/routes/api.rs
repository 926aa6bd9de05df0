use actix_web::{HttpResponse, Responder, get, web};
use serde::Serialize;

use crate::forms::prices::PriceQueryForm;
use crate::repository::DieselRepository;
use crate::services::{ServiceError, prices as prices_service};

/// JSON body returned with every non-success response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[get("/price/")]
/// Return the price applicable to a product and brand at `application_date`.
///
/// Missing or malformed parameters receive `400 Bad Request`, an instant no
/// price covers receives `404 Not Found`.
pub async fn show_price(
    params: web::Query<PriceQueryForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match prices_service::find_applicable_price(repo.get_ref(), params.into_inner()) {
        Ok(price) => HttpResponse::Ok().json(price),
        Err(ServiceError::Form(message)) => {
            HttpResponse::BadRequest().json(ErrorResponse::new(message))
        }
        Err(ServiceError::NotFound) => {
            HttpResponse::NotFound().json(ErrorResponse::new("No price found"))
        }
        Err(err) => {
            log::error!("Failed to resolve price: {err}");
            HttpResponse::InternalServerError().json(ErrorResponse::new("Internal server error"))
        }
    }
}
