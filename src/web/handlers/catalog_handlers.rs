// src/web/handlers/catalog_handlers.rs

use actix_web::HttpResponse;
use serde_json::json;
use tracing::instrument;

use crate::catalog;
use crate::errors::AppError;

/// Returns the fixed product catalog the intake form offers.
#[instrument(name = "handler::list_products")]
pub async fn list_products_handler() -> Result<HttpResponse, AppError> {
  Ok(HttpResponse::Ok().json(json!({ "products": catalog::PRODUCTS })))
}
