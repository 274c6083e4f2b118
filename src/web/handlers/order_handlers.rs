// src/web/handlers/order_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::intake::{self, OrderDraft};
use crate::state::AppState;
use crate::view::OrderView;
use crate::web::extractors::AuthenticatedSession;

/// Lists every order, newest first, projected for the caller's role.
#[instrument(
  name = "handler::list_orders",
  skip(app_state, auth),
  fields(role = ?auth.session.user.role)
)]
pub async fn list_orders_handler(
  app_state: web::Data<AppState>,
  auth: AuthenticatedSession,
) -> Result<HttpResponse, AppError> {
  let rows = app_state.store.list_orders().await?;
  let orders: Vec<OrderView> = rows
    .iter()
    .map(|row| OrderView::project(auth.session.user.role, row))
    .collect();
  info!(orders = orders.len(), "Order list fetched.");

  Ok(HttpResponse::Ok().json(json!({ "orders": orders })))
}

/// Accepts a new order draft from a privileged operator.
#[instrument(
  name = "handler::create_order",
  skip(app_state, auth, req_payload),
  fields(email = %auth.session.user.email, product_id = %req_payload.product_id)
)]
pub async fn create_order_handler(
  app_state: web::Data<AppState>,
  auth: AuthenticatedSession,
  req_payload: web::Json<OrderDraft>,
) -> Result<HttpResponse, AppError> {
  if !auth.session.user.role.is_privileged() {
    warn!("Order submission rejected: caller is not privileged.");
    return Err(AppError::Forbidden(
      "Only privileged operators can add orders.".to_string(),
    ));
  }

  let order = intake::submit(app_state.store.as_ref(), &req_payload).await?;

  Ok(HttpResponse::Created().json(json!({
    "message": format!("Order {} has been created.", order.order_number),
    "order": order,
  })))
}
