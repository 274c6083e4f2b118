// src/web/handlers/dashboard_handlers.rs

use actix_web::{web, HttpResponse};
use chrono::Local;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::state::AppState;
use crate::stats;
use crate::view::StatsView;
use crate::web::extractors::AuthenticatedSession;

/// Computes the dashboard summary for the caller's role.
///
/// The order list is fetched fresh and the summary recomputed from scratch
/// on every request; nothing is cached server-side.
#[instrument(
  name = "handler::dashboard_stats",
  skip(app_state, auth),
  fields(role = ?auth.session.user.role)
)]
pub async fn stats_handler(
  app_state: web::Data<AppState>,
  auth: AuthenticatedSession,
) -> Result<HttpResponse, AppError> {
  let rows = app_state.store.list_orders().await?;
  let summary = stats::compute(rows.iter().map(|row| &row.order), Local::now());
  info!(orders = rows.len(), "Dashboard summary computed.");

  Ok(HttpResponse::Ok().json(StatsView::project(auth.session.user.role, &summary)))
}
