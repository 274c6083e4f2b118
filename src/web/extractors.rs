// src/web/extractors.rs

//! Request extractors.

use actix_web::{http::header, web, FromRequest, HttpRequest};
use tracing::warn;

use crate::errors::AppError;
use crate::session::Session;
use crate::state::AppState;

/// Extracts the caller's session from the `Authorization: Bearer <token>`
/// header, resolved against the in-memory session registry. Requests with
/// a missing or unknown token are rejected before the handler runs.
#[derive(Debug)]
pub struct AuthenticatedSession {
  pub session: Session,
}

fn bearer_token(req: &HttpRequest) -> Option<&str> {
  req
    .headers()
    .get(header::AUTHORIZATION)?
    .to_str()
    .ok()?
    .strip_prefix("Bearer ")
}

impl FromRequest for AuthenticatedSession {
  type Error = AppError;
  type Future = futures_util::future::Ready<Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
    let Some(state) = req.app_data::<web::Data<AppState>>() else {
      return futures_util::future::ready(Err(AppError::Internal(
        "Application state is not configured.".to_string(),
      )));
    };

    match bearer_token(req).and_then(|token| state.sessions.resolve(token)) {
      Some(session) => futures_util::future::ready(Ok(AuthenticatedSession { session })),
      None => {
        warn!("Rejected request with missing or unknown session token.");
        futures_util::future::ready(Err(AppError::Auth(
          "A valid session is required. Sign in first.".to_string(),
        )))
      }
    }
  }
}
