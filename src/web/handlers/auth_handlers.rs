// src/web/handlers/auth_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::services::auth_service;
use crate::session::SessionUser;
use crate::state::AppState;
use crate::web::extractors::AuthenticatedSession;

// --- Request DTOs ---
#[derive(Deserialize, Debug)]
pub struct LoginRequestPayload {
  pub email: String,
  pub password: String,
}

fn user_payload(user: &SessionUser) -> serde_json::Value {
  json!({
    "email": user.email,
    "fullName": user.full_name,
    "role": user.role,
    "isPartner": user.role.is_partner(),
    "isPrivileged": user.role.is_privileged(),
  })
}

// --- Handler Implementations ---

#[instrument(
  name = "handler::login",
  skip(app_state, req_payload),
  fields(req_email = %req_payload.email)
)]
pub async fn login_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<LoginRequestPayload>,
) -> Result<HttpResponse, AppError> {
  info!("Login attempt for email: {}", req_payload.email);

  // The failure message never reveals whether the account exists.
  let Some(account) = app_state.config.account_for_email(req_payload.email.trim()) else {
    warn!("Login rejected: unknown account email.");
    return Err(AppError::Auth("Invalid email or password.".to_string()));
  };

  match auth_service::verify_password(&account.password_hash, &req_payload.password) {
    Ok(true) => {}
    Ok(false) => {
      warn!("Login rejected: password mismatch for {}", account.email);
      return Err(AppError::Auth("Invalid email or password.".to_string()));
    }
    Err(app_err) => return Err(app_err),
  }

  let session = app_state.sessions.issue(SessionUser {
    email: account.email.clone(),
    full_name: account.full_name.clone(),
    role: account.role,
  });
  info!(email = %session.user.email, role = ?session.user.role, "Login successful.");

  Ok(HttpResponse::Ok().json(json!({
    "message": "Login successful.",
    "token": session.token,
    "user": user_payload(&session.user),
  })))
}

#[instrument(name = "handler::logout", skip(app_state, auth), fields(email = %auth.session.user.email))]
pub async fn logout_handler(
  app_state: web::Data<AppState>,
  auth: AuthenticatedSession,
) -> Result<HttpResponse, AppError> {
  app_state.sessions.revoke(&auth.session.token);
  info!("Session revoked.");
  Ok(HttpResponse::Ok().json(json!({ "message": "Logged out." })))
}

#[instrument(name = "handler::me", skip(auth), fields(email = %auth.session.user.email))]
pub async fn me_handler(auth: AuthenticatedSession) -> Result<HttpResponse, AppError> {
  Ok(HttpResponse::Ok().json(json!({
    "user": user_payload(&auth.session.user),
    "issuedAt": auth.session.issued_at,
  })))
}
