// src/services/auth_service.rs

//! Password hashing and verification for operator accounts.

use argon2::{
  password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
  Argon2,
};
use tracing::{debug, error, instrument};

use crate::errors::AppError;

/// Hashes a plain-text password with Argon2 and a fresh random salt.
///
/// Used by the `hash-password` maintenance path when provisioning operator
/// accounts; the server itself only verifies.
#[instrument(name = "auth_service::hash_password", skip(password), err(Display))]
pub fn hash_password(password: &str) -> Result<String, AppError> {
  if password.is_empty() {
    return Err(AppError::Validation(
      "Password cannot be empty for hashing.".to_string(),
    ));
  }

  let salt = SaltString::generate(&mut OsRng);
  Argon2::default()
    .hash_password(password.as_bytes(), &salt)
    .map(|hash| hash.to_string())
    .map_err(|argon_err| {
      error!(error = %argon_err, "Argon2 password hashing failed.");
      AppError::Internal(format!("Password hashing process failed: {}", argon_err))
    })
}

/// Verifies a plain-text password against a stored Argon2 hash string.
///
/// Returns `Ok(false)` on a clean mismatch; any malformed stored hash is an
/// internal error rather than an authentication outcome.
#[instrument(name = "auth_service::verify_password", skip(stored_hash, provided_password), err(Display))]
pub fn verify_password(stored_hash: &str, provided_password: &str) -> Result<bool, AppError> {
  if stored_hash.is_empty() {
    return Err(AppError::Auth("Invalid stored password format (empty).".to_string()));
  }
  if provided_password.is_empty() {
    return Err(AppError::Auth(
      "Provided password for verification cannot be empty.".to_string(),
    ));
  }

  let parsed_hash = PasswordHash::new(stored_hash).map_err(|parse_err| {
    error!(error = %parse_err, "Failed to parse stored password hash string.");
    AppError::Internal(format!("Invalid stored password hash format: {}", parse_err))
  })?;

  match Argon2::default().verify_password(provided_password.as_bytes(), &parsed_hash) {
    Ok(()) => Ok(true),
    Err(argon2::password_hash::Error::Password) => {
      debug!("Password verification failed: passwords do not match.");
      Ok(false)
    }
    Err(other_argon_err) => {
      error!(error = %other_argon_err, "Argon2 password verification process encountered an error.");
      Err(AppError::Internal(format!(
        "Password verification process failed: {}",
        other_argon_err
      )))
    }
  }
}
