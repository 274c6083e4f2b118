// src/config.rs

use dotenvy::dotenv;
use serde::Deserialize;
use std::env;

use crate::errors::{AppError, Result};
use crate::session::Role;

/// One operator account, provisioned through configuration rather than the
/// database: the identity check is local to the service.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountConfig {
  pub email: String,
  pub full_name: String,
  /// Argon2 hash string, as produced by the `hash-password` helper binary.
  pub password_hash: String,
  pub role: Role,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub database_url: String,
  /// Every account that may sign in, with its role.
  pub accounts: Vec<AccountConfig>,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let get_env = |var_name: &str| {
      env::var(var_name).map_err(|e| AppError::Config(format!("Missing environment variable '{}': {}", var_name, e)))
    };

    let server_host = get_env("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let server_port = get_env("SERVER_PORT")
      .unwrap_or_else(|_| "8080".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;
    let database_url = get_env("DATABASE_URL")?;

    // DASHBOARD_USERS is a JSON array:
    //   [{"email": "...", "full_name": "...", "password_hash": "...", "role": "privileged"}, ...]
    let accounts_raw = get_env("DASHBOARD_USERS")?;
    let accounts: Vec<AccountConfig> = serde_json::from_str(&accounts_raw)
      .map_err(|e| AppError::Config(format!("Invalid DASHBOARD_USERS value: {}", e)))?;
    if accounts.is_empty() {
      return Err(AppError::Config(
        "DASHBOARD_USERS must list at least one account".to_string(),
      ));
    }

    tracing::info!(accounts = accounts.len(), "Application configuration loaded successfully.");

    Ok(Self {
      server_host,
      server_port,
      database_url,
      accounts,
    })
  }

  /// Looks up the configured account for a login email, if any.
  pub fn account_for_email(&self, email: &str) -> Option<&AccountConfig> {
    self.accounts.iter().find(|account| account.email == email)
  }
}
