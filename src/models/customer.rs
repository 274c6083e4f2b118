// src/models/customer.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Customer {
  pub id: Uuid,
  pub name: String,
  pub email: Option<String>,
  pub is_guest: bool,
  pub created_at: DateTime<Utc>,
}

/// Insert payload for a customer row. The guest flag is not a free field:
/// a customer is a guest exactly when no email address was captured.
#[derive(Debug, Clone)]
pub struct NewCustomer {
  pub name: String,
  pub email: Option<String>,
}

impl NewCustomer {
  pub fn is_guest(&self) -> bool {
    self.email.is_none()
  }
}
