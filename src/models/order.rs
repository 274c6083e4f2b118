// src/models/order.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type as SqlxType};
use std::fmt;
use uuid::Uuid;

// Maps to the `order_status_enum` Postgres type in schema.sql.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, SqlxType)]
#[sqlx(type_name = "order_status_enum", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
  /// The sale is finalized and counts towards revenue.
  Completed,
  Pending,
  Refunded,
}

// Maps to the `payment_method_enum` Postgres type in schema.sql. The serde
// names match what the dashboard has always shown operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, SqlxType)]
#[sqlx(type_name = "payment_method_enum", rename_all = "snake_case")]
pub enum PaymentMethod {
  #[serde(rename = "UPI")]
  Upi,
  #[serde(rename = "Card")]
  Card,
  #[serde(rename = "Net Banking")]
  NetBanking,
  #[serde(rename = "Cash")]
  Cash,
}

impl Default for PaymentMethod {
  fn default() -> Self {
    PaymentMethod::Upi
  }
}

impl fmt::Display for PaymentMethod {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let label = match self {
      PaymentMethod::Upi => "UPI",
      PaymentMethod::Card => "Card",
      PaymentMethod::NetBanking => "Net Banking",
      PaymentMethod::Cash => "Cash",
    };
    f.write_str(label)
  }
}

/// A stored order. All money fields are integer paise; the two share columns
/// always sum to `price_paise` (written that way at intake, trusted here).
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Order {
  pub id: Uuid,
  pub order_number: String,
  pub customer_id: Uuid,
  pub product_id: String,
  pub product_name: String,
  pub price_paise: i64,
  pub partner_share_paise: i64,
  pub owner_share_paise: i64,
  pub status: OrderStatus,
  pub payment_method: Option<PaymentMethod>,
  pub transaction_id: Option<String>,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

/// Insert payload for an order row. Timestamps are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewOrder {
  pub order_number: String,
  pub customer_id: Uuid,
  pub product_id: String,
  pub product_name: String,
  pub price_paise: i64,
  pub partner_share_paise: i64,
  pub owner_share_paise: i64,
  pub status: OrderStatus,
  pub payment_method: Option<PaymentMethod>,
  pub transaction_id: Option<String>,
}

/// An order joined with its owning customer, as returned by the
/// `list_orders` select. The customer columns are nullable because the join
/// is a LEFT JOIN; display code falls back to a guest label when absent.
#[derive(Debug, Clone, FromRow)]
pub struct OrderWithCustomer {
  #[sqlx(flatten)]
  pub order: Order,
  pub customer_name: Option<String>,
  pub customer_email: Option<String>,
  pub customer_is_guest: Option<bool>,
}
