// src/intake.rs

//! Order intake: draft validation followed by the two-step
//! customer-then-order submission.
//!
//! The two store writes are deliberately not transactional. A customer
//! insert failure aborts before any order exists; an order insert failure
//! after the customer was created leaves that customer row behind. The
//! caller sees a single success or a single error either way.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{info, instrument, warn};

use crate::catalog::{self, Product};
use crate::errors::{AppError, Result};
use crate::models::{NewCustomer, NewOrder, Order, OrderStatus, PaymentMethod};
use crate::revenue;
use crate::store::OrderStore;

const ORDER_NUMBER_PREFIX: &str = "QWB";

/// An order submission as entered by a privileged operator.
///
/// There is no price field: the price comes from the catalog entry for
/// `product_id` and nowhere else. The empty draft defaults the payment
/// method to UPI.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OrderDraft {
  pub customer_name: String,
  pub customer_email: Option<String>,
  pub product_id: String,
  pub payment_method: PaymentMethod,
  pub transaction_id: Option<String>,
}

impl Default for OrderDraft {
  fn default() -> Self {
    Self {
      customer_name: String::new(),
      customer_email: None,
      product_id: String::new(),
      payment_method: PaymentMethod::default(),
      transaction_id: None,
    }
  }
}

struct ValidatedDraft {
  customer: NewCustomer,
  product: &'static Product,
  payment_method: PaymentMethod,
  transaction_id: Option<String>,
}

/// Builds an order number from the fixed prefix and a creation instant.
pub fn generate_order_number(now: DateTime<Utc>) -> String {
  format!("{}-{}", ORDER_NUMBER_PREFIX, now.timestamp_millis())
}

fn normalize_optional(value: &Option<String>) -> Option<String> {
  value
    .as_deref()
    .map(str::trim)
    .filter(|v| !v.is_empty())
    .map(str::to_string)
}

fn validate(draft: &OrderDraft) -> Result<ValidatedDraft> {
  let name = draft.customer_name.trim();
  if name.is_empty() {
    return Err(AppError::Validation("Customer name is required.".to_string()));
  }

  // Blank email means a guest customer; a present email must at least look
  // like one.
  let email = normalize_optional(&draft.customer_email);
  if let Some(email) = &email {
    if !email.contains('@') {
      return Err(AppError::Validation(format!(
        "'{}' is not a valid customer email address.",
        email
      )));
    }
  }

  let product = catalog::find(&draft.product_id).ok_or_else(|| {
    AppError::Validation(format!("Unknown product '{}'.", draft.product_id))
  })?;

  Ok(ValidatedDraft {
    customer: NewCustomer {
      name: name.to_string(),
      email,
    },
    product,
    payment_method: draft.payment_method,
    transaction_id: normalize_optional(&draft.transaction_id),
  })
}

/// Validates the draft and submits it to the store.
///
/// Validation happens before any store write. The customer row is created
/// first; only then is the order inserted, priced from the catalog, split
/// 30/70, and marked `completed`.
#[instrument(name = "intake::submit", skip(store, draft), fields(product_id = %draft.product_id))]
pub async fn submit(store: &dyn OrderStore, draft: &OrderDraft) -> Result<Order> {
  let validated = validate(draft)?;

  let customer = store.insert_customer(validated.customer).await?;
  info!(customer_id = %customer.id, "Customer created for order intake.");

  let order_number = generate_order_number(Utc::now());
  let split = revenue::split(validated.product.price_paise);
  let new_order = NewOrder {
    order_number,
    customer_id: customer.id,
    product_id: validated.product.id.to_string(),
    product_name: validated.product.name.to_string(),
    price_paise: validated.product.price_paise,
    partner_share_paise: split.partner_paise,
    owner_share_paise: split.owner_paise,
    status: OrderStatus::Completed,
    payment_method: Some(validated.payment_method),
    transaction_id: validated.transaction_id,
  };

  match store.insert_order(new_order).await {
    Ok(order) => {
      info!(order_number = %order.order_number, customer_id = %customer.id, "Order created.");
      Ok(order)
    }
    Err(err) => {
      // The two writes are not transactional; the customer row stays behind.
      warn!(
        customer_id = %customer.id,
        "Order insert failed after customer creation; the customer row remains."
      );
      Err(err)
    }
  }
}
