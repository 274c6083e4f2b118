// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use parking_lot::Mutex;
use tracing::Level;
use uuid::Uuid;

use qwb_dashboard::errors::{AppError, Result};
use qwb_dashboard::models::{
  Customer, NewCustomer, NewOrder, Order, OrderStatus, OrderWithCustomer, PaymentMethod,
};
use qwb_dashboard::revenue;
use qwb_dashboard::store::OrderStore;

// --- In-Memory Order Store ---

/// [`OrderStore`] backed by plain vectors, with per-operation failure
/// injection so intake behavior around partial writes can be observed.
#[derive(Default)]
pub struct MemoryStore {
  customers: Mutex<Vec<Customer>>,
  orders: Mutex<Vec<Order>>,
  fail_customer_inserts: AtomicBool,
  fail_order_inserts: AtomicBool,
  customer_insert_calls: AtomicUsize,
  order_insert_calls: AtomicUsize,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn fail_customer_inserts(&self) {
    self.fail_customer_inserts.store(true, Ordering::SeqCst);
  }

  pub fn fail_order_inserts(&self) {
    self.fail_order_inserts.store(true, Ordering::SeqCst);
  }

  pub fn customer_insert_calls(&self) -> usize {
    self.customer_insert_calls.load(Ordering::SeqCst)
  }

  pub fn order_insert_calls(&self) -> usize {
    self.order_insert_calls.load(Ordering::SeqCst)
  }

  pub fn customers(&self) -> Vec<Customer> {
    self.customers.lock().clone()
  }

  pub fn orders(&self) -> Vec<Order> {
    self.orders.lock().clone()
  }
}

#[async_trait]
impl OrderStore for MemoryStore {
  async fn insert_customer(&self, new_customer: NewCustomer) -> Result<Customer> {
    self.customer_insert_calls.fetch_add(1, Ordering::SeqCst);
    if self.fail_customer_inserts.load(Ordering::SeqCst) {
      return Err(AppError::Internal("injected customer insert failure".to_string()));
    }
    let customer = Customer {
      id: Uuid::new_v4(),
      name: new_customer.name.clone(),
      email: new_customer.email.clone(),
      is_guest: new_customer.is_guest(),
      created_at: Utc::now(),
    };
    self.customers.lock().push(customer.clone());
    Ok(customer)
  }

  async fn insert_order(&self, new_order: NewOrder) -> Result<Order> {
    self.order_insert_calls.fetch_add(1, Ordering::SeqCst);
    if self.fail_order_inserts.load(Ordering::SeqCst) {
      return Err(AppError::Internal("injected order insert failure".to_string()));
    }
    let now = Utc::now();
    let order = Order {
      id: Uuid::new_v4(),
      order_number: new_order.order_number,
      customer_id: new_order.customer_id,
      product_id: new_order.product_id,
      product_name: new_order.product_name,
      price_paise: new_order.price_paise,
      partner_share_paise: new_order.partner_share_paise,
      owner_share_paise: new_order.owner_share_paise,
      status: new_order.status,
      payment_method: new_order.payment_method,
      transaction_id: new_order.transaction_id,
      created_at: now,
      updated_at: now,
    };
    self.orders.lock().push(order.clone());
    Ok(order)
  }

  async fn list_orders(&self) -> Result<Vec<OrderWithCustomer>> {
    let customers = self.customers.lock();
    let mut rows: Vec<OrderWithCustomer> = self
      .orders
      .lock()
      .iter()
      .map(|order| {
        let customer = customers.iter().find(|c| c.id == order.customer_id);
        OrderWithCustomer {
          order: order.clone(),
          customer_name: customer.map(|c| c.name.clone()),
          customer_email: customer.and_then(|c| c.email.clone()),
          customer_is_guest: customer.map(|c| c.is_guest),
        }
      })
      .collect();
    rows.sort_by(|a, b| b.order.created_at.cmp(&a.order.created_at));
    Ok(rows)
  }
}

// --- Fixture Builders ---

/// IST (UTC+5:30), the timezone the dashboard's calendar windows are judged
/// in for these fixtures.
pub fn ist() -> FixedOffset {
  FixedOffset::east_opt(5 * 3600 + 30 * 60).expect("IST offset is in range")
}

/// A wall-clock instant in IST. Fixed offsets have no DST gaps, so every
/// wall-clock time maps to exactly one instant.
pub fn ist_time(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<FixedOffset> {
  ist()
    .with_ymd_and_hms(year, month, day, hour, minute, 0)
    .single()
    .expect("fixed-offset wall-clock time is unambiguous")
}

/// An order fixture with its shares derived from the price the same way
/// intake derives them.
pub fn order_at(status: OrderStatus, price_paise: i64, created_at: DateTime<FixedOffset>) -> Order {
  let split = revenue::split(price_paise);
  let created_utc = created_at.with_timezone(&Utc);
  Order {
    id: Uuid::new_v4(),
    order_number: format!("QWB-{}", created_utc.timestamp_millis()),
    customer_id: Uuid::new_v4(),
    product_id: "complete-pack".to_string(),
    product_name: "Complete Question Pack".to_string(),
    price_paise,
    partner_share_paise: split.partner_paise,
    owner_share_paise: split.owner_paise,
    status,
    payment_method: Some(PaymentMethod::Upi),
    transaction_id: None,
    created_at: created_utc,
    updated_at: created_utc,
  }
}

pub fn completed_order_at(price_paise: i64, created_at: DateTime<FixedOffset>) -> Order {
  order_at(OrderStatus::Completed, price_paise, created_at)
}

/// Wraps an order as the joined row the store returns when the customer row
/// exists.
pub fn row_with_customer(order: Order, name: &str, email: Option<&str>) -> OrderWithCustomer {
  OrderWithCustomer {
    order,
    customer_name: Some(name.to_string()),
    customer_email: email.map(str::to_string),
    customer_is_guest: Some(email.is_none()),
  }
}

/// Wraps an order as the joined row the store returns when the LEFT JOIN
/// found no customer.
pub fn row_without_customer(order: Order) -> OrderWithCustomer {
  OrderWithCustomer {
    order,
    customer_name: None,
    customer_email: None,
    customer_is_guest: None,
  }
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
