// src/store/pg.rs

//! Postgres implementation of the order store, using runtime `query_as`
//! queries against the relations in `schema.sql`.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{error, instrument};

use crate::errors::{AppError, Result};
use crate::models::{Customer, NewCustomer, NewOrder, Order, OrderWithCustomer};
use crate::store::OrderStore;

pub struct PgOrderStore {
  pool: PgPool,
}

impl PgOrderStore {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl OrderStore for PgOrderStore {
  #[instrument(name = "store::insert_customer", skip(self, new_customer), fields(is_guest = new_customer.is_guest()))]
  async fn insert_customer(&self, new_customer: NewCustomer) -> Result<Customer> {
    let is_guest = new_customer.is_guest();
    sqlx::query_as::<_, Customer>(
      "INSERT INTO customers (name, email, is_guest) VALUES ($1, $2, $3) \
       RETURNING id, name, email, is_guest, created_at",
    )
    .bind(&new_customer.name)
    .bind(&new_customer.email)
    .bind(is_guest)
    .fetch_one(&self.pool)
    .await
    .map_err(|e| {
      error!(error = %e, "Database error while creating customer.");
      AppError::Sqlx(e)
    })
  }

  #[instrument(name = "store::insert_order", skip(self, new_order), fields(order_number = %new_order.order_number))]
  async fn insert_order(&self, new_order: NewOrder) -> Result<Order> {
    sqlx::query_as::<_, Order>(
      "INSERT INTO orders (order_number, customer_id, product_id, product_name, price_paise, \
       partner_share_paise, owner_share_paise, status, payment_method, transaction_id) \
       VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
       RETURNING id, order_number, customer_id, product_id, product_name, price_paise, \
       partner_share_paise, owner_share_paise, status, payment_method, transaction_id, \
       created_at, updated_at",
    )
    .bind(&new_order.order_number)
    .bind(new_order.customer_id)
    .bind(&new_order.product_id)
    .bind(&new_order.product_name)
    .bind(new_order.price_paise)
    .bind(new_order.partner_share_paise)
    .bind(new_order.owner_share_paise)
    .bind(new_order.status)
    .bind(new_order.payment_method)
    .bind(&new_order.transaction_id)
    .fetch_one(&self.pool)
    .await
    .map_err(|e| {
      error!(error = %e, "Database error while creating order.");
      AppError::Sqlx(e)
    })
  }

  #[instrument(name = "store::list_orders", skip(self))]
  async fn list_orders(&self) -> Result<Vec<OrderWithCustomer>> {
    sqlx::query_as::<_, OrderWithCustomer>(
      "SELECT o.id, o.order_number, o.customer_id, o.product_id, o.product_name, \
       o.price_paise, o.partner_share_paise, o.owner_share_paise, o.status, \
       o.payment_method, o.transaction_id, o.created_at, o.updated_at, \
       c.name AS customer_name, c.email AS customer_email, c.is_guest AS customer_is_guest \
       FROM orders o \
       LEFT JOIN customers c ON c.id = o.customer_id \
       ORDER BY o.created_at DESC",
    )
    .fetch_all(&self.pool)
    .await
    .map_err(|e| {
      error!(error = %e, "Database error while fetching orders.");
      AppError::Sqlx(e)
    })
  }
}
