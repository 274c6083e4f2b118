// src/store/mod.rs

//! The order-store collaborator.
//!
//! [`OrderStore`] is the seam between the dashboard core and the relational
//! store holding the `customers` and `orders` tables. The server wires in
//! [`PgOrderStore`]; the test suites substitute an in-memory
//! implementation so intake and aggregation can be exercised without a
//! database.

pub mod pg;

pub use pg::PgOrderStore;

use async_trait::async_trait;

use crate::errors::Result;
use crate::models::{Customer, NewCustomer, NewOrder, Order, OrderWithCustomer};

#[async_trait]
pub trait OrderStore: Send + Sync {
  /// Inserts a customer and returns the created row (with its id).
  async fn insert_customer(&self, new_customer: NewCustomer) -> Result<Customer>;

  /// Inserts an order referencing an existing customer and returns the
  /// created row.
  async fn insert_order(&self, new_order: NewOrder) -> Result<Order>;

  /// Fetches every order joined with its customer, newest first.
  async fn list_orders(&self) -> Result<Vec<OrderWithCustomer>>;
}
