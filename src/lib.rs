// src/lib.rs

//! qwb-dashboard: the admin dashboard backend for question-pack orders.
//!
//! The service is a thin CRUD and reporting layer over the relational
//! order store:
//!  - Order intake validates a draft and performs the two-step
//!    customer-then-order write.
//!  - The stats aggregator reduces the order list to the dashboard
//!    summary (revenue, counts, revenue shares).
//!  - The view selector projects the summary and the order rows per
//!    operator role (partner vs owner views).
//!  - Sessions are held in an in-memory registry; operator accounts come
//!    from configuration.

pub mod catalog;
pub mod config;
pub mod errors;
pub mod intake;
pub mod models;
pub mod revenue;
pub mod services;
pub mod session;
pub mod state;
pub mod stats;
pub mod store;
pub mod view;
pub mod web;

// --- Re-exports for the Public API ---

pub use crate::config::AppConfig;
pub use crate::errors::{AppError, Result};
pub use crate::intake::OrderDraft;
pub use crate::models::{Customer, Order, OrderStatus, OrderWithCustomer, PaymentMethod};
pub use crate::session::{Role, SessionRegistry};
pub use crate::stats::OrderStats;
pub use crate::store::{OrderStore, PgOrderStore};
pub use crate::view::{OrderView, StatsView};
