// src/models/mod.rs

//! Data structures representing the order-store entities.

pub mod customer;
pub mod order;

// Re-export the model structs for convenient access
pub use customer::{Customer, NewCustomer};
pub use order::{NewOrder, Order, OrderStatus, OrderWithCustomer, PaymentMethod};
