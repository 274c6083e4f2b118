// src/catalog.rs

//! The fixed product catalog.
//!
//! The dashboard sells a closed set of question packs; there is no product
//! administration surface. Prices live here, in code, and order intake
//! derives the order price exclusively from this table so a caller can
//! never free-type an amount.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Product {
  pub id: &'static str,
  pub name: &'static str,
  pub price_paise: i64,
}

pub static PRODUCTS: [Product; 3] = [
  Product {
    id: "complete-pack",
    name: "Complete Question Pack",
    price_paise: 29_900,
  },
  Product {
    id: "important-pack",
    name: "Important Pack",
    price_paise: 5_000,
  },
  Product {
    id: "guest-pack",
    name: "Guest Pack",
    price_paise: 5_000,
  },
];

/// Looks up a catalog entry by its identifier.
pub fn find(product_id: &str) -> Option<&'static Product> {
  PRODUCTS.iter().find(|p| p.id == product_id)
}
