// src/revenue.rs

//! Revenue-share arithmetic.
//!
//! Every order's price is split between the two stakeholders: 30% to the
//! partner, the remainder to the owner. The split is computed once, at
//! intake, and stored on the order row; downstream aggregation consumes the
//! stored values without recomputing them.

/// Partner percentage of an order's price.
pub const PARTNER_SHARE_PERCENT: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevenueSplit {
  pub partner_paise: i64,
  pub owner_paise: i64,
}

/// Splits a price into partner and owner shares.
///
/// The partner share rounds down to whole paise; the owner share is the
/// remainder, so `partner + owner == price` holds for every input.
pub fn split(price_paise: i64) -> RevenueSplit {
  let partner_paise = price_paise * PARTNER_SHARE_PERCENT / 100;
  RevenueSplit {
    partner_paise,
    owner_paise: price_paise - partner_paise,
  }
}
