// src/view.rs

//! The view selector: role-based projections of the aggregated stats and
//! of individual order rows.
//!
//! Projection is pure field selection and substitution; nothing here
//! recomputes a metric. The partner's headline revenue is their own share,
//! and the share breakdown is withheld from them entirely (the fields are
//! absent, not zeroed, so they never reach the wire).

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{OrderStatus, OrderWithCustomer};
use crate::session::Role;
use crate::stats::OrderStats;

/// Customer label shown when an order row has no joined customer.
const GUEST_CUSTOMER_LABEL: &str = "Guest User";

/// The dashboard metrics as exposed to one role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsView {
  /// Total revenue for owners; the partner's own share for partners.
  pub total_revenue_paise: i64,
  pub total_orders: u64,
  pub today_orders: u64,
  pub month_orders: u64,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub partner_share_paise: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub owner_share_paise: Option<i64>,
}

impl StatsView {
  /// Selects the metrics `role` is allowed to see.
  pub fn project(role: Role, stats: &OrderStats) -> Self {
    if role.is_partner() {
      StatsView {
        total_revenue_paise: stats.partner_share_paise,
        total_orders: stats.total_orders,
        today_orders: stats.today_orders,
        month_orders: stats.month_orders,
        partner_share_paise: None,
        owner_share_paise: None,
      }
    } else {
      StatsView {
        total_revenue_paise: stats.total_revenue_paise,
        total_orders: stats.total_orders,
        today_orders: stats.today_orders,
        month_orders: stats.month_orders,
        partner_share_paise: Some(stats.partner_share_paise),
        owner_share_paise: Some(stats.owner_share_paise),
      }
    }
  }
}

/// One order row as rendered in the recent-orders list. Field spellings
/// match what the dashboard frontend has always read off the store rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderView {
  pub id: Uuid,
  pub order_number: String,
  pub customer_name: String,
  pub product_name: String,
  /// The partner sees their share of the order; everyone else sees the price.
  pub amount_paise: i64,
  pub status: OrderStatus,
  pub created_at: DateTime<Utc>,
}

impl OrderView {
  pub fn project(role: Role, row: &OrderWithCustomer) -> Self {
    let amount_paise = if role.is_partner() {
      row.order.partner_share_paise
    } else {
      row.order.price_paise
    };
    OrderView {
      id: row.order.id,
      order_number: row.order.order_number.clone(),
      customer_name: row
        .customer_name
        .clone()
        .unwrap_or_else(|| GUEST_CUSTOMER_LABEL.to_string()),
      product_name: row.order.product_name.clone(),
      amount_paise,
      status: row.order.status,
      created_at: row.order.created_at,
    }
  }
}
