// src/stats.rs

//! The stats aggregator: summary metrics over a list of orders.
//!
//! [`compute`] is a pure reduction. Given the same order list and the same
//! `now`, it returns the same summary; it never touches the store or the
//! wall clock itself. Callers pass the current local time in (the server
//! passes `Local::now()`, tests pass a fixed offset).

use chrono::{DateTime, Datelike, Duration, NaiveTime, TimeZone};

use crate::models::{Order, OrderStatus};

/// Summary metrics for the dashboard. Only `completed` orders contribute;
/// pending and refunded orders are excluded from every field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OrderStats {
  /// Sum of `price_paise` over completed orders.
  pub total_revenue_paise: i64,
  /// Number of completed orders.
  pub total_orders: u64,
  /// Completed orders created since local midnight.
  pub today_orders: u64,
  /// Completed orders created since the first of the current month.
  pub month_orders: u64,
  /// Sum of the stored partner shares over completed orders.
  pub partner_share_paise: i64,
  /// Sum of the stored owner shares over completed orders.
  pub owner_share_paise: i64,
}

/// Computes the order summary as of `now`.
///
/// The two calendar cutoffs (start of today and start of the month, both
/// at midnight in `now`'s timezone) are fixed once per call; an order
/// counts towards a window when its creation timestamp is `>=` the cutoff.
/// An empty input yields the all-zero summary.
pub fn compute<'a, Tz, I>(orders: I, now: DateTime<Tz>) -> OrderStats
where
  Tz: TimeZone,
  I: IntoIterator<Item = &'a Order>,
{
  let today_start = now.naive_local().date().and_time(NaiveTime::MIN);
  // Walking back (day-of-month - 1) days from today's midnight lands on the
  // first of the month without any fallible date construction.
  let month_start = today_start - Duration::days(i64::from(now.day0()));

  let tz = now.timezone();
  let mut stats = OrderStats::default();

  for order in orders {
    if order.status != OrderStatus::Completed {
      continue;
    }

    stats.total_revenue_paise += order.price_paise;
    stats.total_orders += 1;
    stats.partner_share_paise += order.partner_share_paise;
    stats.owner_share_paise += order.owner_share_paise;

    let created_local = order.created_at.with_timezone(&tz).naive_local();
    if created_local >= today_start {
      stats.today_orders += 1;
    }
    if created_local >= month_start {
      stats.month_orders += 1;
    }
  }

  stats
}
