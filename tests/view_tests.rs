// tests/view_tests.rs
mod common;
use common::*;

use qwb_dashboard::models::OrderStatus;
use qwb_dashboard::session::Role;
use qwb_dashboard::stats::OrderStats;
use qwb_dashboard::view::{OrderView, StatsView};

fn sample_stats() -> OrderStats {
  OrderStats {
    total_revenue_paise: 1_000,
    total_orders: 4,
    today_orders: 1,
    month_orders: 3,
    partner_share_paise: 300,
    owner_share_paise: 700,
  }
}

#[test]
fn test_stats_projection_shows_owner_roles_everything() {
  setup_tracing();
  let stats = sample_stats();

  for role in [Role::Standard, Role::Privileged] {
    let view = StatsView::project(role, &stats);
    assert_eq!(view.total_revenue_paise, 1_000);
    assert_eq!(view.total_orders, 4);
    assert_eq!(view.today_orders, 1);
    assert_eq!(view.month_orders, 3);
    assert_eq!(view.partner_share_paise, Some(300));
    assert_eq!(view.owner_share_paise, Some(700));
  }
}

#[test]
fn test_stats_projection_substitutes_partner_share_as_headline() {
  setup_tracing();
  let view = StatsView::project(Role::Partner, &sample_stats());

  // The partner's "revenue" is their own share; the counts are untouched.
  assert_eq!(view.total_revenue_paise, 300);
  assert_eq!(view.total_orders, 4);
  assert_eq!(view.today_orders, 1);
  assert_eq!(view.month_orders, 3);
  assert_eq!(view.partner_share_paise, None);
  assert_eq!(view.owner_share_paise, None);
}

#[test]
fn test_partner_stats_json_omits_the_share_breakdown() {
  setup_tracing();
  let view = StatsView::project(Role::Partner, &sample_stats());
  let value = serde_json::to_value(&view).unwrap();
  let object = value.as_object().unwrap();

  // Withheld fields are absent from the payload, not null or zero.
  assert!(!object.contains_key("partnerSharePaise"));
  assert!(!object.contains_key("ownerSharePaise"));
  assert_eq!(object["totalRevenuePaise"], 300);
  assert_eq!(object["totalOrders"], 4);
  assert_eq!(object["todayOrders"], 1);
  assert_eq!(object["monthOrders"], 3);
}

#[test]
fn test_owner_stats_json_carries_the_share_breakdown() {
  setup_tracing();
  let view = StatsView::project(Role::Privileged, &sample_stats());
  let value = serde_json::to_value(&view).unwrap();
  let object = value.as_object().unwrap();

  assert_eq!(object["totalRevenuePaise"], 1_000);
  assert_eq!(object["partnerSharePaise"], 300);
  assert_eq!(object["ownerSharePaise"], 700);
}

#[test]
fn test_order_projection_amount_depends_on_role() {
  setup_tracing();
  let order = completed_order_at(29_900, ist_time(2026, 3, 15, 9, 0));
  let row = row_with_customer(order, "Asha Rao", Some("asha@example.com"));

  let partner_view = OrderView::project(Role::Partner, &row);
  assert_eq!(partner_view.amount_paise, 8_970);

  for role in [Role::Standard, Role::Privileged] {
    let view = OrderView::project(role, &row);
    assert_eq!(view.amount_paise, 29_900);
  }
}

#[test]
fn test_order_projection_carries_customer_and_order_fields() {
  setup_tracing();
  let order = completed_order_at(5_000, ist_time(2026, 3, 15, 9, 0));
  let expected_number = order.order_number.clone();
  let row = row_with_customer(order, "Asha Rao", Some("asha@example.com"));

  let view = OrderView::project(Role::Privileged, &row);
  assert_eq!(view.customer_name, "Asha Rao");
  assert_eq!(view.product_name, "Complete Question Pack");
  assert_eq!(view.order_number, expected_number);
  assert_eq!(view.status, OrderStatus::Completed);
}

#[test]
fn test_order_projection_falls_back_to_guest_label() {
  setup_tracing();
  let order = completed_order_at(5_000, ist_time(2026, 3, 15, 9, 0));
  let row = row_without_customer(order);

  let view = OrderView::project(Role::Standard, &row);
  assert_eq!(view.customer_name, "Guest User");
}

#[test]
fn test_order_json_uses_store_field_spellings() {
  setup_tracing();
  let order = completed_order_at(5_000, ist_time(2026, 3, 15, 9, 0));
  let row = row_with_customer(order, "Asha Rao", None);

  let view = OrderView::project(Role::Standard, &row);
  let value = serde_json::to_value(&view).unwrap();
  let object = value.as_object().unwrap();

  assert!(object.contains_key("order_number"));
  assert!(object.contains_key("customer_name"));
  assert!(object.contains_key("amount_paise"));
  assert!(object.contains_key("created_at"));
  assert_eq!(object["status"], "completed");
}
