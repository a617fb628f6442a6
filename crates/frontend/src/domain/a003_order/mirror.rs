//! Local mirror of the customer's orders.
//!
//! The dashboard paints from this snapshot instantly on load, then the
//! server list replaces it. The mirror is display cache only: no action is
//! ever decided from it, and it is wiped with the session.

use contracts::domain::a003_order::aggregate::Order;

use crate::shared::storage_utils;

const MIRROR_KEY: &str = "a003_order_mirror";

/// Last known list of the customer's orders, newest first.
pub fn restore() -> Vec<Order> {
    storage_utils::load_json(MIRROR_KEY).unwrap_or_default()
}

/// Replace the mirror with a fresh server list.
pub fn snapshot(orders: &[Order]) {
    storage_utils::save_json(MIRROR_KEY, &orders);
}

/// Fold one updated order into the mirror (after submit, payment or an
/// action that returned the refreshed projection).
pub fn upsert(order: &Order) {
    let merged = merge_order(restore(), order.clone());
    snapshot(&merged);
}

/// Drop the mirror entirely. Called by session teardown.
pub fn clear_mirror() {
    storage_utils::remove_key(MIRROR_KEY);
}

/// Replace the matching order in place, or prepend a new one.
pub fn merge_order(mut orders: Vec<Order>, incoming: Order) -> Vec<Order> {
    match orders.iter_mut().find(|o| o.id == incoming.id) {
        Some(existing) => *existing = incoming,
        None => orders.insert(0, incoming),
    }
    orders
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use contracts::domain::a001_location::aggregate::LocationId;
    use contracts::domain::a002_plan::aggregate::PlanId;
    use contracts::domain::a003_order::aggregate::{OrderId, OrderStatus};
    use rust_decimal::Decimal;
    use uuid::Uuid;

    fn order(id: u128, code: &str, status: OrderStatus) -> Order {
        Order {
            id: OrderId::new(Uuid::from_u128(id)),
            code: code.to_string(),
            status,
            location_id: LocationId::new(Uuid::from_u128(0x10c)),
            location_name: "MG Road Gateway".to_string(),
            plan_id: PlanId::new(Uuid::from_u128(0x91a)),
            plan_name: "Prime Week".to_string(),
            display_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            base_amount: Decimal::from(13999),
            discount_amount: Decimal::from(20),
            tax_amount: Decimal::new(251622, 2),
            total_amount: Decimal::new(1649522, 2),
            creative_path: Some("creatives/mg-road.png".to_string()),
            payment_session_id: None,
            customer_name: "Asha Rao".to_string(),
            customer_email: "asha@example.com".to_string(),
            created_at: Utc.with_ymd_and_hms(2026, 8, 20, 10, 0, 0).unwrap(),
        }
    }

    #[test]
    fn unknown_orders_are_prepended() {
        let merged = merge_order(vec![order(1, "AD-1", OrderStatus::Completed)], order(2, "AD-2", OrderStatus::PendingPayment));
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].code, "AD-2");
        assert_eq!(merged[1].code, "AD-1");
    }

    #[test]
    fn known_orders_are_replaced_in_place() {
        let start = vec![
            order(1, "AD-1", OrderStatus::PendingPayment),
            order(2, "AD-2", OrderStatus::InDisplay),
        ];
        let merged = merge_order(start, order(1, "AD-1", OrderStatus::PendingApproval));
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].status, OrderStatus::PendingApproval);
        assert_eq!(merged[1].code, "AD-2");
    }
}
