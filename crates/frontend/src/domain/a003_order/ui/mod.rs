use crate::shared::list_utils::{Searchable, Sortable};
use contracts::domain::a003_order::aggregate::{Order, OrderStatus};
use std::cmp::Ordering;
use thaw::BadgeColor;

pub mod admin;
pub mod details;
pub mod list;

/// Badge color for an order status.
pub fn status_badge_color(status: OrderStatus) -> BadgeColor {
    match status {
        OrderStatus::PendingPayment => BadgeColor::Warning,
        OrderStatus::PendingApproval => BadgeColor::Brand,
        OrderStatus::DesignRevise => BadgeColor::Important,
        OrderStatus::PendingDisplay => BadgeColor::Informative,
        OrderStatus::InDisplay => BadgeColor::Success,
        OrderStatus::Completed => BadgeColor::Subtle,
        OrderStatus::CancelledForfeited | OrderStatus::CancelledRefunded => BadgeColor::Danger,
    }
}

impl Sortable for Order {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "code" => self.code.cmp(&other.code),
            "location" => self
                .location_name
                .to_lowercase()
                .cmp(&other.location_name.to_lowercase()),
            "plan" => self
                .plan_name
                .to_lowercase()
                .cmp(&other.plan_name.to_lowercase()),
            "display_date" => self.display_date.cmp(&other.display_date),
            "total" => self.total_amount.cmp(&other.total_amount),
            "status" => self.status.display_name().cmp(other.status.display_name()),
            "created_at" => self.created_at.cmp(&other.created_at),
            _ => Ordering::Equal,
        }
    }
}

impl Searchable for Order {
    fn matches_filter(&self, filter: &str) -> bool {
        let needle = filter.to_lowercase();
        self.code.to_lowercase().contains(&needle)
            || self.location_name.to_lowercase().contains(&needle)
            || self.plan_name.to_lowercase().contains(&needle)
            || self.customer_name.to_lowercase().contains(&needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_statuses_map_to_muted_colors() {
        assert!(matches!(
            status_badge_color(OrderStatus::Completed),
            BadgeColor::Subtle
        ));
        assert!(matches!(
            status_badge_color(OrderStatus::CancelledForfeited),
            BadgeColor::Danger
        ));
        assert!(matches!(
            status_badge_color(OrderStatus::CancelledRefunded),
            BadgeColor::Danger
        ));
    }
}
