use crate::domain::a001_location::aggregate::LocationId;
use crate::domain::a002_plan::aggregate::PlanId;
use crate::domain::common::EntityId;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier of a booking order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub Uuid);

impl OrderId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl EntityId for OrderId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(OrderId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Lifecycle of an order as asserted by the backend.
///
/// The client never computes transitions. It only displays the current
/// status and restricts which actions it offers for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    PendingPayment,
    PendingApproval,
    DesignRevise,
    PendingDisplay,
    InDisplay,
    Completed,
    CancelledForfeited,
    CancelledRefunded,
}

impl OrderStatus {
    /// Wire code, as it appears in JSON.
    pub fn code(&self) -> &'static str {
        match self {
            OrderStatus::PendingPayment => "pending_payment",
            OrderStatus::PendingApproval => "pending_approval",
            OrderStatus::DesignRevise => "design_revise",
            OrderStatus::PendingDisplay => "pending_display",
            OrderStatus::InDisplay => "in_display",
            OrderStatus::Completed => "completed",
            OrderStatus::CancelledForfeited => "cancelled_forfeited",
            OrderStatus::CancelledRefunded => "cancelled_refunded",
        }
    }

    /// Human-readable label for badges and tables.
    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::PendingPayment => "Pending payment",
            OrderStatus::PendingApproval => "Pending approval",
            OrderStatus::DesignRevise => "Design revision requested",
            OrderStatus::PendingDisplay => "Scheduled for display",
            OrderStatus::InDisplay => "In display",
            OrderStatus::Completed => "Completed",
            OrderStatus::CancelledForfeited => "Cancelled (forfeited)",
            OrderStatus::CancelledRefunded => "Cancelled (refunded)",
        }
    }

    pub fn all() -> Vec<OrderStatus> {
        vec![
            OrderStatus::PendingPayment,
            OrderStatus::PendingApproval,
            OrderStatus::DesignRevise,
            OrderStatus::PendingDisplay,
            OrderStatus::InDisplay,
            OrderStatus::Completed,
            OrderStatus::CancelledForfeited,
            OrderStatus::CancelledRefunded,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }

    /// The customer may open the payment widget again.
    pub fn can_pay(&self) -> bool {
        matches!(self, OrderStatus::PendingPayment)
    }

    /// The customer may upload a replacement creative.
    pub fn can_reupload_creative(&self) -> bool {
        matches!(self, OrderStatus::DesignRevise)
    }

    /// The customer may still walk away from the order.
    pub fn can_cancel(&self) -> bool {
        matches!(
            self,
            OrderStatus::PendingPayment | OrderStatus::PendingApproval
        )
    }

    /// No further transitions will arrive from the backend.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            OrderStatus::Completed
                | OrderStatus::CancelledForfeited
                | OrderStatus::CancelledRefunded
        )
    }
}

impl ToString for OrderStatus {
    fn to_string(&self) -> String {
        self.code().to_string()
    }
}

/// Decisions the admin console may send for an order.
///
/// These are verbs, not target states: the backend decides whether the
/// transition is legal for the order's current status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminDecision {
    Approve,
    RequestDesignRevision,
    MarkInDisplay,
    MarkCompleted,
    CancelForfeit,
    CancelRefund,
}

impl AdminDecision {
    pub fn code(&self) -> &'static str {
        match self {
            AdminDecision::Approve => "approve",
            AdminDecision::RequestDesignRevision => "request_design_revision",
            AdminDecision::MarkInDisplay => "mark_in_display",
            AdminDecision::MarkCompleted => "mark_completed",
            AdminDecision::CancelForfeit => "cancel_forfeit",
            AdminDecision::CancelRefund => "cancel_refund",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AdminDecision::Approve => "Approve creative",
            AdminDecision::RequestDesignRevision => "Request design revision",
            AdminDecision::MarkInDisplay => "Mark in display",
            AdminDecision::MarkCompleted => "Mark completed",
            AdminDecision::CancelForfeit => "Cancel, forfeit payment",
            AdminDecision::CancelRefund => "Cancel and refund",
        }
    }

    /// Which decisions the console offers for an order in `status`.
    pub fn offered_for(status: OrderStatus) -> Vec<AdminDecision> {
        match status {
            OrderStatus::PendingApproval => vec![
                AdminDecision::Approve,
                AdminDecision::RequestDesignRevision,
                AdminDecision::CancelRefund,
            ],
            OrderStatus::DesignRevise => vec![AdminDecision::CancelRefund],
            OrderStatus::PendingDisplay => {
                vec![AdminDecision::MarkInDisplay, AdminDecision::CancelRefund]
            }
            OrderStatus::InDisplay => vec![AdminDecision::MarkCompleted],
            OrderStatus::PendingPayment => vec![AdminDecision::CancelForfeit],
            OrderStatus::Completed
            | OrderStatus::CancelledForfeited
            | OrderStatus::CancelledRefunded => Vec::new(),
        }
    }
}

/// Read-only projection of a booking order.
///
/// Amounts are what the backend charged (or will charge); the client never
/// recomputes them for stored orders.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    /// Business code shown to the customer, e.g. "AD-2025-00173".
    pub code: String,
    pub status: OrderStatus,
    pub location_id: LocationId,
    pub location_name: String,
    pub plan_id: PlanId,
    pub plan_name: String,
    /// First display date of the booked run.
    pub display_date: NaiveDate,
    pub base_amount: Decimal,
    pub discount_amount: Decimal,
    pub tax_amount: Decimal,
    pub total_amount: Decimal,
    /// Remote storage path of the creative currently attached to the order.
    pub creative_path: Option<String>,
    /// Set while the order still awaits payment.
    pub payment_session_id: Option<String>,
    pub customer_name: String,
    pub customer_email: String,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /api/admin/orders/{id}/decision`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDecisionRequest {
    pub decision: AdminDecision,
    /// Shown to the customer, e.g. the reason a revision was requested.
    pub note: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_round_trip() {
        for status in OrderStatus::all() {
            assert_eq!(OrderStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(OrderStatus::from_code("launched"), None);
    }

    #[test]
    fn customer_actions_are_gated_by_status() {
        assert!(OrderStatus::PendingPayment.can_pay());
        assert!(OrderStatus::PendingPayment.can_cancel());
        assert!(!OrderStatus::PendingPayment.can_reupload_creative());

        assert!(OrderStatus::DesignRevise.can_reupload_creative());
        assert!(!OrderStatus::DesignRevise.can_pay());

        for status in [
            OrderStatus::Completed,
            OrderStatus::CancelledForfeited,
            OrderStatus::CancelledRefunded,
        ] {
            assert!(status.is_terminal());
            assert!(!status.can_pay());
            assert!(!status.can_cancel());
            assert!(!status.can_reupload_creative());
        }
    }

    #[test]
    fn terminal_statuses_offer_no_admin_decisions() {
        for status in OrderStatus::all() {
            let offered = AdminDecision::offered_for(status);
            assert_eq!(status.is_terminal(), offered.is_empty());
        }
    }

    #[test]
    fn approval_queue_offers_review_decisions() {
        let offered = AdminDecision::offered_for(OrderStatus::PendingApproval);
        assert!(offered.contains(&AdminDecision::Approve));
        assert!(offered.contains(&AdminDecision::RequestDesignRevision));
        assert!(!offered.contains(&AdminDecision::MarkCompleted));
    }

    #[test]
    fn decisions_serialize_to_their_wire_codes() {
        for status in OrderStatus::all() {
            for decision in AdminDecision::offered_for(status) {
                let json = serde_json::to_string(&decision).unwrap();
                assert_eq!(json, format!("\"{}\"", decision.code()));
            }
        }
    }
}
