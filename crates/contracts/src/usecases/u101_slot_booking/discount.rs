use crate::domain::a002_plan::aggregate::PlanId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Resolve a promo code against a plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountCheckRequest {
    pub code: String,
    pub plan_id: PlanId,
}

/// Resolution of a promo code.
///
/// An unknown code is a valid response (`valid: false`, zero amount), not
/// an error: the storefront proceeds without a discount.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountCheckResponse {
    pub valid: bool,
    pub amount: Decimal,
}

impl DiscountCheckResponse {
    pub fn none() -> Self {
        Self {
            valid: false,
            amount: Decimal::ZERO,
        }
    }
}
