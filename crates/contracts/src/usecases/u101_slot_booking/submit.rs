use crate::domain::a001_location::aggregate::LocationId;
use crate::domain::a002_plan::aggregate::PlanId;
use crate::domain::a003_order::aggregate::Order;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Tax-registration details attached to an order when the customer books
/// on behalf of a registered business.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxRegistrationDto {
    pub company_name: String,
    pub registration_number: String,
}

/// Body of `POST /api/orders`: the assembled draft, packaged for creation.
///
/// The backend re-validates everything here: slot availability, price,
/// discount and tax are recomputed server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderInitiateRequest {
    pub location_id: LocationId,
    pub plan_id: PlanId,
    pub display_date: NaiveDate,
    /// Storage path returned by the signed upload.
    pub creative_path: String,
    pub billing_address: String,
    pub tax_registration: Option<TaxRegistrationDto>,
    pub discount_code: Option<String>,
}

/// Successful creation: the order record plus the provider-issued
/// payment-session identifier to hand to the hosted checkout widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderInitiateResponse {
    pub order: Order,
    pub payment_session_id: String,
}

/// What the hosted widget hands back in its completion callback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentProof {
    pub payment_id: String,
    pub provider_order_id: String,
    pub signature: String,
}

/// `POST /api/orders/{id}/verify-payment`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyPaymentRequest {
    pub proof: PaymentProof,
}

/// Verification outcome; carries the updated order projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyPaymentResponse {
    pub order: Order,
}
