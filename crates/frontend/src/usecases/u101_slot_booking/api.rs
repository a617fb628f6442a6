use contracts::domain::a003_order::aggregate::{Order, OrderId};
use contracts::domain::common::EntityId;
use contracts::usecases::u101_slot_booking::{
    AvailabilityQuery, AvailabilityStatus, DiscountCheckRequest, DiscountCheckResponse,
    OrderInitiateRequest, OrderInitiateResponse, PaymentProof, VerifyPaymentRequest,
    VerifyPaymentResponse,
};
use futures::FutureExt;
use std::rc::Rc;

use crate::shared::api_utils::ApiError;
use crate::system::auth::context::SessionState;
use crate::usecases::u101_slot_booking::availability::LookupFn;

/// Probe one (location, plan, date) slot.
pub async fn fetch_availability(
    session: SessionState,
    query: AvailabilityQuery,
) -> Result<AvailabilityStatus, ApiError> {
    session
        .get(&format!("/api/availability?{}", query.to_query_string()))
        .await
}

/// Package the availability endpoint as the cache's lookup function.
pub fn availability_lookup(session: SessionState) -> LookupFn {
    Rc::new(move |query: AvailabilityQuery| {
        async move {
            let status = fetch_availability(session, query).await?;
            Ok(status.is_available)
        }
        .boxed_local()
    })
}

/// Resolve a promo code. Best-effort: any failure reads as "no discount"
/// so the wizard never blocks on this endpoint.
pub async fn check_discount(
    session: SessionState,
    request: &DiscountCheckRequest,
) -> DiscountCheckResponse {
    match session.post("/api/discount/check", request).await {
        Ok(response) => response,
        Err(e) => {
            log::warn!("discount check failed, proceeding without one: {}", e);
            DiscountCheckResponse::none()
        }
    }
}

/// Create the order server-side and obtain the payment session for the
/// hosted checkout. The backend re-validates the whole draft.
pub async fn initiate_order(
    session: SessionState,
    request: &OrderInitiateRequest,
) -> Result<OrderInitiateResponse, ApiError> {
    session.post("/api/orders", request).await
}

/// Hand the widget's completion proof to the backend for signature
/// verification. Answers with the updated order projection.
pub async fn verify_payment(
    session: SessionState,
    id: OrderId,
    proof: PaymentProof,
) -> Result<Order, ApiError> {
    let response: VerifyPaymentResponse = session
        .post(
            &format!("/api/orders/{}/verify-payment", id.as_string()),
            &VerifyPaymentRequest { proof },
        )
        .await?;
    Ok(response.order)
}
