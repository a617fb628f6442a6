use contracts::domain::a003_order::aggregate::{
    AdminDecision, Order, OrderDecisionRequest, OrderId, OrderStatus,
};
use contracts::domain::common::EntityId;
use serde::Serialize;

use crate::shared::api_utils::ApiError;
use crate::system::auth::context::SessionState;

/// Fetch the signed-in customer's own orders, newest first.
pub async fn fetch_my_orders(session: SessionState) -> Result<Vec<Order>, ApiError> {
    session.get("/api/orders").await
}

/// Fetch one order the customer owns.
pub async fn fetch_order(session: SessionState, id: OrderId) -> Result<Order, ApiError> {
    session.get(&format!("/api/orders/{}", id.as_string())).await
}

/// Customer-side cancel. Only offered while the order is still pending;
/// the backend decides whether the attempt is still legal.
pub async fn cancel_order(session: SessionState, id: OrderId) -> Result<Order, ApiError> {
    session
        .post_empty(&format!("/api/orders/{}/cancel", id.as_string()))
        .await
}

#[derive(Serialize)]
struct ReuploadCreativeRequest<'a> {
    path: &'a str,
}

/// Swap in a freshly uploaded creative after a design-revision request.
pub async fn reupload_creative(
    session: SessionState,
    id: OrderId,
    path: &str,
) -> Result<Order, ApiError> {
    session
        .post(
            &format!("/api/orders/{}/creative", id.as_string()),
            &ReuploadCreativeRequest { path },
        )
        .await
}

/// Admin: fetch every order, optionally narrowed to one status.
pub async fn fetch_all_orders(
    session: SessionState,
    status: Option<OrderStatus>,
) -> Result<Vec<Order>, ApiError> {
    let path = match status {
        Some(s) => format!("/api/admin/orders?status={}", s.code()),
        None => "/api/admin/orders".to_string(),
    };
    session.get(&path).await
}

/// Admin: submit a decision verb for one order. The backend owns transition
/// legality and answers with the updated projection.
pub async fn submit_decision(
    session: SessionState,
    id: OrderId,
    decision: AdminDecision,
    note: Option<String>,
) -> Result<Order, ApiError> {
    session
        .post(
            &format!("/api/admin/orders/{}/decision", id.as_string()),
            &OrderDecisionRequest { decision, note },
        )
        .await
}
