//! Hosted-checkout handoff.
//!
//! The payment widget belongs to the host page; the client only opens it
//! and reacts to its two callbacks. Completion hands back a proof that is
//! verified with the backend before anything is treated as paid;
//! dismissal leaves the order pre-payment with no verification request.

use contracts::domain::a003_order::aggregate::Order;
use contracts::usecases::u101_slot_booking::PaymentProof;
use futures::channel::oneshot;
use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsValue;

use crate::shared::date_utils::format_date;
use crate::shared::money_utils::format_inr;

/// Where the handoff stands. Stepped only through [`next_phase`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentPhase {
    Idle,
    WidgetOpen,
    /// Proof received, backend verification in flight. Not cancellable.
    Verifying,
    Paid,
    Failed(String),
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentEvent {
    WidgetOpened,
    WidgetCompleted,
    WidgetDismissed,
    VerificationPassed,
    VerificationFailed(String),
    /// Offered from terminal phases only (try again / book another).
    Reset,
}

pub fn next_phase(phase: PaymentPhase, event: PaymentEvent) -> PaymentPhase {
    use PaymentEvent as E;
    use PaymentPhase as P;
    match (phase, event) {
        (P::Idle, E::WidgetOpened) => P::WidgetOpen,
        (P::WidgetOpen, E::WidgetCompleted) => P::Verifying,
        (P::WidgetOpen, E::WidgetDismissed) => P::Cancelled,
        (P::Verifying, E::VerificationPassed) => P::Paid,
        (P::Verifying, E::VerificationFailed(reason)) => P::Failed(reason),
        (P::Paid, E::Reset) | (P::Failed(_), E::Reset) | (P::Cancelled, E::Reset) => P::Idle,
        // Everything else, including any widget event during Verifying,
        // leaves the phase alone.
        (phase, _) => phase,
    }
}

/// What the widget needs to render its payment sheet.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutConfig {
    pub session_id: String,
    /// Human-readable order summary shown on the sheet.
    pub description: String,
    pub amount_label: String,
    pub customer_name: String,
    pub customer_email: String,
    /// Phone number from the signed-in profile, when the profile is loaded.
    pub customer_contact: Option<String>,
}

pub fn checkout_config(order: &Order, session_id: &str, contact: Option<String>) -> CheckoutConfig {
    CheckoutConfig {
        session_id: session_id.to_string(),
        description: format!(
            "{} on {}, {}",
            order.plan_name,
            order.location_name,
            format_date(order.display_date)
        ),
        amount_label: format_inr(order.total_amount),
        customer_name: order.customer_name.clone(),
        customer_email: order.customer_email.clone(),
        customer_contact: contact,
    }
}

/// Seam to the widget, so flows can run against a fake in tests.
pub trait CheckoutPort {
    fn open(
        &self,
        config: CheckoutConfig,
        on_complete: Box<dyn FnOnce(PaymentProof)>,
        on_dismiss: Box<dyn FnOnce()>,
    );
}

/// First widget event; later ones are discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetEvent {
    Completed(PaymentProof),
    Dismissed,
}

/// Open the widget and suspend until its first callback fires. A widget
/// that dies without calling either reads as dismissed.
pub async fn await_widget(port: &dyn CheckoutPort, config: CheckoutConfig) -> WidgetEvent {
    let (tx, rx) = oneshot::channel::<WidgetEvent>();
    let tx = Rc::new(RefCell::new(Some(tx)));
    let complete_tx = Rc::clone(&tx);
    let dismiss_tx = tx;
    port.open(
        config,
        Box::new(move |proof| {
            if let Some(tx) = complete_tx.borrow_mut().take() {
                let _ = tx.send(WidgetEvent::Completed(proof));
            }
        }),
        Box::new(move || {
            if let Some(tx) = dismiss_tx.borrow_mut().take() {
                let _ = tx.send(WidgetEvent::Dismissed);
            }
        }),
    );
    rx.await.unwrap_or(WidgetEvent::Dismissed)
}

#[wasm_bindgen]
extern "C" {
    /// Injected into the host page by the checkout provider's script.
    #[wasm_bindgen(js_name = openHostedCheckout)]
    fn open_hosted_checkout(options: JsValue, on_complete: JsValue, on_dismiss: JsValue);
}

/// Production binding to the host page's widget.
pub struct HostedCheckout;

impl CheckoutPort for HostedCheckout {
    fn open(
        &self,
        config: CheckoutConfig,
        on_complete: Box<dyn FnOnce(PaymentProof)>,
        on_dismiss: Box<dyn FnOnce()>,
    ) {
        let options = serde_wasm_bindgen::to_value(&config).unwrap_or(JsValue::NULL);
        let dismiss_for_bad_payload = Rc::new(RefCell::new(Some(on_dismiss)));
        let dismiss_for_widget = Rc::clone(&dismiss_for_bad_payload);

        let complete = Closure::once_into_js(move |payload: JsValue| {
            match serde_wasm_bindgen::from_value::<PaymentProof>(payload) {
                Ok(proof) => on_complete(proof),
                // No usable proof means nothing to verify; treat it like a
                // dismissal and let the dashboard pick the order up.
                Err(e) => {
                    log::error!("checkout completion payload did not parse: {}", e);
                    if let Some(dismiss) = dismiss_for_bad_payload.borrow_mut().take() {
                        dismiss();
                    }
                }
            }
        });
        let dismiss = Closure::once_into_js(move || {
            if let Some(dismiss) = dismiss_for_widget.borrow_mut().take() {
                dismiss();
            }
        });
        open_hosted_checkout(options, complete, dismiss);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    fn proof() -> PaymentProof {
        PaymentProof {
            payment_id: "pay_9FX2".to_string(),
            provider_order_id: "order_L4d1".to_string(),
            signature: "c2ln".to_string(),
        }
    }

    fn config() -> CheckoutConfig {
        CheckoutConfig {
            session_id: "sess_41".to_string(),
            description: "Prime Week on MG Road Gate, 14.09.2026".to_string(),
            amount_label: "₹16,495.22".to_string(),
            customer_name: "Asha Rao".to_string(),
            customer_email: "asha@example.com".to_string(),
            customer_contact: Some("+919876543210".to_string()),
        }
    }

    /// Fires the scripted callbacks synchronously inside `open`.
    struct FakePort {
        complete_with: RefCell<Option<PaymentProof>>,
        then_dismiss: bool,
    }

    impl CheckoutPort for FakePort {
        fn open(
            &self,
            _config: CheckoutConfig,
            on_complete: Box<dyn FnOnce(PaymentProof)>,
            on_dismiss: Box<dyn FnOnce()>,
        ) {
            if let Some(proof) = self.complete_with.borrow_mut().take() {
                on_complete(proof);
            }
            if self.then_dismiss {
                on_dismiss();
            }
        }
    }

    #[test]
    fn happy_path_walks_open_verify_paid() {
        let mut phase = PaymentPhase::Idle;
        phase = next_phase(phase, PaymentEvent::WidgetOpened);
        assert_eq!(phase, PaymentPhase::WidgetOpen);
        phase = next_phase(phase, PaymentEvent::WidgetCompleted);
        assert_eq!(phase, PaymentPhase::Verifying);
        phase = next_phase(phase, PaymentEvent::VerificationPassed);
        assert_eq!(phase, PaymentPhase::Paid);
    }

    #[test]
    fn dismissal_cancels_without_verification_phase() {
        let phase = next_phase(PaymentPhase::WidgetOpen, PaymentEvent::WidgetDismissed);
        assert_eq!(phase, PaymentPhase::Cancelled);
    }

    #[test]
    fn verifying_ignores_widget_events_and_reset() {
        let verifying = PaymentPhase::Verifying;
        assert_eq!(
            next_phase(verifying.clone(), PaymentEvent::WidgetDismissed),
            PaymentPhase::Verifying
        );
        assert_eq!(
            next_phase(verifying.clone(), PaymentEvent::Reset),
            PaymentPhase::Verifying
        );
        assert_eq!(
            next_phase(verifying, PaymentEvent::VerificationFailed("signature mismatch".into())),
            PaymentPhase::Failed("signature mismatch".to_string())
        );
    }

    #[test]
    fn terminal_phases_reset_to_idle() {
        for terminal in [
            PaymentPhase::Paid,
            PaymentPhase::Failed("declined".to_string()),
            PaymentPhase::Cancelled,
        ] {
            assert_eq!(next_phase(terminal, PaymentEvent::Reset), PaymentPhase::Idle);
        }
    }

    #[test]
    fn completion_event_reaches_the_awaiter() {
        let port = FakePort {
            complete_with: RefCell::new(Some(proof())),
            then_dismiss: false,
        };
        let event = block_on(await_widget(&port, config()));
        assert_eq!(event, WidgetEvent::Completed(proof()));
    }

    #[test]
    fn first_event_wins_when_the_widget_fires_both() {
        let port = FakePort {
            complete_with: RefCell::new(Some(proof())),
            then_dismiss: true,
        };
        let event = block_on(await_widget(&port, config()));
        assert_eq!(event, WidgetEvent::Completed(proof()));
    }

    #[test]
    fn dismissal_reaches_the_awaiter() {
        let port = FakePort {
            complete_with: RefCell::new(None),
            then_dismiss: true,
        };
        let event = block_on(await_widget(&port, config()));
        assert_eq!(event, WidgetEvent::Dismissed);
    }

    #[test]
    fn a_widget_that_never_calls_back_reads_as_dismissed() {
        let port = FakePort {
            complete_with: RefCell::new(None),
            then_dismiss: false,
        };
        let event = block_on(await_widget(&port, config()));
        assert_eq!(event, WidgetEvent::Dismissed);
    }
}
