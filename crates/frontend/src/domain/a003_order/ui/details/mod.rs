use crate::domain::a003_order::api as order_api;
use crate::domain::a003_order::mirror;
use crate::domain::a003_order::ui::status_badge_color;
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::shared::api_utils::ApiError;
use crate::shared::date_utils::{format_date, format_timestamp};
use crate::shared::icons::icon;
use crate::shared::money_utils::format_inr;
use crate::shared::page_frame::PageFrame;
use crate::system::auth::context::use_session;
use crate::usecases::u101_slot_booking::api as booking_api;
use crate::usecases::u101_slot_booking::payment::{self, WidgetEvent};
use crate::usecases::u101_slot_booking::upload::{self, CreativeKind};
use contracts::domain::a003_order::aggregate::{Order, OrderId, OrderStatus};
use contracts::domain::common::EntityId;
use leptos::prelude::*;
use leptos::task::spawn_local;
use rust_decimal::Decimal;
use thaw::*;

fn status_hint(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::PendingPayment => "Awaiting payment. The slot is held while this order is open.",
        OrderStatus::PendingApproval => "The creative is with the review team.",
        OrderStatus::DesignRevise => "The review team asked for changes to the creative.",
        OrderStatus::PendingDisplay => "Approved. Waiting for the display date.",
        OrderStatus::InDisplay => "Running on screen.",
        OrderStatus::Completed => "The display run finished.",
        OrderStatus::CancelledForfeited => "Cancelled without refund.",
        OrderStatus::CancelledRefunded => "Cancelled and refunded.",
    }
}

fn creative_file_name(path: &str) -> String {
    path.rsplit('/').next().unwrap_or(path).to_string()
}

/// Full view of one order: summary, price breakdown, creative, actions.
#[component]
pub fn OrderDetails(id: String) -> impl IntoView {
    let session = use_session();
    let tabs_store =
        use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let Ok(order_id) = OrderId::from_string(&id) else {
        return view! {
            <PageFrame page_id="a003_order--detail" category="detail">
                <div class="warning-box">
                    <span class="warning-box__icon">{icon("alert")}</span>
                    <span class="warning-box__text">"This order link is not valid."</span>
                </div>
                <button class="button button--secondary" on:click=move |_| tabs_store.open(Page::Orders)>
                    "Back to orders"
                </button>
            </PageFrame>
        }
        .into_any();
    };

    let cached = mirror::restore().into_iter().find(|o| o.id == order_id);
    let (order, set_order) = signal::<Option<Order>>(cached);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (busy, set_busy) = signal(false);
    let (verifying, set_verifying) = signal(false);

    // Re-upload state. The accepted file stays around so a failed upload
    // can be retried without picking it again.
    let (selected_file, set_selected_file) = signal::<Option<upload::CreativeFile>>(None);
    let (upload_error, set_upload_error) = signal::<Option<String>>(None);

    let apply_update = move |updated: Order| {
        mirror::upsert(&updated);
        set_order.set(Some(updated));
    };

    let fetch = move || {
        spawn_local(async move {
            set_loading.set(true);
            match order_api::fetch_order(session, order_id).await {
                Ok(fresh) => {
                    mirror::upsert(&fresh);
                    set_order.set(Some(fresh));
                    set_error.set(None);
                }
                Err(ApiError::Unauthorized) => {}
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_loading.set(false);
        });
    };

    let pay_now = move |current: Order| {
        let Some(session_id) = current.payment_session_id.clone() else {
            set_error.set(Some(
                "This order has no open payment session. Refresh and try again.".to_string(),
            ));
            return;
        };
        spawn_local(async move {
            set_busy.set(true);
            let contact = session.profile.get_untracked().map(|u| u.phone);
            let config = payment::checkout_config(&current, &session_id, contact);
            match payment::await_widget(&payment::HostedCheckout, config).await {
                WidgetEvent::Dismissed => {}
                WidgetEvent::Completed(proof) => {
                    set_verifying.set(true);
                    match booking_api::verify_payment(session, current.id, proof).await {
                        Ok(updated) => apply_update(updated),
                        Err(ApiError::Unauthorized) => {}
                        Err(e) => {
                            set_error.set(Some(format!("Payment verification failed: {}", e)))
                        }
                    }
                    set_verifying.set(false);
                }
            }
            set_busy.set(false);
        });
    };

    let cancel = move || {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message(
                    "Cancel this order? Paid amounts are refunded per the cancellation policy.",
                )
                .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            set_busy.set(true);
            match order_api::cancel_order(session, order_id).await {
                Ok(updated) => apply_update(updated),
                Err(ApiError::Unauthorized) => {}
                Err(e) => set_error.set(Some(format!("Could not cancel the order: {}", e))),
            }
            set_busy.set(false);
        });
    };

    let start_upload = move || {
        let Some(file) = selected_file.get_untracked() else {
            return;
        };
        spawn_local(async move {
            set_busy.set(true);
            set_upload_error.set(None);
            match upload::upload_creative(session, &file).await {
                Ok(path) => {
                    match order_api::reupload_creative(session, order_id, &path).await {
                        Ok(updated) => {
                            set_selected_file.set(None);
                            apply_update(updated);
                        }
                        Err(ApiError::Unauthorized) => {}
                        Err(e) => set_upload_error
                            .set(Some(format!("Could not attach the new creative: {}", e))),
                    }
                }
                // Keep the file; the retry button re-runs the upload.
                Err(e) => set_upload_error.set(Some(e.to_string())),
            }
            set_busy.set(false);
        });
    };

    let pick_file = move |file: web_sys::File| {
        spawn_local(async move {
            set_upload_error.set(None);
            match upload::read_file(file).await {
                Ok(accepted) => {
                    set_selected_file.set(Some(accepted));
                    start_upload();
                }
                Err(msg) => set_upload_error.set(Some(msg)),
            }
        });
    };

    let (is_loaded, set_is_loaded) = signal(false);
    Effect::new(move |_| {
        if !is_loaded.get_untracked() {
            set_is_loaded.set(true);
            fetch();
        }
    });

    view! {
        <PageFrame page_id="a003_order--detail" category="detail">
            <div class="page__header">
                <div class="page__header-left">
                    <button class="button button--secondary" on:click=move |_| tabs_store.open(Page::Orders)>
                        "Back"
                    </button>
                    <h1 class="page__title">
                        {move || order.get().map(|o| o.code).unwrap_or_else(|| "Order".to_string())}
                    </h1>
                    {move || order.get().map(|o| view! {
                        <Badge appearance=BadgeAppearance::Tint color=status_badge_color(o.status)>
                            {o.status.display_name()}
                        </Badge>
                    })}
                </div>
                <div class="page__header-right">
                    <button
                        class="button button--secondary"
                        on:click=move |_| fetch()
                        prop:disabled=move || loading.get() || busy.get()
                    >
                        {icon("refresh")}
                        "Refresh"
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box">
                    <span class="warning-box__icon">{icon("alert")}</span>
                    <span class="warning-box__text">{e}</span>
                    <button class="warning-box__close" on:click=move |_| set_error.set(None)>
                        {icon("x")}
                    </button>
                </div>
            })}

            <Show when=move || loading.get() && order.get().is_none()>
                <div class="page__loading">
                    <Spinner />
                </div>
            </Show>

            {move || order.get().map(|o| {
                let status = o.status;
                let o_for_pay = o.clone();
                let discount_applied = o.discount_amount > Decimal::ZERO;
                view! {
                    <div class="detail-grid">
                        <div class="card">
                            <h2 class="card__title">"Booking"</h2>
                            <div class="detail-rows">
                                <div class="detail-rows__label">"Screen"</div>
                                <div class="detail-rows__value">{o.location_name.clone()}</div>
                                <div class="detail-rows__label">"Plan"</div>
                                <div class="detail-rows__value">{o.plan_name.clone()}</div>
                                <div class="detail-rows__label">"Display date"</div>
                                <div class="detail-rows__value">{format_date(o.display_date)}</div>
                                <div class="detail-rows__label">"Placed"</div>
                                <div class="detail-rows__value">{format_timestamp(o.created_at)}</div>
                                <div class="detail-rows__label">"Booked by"</div>
                                <div class="detail-rows__value">
                                    {format!("{} ({})", o.customer_name, o.customer_email)}
                                </div>
                            </div>
                            <p class="card__hint">{status_hint(status)}</p>
                        </div>

                        <div class="card">
                            <h2 class="card__title">"Amount"</h2>
                            <div class="price-rows">
                                <div class="price-rows__label">"Plan price"</div>
                                <div class="price-rows__value">{format_inr(o.base_amount)}</div>
                                {discount_applied.then(|| view! {
                                    <div class="price-rows__label">"Discount"</div>
                                    <div class="price-rows__value price-rows__value--discount">
                                        {format!("-{}", format_inr(o.discount_amount))}
                                    </div>
                                })}
                                <div class="price-rows__label">"GST (18%)"</div>
                                <div class="price-rows__value">{format_inr(o.tax_amount)}</div>
                                <div class="price-rows__label price-rows__label--total">"Total"</div>
                                <div class="price-rows__value price-rows__value--total">
                                    {format_inr(o.total_amount)}
                                </div>
                            </div>
                            {status.can_pay().then(|| view! {
                                <button
                                    class="button button--primary"
                                    on:click=move |_| pay_now(o_for_pay.clone())
                                    prop:disabled=move || busy.get()
                                >
                                    {icon("card")}
                                    "Pay now"
                                </button>
                            })}
                        </div>

                        <div class="card">
                            <h2 class="card__title">"Creative"</h2>
                            {match o.creative_path.clone() {
                                Some(path) => {
                                    let name = creative_file_name(&path);
                                    let kind_icon = match CreativeKind::from_file_name(&name) {
                                        Some(CreativeKind::Video) => icon("film"),
                                        _ => icon("image"),
                                    };
                                    view! {
                                        <div class="creative-summary">
                                            {kind_icon}
                                            <span class="creative-summary__name">{name}</span>
                                        </div>
                                    }.into_any()
                                }
                                None => view! {
                                    <p class="card__hint">"No creative attached."</p>
                                }.into_any(),
                            }}

                            {status.can_reupload_creative().then(|| view! {
                                <div class="creative-reupload">
                                    <p class="card__hint">
                                        "Upload a replacement. The review team checks it again after submission."
                                    </p>
                                    <input
                                        type="file"
                                        class="form-input"
                                        accept=".jpg,.jpeg,.png,.webp,.mp4"
                                        prop:disabled=move || busy.get()
                                        on:change=move |ev| {
                                            let input: web_sys::HtmlInputElement = event_target(&ev);
                                            let Some(file) = input.files().and_then(|l| l.get(0)) else {
                                                return;
                                            };
                                            // allow re-selecting the same file later
                                            input.set_value("");
                                            pick_file(file);
                                        }
                                    />
                                    {move || upload_error.get().map(|e| view! {
                                        <p class="form-error">{e}</p>
                                    })}
                                    {move || {
                                        (selected_file.get().is_some() && upload_error.get().is_some())
                                            .then(|| view! {
                                                <button
                                                    class="button button--secondary"
                                                    on:click=move |_| start_upload()
                                                    prop:disabled=move || busy.get()
                                                >
                                                    {icon("refresh")}
                                                    "Retry upload"
                                                </button>
                                            })
                                    }}
                                </div>
                            })}
                        </div>
                    </div>

                    {status.can_cancel().then(|| view! {
                        <div class="detail-actions">
                            <button
                                class="button button--secondary"
                                on:click=move |_| cancel()
                                prop:disabled=move || busy.get()
                            >
                                {icon("x")}
                                "Cancel order"
                            </button>
                        </div>
                    })}
                }
            })}

            <Show when=move || verifying.get()>
                <div class="modal-overlay">
                    <div class="modal-content modal-content--narrow">
                        <Spinner />
                        <p>"Confirming your payment with the provider. Do not close this tab."</p>
                    </div>
                </div>
            </Show>
        </PageFrame>
    }
    .into_any()
}
