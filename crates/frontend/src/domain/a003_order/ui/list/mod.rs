use crate::domain::a003_order::api as order_api;
use crate::domain::a003_order::mirror;
use crate::domain::a003_order::ui::status_badge_color;
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::shared::api_utils::ApiError;
use crate::shared::date_utils::{format_date, format_timestamp};
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, get_sort_indicator, sort_list};
use crate::shared::money_utils::format_inr;
use crate::shared::page_frame::PageFrame;
use crate::system::auth::context::use_session;
use crate::usecases::u101_slot_booking::api as booking_api;
use crate::usecases::u101_slot_booking::payment::{self, WidgetEvent};
use contracts::domain::a003_order::aggregate::{Order, OrderId};
use contracts::domain::common::EntityId;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Dashboard of the signed-in customer's own orders.
///
/// Paints instantly from the localStorage mirror, then refreshes from the
/// server and re-snapshots. Per-status row actions: pay, fix creative,
/// cancel.
#[component]
pub fn MyOrdersList() -> impl IntoView {
    let session = use_session();
    let tabs_store =
        use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    // Mirror first so the list is never blank while the fetch runs.
    let (orders, set_orders) = signal::<Vec<Order>>(mirror::restore());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (search, set_search) = signal(String::new());
    let (sort_field, set_sort_field) = signal::<String>("created_at".to_string());
    let (sort_ascending, set_sort_ascending) = signal(false);
    // Row with an action in flight; all other actions are disabled meanwhile.
    let (busy_id, set_busy_id) = signal::<Option<OrderId>>(None);
    let (verifying, set_verifying) = signal(false);

    let fetch_orders = move || {
        spawn_local(async move {
            set_loading.set(true);
            match order_api::fetch_my_orders(session).await {
                Ok(list) => {
                    mirror::snapshot(&list);
                    set_orders.set(list);
                    set_error.set(None);
                }
                // Teardown already ran; the login screen takes over.
                Err(ApiError::Unauthorized) => {}
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_loading.set(false);
        });
    };

    let apply_update = move |updated: Order| {
        mirror::upsert(&updated);
        set_orders.update(|list| {
            *list = mirror::merge_order(std::mem::take(list), updated);
        });
    };

    let pay_now = move |order: Order| {
        let Some(session_id) = order.payment_session_id.clone() else {
            set_error.set(Some(
                "This order has no open payment session. Refresh and try again.".to_string(),
            ));
            return;
        };
        spawn_local(async move {
            set_busy_id.set(Some(order.id));
            let contact = session.profile.get_untracked().map(|u| u.phone);
            let config = payment::checkout_config(&order, &session_id, contact);
            match payment::await_widget(&payment::HostedCheckout, config).await {
                // Closed without paying; the order stays pending.
                WidgetEvent::Dismissed => {}
                WidgetEvent::Completed(proof) => {
                    set_verifying.set(true);
                    match booking_api::verify_payment(session, order.id, proof).await {
                        Ok(updated) => apply_update(updated),
                        Err(ApiError::Unauthorized) => {}
                        Err(e) => {
                            set_error.set(Some(format!("Payment verification failed: {}", e)))
                        }
                    }
                    set_verifying.set(false);
                }
            }
            set_busy_id.set(None);
        });
    };

    let cancel_order = move |id: OrderId| {
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
            set_busy_id.set(Some(id));
            match order_api::cancel_order(session, id).await {
                Ok(updated) => apply_update(updated),
                Err(ApiError::Unauthorized) => {}
                Err(e) => set_error.set(Some(format!("Could not cancel the order: {}", e))),
            }
            set_busy_id.set(None);
        });
    };

    let open_details = move |id: &OrderId| {
        tabs_store.open(Page::OrderDetails(id.as_string()));
    };

    let visible_orders = move || {
        let mut items = filter_list(orders.get(), &search.get());
        sort_list(&mut items, &sort_field.get(), sort_ascending.get());
        items
    };

    let toggle_sort = move |field: &'static str| {
        move |_| {
            if sort_field.get() == field {
                set_sort_ascending.update(|v| *v = !*v);
            } else {
                set_sort_field.set(field.to_string());
                set_sort_ascending.set(true);
            }
        }
    };

    let sort_header = move |field: &'static str, label: &'static str| {
        view! {
            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort(field)>
                {label}
                {move || get_sort_indicator(&sort_field.get(), field, sort_ascending.get())}
            </th>
        }
    };

    let (is_loaded, set_is_loaded) = signal(false);
    Effect::new(move |_| {
        if !is_loaded.get_untracked() {
            set_is_loaded.set(true);
            fetch_orders();
        }
    });

    view! {
        <PageFrame page_id="a003_order--list" category="list">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"My orders"</h1>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>
                        {move || orders.get().len().to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <input
                        type="text"
                        class="form-input"
                        placeholder="Filter by code, screen or plan"
                        prop:value=move || search.get()
                        on:input=move |ev| set_search.set(event_target_value(&ev))
                    />
                    <button
                        class="button button--secondary"
                        on:click=move |_| fetch_orders()
                        prop:disabled=move || loading.get()
                    >
                        {icon("refresh")}
                        "Refresh"
                    </button>
                    <button
                        class="button button--primary"
                        on:click=move |_| tabs_store.open(Page::Book)
                    >
                        {icon("plus")}
                        "Book a slot"
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

            <Show when=move || loading.get() && orders.get().is_empty()>
                <div class="page__loading">
                    <Spinner />
                </div>
            </Show>

            <Show when=move || !loading.get() && orders.get().is_empty()>
                <div class="empty-state">
                    <p class="empty-state__text">"You have not booked any display slots yet."</p>
                    <button class="button button--primary" on:click=move |_| tabs_store.open(Page::Book)>
                        {icon("screen")}
                        "Book your first slot"
                    </button>
                </div>
            </Show>

            <Show when=move || !orders.get().is_empty()>
                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                {sort_header("code", "Order")}
                                {sort_header("location", "Screen")}
                                {sort_header("plan", "Plan")}
                                {sort_header("display_date", "Display date")}
                                {sort_header("total", "Total")}
                                {sort_header("status", "Status")}
                                {sort_header("created_at", "Placed")}
                                <th class="table__header-cell">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || visible_orders().into_iter().map(|row| {
                                let id = row.id;
                                let status = row.status;
                                let row_for_pay = row.clone();
                                let row_busy = move || busy_id.get() == Some(id);
                                let any_busy = move || busy_id.get().is_some();
                                view! {
                                    <tr class="table__row" on:click=move |_| open_details(&id)>
                                        <td class="table__cell table__cell--mono">{row.code.clone()}</td>
                                        <td class="table__cell">{row.location_name.clone()}</td>
                                        <td class="table__cell">{row.plan_name.clone()}</td>
                                        <td class="table__cell">{format_date(row.display_date)}</td>
                                        <td class="table__cell table__cell--number">{format_inr(row.total_amount)}</td>
                                        <td class="table__cell">
                                            <Badge appearance=BadgeAppearance::Tint color=status_badge_color(status)>
                                                {status.display_name()}
                                            </Badge>
                                        </td>
                                        <td class="table__cell">{format_timestamp(row.created_at)}</td>
                                        <td class="table__cell table__cell--actions">
                                            <Show when=row_busy>
                                                <Spinner />
                                            </Show>
                                            <Show when=move || !row_busy()>
                                                {
                                                    let row_for_pay = row_for_pay.clone();
                                                    view! {
                                                        {status.can_pay().then(|| {
                                                            let row_for_pay = row_for_pay.clone();
                                                            view! {
                                                                <button
                                                                    class="button button--primary button--small"
                                                                    on:click=move |ev| {
                                                                        ev.stop_propagation();
                                                                        pay_now(row_for_pay.clone());
                                                                    }
                                                                    prop:disabled=any_busy
                                                                >
                                                                    {icon("card")}
                                                                    "Pay now"
                                                                </button>
                                                            }
                                                        })}
                                                        {status.can_reupload_creative().then(|| view! {
                                                            <button
                                                                class="button button--secondary button--small"
                                                                on:click=move |ev| {
                                                                    ev.stop_propagation();
                                                                    open_details(&id);
                                                                }
                                                            >
                                                                {icon("upload")}
                                                                "Fix creative"
                                                            </button>
                                                        })}
                                                        {status.can_cancel().then(|| view! {
                                                            <button
                                                                class="button button--secondary button--small"
                                                                on:click=move |ev| {
                                                                    ev.stop_propagation();
                                                                    cancel_order(id);
                                                                }
                                                                prop:disabled=any_busy
                                                            >
                                                                {icon("x")}
                                                                "Cancel"
                                                            </button>
                                                        })}
                                                    }
                                                }
                                            </Show>
                                        </td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>
            </Show>

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
}
