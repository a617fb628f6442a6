use crate::domain::a003_order::api as order_api;
use crate::domain::a003_order::ui::status_badge_color;
use crate::shared::api_utils::ApiError;
use crate::shared::date_utils::{format_date, format_timestamp};
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, get_sort_indicator, sort_list};
use crate::shared::money_utils::format_inr;
use crate::shared::page_frame::PageFrame;
use crate::system::auth::context::use_session;
use contracts::domain::a003_order::aggregate::{AdminDecision, Order, OrderId, OrderStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

fn decision_button_class(decision: AdminDecision) -> &'static str {
    match decision {
        AdminDecision::Approve
        | AdminDecision::MarkInDisplay
        | AdminDecision::MarkCompleted => "button button--primary button--small",
        AdminDecision::RequestDesignRevision => "button button--secondary button--small",
        AdminDecision::CancelForfeit | AdminDecision::CancelRefund => {
            "button button--danger button--small"
        }
    }
}

/// Admin order management: every order, status filter, decision verbs.
///
/// The backend owns transition legality; a rejected decision comes back as
/// an error message and the row keeps its status.
#[component]
pub fn AdminOrdersList() -> impl IntoView {
    let session = use_session();

    let (orders, set_orders) = signal::<Vec<Order>>(Vec::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (status_filter, set_status_filter) = signal::<Option<OrderStatus>>(None);
    let (search, set_search) = signal(String::new());
    let (sort_field, set_sort_field) = signal::<String>("created_at".to_string());
    let (sort_ascending, set_sort_ascending) = signal(false);
    let (busy_id, set_busy_id) = signal::<Option<OrderId>>(None);

    let fetch_orders = move || {
        spawn_local(async move {
            set_loading.set(true);
            match order_api::fetch_all_orders(session, status_filter.get_untracked()).await {
                Ok(list) => {
                    set_orders.set(list);
                    set_error.set(None);
                }
                Err(ApiError::Unauthorized) => {}
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_loading.set(false);
        });
    };

    let decide = move |id: OrderId, decision: AdminDecision| {
        let note = match decision {
            AdminDecision::RequestDesignRevision => {
                let reason = web_sys::window().and_then(|w| {
                    w.prompt_with_message("Reason shown to the customer:")
                        .ok()
                        .flatten()
                });
                let Some(reason) = reason else { return };
                let reason = reason.trim().to_string();
                if reason.is_empty() {
                    return;
                }
                Some(reason)
            }
            AdminDecision::CancelForfeit | AdminDecision::CancelRefund => {
                let confirmed = web_sys::window()
                    .map(|w| {
                        w.confirm_with_message(&format!("{}?", decision.display_name()))
                            .unwrap_or(false)
                    })
                    .unwrap_or(false);
                if !confirmed {
                    return;
                }
                None
            }
            _ => None,
        };
        spawn_local(async move {
            set_busy_id.set(Some(id));
            match order_api::submit_decision(session, id, decision, note).await {
                Ok(updated) => {
                    // Keep the row visible even if its new status falls out
                    // of the active filter; the badge shows the outcome.
                    set_orders.update(|list| {
                        if let Some(slot) = list.iter_mut().find(|o| o.id == updated.id) {
                            *slot = updated;
                        }
                    });
                    set_error.set(None);
                }
                Err(ApiError::Unauthorized) => {}
                Err(e) => set_error.set(Some(format!("Decision was rejected: {}", e))),
            }
            set_busy_id.set(None);
        });
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
        <PageFrame page_id="a003_order--admin" category="list">
            <div class="page__header">
                <div class="page__header-left">
                    {icon("shield")}
                    <h1 class="page__title">"Order management"</h1>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>
                        {move || orders.get().len().to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <select
                        class="form-select"
                        on:change=move |ev| {
                            set_status_filter.set(OrderStatus::from_code(&event_target_value(&ev)));
                            fetch_orders();
                        }
                    >
                        <option value="">"All statuses"</option>
                        {OrderStatus::all().into_iter().map(|s| view! {
                            <option value=s.code()>{s.display_name()}</option>
                        }).collect_view()}
                    </select>
                    <input
                        type="text"
                        class="form-input"
                        placeholder="Filter by code, customer or screen"
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

            <Show when=move || loading.get()>
                <div class="page__loading">
                    <Spinner />
                </div>
            </Show>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            {sort_header("code", "Order")}
                            <th class="table__header-cell">"Customer"</th>
                            {sort_header("location", "Screen")}
                            {sort_header("plan", "Plan")}
                            {sort_header("display_date", "Display date")}
                            {sort_header("total", "Total")}
                            {sort_header("status", "Status")}
                            {sort_header("created_at", "Placed")}
                            <th class="table__header-cell">"Decision"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || visible_orders().into_iter().map(|row| {
                            let id = row.id;
                            let status = row.status;
                            let row_busy = move || busy_id.get() == Some(id);
                            let any_busy = move || busy_id.get().is_some();
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell table__cell--mono">{row.code.clone()}</td>
                                    <td class="table__cell" title=row.customer_email.clone()>
                                        {row.customer_name.clone()}
                                    </td>
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
                                            {AdminDecision::offered_for(status).into_iter().map(|decision| {
                                                view! {
                                                    <button
                                                        class=decision_button_class(decision)
                                                        on:click=move |_| decide(id, decision)
                                                        prop:disabled=any_busy
                                                    >
                                                        {decision.display_name()}
                                                    </button>
                                                }
                                            }).collect_view()}
                                        </Show>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </PageFrame>
    }
}
