use crate::domain::a001_location::api as location_api;
use crate::domain::a002_plan::api as plan_api;
use crate::domain::a003_order::mirror;
use crate::domain::a003_order::ui::status_badge_color;
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::shared::api_utils::ApiError;
use crate::shared::date_utils::{earliest_display_date, format_date, input_value, parse_input_value};
use crate::shared::icons::icon;
use crate::shared::money_utils::format_inr;
use crate::shared::page_frame::PageFrame;
use crate::system::auth::context::use_session;
use crate::usecases::u101_slot_booking::api as booking_api;
use crate::usecases::u101_slot_booking::availability::AvailabilityCache;
use crate::usecases::u101_slot_booking::debounce::{self, Generation};
use crate::usecases::u101_slot_booking::draft::{BookingDraft, BookingStep};
use crate::usecases::u101_slot_booking::payment::{
    self, PaymentEvent, PaymentPhase, WidgetEvent,
};
use crate::usecases::u101_slot_booking::pricing::PriceBreakdown;
use crate::usecases::u101_slot_booking::upload::{self, CreativeKind, PreviewSnapshot};
use chrono::{NaiveDate, Utc};
use contracts::domain::a001_location::aggregate::{Location, LocationDayAvailability, LocationId};
use contracts::domain::a002_plan::aggregate::{Plan, PlanId};
use contracts::domain::a003_order::aggregate::Order;
use contracts::shared::validation::is_valid_tax_registration_number;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u101_slot_booking::{AvailabilityQuery, DiscountCheckRequest, SlotBooking};
use futures::stream::{FuturesUnordered, StreamExt};
use leptos::prelude::*;
use leptos::task::spawn_local;
use rust_decimal::Decimal;
use std::collections::HashMap;
use thaw::*;

const STEPS: [BookingStep; 6] = [
    BookingStep::DateSelection,
    BookingStep::LocationSelection,
    BookingStep::PlanSelection,
    BookingStep::CreativeUpload,
    BookingStep::BillingDetails,
    BookingStep::ReadyToSubmit,
];

fn next_step(step: BookingStep) -> Option<BookingStep> {
    let index = STEPS.iter().position(|s| *s == step)?;
    STEPS.get(index + 1).copied()
}

fn prev_step(step: BookingStep) -> Option<BookingStep> {
    let index = STEPS.iter().position(|s| *s == step)?;
    index.checked_sub(1).and_then(|i| STEPS.get(i)).copied()
}

/// Whether one step's own requirement is met, regardless of the others.
fn step_done(draft: &BookingDraft, step: BookingStep) -> bool {
    match step {
        BookingStep::DateSelection => draft.date.is_some(),
        BookingStep::LocationSelection => draft.location.is_some(),
        BookingStep::PlanSelection => draft.plan.is_some(),
        BookingStep::CreativeUpload => draft.creative_uploaded(),
        BookingStep::BillingDetails => draft.billing.is_complete(),
        BookingStep::ReadyToSubmit => false,
    }
}

/// The whole booking flow: slot triple, creative, billing, review and the
/// hosted payment handoff.
#[component]
pub fn BookingWizard() -> impl IntoView {
    let session = use_session();
    let tabs_store =
        use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let availability = use_context::<StoredValue<AvailabilityCache, LocalStorage>>()
        .expect("AvailabilityCache not provided");

    let min_date = earliest_display_date(Utc::now().date_naive());

    let draft = RwSignal::new(BookingDraft::new());
    let (step, set_step) = signal(BookingStep::DateSelection);
    let (error, set_error) = signal::<Option<String>>(None);

    let (locations, set_locations) = signal::<Vec<LocationDayAvailability>>(Vec::new());
    let (locations_loading, set_locations_loading) = signal(false);
    let (plans, set_plans) = signal::<Vec<Plan>>(Vec::new());
    let (plans_loading, set_plans_loading) = signal(false);
    // Availability verdicts for the current (date, location); written only
    // by the batch whose generation is still current.
    let (board, set_board) = signal::<HashMap<PlanId, bool>>(HashMap::new());
    let generation = StoredValue::new_local(Generation::new());

    let (creative_file, set_creative_file) = signal::<Option<upload::CreativeFile>>(None);
    let (preview, set_preview) = signal::<Option<String>>(None);
    let (upload_error, set_upload_error) = signal::<Option<String>>(None);
    let (uploading, set_uploading) = signal(false);

    let (discount_note, set_discount_note) = signal::<Option<String>>(None);
    let (discount_checking, set_discount_checking) = signal(false);

    let (submitting, set_submitting) = signal(false);
    let (phase, set_phase) = signal(PaymentPhase::Idle);
    // The initiated order and its payment session, kept so a dismissed
    // checkout can be reopened without a second initiate.
    let (pending, set_pending) = signal::<Option<(Order, String)>>(None);
    let (confirmed, set_confirmed) = signal::<Option<Order>>(None);

    let step_phase = move |event: PaymentEvent| {
        set_phase.update(|p| *p = payment::next_phase(p.clone(), event));
    };

    let busy = move || {
        submitting.get()
            || matches!(
                phase.get(),
                PaymentPhase::WidgetOpen | PaymentPhase::Verifying
            )
    };

    // Probe every listed plan against the chosen slot after a quiet period.
    // A newer trigger bumps the generation; the superseded batch stops and
    // its verdicts never reach the board.
    let schedule_probe = move |plans: Vec<Plan>| {
        let token = generation.with_value(|g| g.bump());
        let snapshot = draft.with_untracked(|d| match (d.date, d.location.as_ref()) {
            (Some(date), Some(location)) => Some((date, location.id)),
            _ => None,
        });
        let Some((date, location_id)) = snapshot else {
            return;
        };
        spawn_local(async move {
            debounce::quiet_period().await;
            if !generation.with_value(|g| g.is_current(token)) {
                return;
            }
            let cache = availability.get_value();
            let mut probes: FuturesUnordered<_> = plans
                .iter()
                .map(|plan| {
                    let cache = cache.clone();
                    let query = AvailabilityQuery {
                        location_id,
                        plan_id: plan.id,
                        date,
                    };
                    async move { (query.plan_id, cache.check(query).await) }
                })
                .collect();
            while let Some((plan_id, available)) = probes.next().await {
                if !generation.with_value(|g| g.is_current(token)) {
                    return;
                }
                set_board.update(|b| {
                    b.insert(plan_id, available);
                });
            }
        });
    };

    let fetch_plans = move |location_id: LocationId| {
        spawn_local(async move {
            set_plans_loading.set(true);
            match plan_api::fetch_plans_for_location(session, location_id).await {
                Ok(list) => {
                    set_plans.set(list.clone());
                    schedule_probe(list);
                }
                Err(ApiError::Unauthorized) => {}
                Err(e) => set_error.set(Some(format!("Could not load plans: {}", e))),
            }
            set_plans_loading.set(false);
        });
    };

    let fetch_locations = move |date: NaiveDate| {
        spawn_local(async move {
            set_locations_loading.set(true);
            match location_api::fetch_locations_for_date(session, date).await {
                Ok(list) => set_locations.set(list),
                Err(ApiError::Unauthorized) => {}
                Err(e) => set_error.set(Some(format!("Could not load screens: {}", e))),
            }
            set_locations_loading.set(false);
        });
    };

    let choose_date = move |date: NaiveDate| {
        draft.update(|d| d.select_date(date));
        set_locations.set(Vec::new());
        set_plans.set(Vec::new());
        set_board.set(HashMap::new());
        fetch_locations(date);
    };

    let choose_location = move |location: Location| {
        let location_id = location.id;
        draft.update(move |d| d.select_location(location));
        set_plans.set(Vec::new());
        set_board.set(HashMap::new());
        set_step.set(BookingStep::PlanSelection);
        fetch_plans(location_id);
    };

    let choose_plan = move |plan: Plan| {
        let blocked = board.with_untracked(|b| b.get(&plan.id).copied()) == Some(false);
        let mut selected = false;
        draft.update(|d| selected = d.select_plan(plan, blocked));
        if selected {
            set_step.set(BookingStep::CreativeUpload);
        }
    };

    let pick_file = move |file: web_sys::File| {
        spawn_local(async move {
            set_upload_error.set(None);
            match upload::read_file(file).await {
                Ok(accepted) => {
                    set_preview.set(upload::preview_data_url(&accepted));
                    draft.update(|d| d.attach_creative(accepted.name.clone(), accepted.kind));
                    set_creative_file.set(Some(accepted));
                }
                Err(msg) => set_upload_error.set(Some(msg)),
            }
        });
    };

    let start_upload = move || {
        if !draft.with_untracked(|d| d.can_start_upload()) {
            return;
        }
        let Some(file) = creative_file.get_untracked() else {
            return;
        };
        spawn_local(async move {
            set_uploading.set(true);
            set_upload_error.set(None);
            match upload::upload_creative(session, &file).await {
                Ok(path) => {
                    draft.update(|d| d.mark_creative_uploaded(path.clone()));
                    upload::save_preview_snapshot(&PreviewSnapshot {
                        file_name: file.name.clone(),
                        kind: file.kind,
                        data_url: preview.get_untracked(),
                        remote_path: Some(path),
                    });
                    // Bytes are committed; only the preview stays client-side.
                    set_creative_file.set(None);
                }
                Err(ApiError::Unauthorized) => {}
                // Keep the file so the upload button doubles as retry.
                Err(e) => set_upload_error.set(Some(format!("Upload failed: {}", e))),
            }
            set_uploading.set(false);
        });
    };

    let replace_creative = move || {
        draft.update(|d| d.clear_creative());
        set_creative_file.set(None);
        set_preview.set(None);
        set_upload_error.set(None);
        upload::clear_preview_snapshot();
    };

    let apply_discount = move || {
        let (code, plan_id) = draft.with_untracked(|d| {
            (
                d.discount.code.trim().to_string(),
                d.plan.as_ref().map(|p| p.id),
            )
        });
        let Some(plan_id) = plan_id else {
            return;
        };
        if code.is_empty() {
            draft.update(|d| d.discount.amount = Decimal::ZERO);
            set_discount_note.set(None);
            return;
        }
        spawn_local(async move {
            set_discount_checking.set(true);
            let response =
                booking_api::check_discount(session, &DiscountCheckRequest { code, plan_id })
                    .await;
            if response.valid {
                draft.update(|d| d.discount.amount = response.amount);
                set_discount_note.set(Some(format!(
                    "Code applied: {} off.",
                    format_inr(response.amount)
                )));
            } else {
                draft.update(|d| d.discount.amount = Decimal::ZERO);
                set_discount_note.set(Some(
                    "Code not recognized. You can still book without a discount.".to_string(),
                ));
            }
            set_discount_checking.set(false);
        });
    };

    let open_checkout = move |order: Order, session_id: String| {
        spawn_local(async move {
            step_phase(PaymentEvent::WidgetOpened);
            let contact = session.profile.get_untracked().map(|u| u.phone);
            let config = payment::checkout_config(&order, &session_id, contact);
            match payment::await_widget(&payment::HostedCheckout, config).await {
                WidgetEvent::Dismissed => step_phase(PaymentEvent::WidgetDismissed),
                WidgetEvent::Completed(proof) => {
                    step_phase(PaymentEvent::WidgetCompleted);
                    match booking_api::verify_payment(session, order.id, proof).await {
                        Ok(updated) => {
                            mirror::upsert(&updated);
                            upload::clear_preview_snapshot();
                            set_confirmed.set(Some(updated));
                            step_phase(PaymentEvent::VerificationPassed);
                        }
                        Err(ApiError::Unauthorized) => {}
                        Err(e) => step_phase(PaymentEvent::VerificationFailed(e.to_string())),
                    }
                }
            }
        });
    };

    let submit = move || {
        if !draft.with_untracked(|d| d.can_submit()) {
            let target = draft.with_untracked(|d| d.first_incomplete_step());
            if target == BookingStep::ReadyToSubmit {
                set_error.set(Some("Accept the terms to continue.".to_string()));
            } else {
                set_step.set(target);
                set_error.set(Some(
                    "A step is incomplete. Finish it and come back to pay.".to_string(),
                ));
            }
            return;
        }
        let blocked = draft
            .with_untracked(|d| d.plan.as_ref().map(|p| p.id))
            .map(|id| board.with_untracked(|b| b.get(&id).copied()) == Some(false))
            .unwrap_or(false);
        if blocked {
            set_step.set(BookingStep::PlanSelection);
            set_error.set(Some(
                "That plan was just booked out for your date. Pick another one.".to_string(),
            ));
            return;
        }
        let Some(request) = draft.with_untracked(|d| d.initiate_request()) else {
            return;
        };
        spawn_local(async move {
            set_submitting.set(true);
            match booking_api::initiate_order(session, &request).await {
                Ok(response) => {
                    mirror::upsert(&response.order);
                    set_pending.set(Some((
                        response.order.clone(),
                        response.payment_session_id.clone(),
                    )));
                    open_checkout(response.order, response.payment_session_id);
                }
                Err(ApiError::Unauthorized) => {}
                Err(e) => set_error.set(Some(format!("Could not create the order: {}", e))),
            }
            set_submitting.set(false);
        });
    };

    let reset_all = move || {
        draft.set(BookingDraft::new());
        set_step.set(BookingStep::DateSelection);
        set_locations.set(Vec::new());
        set_plans.set(Vec::new());
        set_board.set(HashMap::new());
        set_creative_file.set(None);
        set_preview.set(None);
        set_upload_error.set(None);
        set_discount_note.set(None);
        set_pending.set(None);
        set_confirmed.set(None);
        upload::clear_preview_snapshot();
        step_phase(PaymentEvent::Reset);
    };

    // Restore an already-uploaded creative after a reload.
    let (is_loaded, set_is_loaded) = signal(false);
    Effect::new(move |_| {
        if !is_loaded.get_untracked() {
            set_is_loaded.set(true);
            if let Some(snapshot) = upload::load_preview_snapshot() {
                if let Some(path) = snapshot.remote_path {
                    draft.update(|d| {
                        d.attach_creative(snapshot.file_name, snapshot.kind);
                        d.acknowledge_guidelines(true);
                        d.mark_creative_uploaded(path);
                    });
                    set_preview.set(snapshot.data_url);
                }
            }
        }
    });

    let stepper = move || {
        view! {
            <div class="wizard__steps">
                {STEPS
                    .iter()
                    .enumerate()
                    .map(|(index, s)| {
                        let s = *s;
                        view! {
                            <button
                                class=move || {
                                    let mut class = String::from("wizard__step");
                                    if step.get() == s {
                                        class.push_str(" wizard__step--current");
                                    }
                                    if draft.with(|d| step_done(d, s)) {
                                        class.push_str(" wizard__step--done");
                                    }
                                    class
                                }
                                prop:disabled=move || {
                                    draft.with(|d| s > d.first_incomplete_step())
                                }
                                on:click=move |_| set_step.set(s)
                            >
                                <span class="wizard__step-index">{(index + 1).to_string()}</span>
                                <span class="wizard__step-title">{s.title()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        }
    };

    let footer = move || {
        let current = step.get();
        if current == BookingStep::ReadyToSubmit {
            return None;
        }
        Some(view! {
            <div class="wizard__footer">
                {prev_step(current)
                    .map(|prev| {
                        view! {
                            <button
                                class="button button--secondary"
                                on:click=move |_| set_step.set(prev)
                            >
                                "Back"
                            </button>
                        }
                    })}
                <button
                    class="button button--primary"
                    prop:disabled=move || !draft.with(|d| step_done(d, step.get()))
                    on:click=move |_| {
                        if let Some(next) = next_step(step.get_untracked()) {
                            set_step.set(next);
                        }
                    }
                >
                    "Continue"
                </button>
            </div>
        })
    };

    let date_step = move || {
        view! {
            <div class="card">
                <h2 class="card__title">"Pick a date"</h2>
                <p class="card__hint">
                    "Display runs start from tomorrow at the earliest. Your plan's duration counts forward from this date."
                </p>
                <input
                    type="date"
                    class="form-input form-input--date"
                    min=input_value(min_date)
                    prop:value=move || {
                        draft.with(|d| d.date.map(input_value).unwrap_or_default())
                    }
                    on:change=move |ev| {
                        let Some(date) = parse_input_value(&event_target_value(&ev)) else {
                            return;
                        };
                        if date < min_date {
                            set_error
                                .set(Some("Pick a date from tomorrow onward.".to_string()));
                            return;
                        }
                        set_error.set(None);
                        choose_date(date);
                    }
                />
            </div>
        }
    };

    let location_step = move || {
        view! {
            <div class="card">
                <h2 class="card__title">"Pick a screen"</h2>
                <Show when=move || locations_loading.get()>
                    <div class="page__loading">
                        <Spinner />
                    </div>
                </Show>
                <div class="pick-grid">
                    {move || {
                        locations
                            .get()
                            .into_iter()
                            .map(|entry| {
                                let location = entry.location.clone();
                                let slots_left = entry.slots_left();
                                let bookable = entry.has_capacity();
                                let selected = draft
                                    .with(|d| {
                                        d.location.as_ref().map(|l| l.id) == Some(location.id)
                                    });
                                let mut card_class = String::from("pick-card");
                                if selected {
                                    card_class.push_str(" pick-card--selected");
                                }
                                if !bookable {
                                    card_class.push_str(" pick-card--unavailable");
                                }
                                let location_for_click = location.clone();
                                view! {
                                    <button
                                        class=card_class
                                        prop:disabled=!bookable
                                        on:click=move |_| choose_location(
                                            location_for_click.clone(),
                                        )
                                    >
                                        <div class="pick-card__head">
                                            {icon("screen")}
                                            <span class="pick-card__name">
                                                {location.name.clone()}
                                            </span>
                                            {if bookable {
                                                view! {
                                                    <Badge
                                                        appearance=BadgeAppearance::Tint
                                                        color=BadgeColor::Success
                                                    >
                                                        {format!("{} slots left", slots_left)}
                                                    </Badge>
                                                }
                                                    .into_any()
                                            } else {
                                                view! {
                                                    <Badge
                                                        appearance=BadgeAppearance::Tint
                                                        color=BadgeColor::Danger
                                                    >
                                                        "Booked out"
                                                    </Badge>
                                                }
                                                    .into_any()
                                            }}
                                        </div>
                                        <div class="pick-card__meta">
                                            {format!("{}, {}", location.city, location.address)}
                                        </div>
                                        <div class="pick-card__meta">
                                            {format!(
                                                "{}, {} daily views",
                                                location.dimensions_label(),
                                                location.daily_impressions,
                                            )}
                                        </div>
                                    </button>
                                }
                            })
                            .collect_view()
                    }}
                </div>
                {move || {
                    (!locations_loading.get() && locations.with(|l| l.is_empty()))
                        .then(|| {
                            view! {
                                <p class="card__hint">
                                    "No screens are open for booking on this date."
                                </p>
                            }
                        })
                }}
            </div>
        }
    };

    let plan_step = move || {
        view! {
            <div class="card">
                <h2 class="card__title">"Pick a plan"</h2>
                <p class="card__hint">
                    "Availability is checked live for the chosen screen and date."
                </p>
                <Show when=move || plans_loading.get()>
                    <div class="page__loading">
                        <Spinner />
                    </div>
                </Show>
                <div class="pick-grid">
                    {move || {
                        plans
                            .get()
                            .into_iter()
                            .map(|plan| {
                                let verdict = board.with(|b| b.get(&plan.id).copied());
                                let selected = draft
                                    .with(|d| d.plan.as_ref().map(|p| p.id) == Some(plan.id));
                                let blocked = verdict == Some(false);
                                let mut card_class = String::from("pick-card");
                                if selected {
                                    card_class.push_str(" pick-card--selected");
                                }
                                if blocked {
                                    card_class.push_str(" pick-card--unavailable");
                                }
                                let availability_badge = match verdict {
                                    Some(true) => {
                                        view! {
                                            <Badge
                                                appearance=BadgeAppearance::Tint
                                                color=BadgeColor::Success
                                            >
                                                "Available"
                                            </Badge>
                                        }
                                            .into_any()
                                    }
                                    Some(false) => {
                                        view! {
                                            <Badge
                                                appearance=BadgeAppearance::Tint
                                                color=BadgeColor::Danger
                                            >
                                                "Taken"
                                            </Badge>
                                        }
                                            .into_any()
                                    }
                                    None => {
                                        view! {
                                            <Badge
                                                appearance=BadgeAppearance::Tint
                                                color=BadgeColor::Subtle
                                            >
                                                "Checking"
                                            </Badge>
                                        }
                                            .into_any()
                                    }
                                };
                                let plan_for_click = plan.clone();
                                view! {
                                    <button
                                        class=card_class
                                        prop:disabled=blocked
                                        on:click=move |_| choose_plan(plan_for_click.clone())
                                    >
                                        <div class="pick-card__head">
                                            <span class="pick-card__name">{plan.name.clone()}</span>
                                            {plan
                                                .is_featured
                                                .then(|| {
                                                    view! {
                                                        <Badge
                                                            appearance=BadgeAppearance::Tint
                                                            color=BadgeColor::Brand
                                                        >
                                                            "Featured"
                                                        </Badge>
                                                    }
                                                })}
                                            {availability_badge}
                                        </div>
                                        <div class="pick-card__meta">{plan.description.clone()}</div>
                                        <div class="pick-card__meta">{plan.schedule_label()}</div>
                                        <div class="pick-card__price">
                                            {format_inr(plan.base_price)}
                                        </div>
                                    </button>
                                }
                            })
                            .collect_view()
                    }}
                </div>
                {move || {
                    (!plans_loading.get() && plans.with(|p| p.is_empty()))
                        .then(|| {
                            view! {
                                <p class="card__hint">
                                    "This screen offers no plans right now."
                                </p>
                            }
                        })
                }}
            </div>
        }
    };

    let creative_step = move || {
        view! {
            <div class="card">
                <h2 class="card__title">"Upload your creative"</h2>
                <p class="card__hint">
                    "JPG, PNG or WebP up to 10 MB, or MP4 up to 100 MB. Match the screen's pixel dimensions for best results."
                </p>
                {move || {
                    let attached = draft.with(|d| d.creative.clone());
                    match attached {
                        None => {
                            view! {
                                <input
                                    type="file"
                                    class="form-input"
                                    accept=".jpg,.jpeg,.png,.webp,.mp4"
                                    on:change=move |ev| {
                                        let input: web_sys::HtmlInputElement = event_target(&ev);
                                        let Some(file) = input
                                            .files()
                                            .and_then(|l| l.get(0)) else {
                                            return;
                                        };
                                        // allow re-selecting the same file later
                                        input.set_value("");
                                        pick_file(file);
                                    }
                                />
                            }
                                .into_any()
                        }
                        Some(creative) => {
                            let uploaded = creative.remote_path.is_some();
                            let kind_icon = match creative.kind {
                                CreativeKind::Video => icon("film"),
                                CreativeKind::Image => icon("image"),
                            };
                            view! {
                                {move || {
                                    preview
                                        .get()
                                        .map(|url| {
                                            view! {
                                                <img class="creative-preview" src=url />
                                            }
                                        })
                                }}
                                <div class="creative-summary">
                                    {kind_icon}
                                    <span class="creative-summary__name">
                                        {creative.file_name.clone()}
                                    </span>
                                    {uploaded
                                        .then(|| {
                                            view! {
                                                <Badge
                                                    appearance=BadgeAppearance::Tint
                                                    color=BadgeColor::Success
                                                >
                                                    "Uploaded"
                                                </Badge>
                                            }
                                        })}
                                </div>
                                {(!uploaded)
                                    .then(|| {
                                        view! {
                                            <label class="form-checkbox">
                                                <input
                                                    type="checkbox"
                                                    prop:checked=move || {
                                                        draft
                                                            .with(|d| {
                                                                d.creative
                                                                    .as_ref()
                                                                    .map(|c| c.guidelines_acknowledged)
                                                                    .unwrap_or(false)
                                                            })
                                                    }
                                                    on:change=move |ev| {
                                                        draft
                                                            .update(|d| {
                                                                d.acknowledge_guidelines(event_target_checked(&ev))
                                                            })
                                                    }
                                                />
                                                <span>
                                                    "This creative follows the content guidelines for public display."
                                                </span>
                                            </label>
                                            <button
                                                class="button button--primary"
                                                prop:disabled=move || {
                                                    !draft.with(|d| d.can_start_upload())
                                                        || uploading.get()
                                                }
                                                on:click=move |_| start_upload()
                                            >
                                                {icon("upload")}
                                                "Upload creative"
                                            </button>
                                        }
                                    })}
                                <button
                                    class="button button--secondary"
                                    prop:disabled=move || uploading.get()
                                    on:click=move |_| replace_creative()
                                >
                                    "Replace file"
                                </button>
                            }
                                .into_any()
                        }
                    }
                }}
                <Show when=move || uploading.get()>
                    <div class="page__loading">
                        <Spinner />
                    </div>
                </Show>
                {move || {
                    upload_error.get().map(|e| view! { <p class="form-error">{e}</p> })
                }}
            </div>
        }
    };

    let billing_step = move || {
        view! {
            <div class="card">
                <h2 class="card__title">"Billing details"</h2>
                <label class="form-label">"Billing address"</label>
                <textarea
                    class="form-input form-input--area"
                    placeholder="Street, city, PIN code"
                    prop:value=move || draft.with(|d| d.billing.address.clone())
                    on:input=move |ev| {
                        draft.update(|d| d.billing.address = event_target_value(&ev))
                    }
                />
                <label class="form-checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || draft.with(|d| d.billing.tax.applicable)
                        on:change=move |ev| {
                            draft.update(|d| d.billing.tax.applicable = event_target_checked(&ev))
                        }
                    />
                    <span>"Booking for a GST-registered business"</span>
                </label>
                {move || {
                    draft
                        .with(|d| d.billing.tax.applicable)
                        .then(|| {
                            view! {
                                <label class="form-label">"Company name"</label>
                                <input
                                    class="form-input"
                                    prop:value=move || {
                                        draft.with(|d| d.billing.tax.company_name.clone())
                                    }
                                    on:input=move |ev| {
                                        draft
                                            .update(|d| {
                                                d.billing.tax.company_name = event_target_value(&ev)
                                            })
                                    }
                                />
                                <label class="form-label">"GSTIN"</label>
                                <input
                                    class="form-input form-input--mono"
                                    placeholder="22AAAAA0000A1Z5"
                                    prop:value=move || {
                                        draft.with(|d| d.billing.tax.registration_number.clone())
                                    }
                                    on:input=move |ev| {
                                        draft
                                            .update(|d| {
                                                d.billing.tax.registration_number = event_target_value(
                                                    &ev,
                                                )
                                            })
                                    }
                                />
                                {move || {
                                    draft
                                        .with(|d| {
                                            let number = d
                                                .billing
                                                .tax
                                                .registration_number
                                                .trim()
                                                .to_string();
                                            (!number.is_empty()
                                                && !is_valid_tax_registration_number(&number))
                                                .then(|| {
                                                    view! {
                                                        <p class="form-error">
                                                            "This does not look like a valid GSTIN."
                                                        </p>
                                                    }
                                                })
                                        })
                                }}
                            }
                        })
                }}
            </div>
        }
    };

    let breakdown = move || {
        draft.with(|d| {
            PriceBreakdown::calculate(
                d.plan.as_ref().map(|p| p.base_price).unwrap_or(Decimal::ZERO),
                d.discount.amount,
            )
        })
    };

    let review_step = move || {
        view! {
            <div class="card">
                <h2 class="card__title">"Review and pay"</h2>
                {move || {
                    draft
                        .with(|d| {
                            let screen = d
                                .location
                                .as_ref()
                                .map(|l| format!("{}, {}", l.name, l.city))
                                .unwrap_or_default();
                            let plan = d.plan.as_ref().map(|p| p.name.clone()).unwrap_or_default();
                            let date = d.date.map(format_date).unwrap_or_default();
                            let creative = d
                                .creative
                                .as_ref()
                                .map(|c| c.file_name.clone())
                                .unwrap_or_default();
                            let address = d.billing.address.clone();
                            view! {
                                <div class="detail-rows">
                                    <div class="detail-rows__label">"Screen"</div>
                                    <div class="detail-rows__value">{screen}</div>
                                    <div class="detail-rows__label">"Plan"</div>
                                    <div class="detail-rows__value">{plan}</div>
                                    <div class="detail-rows__label">"Display date"</div>
                                    <div class="detail-rows__value">{date}</div>
                                    <div class="detail-rows__label">"Creative"</div>
                                    <div class="detail-rows__value">{creative}</div>
                                    <div class="detail-rows__label">"Billing address"</div>
                                    <div class="detail-rows__value">{address}</div>
                                </div>
                            }
                        })
                }}
                <div class="discount-row">
                    <input
                        class="form-input"
                        placeholder="Discount code"
                        prop:value=move || draft.with(|d| d.discount.code.clone())
                        on:input=move |ev| {
                            draft.update(|d| d.discount.code = event_target_value(&ev))
                        }
                    />
                    <button
                        class="button button--secondary"
                        prop:disabled=move || discount_checking.get()
                        on:click=move |_| apply_discount()
                    >
                        {icon("tag")}
                        "Apply"
                    </button>
                </div>
                {move || discount_note.get().map(|note| view! { <p class="card__hint">{note}</p> })}
                {move || {
                    let b = breakdown();
                    let discount_applied = b.discount > Decimal::ZERO;
                    view! {
                        <div class="price-rows">
                            <div class="price-rows__label">"Plan price"</div>
                            <div class="price-rows__value">{format_inr(b.base)}</div>
                            {discount_applied
                                .then(|| {
                                    view! {
                                        <div class="price-rows__label">"Discount"</div>
                                        <div class="price-rows__value price-rows__value--discount">
                                            {format!("-{}", format_inr(b.discount))}
                                        </div>
                                    }
                                })}
                            <div class="price-rows__label">"GST (18%)"</div>
                            <div class="price-rows__value">{format_inr(b.tax)}</div>
                            <div class="price-rows__label price-rows__label--total">"Total"</div>
                            <div class="price-rows__value price-rows__value--total">
                                {format_inr(b.total)}
                            </div>
                        </div>
                    }
                }}
                <label class="form-checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || draft.with(|d| d.terms_accepted)
                        on:change=move |ev| {
                            draft.update(|d| d.terms_accepted = event_target_checked(&ev))
                        }
                    />
                    <span>"I accept the display terms and the cancellation policy."</span>
                </label>
                <button
                    class="button button--primary button--wide"
                    prop:disabled=move || busy()
                    on:click=move |_| submit()
                >
                    {icon("card")}
                    {move || format!("Pay {}", format_inr(breakdown().total))}
                </button>
                <p class="card__hint">
                    "Amounts shown are indicative; the final charge is confirmed at checkout."
                </p>
            </div>
        }
    };

    let paid_panel = move || {
        view! {
            <div class="card card--center">
                <div class="card__icon card__icon--success">{icon("check")}</div>
                <h2 class="card__title">"Payment received"</h2>
                {move || {
                    confirmed
                        .get()
                        .map(|o| {
                            view! {
                                <p class="card__hint">
                                    {format!(
                                        "Order {} is booked for {}.",
                                        o.code,
                                        format_date(o.display_date),
                                    )}
                                </p>
                                <Badge
                                    appearance=BadgeAppearance::Tint
                                    color=status_badge_color(o.status)
                                >
                                    {o.status.display_name()}
                                </Badge>
                            }
                        })
                }}
                <p class="card__hint">
                    "The review team checks your creative before it goes on screen. Follow the status in your orders."
                </p>
                <div class="wizard__footer">
                    <button
                        class="button button--primary"
                        on:click=move |_| tabs_store.open(Page::Orders)
                    >
                        "Go to my orders"
                    </button>
                    <button class="button button--secondary" on:click=move |_| reset_all()>
                        "Book another slot"
                    </button>
                </div>
            </div>
        }
    };

    let cancelled_panel = move || {
        view! {
            <div class="card card--center">
                <h2 class="card__title">"Payment not completed"</h2>
                <p class="card__hint">
                    "The checkout was closed before paying. Your order is saved and still waits for payment."
                </p>
                <div class="wizard__footer">
                    <button
                        class="button button--primary"
                        on:click=move |_| {
                            if let Some((order, session_id)) = pending.get_untracked() {
                                step_phase(PaymentEvent::Reset);
                                open_checkout(order, session_id);
                            }
                        }
                    >
                        {icon("card")}
                        "Reopen checkout"
                    </button>
                    <button
                        class="button button--secondary"
                        on:click=move |_| tabs_store.open(Page::Orders)
                    >
                        "Go to my orders"
                    </button>
                </div>
            </div>
        }
    };

    let failed_panel = move |reason: String| {
        view! {
            <div class="card card--center">
                <div class="card__icon card__icon--danger">{icon("alert")}</div>
                <h2 class="card__title">"Payment verification failed"</h2>
                <p class="card__hint">
                    {format!("The payment could not be verified: {}", reason)}
                </p>
                <p class="card__hint">
                    "If you were charged, check the order in your dashboard before paying again."
                </p>
                <div class="wizard__footer">
                    <button
                        class="button button--primary"
                        on:click=move |_| tabs_store.open(Page::Orders)
                    >
                        "Go to my orders"
                    </button>
                    <button class="button button--secondary" on:click=move |_| reset_all()>
                        "Start a new booking"
                    </button>
                </div>
            </div>
        }
    };

    let wizard_body = move || {
        view! {
            <div class="wizard">
                {stepper()}
                <div class="wizard__body">
                    {move || match step.get() {
                        BookingStep::DateSelection => date_step().into_any(),
                        BookingStep::LocationSelection => location_step().into_any(),
                        BookingStep::PlanSelection => plan_step().into_any(),
                        BookingStep::CreativeUpload => creative_step().into_any(),
                        BookingStep::BillingDetails => billing_step().into_any(),
                        BookingStep::ReadyToSubmit => review_step().into_any(),
                    }}
                </div>
                {move || footer()}
            </div>
        }
    };

    view! {
        <PageFrame page_id="u101_slot_booking--usecase" category="usecase">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{SlotBooking::display_name()}</h1>
                </div>
                <div class="page__header-right">
                    <button
                        class="button button--secondary"
                        on:click=move |_| tabs_store.open(Page::Orders)
                    >
                        {icon("orders")}
                        "My orders"
                    </button>
                </div>
            </div>

            {move || {
                error
                    .get()
                    .map(|e| {
                        view! {
                            <div class="warning-box">
                                <span class="warning-box__icon">{icon("alert")}</span>
                                <span class="warning-box__text">{e}</span>
                                <button
                                    class="warning-box__close"
                                    on:click=move |_| set_error.set(None)
                                >
                                    {icon("x")}
                                </button>
                            </div>
                        }
                    })
            }}

            {move || match phase.get() {
                PaymentPhase::Paid => paid_panel().into_any(),
                PaymentPhase::Failed(reason) => failed_panel(reason).into_any(),
                PaymentPhase::Cancelled => cancelled_panel().into_any(),
                _ => wizard_body().into_any(),
            }}

            <Show when=move || matches!(phase.get(), PaymentPhase::Verifying)>
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
