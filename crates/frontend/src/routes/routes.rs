use crate::domain::a003_order::ui::admin::AdminOrdersList;
use crate::domain::a003_order::ui::details::OrderDetails;
use crate::domain::a003_order::ui::list::MyOrdersList;
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::layout::Shell;
use crate::system::auth::context::use_session;
use crate::system::auth::guard::RequireAdmin;
use crate::system::pages::login::LoginPage;
use crate::usecases::u101_slot_booking::api as booking_api;
use crate::usecases::u101_slot_booking::availability::AvailabilityCache;
use crate::usecases::u101_slot_booking::view::BookingWizard;
use leptos::prelude::*;

/// Renders whichever page the global context points at.
#[component]
fn PageHost() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        {move || match tabs_store.page.get() {
            Page::Book => view! { <BookingWizard /> }.into_any(),
            Page::Orders => view! { <MyOrdersList /> }.into_any(),
            Page::OrderDetails(id) => view! { <OrderDetails id=id /> }.into_any(),
            Page::Admin => {
                view! {
                    <RequireAdmin>
                        <AdminOrdersList />
                    </RequireAdmin>
                }
                    .into_any()
            }
        }}
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    let session = use_session();
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // One availability cache per signed-in session, shared by every page
    // under the shell. Signing out unmounts the layout and drops it.
    let availability = StoredValue::new_local(AvailabilityCache::new(
        booking_api::availability_lookup(session),
    ));
    provide_context(availability);

    // Initialize router integration. This runs once when the component is created.
    tabs_store.init_router_integration();

    view! { <Shell content=|| view! { <PageHost /> }.into_any() /> }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || session.token.get().is_some()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
