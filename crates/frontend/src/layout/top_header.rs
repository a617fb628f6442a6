//! Application top bar: brand, page navigation and the user block.

use crate::layout::global_context::{AppGlobalContext, Page};
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;
use crate::usecases::u101_slot_booking::availability::AvailabilityCache;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let tabs_store =
        use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let session = use_session();
    let availability = use_context::<StoredValue<AvailabilityCache, LocalStorage>>()
        .expect("AvailabilityCache not provided");

    let page = tabs_store.page;

    let logout = move |_| {
        availability.with_value(|cache| cache.clear());
        session.teardown(false);
    };

    let nav_class = move |active: bool| {
        if active {
            "top-nav__link top-nav__link--active"
        } else {
            "top-nav__link"
        }
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                {icon("screen")}
                <span class="top-header__title">"Adboard"</span>
            </div>

            <nav class="top-nav">
                <button
                    class=move || nav_class(page.get() == Page::Book)
                    on:click=move |_| tabs_store.open(Page::Book)
                >
                    {icon("calendar")}
                    "Book a slot"
                </button>
                <button
                    class=move || {
                        nav_class(matches!(
                            page.get(),
                            Page::Orders | Page::OrderDetails(_)
                        ))
                    }
                    on:click=move |_| tabs_store.open(Page::Orders)
                >
                    {icon("orders")}
                    "My orders"
                </button>
                {move || {
                    session
                        .is_admin()
                        .then(|| {
                            view! {
                                <button
                                    class=move || nav_class(page.get() == Page::Admin)
                                    on:click=move |_| tabs_store.open(Page::Admin)
                                >
                                    {icon("shield")}
                                    "Admin"
                                </button>
                            }
                        })
                }}
            </nav>

            <div class="top-header__actions">
                <div class="top-header__user">
                    {icon("user")}
                    <span>{move || session.display_name()}</span>
                </div>
                <button class="top-header__icon-btn" on:click=logout title="Sign out">
                    {icon("logout")}
                </button>
            </div>
        </div>
    }
}
