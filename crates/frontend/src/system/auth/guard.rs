use leptos::prelude::*;

use super::context::use_session;

/// Component that requires admin privileges
/// Shows fallback if not admin
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || session.token.get().is_some() && session.is_admin()
            fallback=|| view! { <div class="guard-notice">"Access denied. Admin privileges required."</div> }
        >
            {children()}
        </Show>
    }
}
