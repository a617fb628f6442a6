pub mod global_context;
pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

/// Application shell: top bar plus the routed page body.
///
/// ```text
/// +------------------------------------------+
/// |               TopHeader                  |
/// +------------------------------------------+
/// |                 Content                  |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<C>(content: C) -> impl IntoView
where
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <TopHeader />
            <main class="app-main">{content()}</main>
        </div>
    }
}
