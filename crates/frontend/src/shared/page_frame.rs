//! PageFrame — standard root wrapper for every routed page.
//!
//! Guarantees two metadata attributes on the root DOM element:
//!   - `id`                  — `"{entity}--{category}"`, e.g. `"a003_order--list"`
//!   - `data-page-category`  — one of the PAGE_CAT_* constants

use super::page_standard::*;
use leptos::prelude::*;

/// Root wrapper that sets standard metadata on every page.
///
/// Automatically adds the BEM modifier class based on category:
/// - `list`    → `page`
/// - `detail`  → `page page--detail`
/// - `usecase` → `page`
/// - `system`  → `page`
#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`, e.g. `"a003_order--list"`.
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    /// Additional CSS classes appended after the base class.
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let base_class = match category {
        PAGE_CAT_LIST => "page",
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_USECASE => "page",
        PAGE_CAT_SYSTEM => "page",
        _ => "page",
    };

    let full_class = if class.is_empty() {
        base_class.to_string()
    } else {
        format!("{base_class} {class}")
    };

    view! {
        <div
            id=page_id
            class=full_class
            data-page-category=category
        >
            {children()}
        </div>
    }
}
