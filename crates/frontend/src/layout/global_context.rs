use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Which page the shell shows. The storefront is a handful of pages, so
/// navigation is one signal instead of a router table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Book,
    Orders,
    OrderDetails(String),
    Admin,
}

impl Page {
    fn key(&self) -> String {
        match self {
            Page::Book => "book".to_string(),
            Page::Orders => "orders".to_string(),
            Page::OrderDetails(id) => format!("order:{}", id),
            Page::Admin => "admin".to_string(),
        }
    }

    fn from_key(key: &str) -> Option<Self> {
        match key {
            "book" => Some(Page::Book),
            "orders" => Some(Page::Orders),
            "admin" => Some(Page::Admin),
            other => other
                .strip_prefix("order:")
                .map(|id| Page::OrderDetails(id.to_string())),
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub page: RwSignal<Page>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            page: RwSignal::new(Page::Book),
        }
    }

    pub fn open(&self, page: Page) {
        leptos::logging::log!("open page '{}'", page.key());
        self.page.set(page);
    }

    /// Land on the page named in the query string, then mirror every page
    /// change back into it, so reloads and shared links keep their place.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(page) = params.get("page").and_then(|key| Page::from_key(key)) {
            self.page.set(page);
        }

        let this = *self;
        Effect::new(move |_| {
            let query_string = serde_qs::to_string(&HashMap::from([(
                "page".to_string(),
                this.page.get().key(),
            )]))
            .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only touch the history when the URL actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_keys_round_trip() {
        for page in [
            Page::Book,
            Page::Orders,
            Page::OrderDetails("0d9c".to_string()),
            Page::Admin,
        ] {
            assert_eq!(Page::from_key(&page.key()), Some(page));
        }
        assert_eq!(Page::from_key("unknown"), None);
    }
}
