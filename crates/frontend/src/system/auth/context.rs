//! Session context: bearer token, cached profile and the authenticated
//! request wrappers every domain client goes through.
//!
//! A 401 from any wrapped call tears the session down in one place, so
//! views only ever observe `token == None` plus the expired notice.

use contracts::system::auth::{AuthResponse, UserInfo};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::a003_order::mirror;
use crate::shared::api_utils::{self, ApiError};
use crate::usecases::u101_slot_booking::upload;

use super::{api, jwt, storage};

#[derive(Clone, Copy)]
pub struct SessionState {
    pub token: RwSignal<Option<String>>,
    pub profile: RwSignal<Option<UserInfo>>,
    /// Set when the session ended involuntarily (401 or an expired token)
    /// so the login page can explain the bounce.
    pub expired_notice: RwSignal<bool>,
}

impl SessionState {
    fn new() -> Self {
        Self {
            token: RwSignal::new(None),
            profile: RwSignal::new(None),
            expired_notice: RwSignal::new(false),
        }
    }

    /// Start a session from a fresh auth response.
    pub fn establish(&self, response: AuthResponse) {
        storage::save_token(&response.token);
        storage::save_profile(&response.user);
        self.profile.set(Some(response.user));
        self.token.set(Some(response.token));
        self.expired_notice.set(false);
    }

    /// End the session and wipe everything it persisted: token, profile,
    /// order mirror and the creative preview snapshot.
    pub fn teardown(&self, expired: bool) {
        storage::clear_session();
        mirror::clear_mirror();
        upload::clear_preview_snapshot();
        self.profile.set(None);
        self.token.set(None);
        self.expired_notice.set(expired);
    }

    pub fn is_admin(&self) -> bool {
        self.profile
            .get()
            .map(|u| u.is_admin)
            .unwrap_or(false)
    }

    pub fn display_name(&self) -> String {
        self.profile
            .get()
            .map(|u| u.full_name)
            .unwrap_or_default()
    }

    fn current_token(&self) -> Option<String> {
        self.token.get_untracked()
    }

    fn intercept<T>(&self, result: Result<T, ApiError>) -> Result<T, ApiError> {
        if matches!(result, Err(ApiError::Unauthorized)) {
            self.teardown(true);
        }
        result
    }

    /// Authenticated GET against the gateway.
    pub async fn get<T: DeserializeOwned>(self, path: &str) -> Result<T, ApiError> {
        let token = self.current_token();
        let result = api_utils::get_json(path, token.as_deref()).await;
        self.intercept(result)
    }

    /// Authenticated POST with a JSON body.
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let token = self.current_token();
        let result = api_utils::post_json(path, body, token.as_deref()).await;
        self.intercept(result)
    }

    /// Authenticated POST without a body (action endpoints).
    pub async fn post_empty<T: DeserializeOwned>(self, path: &str) -> Result<T, ApiError> {
        let token = self.current_token();
        let result = api_utils::post_empty(path, token.as_deref()).await;
        self.intercept(result)
    }
}

/// Session context provider component
#[component]
pub fn SessionProvider(children: ChildrenFn) -> impl IntoView {
    let session = SessionState::new();
    provide_context(session);

    // Restore the persisted session on first load. The cached profile is
    // painted immediately; the token is then revalidated against the
    // backend so a revoked account does not keep a live-looking session.
    Effect::new(move |_| {
        let Some(token) = storage::get_token() else {
            return;
        };
        let now = chrono::Utc::now().timestamp();
        if jwt::is_expired(&token, now) {
            session.teardown(true);
            return;
        }
        if let Some(profile) = storage::get_profile() {
            session.profile.set(Some(profile));
        }
        session.token.set(Some(token.clone()));
        spawn_local(async move {
            match api::get_current_user(&token).await {
                Ok(user) => {
                    storage::save_profile(&user);
                    session.profile.set(Some(user));
                }
                Err(ApiError::Unauthorized) => session.teardown(true),
                // A network hiccup on startup keeps the cached profile;
                // the next authenticated call will settle it either way.
                Err(_) => {}
            }
        });
    });

    children()
}

/// Hook to access the session state
pub fn use_session() -> SessionState {
    use_context::<SessionState>().expect("SessionProvider not found in component tree")
}
