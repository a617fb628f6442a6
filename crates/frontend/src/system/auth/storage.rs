use contracts::system::auth::UserInfo;

use crate::shared::storage_utils;

const TOKEN_KEY: &str = "auth_token";
const PROFILE_KEY: &str = "auth_profile";

/// Save the bearer token to localStorage
pub fn save_token(token: &str) {
    storage_utils::save_string(TOKEN_KEY, token);
}

/// Get the bearer token from localStorage
pub fn get_token() -> Option<String> {
    storage_utils::load_string(TOKEN_KEY)
}

/// Save the cached profile to localStorage
pub fn save_profile(profile: &UserInfo) {
    storage_utils::save_json(PROFILE_KEY, profile);
}

/// Get the cached profile from localStorage
pub fn get_profile() -> Option<UserInfo> {
    storage_utils::load_json(PROFILE_KEY)
}

/// Clear the persisted session
pub fn clear_session() {
    storage_utils::remove_key(TOKEN_KEY);
    storage_utils::remove_key(PROFILE_KEY);
}
