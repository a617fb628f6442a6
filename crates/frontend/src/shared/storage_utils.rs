//! Thin localStorage helpers shared by the session, the order mirror and
//! the creative preview snapshot. All writes are best-effort: a full or
//! unavailable storage never breaks the flow.

use serde::de::DeserializeOwned;
use serde::Serialize;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Store a string value under `key`.
pub fn save_string(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(key, value);
    }
}

/// Read a string value stored under `key`.
pub fn load_string(key: &str) -> Option<String> {
    local_storage().and_then(|s| s.get_item(key).ok().flatten())
}

/// Serialize `value` as JSON and store it under `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    if let Ok(json) = serde_json::to_string(value) {
        save_string(key, &json);
    }
}

/// Read and deserialize a JSON value stored under `key`.
///
/// A missing key or a snapshot written by an older client shape both read
/// as `None`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    load_string(key).and_then(|json| serde_json::from_str(&json).ok())
}

/// Remove the value stored under `key`.
pub fn remove_key(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}
