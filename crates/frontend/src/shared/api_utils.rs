//! Gateway helpers for talking to the booking REST backend.
//!
//! Every JSON endpoint answers in the `ApiEnvelope { success, data | error }`
//! shape; the helpers here unwrap that envelope and normalize failures into
//! the [`ApiError`] taxonomy. Views never see raw transport errors.

use contracts::shared::ApiEnvelope;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Failure classes surfaced to the rest of the client.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Transport-level failure. Retryable, shown as a dismissible notice.
    #[error("network error: {0}")]
    Network(String),
    /// The backend rejected the bearer token. Fatal to the session.
    #[error("session expired")]
    Unauthorized,
    /// Business rejection carried in the envelope `error` field.
    #[error("{0}")]
    Api(String),
    /// The body did not parse as the expected shape. Treated as network-grade.
    #[error("malformed response: {0}")]
    Decode(String),
}

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 8000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:8000" or "https://example.com:8000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:8000", protocol, hostname)
}

/// Build a full API URL from a path starting with `/api/`.
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

fn bearer(token: Option<&str>) -> Option<String> {
    token.map(|t| format!("Bearer {}", t))
}

/// GET an enveloped JSON resource.
pub async fn get_json<T: DeserializeOwned>(
    path: &str,
    token: Option<&str>,
) -> Result<T, ApiError> {
    let mut request = Request::get(&api_url(path));
    if let Some(auth) = bearer(token) {
        request = request.header("Authorization", &auth);
    }
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_envelope(response).await
}

/// POST a JSON body, expecting an enveloped JSON answer.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
    token: Option<&str>,
) -> Result<T, ApiError> {
    let mut request = Request::post(&api_url(path));
    if let Some(auth) = bearer(token) {
        request = request.header("Authorization", &auth);
    }
    let response = request
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_envelope(response).await
}

/// POST without a body (action endpoints like order cancel).
pub async fn post_empty<T: DeserializeOwned>(
    path: &str,
    token: Option<&str>,
) -> Result<T, ApiError> {
    let mut request = Request::post(&api_url(path));
    if let Some(auth) = bearer(token) {
        request = request.header("Authorization", &auth);
    }
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_envelope(response).await
}

/// PUT raw bytes to an absolute URL (signed upload target).
///
/// No bearer header and no envelope: the signature in the URL authorizes the
/// write and the storage service answers with a bare status code.
pub async fn put_binary(url: &str, content_type: &str, bytes: &[u8]) -> Result<(), ApiError> {
    let body = js_sys::Uint8Array::from(bytes);
    let response = Request::put(url)
        .header("Content-Type", content_type)
        .body(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !response.ok() {
        return Err(ApiError::Api(format!("upload failed: HTTP {}", response.status())));
    }
    Ok(())
}

async fn read_envelope<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if response.status() == 401 {
        return Err(ApiError::Unauthorized);
    }
    let envelope: ApiEnvelope<T> = match response.json().await {
        Ok(parsed) => parsed,
        Err(e) => {
            if !response.ok() {
                return Err(ApiError::Network(format!("HTTP {}", response.status())));
            }
            return Err(ApiError::Decode(e.to_string()));
        }
    };
    envelope.into_result().map_err(ApiError::Api)
}
