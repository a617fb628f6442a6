use serde::{Deserialize, Serialize};

/// Asks the backend for a pre-authorized upload target.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedUploadRequest {
    pub file_name: String,
    /// MIME type, e.g. "image/png" or "video/mp4".
    pub file_type: String,
}

/// Where to `PUT` the creative bytes, and the storage path to reference
/// in the order once the upload succeeds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedUploadTicket {
    pub upload_url: String,
    pub path: String,
}
