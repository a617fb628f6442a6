//! Creative acceptance and the two-phase upload.
//!
//! Phase one is local: allow-list, size cap and preview, before any
//! network traffic. Phase two asks the backend to sign an upload target,
//! then PUTs the bytes straight to storage. Only a successful PUT yields
//! the storage path; a failed PUT keeps the accepted file so the customer
//! can retry without re-selecting it.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use contracts::usecases::u101_slot_booking::{SignedUploadRequest, SignedUploadTicket};
use js_sys::Uint8Array;
use serde::{Deserialize, Serialize};
use wasm_bindgen_futures::JsFuture;

use crate::shared::api_utils::{self, ApiError};
use crate::shared::storage_utils;
use crate::system::auth::context::SessionState;

const PREVIEW_KEY: &str = "u101_creative_preview";

pub const MAX_IMAGE_BYTES: u64 = 10 * 1024 * 1024;
pub const MAX_VIDEO_BYTES: u64 = 100 * 1024 * 1024;

/// What kind of creative the screen will loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreativeKind {
    Image,
    Video,
}

impl CreativeKind {
    /// Classify by file extension alone.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let (_, ext) = name.rsplit_once('.')?;
        match ext.to_lowercase().as_str() {
            "jpg" | "jpeg" | "png" | "webp" => Some(CreativeKind::Image),
            "mp4" => Some(CreativeKind::Video),
            _ => None,
        }
    }

    pub fn max_bytes(&self) -> u64 {
        match self {
            CreativeKind::Image => MAX_IMAGE_BYTES,
            CreativeKind::Video => MAX_VIDEO_BYTES,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CreativeKind::Image => "image",
            CreativeKind::Video => "video",
        }
    }
}

/// Extension first, MIME as fallback for files picked without one.
pub fn classify(name: &str, mime: &str) -> Option<CreativeKind> {
    CreativeKind::from_file_name(name).or(match mime {
        "image/jpeg" | "image/png" | "image/webp" => Some(CreativeKind::Image),
        "video/mp4" => Some(CreativeKind::Video),
        _ => None,
    })
}

/// Local accept: allow-list and size cap, before any network call.
/// The error strings are shown to the customer as-is.
pub fn accept(name: &str, mime: &str, size: u64) -> Result<CreativeKind, String> {
    let Some(kind) = classify(name, mime) else {
        return Err("Only JPG, PNG or WebP images and MP4 video are accepted.".to_string());
    };
    if size > kind.max_bytes() {
        return Err(format!(
            "This {} is too large. The limit is {} MB.",
            kind.display_name(),
            kind.max_bytes() / (1024 * 1024)
        ));
    }
    Ok(kind)
}

/// An accepted creative held in memory until its upload succeeds.
#[derive(Clone)]
pub struct CreativeFile {
    pub name: String,
    pub mime: String,
    pub kind: CreativeKind,
    pub bytes: Vec<u8>,
}

/// Run the local accept and pull the picked file into memory.
pub async fn read_file(file: web_sys::File) -> Result<CreativeFile, String> {
    let name = file.name();
    let mime = file.type_();
    let kind = accept(&name, &mime, file.size() as u64)?;
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| "Could not read the file.".to_string())?;
    let bytes = Uint8Array::new(&buffer).to_vec();
    Ok(CreativeFile {
        name,
        mime,
        kind,
        bytes,
    })
}

/// Inline preview for images. Videos get no thumbnail; the picker shows
/// the file name instead.
pub fn preview_data_url(file: &CreativeFile) -> Option<String> {
    if file.kind != CreativeKind::Image {
        return None;
    }
    Some(format!(
        "data:{};base64,{}",
        file.mime,
        STANDARD.encode(&file.bytes)
    ))
}

/// What survives a page reload: enough to re-show the creative step as
/// done without holding the bytes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewSnapshot {
    pub file_name: String,
    pub kind: CreativeKind,
    pub data_url: Option<String>,
    pub remote_path: Option<String>,
}

pub fn save_preview_snapshot(snapshot: &PreviewSnapshot) {
    storage_utils::save_json(PREVIEW_KEY, snapshot);
}

pub fn load_preview_snapshot() -> Option<PreviewSnapshot> {
    storage_utils::load_json(PREVIEW_KEY)
}

pub fn clear_preview_snapshot() {
    storage_utils::remove_key(PREVIEW_KEY);
}

/// Two-phase commit: sign, then direct PUT. Only a successful PUT returns
/// the storage path to reference in the order.
pub async fn upload_creative(
    session: SessionState,
    file: &CreativeFile,
) -> Result<String, ApiError> {
    let ticket: SignedUploadTicket = session
        .post(
            "/api/uploads/sign",
            &SignedUploadRequest {
                file_name: file.name.clone(),
                file_type: file.mime.clone(),
            },
        )
        .await?;
    api_utils::put_binary(&ticket.upload_url, &file.mime, &file.bytes).await?;
    Ok(ticket.path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_by_extension_with_mime_fallback() {
        assert_eq!(
            CreativeKind::from_file_name("Diwali-Spot.MP4"),
            Some(CreativeKind::Video)
        );
        assert_eq!(
            CreativeKind::from_file_name("banner.webp"),
            Some(CreativeKind::Image)
        );
        assert_eq!(CreativeKind::from_file_name("archive.tar.gz"), None);
        assert_eq!(CreativeKind::from_file_name("no-extension"), None);

        assert_eq!(classify("blob", "image/png"), Some(CreativeKind::Image));
        assert_eq!(classify("blob", "application/pdf"), None);
    }

    #[test]
    fn oversized_files_are_rejected_locally() {
        assert!(accept("spot.png", "image/png", MAX_IMAGE_BYTES).is_ok());
        let err = accept("spot.png", "image/png", MAX_IMAGE_BYTES + 1).unwrap_err();
        assert!(err.contains("10 MB"));

        assert!(accept("spot.mp4", "video/mp4", MAX_VIDEO_BYTES).is_ok());
        let err = accept("spot.mp4", "video/mp4", MAX_VIDEO_BYTES + 1).unwrap_err();
        assert!(err.contains("100 MB"));
    }

    #[test]
    fn disallowed_types_are_rejected_locally() {
        assert!(accept("slides.pdf", "application/pdf", 1024).is_err());
        assert!(accept("spot.avi", "video/x-msvideo", 1024).is_err());
    }

    #[test]
    fn only_images_get_a_data_url_preview() {
        let image = CreativeFile {
            name: "dot.png".to_string(),
            mime: "image/png".to_string(),
            kind: CreativeKind::Image,
            bytes: vec![0x89, 0x50, 0x4e, 0x47],
        };
        let url = preview_data_url(&image).unwrap();
        assert!(url.starts_with("data:image/png;base64,"));

        let video = CreativeFile {
            name: "spot.mp4".to_string(),
            mime: "video/mp4".to_string(),
            kind: CreativeKind::Video,
            bytes: vec![0, 0, 0, 1],
        };
        assert!(preview_data_url(&video).is_none());
    }
}
