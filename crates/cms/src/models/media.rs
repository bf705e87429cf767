//! Media item records.
//!
//! Media is stored inline as a base64 data URI, the way the original
//! admin surface kept uploads in browser storage. Items are append and
//! delete only - there is no update operation.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{DateTime, Utc};
use portico_core::MediaId;
use serde::{Deserialize, Serialize};

use crate::store::StoreError;

/// Maximum accepted upload size (5 MiB).
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Errors that can occur during media intake.
#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    /// The upload exceeds [`MAX_UPLOAD_BYTES`].
    #[error("file size must be less than 5MB (got {size} bytes)")]
    TooLarge {
        /// Size of the rejected upload.
        size: usize,
    },

    /// Persisting the media list failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A stored media item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    pub id: MediaId,
    /// Original filename.
    pub name: String,
    /// MIME type reported at intake.
    #[serde(rename = "type")]
    pub content_type: String,
    /// Byte size of the raw file.
    pub size: usize,
    /// Inline `data:` URI carrying the base64-encoded payload.
    pub url: String,
    pub is_image: bool,
    pub uploaded_at: DateTime<Utc>,
}

/// An upload waiting to be added to the media list.
#[derive(Debug, Clone)]
pub struct MediaUpload {
    /// Original filename.
    pub name: String,
    /// MIME type of the payload.
    pub content_type: String,
    /// Raw file bytes.
    pub bytes: Vec<u8>,
}

impl MediaUpload {
    /// Validate the size limit and build the stored item.
    ///
    /// The id and upload timestamp are assigned by the content store;
    /// this only derives the data URI and image flag.
    ///
    /// # Errors
    ///
    /// Returns [`MediaError::TooLarge`] if the payload exceeds the 5 MiB
    /// intake limit.
    pub fn into_item(self, id: MediaId, uploaded_at: DateTime<Utc>) -> Result<MediaItem, MediaError> {
        if self.bytes.len() > MAX_UPLOAD_BYTES {
            return Err(MediaError::TooLarge {
                size: self.bytes.len(),
            });
        }

        let is_image = self.content_type.starts_with("image/");
        let url = format!(
            "data:{};base64,{}",
            self.content_type,
            BASE64.encode(&self.bytes)
        );

        Ok(MediaItem {
            id,
            name: self.name,
            content_type: self.content_type,
            size: self.bytes.len(),
            url,
            is_image,
            uploaded_at,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn upload(content_type: &str, bytes: Vec<u8>) -> MediaUpload {
        MediaUpload {
            name: "photo.png".to_owned(),
            content_type: content_type.to_owned(),
            bytes,
        }
    }

    #[test]
    fn test_into_item_builds_data_uri() {
        let item = upload("image/png", vec![1, 2, 3])
            .into_item(MediaId::new(10), Utc::now())
            .unwrap();

        assert!(item.url.starts_with("data:image/png;base64,"));
        assert_eq!(item.size, 3);
        assert!(item.is_image);
    }

    #[test]
    fn test_non_image_flag() {
        let item = upload("application/pdf", vec![0; 16])
            .into_item(MediaId::new(11), Utc::now())
            .unwrap();
        assert!(!item.is_image);
    }

    #[test]
    fn test_rejects_oversized_upload() {
        let result = upload("image/png", vec![0; MAX_UPLOAD_BYTES + 1])
            .into_item(MediaId::new(12), Utc::now());
        assert!(matches!(result, Err(MediaError::TooLarge { .. })));
    }

    #[test]
    fn test_accepts_exactly_at_limit() {
        let result =
            upload("image/png", vec![0; MAX_UPLOAD_BYTES]).into_item(MediaId::new(13), Utc::now());
        assert!(result.is_ok());
    }

    #[test]
    fn test_serde_field_names() {
        let item = upload("image/png", vec![1])
            .into_item(MediaId::new(14), Utc::now())
            .unwrap();
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"type\""));
        assert!(json.contains("\"isImage\""));
        assert!(json.contains("\"uploadedAt\""));
    }
}
