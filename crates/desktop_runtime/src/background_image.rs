//! Background-image upload validation and user-facing failure messages.

use thiserror::Error;

/// MIME types accepted for the desktop background.
pub const ALLOWED_IMAGE_TYPES: [&str; 4] =
    ["image/jpeg", "image/png", "image/webp", "image/svg+xml"];
/// Largest accepted upload, in bytes.
pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BackgroundImageError {
    #[error("unsupported background image type `{0}`")]
    UnsupportedType(String),
    #[error("background image is {size} bytes; the limit is {MAX_IMAGE_BYTES}")]
    TooLarge { size: u64 },
    #[error("background image storage failed: {0}")]
    Storage(String),
}

impl BackgroundImageError {
    /// Translation key of the message shown to the user.
    pub fn message_key(&self) -> &'static str {
        match self {
            Self::UnsupportedType(_) => "backgroundImage.invalidType",
            Self::TooLarge { .. } => "backgroundImage.tooLarge",
            Self::Storage(_) => "backgroundImage.saveFailed",
        }
    }
}

/// Checks an upload's MIME type and size before any bytes are stored.
///
/// # Errors
///
/// Returns [`BackgroundImageError::UnsupportedType`] or [`BackgroundImageError::TooLarge`].
pub fn validate_upload(mime_type: &str, size: u64) -> Result<(), BackgroundImageError> {
    if !ALLOWED_IMAGE_TYPES.contains(&mime_type) {
        return Err(BackgroundImageError::UnsupportedType(mime_type.to_string()));
    }
    if size > MAX_IMAGE_BYTES {
        return Err(BackgroundImageError::TooLarge { size });
    }
    Ok(())
}

/// Whether `url` is a browser object URL that must be revoked once replaced.
pub fn is_object_url(url: &str) -> bool {
    url.starts_with("blob:")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn accepts_listed_types_up_to_limit() {
        for mime in ALLOWED_IMAGE_TYPES {
            assert_eq!(validate_upload(mime, MAX_IMAGE_BYTES), Ok(()));
        }
    }

    #[test]
    fn rejects_other_types_and_oversized_files() {
        assert_eq!(
            validate_upload("image/gif", 10),
            Err(BackgroundImageError::UnsupportedType("image/gif".to_string()))
        );
        assert_eq!(
            validate_upload("image/png", MAX_IMAGE_BYTES + 1),
            Err(BackgroundImageError::TooLarge {
                size: MAX_IMAGE_BYTES + 1
            })
        );
        assert_eq!(
            validate_upload("", 0).map_err(|e| e.message_key()),
            Err("backgroundImage.invalidType")
        );
    }

    #[test]
    fn storage_failures_map_to_the_save_message() {
        let err = BackgroundImageError::Storage("quota exceeded".to_string());
        assert_eq!(err.message_key(), "backgroundImage.saveFailed");
        assert_eq!(
            err.to_string(),
            "background image storage failed: quota exceeded"
        );
    }
}
