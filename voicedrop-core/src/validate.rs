use crate::types::AudioUpload;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The only media type the upload form accepts.
pub const MP3_MEDIA_TYPE: &str = "audio/mpeg";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    File,
    BodyText,
    WebhookUrl,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::File => "file",
            Field::BodyText => "body_text",
            Field::WebhookUrl => "webhook_url",
        }
    }
}

/// A client-side rejection raised before any network call is made.
///
/// `reason` is the user-facing text; `field` tells the rendering layer
/// which input to highlight.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{reason}")]
pub struct ValidationError {
    pub field: Field,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: Field, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// Accepts a staged upload only if its declared media type is exactly
/// `audio/mpeg`. No content sniffing, no size limit.
pub fn validate_upload(file: Option<&AudioUpload>) -> Result<&AudioUpload, ValidationError> {
    let Some(file) = file else {
        return Err(ValidationError::new(Field::File, "Please select a file"));
    };

    if file.media_type != MP3_MEDIA_TYPE {
        return Err(ValidationError::new(
            Field::File,
            "Please select a valid MP3 file",
        ));
    }

    Ok(file)
}

/// Gate for the send operation: both the message text and the webhook URL
/// must be non-empty after trimming.
pub fn require_non_empty(field: Field, value: &str) -> Result<(), ValidationError> {
    if !value.trim().is_empty() {
        return Ok(());
    }

    let reason = match field {
        Field::BodyText => "Message text required",
        Field::WebhookUrl => "Webhook URL required",
        Field::File => "Please select a file",
    };
    Err(ValidationError::new(field, reason))
}
