use anyhow::Context;
use serde::Deserialize;

/// Shown when the service reports failure without an error message.
pub const TRANSCRIBE_FAILED_FALLBACK: &str = "Transcription failed";
pub const SEND_FAILED_FALLBACK: &str = "Failed to send message";

#[derive(Debug, Deserialize)]
pub struct TranscribeResponse {
    pub success: bool,
    #[serde(default)]
    pub transcription: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl TranscribeResponse {
    /// Collapses the body into the transcript or a user-facing error text.
    ///
    /// A `success: true` body missing its transcription is treated as a
    /// service failure, not a panic.
    pub fn into_outcome(self) -> Result<String, String> {
        if self.success {
            self.transcription
                .ok_or_else(|| TRANSCRIBE_FAILED_FALLBACK.to_string())
        } else {
            Err(self
                .error
                .unwrap_or_else(|| TRANSCRIBE_FAILED_FALLBACK.to_string()))
        }
    }
}

pub fn parse_transcribe_response(body: &[u8]) -> anyhow::Result<TranscribeResponse> {
    serde_json::from_slice(body).context("decode transcribe response JSON")
}

#[derive(Debug, Deserialize)]
pub struct SendResponse {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

impl SendResponse {
    pub fn into_outcome(self) -> Result<(), String> {
        if self.success {
            Ok(())
        } else {
            Err(self.error.unwrap_or_else(|| SEND_FAILED_FALLBACK.to_string()))
        }
    }
}

pub fn parse_send_response(body: &[u8]) -> anyhow::Result<SendResponse> {
    serde_json::from_slice(body).context("decode slack-message response JSON")
}

#[derive(Debug, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

pub fn parse_health_response(body: &[u8]) -> anyhow::Result<HealthResponse> {
    serde_json::from_slice(body).context("decode health response JSON")
}
