use async_trait::async_trait;
use thiserror::Error;
use voicedrop_core::types::AudioUpload;

/// How a dispatched call failed.
///
/// `Transport` covers everything that kept a usable response body from
/// arriving (connection refused, timeout, unparseable body); `Service`
/// means the call completed and the body reported `success: false`, with
/// the service's own error text. Validation failures never reach these
/// types: they block the call client-side.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CallError {
    #[error("{0}")]
    Transport(String),
    #[error("{0}")]
    Service(String),
}

/// The transcription collaborator behind `POST /api/transcribe`.
///
/// Injected as a trait object so the controller is testable without a
/// network and the in-flight guard can be exercised deterministically.
#[async_trait]
pub trait TranscribeService: Send + Sync {
    async fn transcribe(&self, upload: &AudioUpload) -> Result<String, CallError>;
}

/// The webhook collaborator behind `POST /api/slack-message`.
#[async_trait]
pub trait WebhookService: Send + Sync {
    async fn send(&self, text: &str, webhook_url: &str) -> Result<(), CallError>;
}
