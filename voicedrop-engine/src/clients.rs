use async_trait::async_trait;

use crate::config::ServiceConfig;
use crate::traits::{CallError, TranscribeService, WebhookService};
use voicedrop_core::types::AudioUpload;
use voicedrop_providers::parse::{
    parse_health_response, parse_send_response, parse_transcribe_response,
};
use voicedrop_providers::runtime;
use voicedrop_providers::slack::{build_health_request, build_slack_message_request};
use voicedrop_providers::transcribe::build_transcribe_request;

// The service reports failures in the response body, not the status line,
// so both clients parse the body regardless of status. A body that fails
// to decode counts as a transport failure.

#[derive(Debug, Clone)]
pub struct HttpTranscribeService {
    base: String,
}

impl HttpTranscribeService {
    pub fn new(cfg: &ServiceConfig) -> Self {
        Self {
            base: cfg.api_base.clone(),
        }
    }
}

#[async_trait]
impl TranscribeService for HttpTranscribeService {
    async fn transcribe(&self, upload: &AudioUpload) -> Result<String, CallError> {
        let req = build_transcribe_request(&self.base, upload);
        let resp = runtime::execute(&req)
            .await
            .map_err(|e| CallError::Transport(e.to_string()))?;

        let parsed = parse_transcribe_response(&resp.body)
            .map_err(|e| CallError::Transport(e.to_string()))?;
        parsed.into_outcome().map_err(CallError::Service)
    }
}

#[derive(Debug, Clone)]
pub struct HttpWebhookService {
    base: String,
}

impl HttpWebhookService {
    pub fn new(cfg: &ServiceConfig) -> Self {
        Self {
            base: cfg.api_base.clone(),
        }
    }
}

#[async_trait]
impl WebhookService for HttpWebhookService {
    async fn send(&self, text: &str, webhook_url: &str) -> Result<(), CallError> {
        let req = build_slack_message_request(&self.base, text, webhook_url);
        let resp = runtime::execute(&req)
            .await
            .map_err(|e| CallError::Transport(e.to_string()))?;

        let parsed =
            parse_send_response(&resp.body).map_err(|e| CallError::Transport(e.to_string()))?;
        parsed.into_outcome().map_err(CallError::Service)
    }
}

/// Probes `GET {base}/health`. `Ok(true)` means the service answered and
/// reported itself healthy.
pub async fn check_health(cfg: &ServiceConfig) -> Result<bool, CallError> {
    let req = build_health_request(&cfg.api_base);
    let resp = runtime::execute(&req)
        .await
        .map_err(|e| CallError::Transport(e.to_string()))?;

    let parsed =
        parse_health_response(&resp.body).map_err(|e| CallError::Transport(e.to_string()))?;
    Ok(parsed.is_healthy())
}
