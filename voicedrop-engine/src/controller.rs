use std::sync::Arc;
use tokio::sync::Mutex;

use crate::form::{FormSnapshot, Message, SubmissionState, state_label};
use crate::traits::{CallError, TranscribeService, WebhookService};
use voicedrop_core::format::format_message;
use voicedrop_core::types::AudioUpload;
use voicedrop_core::validate::{Field, require_non_empty, validate_upload};

/// Shown after a successful send.
pub const SENT_NOTICE: &str = "Message sent to Slack successfully!";

/// All mutable form state, owned by the controller and mutated only through
/// the named transitions below. Everything else reads snapshots.
#[derive(Default)]
struct Inner {
    state: SubmissionState,
    message: Message,
    staged: Option<AudioUpload>,
    error: Option<String>,
    notice: Option<String>,

    // Bumped on every accepted dispatch. A completion is applied only if
    // its issue still equals the current sequence (last-issued-wins), so a
    // stale response can never clobber a newer submission's state.
    issue_seq: u64,
}

impl Inner {
    fn set_state(&mut self, next: SubmissionState) {
        if self.state != next {
            log::info!("form state: {:?} -> {:?}", self.state, next);
        }
        self.state = next;
    }

    fn select_file(&mut self, upload: AudioUpload) {
        self.set_state(SubmissionState::Validating);
        self.notice = None;

        match validate_upload(Some(&upload)) {
            Ok(_) => {
                self.staged = Some(upload);
                self.error = None;
            }
            Err(e) => {
                // Matches the original form: an invalid pick also clears
                // any previously staged file.
                self.staged = None;
                self.error = Some(e.to_string());
            }
        }

        self.set_state(SubmissionState::Idle);
    }

    fn edit_body(&mut self, text: impl Into<String>) {
        self.message.body_text = text.into();
        // Fresh input dismisses a stale error.
        self.error = None;
    }

    fn begin_transcribe(&mut self) -> Option<(u64, AudioUpload)> {
        if self.state.in_flight() {
            // At most one outstanding call per form instance.
            return None;
        }

        let upload = match validate_upload(self.staged.as_ref()) {
            Ok(upload) => upload.clone(),
            Err(e) => {
                self.error = Some(e.to_string());
                return None;
            }
        };

        self.error = None;
        self.notice = None;
        self.set_state(SubmissionState::TranscribingInFlight);
        self.issue_seq += 1;
        Some((self.issue_seq, upload))
    }

    fn finish_transcribe(&mut self, issue: u64, outcome: Result<String, CallError>) {
        if issue != self.issue_seq {
            log::info!("dropping stale transcription result (issue {issue})");
            return;
        }

        match outcome {
            Ok(text) => {
                self.message.transcript = text;
                self.message.body_text = format_message(
                    &self.message.transcript,
                    self.message.title.as_deref(),
                    self.message.speaker.as_deref(),
                );
                self.error = None;
                self.set_state(SubmissionState::TranscribeSucceeded);
            }
            Err(e) => {
                // The staged file is kept so the user can retry without
                // re-choosing it.
                self.error = Some(e.to_string());
                self.set_state(SubmissionState::TranscribeFailed);
            }
        }
    }

    fn begin_send(&mut self) -> Option<(u64, String, String)> {
        if self.state.in_flight() {
            return None;
        }

        let gate = require_non_empty(Field::BodyText, &self.message.body_text)
            .and_then(|_| require_non_empty(Field::WebhookUrl, &self.message.webhook_url));
        if let Err(e) = gate {
            self.error = Some(e.to_string());
            return None;
        }

        self.error = None;
        self.notice = None;
        self.set_state(SubmissionState::SendingInFlight);
        self.issue_seq += 1;
        Some((
            self.issue_seq,
            self.message.body_text.clone(),
            self.message.webhook_url.clone(),
        ))
    }

    fn finish_send(&mut self, issue: u64, outcome: Result<(), CallError>) {
        if issue != self.issue_seq {
            log::info!("dropping stale send result (issue {issue})");
            return;
        }

        match outcome {
            Ok(()) => {
                // The webhook URL is kept: it is typically reused.
                self.message.body_text.clear();
                self.error = None;
                self.notice = Some(SENT_NOTICE.into());
                self.set_state(SubmissionState::SendSucceeded);
            }
            Err(e) => {
                // Body text is kept unchanged so no user input is lost.
                self.error = Some(e.to_string());
                self.set_state(SubmissionState::SendFailed);
            }
        }
    }

    fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            state: self.state,
            state_label: state_label(self.state).into(),
            message: self.message.clone(),
            staged_file: self.staged.as_ref().map(|u| u.filename.clone()),
            error: self.error.clone(),
            notice: self.notice.clone(),
        }
    }
}

/// Orchestrates the upload → transcribe → edit → send flow over injected
/// service collaborators.
///
/// Holding the lock only around transitions (never across an await of a
/// service call) keeps the form responsive while a call is outstanding;
/// the `*InFlight` states are the guard that serializes dispatches.
#[derive(Clone)]
pub struct SubmissionController {
    inner: Arc<Mutex<Inner>>,
    transcriber: Arc<dyn TranscribeService>,
    webhook: Arc<dyn WebhookService>,
}

impl SubmissionController {
    pub fn new(transcriber: Arc<dyn TranscribeService>, webhook: Arc<dyn WebhookService>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner::default())),
            transcriber,
            webhook,
        }
    }

    pub async fn snapshot(&self) -> FormSnapshot {
        self.inner.lock().await.snapshot()
    }

    pub async fn select_file(&self, upload: AudioUpload) -> FormSnapshot {
        let mut inner = self.inner.lock().await;
        inner.select_file(upload);
        if let Some(e) = &inner.error {
            log::warn!("file rejected: {e}");
        }
        inner.snapshot()
    }

    pub async fn edit_body(&self, text: impl Into<String>) -> FormSnapshot {
        let mut inner = self.inner.lock().await;
        inner.edit_body(text);
        inner.snapshot()
    }

    pub async fn set_title(&self, title: Option<String>) -> FormSnapshot {
        let mut inner = self.inner.lock().await;
        inner.message.title = title;
        inner.snapshot()
    }

    pub async fn set_speaker(&self, speaker: Option<String>) -> FormSnapshot {
        let mut inner = self.inner.lock().await;
        inner.message.speaker = speaker;
        inner.snapshot()
    }

    pub async fn set_webhook_url(&self, url: impl Into<String>) -> FormSnapshot {
        let mut inner = self.inner.lock().await;
        inner.message.webhook_url = url.into();
        inner.snapshot()
    }

    /// Dispatches the staged file to the transcription service.
    ///
    /// A no-op while any call is in flight; surfaces a ValidationError when
    /// no valid file is staged.
    pub async fn submit_transcription(&self) -> FormSnapshot {
        let issued = {
            let mut inner = self.inner.lock().await;
            inner.begin_transcribe()
        };

        let Some((issue, upload)) = issued else {
            return self.snapshot().await;
        };

        let outcome = self.transcriber.transcribe(&upload).await;

        let mut inner = self.inner.lock().await;
        if let Err(e) = &outcome {
            log::warn!("transcription failed: {e}");
        }
        inner.finish_transcribe(issue, outcome);
        inner.snapshot()
    }

    /// Dispatches the message to the webhook endpoint.
    ///
    /// A no-op while any call is in flight; surfaces a ValidationError when
    /// the body text or webhook URL is empty after trimming.
    pub async fn submit_send(&self) -> FormSnapshot {
        let issued = {
            let mut inner = self.inner.lock().await;
            inner.begin_send()
        };

        let Some((issue, text, webhook_url)) = issued else {
            return self.snapshot().await;
        };

        let outcome = self.webhook.send(&text, &webhook_url).await;

        let mut inner = self.inner.lock().await;
        if let Err(e) = &outcome {
            log::warn!("send failed: {e}");
        }
        inner.finish_send(issue, outcome);
        inner.snapshot()
    }
}
