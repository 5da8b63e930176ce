use serde::{Deserialize, Serialize};

/// The message under construction.
///
/// `body_text` starts empty, is initialized from the formatter when a
/// transcription lands, and from then on belongs to the user: only the
/// named transitions in the controller ever touch it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub transcript: String,
    pub title: Option<String>,
    pub speaker: Option<String>,
    pub webhook_url: String,
    pub body_text: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionState {
    #[default]
    Idle,
    Validating,
    TranscribingInFlight,
    TranscribeFailed,
    TranscribeSucceeded,
    SendingInFlight,
    SendFailed,
    SendSucceeded,
}

impl SubmissionState {
    pub fn in_flight(self) -> bool {
        matches!(
            self,
            SubmissionState::TranscribingInFlight | SubmissionState::SendingInFlight
        )
    }
}

/// A stable string label for UI display.
/// This is intentionally not derived from `Debug`.
pub fn state_label(state: SubmissionState) -> &'static str {
    match state {
        SubmissionState::Idle => "idle",
        SubmissionState::Validating => "validating",
        SubmissionState::TranscribingInFlight => "transcribing",
        SubmissionState::TranscribeFailed => "transcribe_failed",
        SubmissionState::TranscribeSucceeded => "transcribe_succeeded",
        SubmissionState::SendingInFlight => "sending",
        SubmissionState::SendFailed => "send_failed",
        SubmissionState::SendSucceeded => "sent",
    }
}

/// Immutable view of the form handed to the rendering layer.
///
/// `error` and `notice` are mutually exclusive in practice: at most one
/// message is surfaced at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSnapshot {
    pub state: SubmissionState,
    pub state_label: String,
    pub message: Message,
    pub staged_file: Option<String>,
    pub error: Option<String>,
    pub notice: Option<String>,
}
