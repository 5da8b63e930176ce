use std::sync::Arc;
use std::time::Duration;

use voicedrop_core::markup::{Segment, parse};
use voicedrop_core::preview::{PreviewNode, render};
use voicedrop_core::types::AudioUpload;
use voicedrop_engine::clients::{HttpTranscribeService, HttpWebhookService, check_health};
use voicedrop_engine::config::ServiceConfig;
use voicedrop_engine::controller::SubmissionController;
use voicedrop_engine::form::SubmissionState;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const WEBHOOK_URL: &str = "https://hooks.slack.com/services/T0/B0/x";

fn controller_for(server: &MockServer) -> SubmissionController {
    let cfg = ServiceConfig::new(server.uri());
    SubmissionController::new(
        Arc::new(HttpTranscribeService::new(&cfg)),
        Arc::new(HttpWebhookService::new(&cfg)),
    )
}

#[tokio::test]
async fn full_flow_from_upload_to_send() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/transcribe"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"success":true,"transcription":"hello team, quick update"}"#,
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/slack-message"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(r#"{"success":true}"#, "application/json"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let c = controller_for(&server);
    c.set_title(Some("Team Sync".into())).await;
    c.set_speaker(Some("Alice".into())).await;

    let snap = c.select_file(AudioUpload::mp3("standup.mp3", vec![0xFF, 0xFB, 0x90])).await;
    assert_eq!(snap.staged_file.as_deref(), Some("standup.mp3"));
    assert_eq!(snap.error, None);

    let snap = c.submit_transcription().await;
    assert_eq!(snap.state, SubmissionState::TranscribeSucceeded);
    assert_eq!(
        snap.message.body_text,
        "`Team Sync` from Alice:\n\n```hello team, quick update```"
    );

    // The preview of the generated markup contains exactly one
    // whitespace-preserving block carrying the transcript.
    let nodes = render(&parse(&snap.message.body_text));
    let blocks: Vec<_> = nodes.iter().filter(|n| n.preserves_whitespace()).collect();
    assert_eq!(blocks, vec![&PreviewNode::Pre("hello team, quick update".into())]);

    // The user tweaks the text before sending; their edit is what goes out.
    c.edit_body("`Team Sync` from Alice:\n\n```hello team, quick update!```").await;
    c.set_webhook_url(WEBHOOK_URL).await;

    let snap = c.submit_send().await;
    assert_eq!(snap.state, SubmissionState::SendSucceeded);
    assert_eq!(snap.message.body_text, "");
    assert_eq!(snap.message.webhook_url, WEBHOOK_URL);
    assert!(snap.notice.is_some());
}

#[tokio::test]
async fn transcription_service_error_is_surfaced_and_file_retained() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/transcribe"))
        .respond_with(ResponseTemplate::new(400).set_body_raw(
            r#"{"success":false,"error":"no speech detected"}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let c = controller_for(&server);
    c.select_file(AudioUpload::mp3("silence.mp3", vec![0])).await;

    let snap = c.submit_transcription().await;
    assert_eq!(snap.state, SubmissionState::TranscribeFailed);
    // The error text comes from the body even though the status was 400.
    assert_eq!(snap.error.as_deref(), Some("no speech detected"));
    assert_eq!(snap.staged_file.as_deref(), Some("silence.mp3"));
}

#[tokio::test]
async fn webhook_failure_keeps_body_text() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/slack-message"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"success":false,"error":"rate limited"}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let c = controller_for(&server);
    c.edit_body("standup notes").await;
    c.set_webhook_url(WEBHOOK_URL).await;

    let snap = c.submit_send().await;
    assert_eq!(snap.state, SubmissionState::SendFailed);
    assert_eq!(snap.error.as_deref(), Some("rate limited"));
    assert_eq!(snap.message.body_text, "standup notes");
}

#[tokio::test]
async fn rapid_double_send_posts_exactly_once() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/slack-message"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(r#"{"success":true}"#, "application/json")
                .set_delay(Duration::from_millis(100)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let c = controller_for(&server);
    c.edit_body("standup notes").await;
    c.set_webhook_url(WEBHOOK_URL).await;

    let (first, second) = tokio::join!(c.submit_send(), c.submit_send());
    assert!(
        first.state == SubmissionState::SendSucceeded
            || second.state == SubmissionState::SendSucceeded
    );

    // wiremock verifies expect(1) on drop: the guarded second submit never
    // reached the wire.
}

#[tokio::test]
async fn transport_failure_is_recoverable() {
    let server = MockServer::start().await;
    let c = controller_for(&server);

    // No mock mounted: wiremock answers 404 with an empty body, which the
    // client reports as a transport failure (undecodable body).
    c.edit_body("standup notes").await;
    c.set_webhook_url(WEBHOOK_URL).await;

    let snap = c.submit_send().await;
    assert_eq!(snap.state, SubmissionState::SendFailed);
    assert!(snap.error.is_some());
    assert_eq!(snap.message.body_text, "standup notes");

    // The guard reset: a retry is accepted.
    Mock::given(method("POST"))
        .and(path("/api/slack-message"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(r#"{"success":true}"#, "application/json"),
        )
        .mount(&server)
        .await;

    let snap = c.submit_send().await;
    assert_eq!(snap.state, SubmissionState::SendSucceeded);
}

#[tokio::test]
async fn health_probe_reports_service_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(r#"{"status":"healthy"}"#, "application/json"),
        )
        .mount(&server)
        .await;

    let cfg = ServiceConfig::new(server.uri());
    assert!(check_health(&cfg).await.unwrap());
}

#[tokio::test]
async fn segments_round_trip_through_preview_kinds() {
    // Pure-core sanity carried at the integration level: the exact split
    // semantics the preview depends on.
    let segments = parse("`a` ```b``` `c`");
    assert_eq!(
        segments,
        vec![
            Segment::plain(""),
            Segment::inline_code("a"),
            Segment::plain(" "),
            Segment::code_block("b"),
            Segment::plain(" "),
            Segment::inline_code("c"),
            Segment::plain(""),
        ]
    );
}
