use crate::request::{Body, HttpRequest, join_url};
use serde_json::json;

/// Builds `POST {base}/api/slack-message` with the message text and the
/// destination webhook URL as a JSON body.
pub fn build_slack_message_request(base: &str, text: &str, webhook_url: &str) -> HttpRequest {
    let payload = json!({
        "text": text,
        "webhook_url": webhook_url,
    });

    HttpRequest {
        method: "POST".into(),
        url: join_url(base, "/api/slack-message"),
        headers: vec![
            ("Content-Type".into(), "application/json".into()),
            ("Accept".into(), "application/json".into()),
        ],
        body: Body::Json(payload.to_string()),
    }
}

/// Builds `GET {base}/health`, the service liveness probe.
pub fn build_health_request(base: &str) -> HttpRequest {
    HttpRequest {
        method: "GET".into(),
        url: join_url(base, "/health"),
        headers: vec![("Accept".into(), "application/json".into())],
        body: Body::Empty,
    }
}
