use crate::request::{Body, HttpRequest, join_url};
use voicedrop_core::types::AudioUpload;

/// Builds the multipart upload for `POST {base}/api/transcribe`.
///
/// The endpoint expects a single `file` field carrying the MP3 bytes; the
/// upload's declared media type becomes the part's Content-Type.
pub fn build_transcribe_request(base: &str, upload: &AudioUpload) -> HttpRequest {
    let boundary = format!("Boundary-{}", uuid::Uuid::new_v4());

    let mut body: Vec<u8> = Vec::new();
    append_file(
        &mut body,
        &boundary,
        "file",
        &upload.filename,
        &upload.media_type,
        &upload.bytes,
    );
    body.extend_from_slice(format!("--{}--\r\n", boundary).as_bytes());

    HttpRequest {
        method: "POST".into(),
        url: join_url(base, "/api/transcribe"),
        headers: vec![
            (
                "Content-Type".into(),
                format!("multipart/form-data; boundary={}", boundary),
            ),
            ("Accept".into(), "application/json".into()),
        ],
        body: Body::MultipartFormData { boundary, bytes: body },
    }
}

fn append_file(
    body: &mut Vec<u8>,
    boundary: &str,
    name: &str,
    filename: &str,
    media_type: &str,
    bytes: &[u8],
) {
    body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
            name, filename
        )
        .as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", media_type).as_bytes());
    body.extend_from_slice(bytes);
    body.extend_from_slice(b"\r\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_multipart_with_single_file_field() {
        let upload = AudioUpload::mp3("standup.mp3", vec![1, 2, 3]);
        let req = build_transcribe_request("http://localhost:5002", &upload);

        assert_eq!(req.method, "POST");
        assert_eq!(req.url, "http://localhost:5002/api/transcribe");
        assert!(
            req.header("content-type")
                .unwrap()
                .starts_with("multipart/form-data; boundary=")
        );

        match &req.body {
            Body::MultipartFormData { boundary, bytes } => {
                let s = String::from_utf8_lossy(bytes);
                assert!(s.contains("name=\"file\""));
                assert!(s.contains("filename=\"standup.mp3\""));
                assert!(s.contains("Content-Type: audio/mpeg"));
                assert!(s.ends_with(&format!("--{}--\r\n", boundary)));
            }
            other => panic!("expected multipart body, got {other:?}"),
        }
    }

    #[test]
    fn boundaries_are_unique_per_request() {
        let upload = AudioUpload::mp3("a.mp3", vec![0]);
        let a = build_transcribe_request("http://localhost:5002", &upload);
        let b = build_transcribe_request("http://localhost:5002", &upload);

        let boundary = |req: &HttpRequest| match &req.body {
            Body::MultipartFormData { boundary, .. } => boundary.clone(),
            _ => panic!("expected multipart"),
        };
        assert_ne!(boundary(&a), boundary(&b));
    }
}
