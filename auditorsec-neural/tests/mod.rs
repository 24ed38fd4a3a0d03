use auditorsec_neural::privacy::PrivacyGuard;
use auditorsec_neural::{
    truncate_body, GeminiClient, NeuralError, TextGenerator, DEFAULT_BASE_URL, DEFAULT_MODEL,
};
use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;

// ============================================================================
// PrivacyGuard Tests
// ============================================================================

#[test]
fn test_scrub_email() {
    let input = "Escalate to counsel@auditorsec.io today";
    assert_eq!(
        PrivacyGuard::scrub(input),
        "Escalate to [REDACTED_EMAIL] today"
    );
}

#[test]
fn test_scrub_ip() {
    let input = "Polygon node at 10.20.30.40 is lagging";
    assert_eq!(
        PrivacyGuard::scrub(input),
        "Polygon node at [REDACTED_IP] is lagging"
    );
}

#[test]
fn test_scrub_google_key() {
    let input = "my key is AIzaSyA1234567890abcdefghijklmnopqrstu";
    let scrubbed = PrivacyGuard::scrub(input);
    assert!(scrubbed.contains("[REDACTED_KEY]"));
    assert!(!scrubbed.contains("AIzaSy"));
}

#[test]
fn test_scrub_secret_key() {
    let input = "Use sk-abcdefghijklmnopqrstuvwxyz for the batcher";
    let scrubbed = PrivacyGuard::scrub(input);
    assert_eq!(scrubbed, "Use [REDACTED_KEY] for the batcher");
}

#[test]
fn test_scrub_leaves_technical_text_alone() {
    let input = "Compare SNOVA with Dilithium implementation costs on Polygon v2.1";
    assert_eq!(PrivacyGuard::scrub(input), input);
}

#[test]
fn test_scrub_empty_string() {
    assert_eq!(PrivacyGuard::scrub(""), "");
}

// ============================================================================
// GeminiClient Tests (no live server)
// ============================================================================

#[test]
fn test_endpoint_shape() {
    let client = GeminiClient::new("https://example.test/v1beta/", "gemini-test", None);
    assert_eq!(
        client.endpoint(),
        "https://example.test/v1beta/models/gemini-test:generateContent"
    );
}

#[test]
fn test_defaults() {
    let client = GeminiClient::new(DEFAULT_BASE_URL, DEFAULT_MODEL, Some("k".to_string()));
    assert_eq!(client.model(), DEFAULT_MODEL);
    assert!(client.endpoint().starts_with(DEFAULT_BASE_URL));
    assert!(client.has_api_key());
}

#[test]
fn test_blank_key_is_treated_as_missing() {
    let client = GeminiClient::new(DEFAULT_BASE_URL, DEFAULT_MODEL, Some("   ".to_string()));
    assert!(!client.has_api_key());
}

#[test]
fn test_debug_hides_key() {
    let client =
        GeminiClient::new(DEFAULT_BASE_URL, DEFAULT_MODEL, Some("super-secret".to_string()));
    let debug = format!("{:?}", client);
    assert!(debug.contains(DEFAULT_MODEL));
    assert!(!debug.contains("super-secret"));
}

#[test]
fn test_request_body() {
    let body = GeminiClient::request_body("hello");
    assert_eq!(body["contents"][0]["parts"][0]["text"], "hello");
}

#[test]
fn test_extract_text_joins_parts() {
    let response = json!({
        "candidates": [{
            "content": { "parts": [ { "text": "# Plan\n" }, { "text": "* step" } ] }
        }]
    });
    assert_eq!(
        GeminiClient::extract_text(&response).unwrap(),
        "# Plan\n* step"
    );
}

#[test]
fn test_extract_text_no_text_parts_is_empty() {
    let response = json!({
        "candidates": [{ "content": { "parts": [ { "inlineData": {} } ] } }]
    });
    assert_eq!(GeminiClient::extract_text(&response).unwrap(), "");
}

#[test]
fn test_extract_text_no_candidates() {
    let response = json!({ "promptFeedback": { "blockReason": "SAFETY" } });
    let err = GeminiClient::extract_text(&response).unwrap_err();
    assert_eq!(
        err.downcast_ref::<NeuralError>(),
        Some(&NeuralError::EmptyContent)
    );
}

#[tokio::test]
async fn test_generate_without_key_fails_fast() {
    let client = GeminiClient::new("http://127.0.0.1:9", DEFAULT_MODEL, None);
    let err = client.generate("anything").await.unwrap_err();
    let neural = err.downcast_ref::<NeuralError>().unwrap();
    assert_eq!(neural, &NeuralError::MissingApiKey);
    assert!(neural.is_auth());
}

// ============================================================================
// GeminiClient against a loopback server
// ============================================================================

/// Read one HTTP request (headers plus `Content-Length` body) off the socket.
async fn read_request(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&buf[..end]).to_string();
            let body_len = head
                .lines()
                .filter_map(|l| l.split_once(':'))
                .find(|(k, _)| k.trim().eq_ignore_ascii_case("content-length"))
                .and_then(|(_, v)| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= end + 4 + body_len {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).to_string()
}

/// Serve a single canned response on 127.0.0.1. Returns the base URL and a
/// receiver for the raw request that was received.
async fn canned_server(
    status: &'static str,
    body: String,
) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_request(&mut socket).await;
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\n\
             Content-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
        let _ = tx.send(request);
    });

    (format!("http://{}/v1beta", addr), rx)
}

fn local_client(base_url: &str) -> GeminiClient {
    GeminiClient::new(base_url, "gemini-test", Some("test-key".to_string()))
}

#[tokio::test]
async fn test_generate_joins_text_parts() {
    let body = json!({
        "candidates": [{
            "content": { "parts": [ { "text": "## Plan\n" }, { "text": "* Fuzz" } ] }
        }]
    })
    .to_string();
    let (base_url, request) = canned_server("200 OK", body).await;

    let text = local_client(&base_url).generate("Assess track-2").await.unwrap();
    assert_eq!(text, "## Plan\n* Fuzz");

    let request = request.await.unwrap();
    assert!(request.starts_with("POST /v1beta/models/gemini-test:generateContent"));
    assert!(request.to_ascii_lowercase().contains("x-goog-api-key: test-key"));
    assert!(request.contains(r#""text":"Assess track-2""#));
}

#[tokio::test]
async fn test_generate_forbidden_is_truncated_status_error() {
    let (base_url, _request) = canned_server("403 Forbidden", "x".repeat(500)).await;

    let err = local_client(&base_url).generate("hi").await.unwrap_err();
    let neural = err.downcast_ref::<NeuralError>().unwrap();
    match neural {
        NeuralError::Status { status, body } => {
            assert_eq!(*status, 403);
            assert!(body.len() <= 200);
            assert!(!body.is_empty());
        }
        other => panic!("expected Status, got {:?}", other),
    }
    assert!(neural.is_auth());
}

#[tokio::test]
async fn test_generate_malformed_json_is_error() {
    let (base_url, _request) = canned_server("200 OK", "not json {".to_string()).await;

    let err = local_client(&base_url).generate("hi").await.unwrap_err();
    assert!(err.downcast_ref::<NeuralError>().is_none());
    assert!(format!("{:#}", err).contains("malformed JSON"));
}

#[tokio::test]
async fn test_generate_empty_object_is_empty_content() {
    let (base_url, _request) = canned_server("200 OK", "{}".to_string()).await;

    let err = local_client(&base_url).generate("hi").await.unwrap_err();
    assert_eq!(
        err.downcast_ref::<NeuralError>(),
        Some(&NeuralError::EmptyContent)
    );
}

// ============================================================================
// Error helpers
// ============================================================================

#[test]
fn test_status_auth_classification() {
    let forbidden = NeuralError::Status { status: 403, body: String::new() };
    let unavailable = NeuralError::Status { status: 503, body: String::new() };
    assert!(forbidden.is_auth());
    assert!(!unavailable.is_auth());
    assert!(!NeuralError::EmptyContent.is_auth());
}

#[test]
fn test_truncate_body_short() {
    assert_eq!(truncate_body("ok", 200), "ok");
}

#[test]
fn test_truncate_body_respects_char_boundary() {
    let body = "ééé"; // 6 bytes
    assert_eq!(truncate_body(body, 3), "é");
}
