use linkmatch_client::{check_key_format, ApiConfig, ClientError, ValidationClient};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ValidationClient {
    ValidationClient::new(ApiConfig::new(server.uri()))
}

// ── Local format gate ───────────────────────────────────────────

#[test]
fn format_gate_rejects_empty_key() {
    assert!(matches!(
        check_key_format(""),
        Err(ClientError::MissingKey)
    ));
}

#[test]
fn format_gate_rejects_whitespace_key() {
    assert!(matches!(
        check_key_format("   \t "),
        Err(ClientError::MissingKey)
    ));
}

#[test]
fn format_gate_accepts_any_non_empty_key() {
    assert!(check_key_format("lk_live_abc123").is_ok());
}

// ── Remote validation ───────────────────────────────────────────

#[tokio::test]
async fn validate_accepts_valid_key() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/custom-deep-link/license/validate"))
        .and(header("x-license-key", "lk_good"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"success": true, "valid": true})),
        )
        .expect(1)
        .mount(&server)
        .await;

    assert!(client_for(&server).validate("lk_good").await.is_ok());
}

#[tokio::test]
async fn validate_sends_key_in_body_and_header() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/custom-deep-link/license/validate"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"success": true, "valid": true})),
        )
        .mount(&server)
        .await;

    client_for(&server).validate("lk_good").await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let body: serde_json::Value = requests[0].body_json().unwrap();
    assert_eq!(body["licenseKey"], "lk_good");
    assert_eq!(
        requests[0].headers.get("x-license-key").unwrap(),
        "lk_good"
    );
}

#[tokio::test]
async fn validate_rejects_invalid_key_with_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/custom-deep-link/license/validate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            json!({"success": true, "valid": false, "message": "license key expired"}),
        ))
        .mount(&server)
        .await;

    let err = client_for(&server).validate("lk_old").await.unwrap_err();
    match err {
        ClientError::License(msg) => assert_eq!(msg, "license key expired"),
        other => panic!("expected License error, got {other:?}"),
    }
}

#[tokio::test]
async fn validate_rejects_on_success_false() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/custom-deep-link/license/validate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": false})))
        .mount(&server)
        .await;

    let err = client_for(&server).validate("lk_x").await.unwrap_err();
    assert!(matches!(err, ClientError::License(_)));
}

#[tokio::test]
async fn validate_rejects_on_http_error_with_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/custom-deep-link/license/validate"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"success": false, "message": "Invalid license key"})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).validate("lk_bad").await.unwrap_err();
    match err {
        ClientError::License(msg) => assert_eq!(msg, "Invalid license key"),
        other => panic!("expected License error, got {other:?}"),
    }
}

#[tokio::test]
async fn validate_falls_back_to_generic_message_on_bodyless_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/custom-deep-link/license/validate"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = client_for(&server).validate("lk_x").await.unwrap_err();
    match err {
        ClientError::License(msg) => assert!(msg.contains("503")),
        other => panic!("expected License error, got {other:?}"),
    }
}

#[tokio::test]
async fn validate_empty_key_makes_no_network_call() {
    let server = MockServer::start().await;
    // No mocks mounted; any request would 404 and be recorded.
    let err = client_for(&server).validate("   ").await.unwrap_err();
    assert!(matches!(err, ClientError::MissingKey));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn validate_reports_connection_failure_as_network_error() {
    // Nothing listens on this address.
    let client = ValidationClient::new(ApiConfig::new("http://127.0.0.1:1"));
    let err = client.validate("lk_x").await.unwrap_err();
    assert!(matches!(err, ClientError::Network(_)));
    assert!(err.is_retryable());
}
