use linkmatch_client::ClientError;

#[test]
fn error_display_missing_key() {
    let err = ClientError::MissingKey;
    assert!(format!("{err}").contains("license key is required"));
}

#[test]
fn error_display_license() {
    let err = ClientError::License("Invalid license key".into());
    let msg = format!("{err}");
    assert!(msg.contains("license rejected"));
    assert!(msg.contains("Invalid license key"));
}

#[test]
fn error_display_timeout() {
    let err = ClientError::Timeout;
    assert!(format!("{err}").contains("request timeout"));
}

#[test]
fn error_display_network() {
    let err = ClientError::Network("connection refused".into());
    assert!(format!("{err}").contains("network error"));
}

#[test]
fn error_display_api() {
    let err = ClientError::Api("500 Internal Server Error".into());
    assert!(format!("{err}").contains("API error"));
}

#[test]
fn server_message_mentioning_license_is_not_retryable() {
    let err = ClientError::from_server_message("license not found for this app");
    assert!(matches!(err, ClientError::License(_)));
    assert!(!err.is_retryable());
}

#[test]
fn server_message_mentioning_invalid_is_not_retryable() {
    let err = ClientError::from_server_message("Invalid request signature");
    assert!(matches!(err, ClientError::License(_)));
    assert!(!err.is_retryable());
}

#[test]
fn other_server_messages_are_retryable() {
    let err = ClientError::from_server_message("temporarily unavailable");
    assert!(matches!(err, ClientError::Api(_)));
    assert!(err.is_retryable());
}

#[test]
fn retryable_classification() {
    assert!(ClientError::Timeout.is_retryable());
    assert!(ClientError::Network("reset".into()).is_retryable());
    assert!(ClientError::Api("503".into()).is_retryable());
    assert!(!ClientError::MissingKey.is_retryable());
    assert!(!ClientError::License("expired".into()).is_retryable());
}

#[test]
fn error_from_serde_json() {
    let serde_err: Result<serde_json::Value, _> = serde_json::from_str("not json");
    let err: ClientError = serde_err.unwrap_err().into();
    assert!(format!("{err}").contains("serialization"));
    assert!(!err.is_retryable());
}
