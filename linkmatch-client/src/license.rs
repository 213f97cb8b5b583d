//! License key gate and remote validation.
//!
//! The local gate only checks that a key is present; whether it is
//! *currently* valid is a server-side fact that can expire, so the session
//! asks the validation service once at initialization and treats later
//! per-call rejections as authoritative.

use crate::config::{ApiConfig, LICENSE_HEADER};
use crate::error::{ClientError, ClientResult};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Checks the local format of a license key: non-empty after trim.
///
/// # Errors
///
/// Returns `ClientError::MissingKey` for empty or whitespace-only keys.
pub fn check_key_format(key: &str) -> ClientResult<()> {
    if key.trim().is_empty() {
        return Err(ClientError::MissingKey);
    }
    Ok(())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ValidateRequest<'a> {
    license_key: &'a str,
}

#[derive(Debug, Deserialize)]
struct ValidateResponse {
    success: bool,
    #[serde(default)]
    valid: bool,
    message: Option<String>,
}

/// Client for the remote license validation service.
pub struct ValidationClient {
    config: ApiConfig,
    client: Client,
}

impl ValidationClient {
    /// Creates a new validation client.
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .expect("failed to create HTTP client");

        Self { config, client }
    }

    /// Asks the validation service whether the key is currently valid.
    ///
    /// # Errors
    ///
    /// Returns `MissingKey` before any I/O for empty keys, `License` when
    /// the server rejects the key, and `Timeout`/`Network` for transport
    /// failures.
    pub async fn validate(&self, license_key: &str) -> ClientResult<()> {
        check_key_format(license_key)?;

        debug!("validating license key");

        let response = self
            .client
            .post(self.config.validate_url())
            .header(LICENSE_HEADER, license_key)
            .json(&ValidateRequest { license_key })
            .send()
            .await
            .map_err(classify_transport)?;

        let status = response.status();
        if !status.is_success() {
            let message = extract_message(response).await;
            return Err(ClientError::License(
                message.unwrap_or_else(|| format!("license validation failed: {status}")),
            ));
        }

        let body: ValidateResponse = response
            .json()
            .await
            .map_err(|e| ClientError::Api(format!("invalid validation response: {e}")))?;

        if !body.success || !body.valid {
            return Err(ClientError::License(
                body.message
                    .unwrap_or_else(|| "license key is not valid".to_string()),
            ));
        }

        debug!("license key accepted by validation service");
        Ok(())
    }
}

/// Maps a reqwest transport error onto the client taxonomy.
pub(crate) fn classify_transport(err: reqwest::Error) -> ClientError {
    if err.is_timeout() {
        ClientError::Timeout
    } else {
        ClientError::Network(err.to_string())
    }
}

/// Pulls a `message` field out of an error body, if the server sent one.
pub(crate) async fn extract_message(response: reqwest::Response) -> Option<String> {
    let body: serde_json::Value = response.json().await.ok()?;
    body.get("message")
        .and_then(|m| m.as_str())
        .map(String::from)
}
