//! Matching service client with timeout and retry.
//!
//! A single attempt is one POST carrying the license key (header and body)
//! and the fingerprint, under a hard per-attempt timeout. The retry wrapper
//! runs sequential attempts with linear backoff (`base_delay * attempt`)
//! and gives up immediately on non-retryable failures.

use crate::config::{ApiConfig, LICENSE_HEADER};
use crate::error::{ClientError, ClientResult};
use crate::license::{check_key_format, classify_transport, extract_message};
use linkmatch_types::DeviceFingerprint;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Retry policy for match attempts.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Maximum number of sequential attempts.
    pub max_attempts: u32,
    /// Delay unit; attempt N is followed by `base_delay * N`.
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(1000),
        }
    }
}

impl RetryPolicy {
    /// Returns the cooperative sleep to take after a failed attempt.
    #[must_use]
    pub fn delay_after(&self, attempt: u32) -> Duration {
        self.base_delay * attempt
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MatchRequest<'a> {
    license_key: &'a str,
    fingerprint: &'a DeviceFingerprint,
    /// Seconds since epoch at the moment of the attempt.
    timestamp: i64,
}

#[derive(Debug, Deserialize)]
struct MatchResponse {
    success: bool,
    url: Option<String>,
    message: Option<String>,
}

/// Client for the fingerprint matching service.
pub struct MatchClient {
    config: ApiConfig,
    client: Client,
}

impl MatchClient {
    /// Creates a new match client.
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .expect("failed to create HTTP client");

        Self { config, client }
    }

    /// Performs a single match attempt.
    ///
    /// Returns `Some(url)` for a hit and `None` when the server answered
    /// successfully but found no matching click — a valid terminal state,
    /// not a failure.
    ///
    /// # Errors
    ///
    /// `MissingKey` before any I/O for empty keys; `Timeout` when the
    /// attempt was cancelled by the hard timeout; `Network` for transport
    /// failures; `License`/`Api` for server-reported failures, classified
    /// by `ClientError::from_server_message`.
    pub async fn resolve_once(
        &self,
        license_key: &str,
        fingerprint: &DeviceFingerprint,
    ) -> ClientResult<Option<String>> {
        check_key_format(license_key)?;

        let request = MatchRequest {
            license_key,
            fingerprint,
            timestamp: chrono::Utc::now().timestamp(),
        };

        let response = self
            .client
            .post(self.config.match_url())
            .header(LICENSE_HEADER, license_key)
            .timeout(self.config.timeout())
            .json(&request)
            .send()
            .await
            .map_err(classify_transport)?;

        let status = response.status();
        if !status.is_success() {
            let message = extract_message(response)
                .await
                .unwrap_or_else(|| format!("API error: {status}"));
            return Err(ClientError::from_server_message(message));
        }

        let body: MatchResponse = response
            .json()
            .await
            .map_err(|e| ClientError::Api(format!("invalid match response: {e}")))?;

        if !body.success {
            let message = body
                .message
                .unwrap_or_else(|| "match request failed".to_string());
            return Err(ClientError::from_server_message(message));
        }

        // success=true with no URL is a miss, not an error
        Ok(body.url.filter(|u| !u.is_empty()))
    }

    /// Performs up to `policy.max_attempts` sequential attempts.
    ///
    /// Only transport/timeout/server failures are retried; license
    /// rejections are deterministic and end the loop immediately. After
    /// exhausting the budget the last observed failure is returned.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`resolve_once`](Self::resolve_once).
    pub async fn resolve_with_retry(
        &self,
        license_key: &str,
        fingerprint: &DeviceFingerprint,
        policy: &RetryPolicy,
    ) -> ClientResult<Option<String>> {
        let attempts = policy.max_attempts.max(1);
        let mut last_err = None;

        for attempt in 1..=attempts {
            debug!(attempt, "match attempt");

            match self.resolve_once(license_key, fingerprint).await {
                Ok(outcome) => return Ok(outcome),
                Err(err) if !err.is_retryable() => return Err(err),
                Err(err) => {
                    warn!(attempt, error = %err, "match attempt failed");
                    last_err = Some(err);

                    if attempt < attempts {
                        tokio::time::sleep(policy.delay_after(attempt)).await;
                    }
                }
            }
        }

        // attempts >= 1, so at least one error was recorded
        Err(last_err.unwrap_or(ClientError::Api("no attempts made".to_string())))
    }
}
