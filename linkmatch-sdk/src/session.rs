//! Session orchestration.
//!
//! A [`DeepLinkSession`] carries the one piece of cross-call state — the
//! validated license key — and drives the resolution flow: launch-URL
//! probe first, fingerprint matching as the recovery path, analytics as a
//! best-effort side channel that can never change the outcome.

use crate::collector::{DeviceProbe, FingerprintCollector};
use crate::error::{SdkError, SdkResult};
use crate::launch::LaunchUrlProvider;
use linkmatch_client::{
    check_key_format, AnalyticsRelay, AnalyticsStatus, ApiConfig, MatchClient, RetryPolicy,
    ValidationClient,
};
use linkmatch_types::{AnalyticsEvent, DeviceFingerprint, MatchSource, Resolution};
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Session configuration.
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// Endpoint and timeout configuration shared by all collaborators.
    pub api: ApiConfig,
    /// Retry policy for match attempts.
    pub retry: RetryPolicy,
}

/// Session lifecycle state. `Ready` is only entered after both the local
/// format gate and the remote validation call accept the key.
enum SessionState {
    Uninitialized,
    Ready { license_key: String },
}

/// A deep-link resolution session.
///
/// Owns its license key; independent sessions never share state.
/// Concurrent `resolve_deep_link` calls on one session are safe — each
/// builds its own fingerprint and request. Concurrent initialize/reset
/// race with last-writer-wins semantics on the key slot.
pub struct DeepLinkSession {
    state: RwLock<SessionState>,
    retry: RetryPolicy,
    validator: ValidationClient,
    matcher: MatchClient,
    relay: AnalyticsRelay,
    launch: Arc<dyn LaunchUrlProvider>,
    collector: FingerprintCollector,
}

impl DeepLinkSession {
    /// Creates a session over the given probe and launch-URL provider.
    #[must_use]
    pub fn new(
        config: SessionConfig,
        probe: Arc<dyn DeviceProbe>,
        launch: Arc<dyn LaunchUrlProvider>,
    ) -> Self {
        Self {
            state: RwLock::new(SessionState::Uninitialized),
            retry: config.retry,
            validator: ValidationClient::new(config.api.clone()),
            matcher: MatchClient::new(config.api.clone()),
            relay: AnalyticsRelay::new(config.api),
            launch,
            collector: FingerprintCollector::new(probe),
        }
    }

    /// Initializes the session with a license key.
    ///
    /// The key must pass the local format gate and a remote validation
    /// round trip before the session becomes ready; any failure leaves the
    /// session uninitialized.
    ///
    /// # Errors
    ///
    /// `ClientError::MissingKey` for empty keys (no network call),
    /// `ClientError::License` when the validation service rejects the key,
    /// transport errors otherwise.
    pub async fn initialize(&self, license_key: &str) -> SdkResult<()> {
        check_key_format(license_key)?;
        self.validator.validate(license_key).await?;

        *self.state.write().await = SessionState::Ready {
            license_key: license_key.to_string(),
        };
        info!("deep-link session initialized");
        Ok(())
    }

    /// Returns true if the session has been successfully initialized.
    pub async fn is_ready(&self) -> bool {
        matches!(*self.state.read().await, SessionState::Ready { .. })
    }

    /// Clears the stored license key. Subsequent calls are rejected until
    /// a fresh successful `initialize`.
    pub async fn reset(&self) {
        *self.state.write().await = SessionState::Uninitialized;
        debug!("deep-link session reset");
    }

    /// Resolves the deep link for this installation.
    ///
    /// The OS launch URL takes unconditional precedence; fingerprint
    /// matching runs only when the OS has nothing. `NoMatch` is a valid
    /// terminal outcome, distinct from failure.
    ///
    /// # Errors
    ///
    /// `SdkError::NotInitialized` before a successful `initialize`;
    /// client-layer errors after the retry budget is exhausted.
    pub async fn resolve_deep_link(&self) -> SdkResult<Resolution> {
        let license_key = self.license_key().await.ok_or(SdkError::NotInitialized)?;

        if let Some(url) = self.probe_launch_url().await {
            debug!(%url, "resolved from launch URL");
            let fingerprint = self.collector.collect();
            self.emit_resolved(&license_key, MatchSource::Linking, &url, &fingerprint)
                .await;
            return Ok(Resolution::Matched {
                url,
                source: MatchSource::Linking,
            });
        }

        let fingerprint = self.collector.collect();
        match self
            .matcher
            .resolve_with_retry(&license_key, &fingerprint, &self.retry)
            .await?
        {
            Some(url) => {
                debug!(%url, "resolved from fingerprint match");
                self.emit_resolved(&license_key, MatchSource::Api, &url, &fingerprint)
                    .await;
                Ok(Resolution::Matched {
                    url,
                    source: MatchSource::Api,
                })
            }
            None => {
                debug!("no match for this installation");
                Ok(Resolution::NoMatch)
            }
        }
    }

    /// Sends a caller-supplied analytics event under the session's key.
    ///
    /// # Errors
    ///
    /// `SdkError::NotInitialized` before a successful `initialize`; never
    /// a network error — delivery failures come back as `Dropped`.
    pub async fn send_event(&self, event: &AnalyticsEvent) -> SdkResult<AnalyticsStatus> {
        let license_key = self.license_key().await.ok_or(SdkError::NotInitialized)?;
        Ok(self.relay.send(&license_key, event).await)
    }

    async fn license_key(&self) -> Option<String> {
        match &*self.state.read().await {
            SessionState::Ready { license_key } => Some(license_key.clone()),
            SessionState::Uninitialized => None,
        }
    }

    /// Queries the launch-URL provider, treating empty strings as absent.
    async fn probe_launch_url(&self) -> Option<String> {
        self.launch.launch_url().await.filter(|url| !url.is_empty())
    }

    /// Emits the resolution analytics event. Best-effort: the relay
    /// reports drops via its status, which is discarded here so analytics
    /// can never affect the resolution result.
    async fn emit_resolved(
        &self,
        license_key: &str,
        source: MatchSource,
        url: &str,
        fingerprint: &DeviceFingerprint,
    ) {
        let event = AnalyticsEvent::new("deep_link_resolved")
            .with_property("source", source.as_str())
            .with_property("url", url)
            .with_property(
                "fingerprint",
                serde_json::to_value(fingerprint).unwrap_or(Value::Null),
            );

        let _ = self.relay.send(license_key, &event).await;
    }
}
