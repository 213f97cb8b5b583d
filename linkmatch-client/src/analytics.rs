//! Best-effort analytics relay.
//!
//! Exactly one delivery attempt per event, never retried, and never an
//! `Err`: every failure mode collapses into `AnalyticsStatus::Dropped` so
//! analytics can never leak into the caller's failure domain.

use crate::config::{ApiConfig, LICENSE_HEADER};
use crate::error::ClientError;
use crate::license::check_key_format;
use linkmatch_types::AnalyticsEvent;
use reqwest::Client;
use tracing::debug;

/// Outcome of a relay attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsStatus {
    /// The tracking endpoint accepted the event.
    Delivered,
    /// The event was not delivered; the reason is for logs only.
    Dropped {
        /// Why the event was dropped.
        reason: String,
    },
}

impl AnalyticsStatus {
    /// Returns true if the event was accepted.
    #[must_use]
    pub fn is_delivered(&self) -> bool {
        matches!(self, Self::Delivered)
    }

    fn dropped(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        debug!(%reason, "analytics event dropped");
        Self::Dropped { reason }
    }
}

/// Fire-and-forget event forwarder.
pub struct AnalyticsRelay {
    config: ApiConfig,
    client: Client,
}

impl AnalyticsRelay {
    /// Creates a new relay.
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .expect("failed to create HTTP client");

        Self { config, client }
    }

    /// Attempts to deliver one event. Infallible by contract.
    pub async fn send(&self, license_key: &str, event: &AnalyticsEvent) -> AnalyticsStatus {
        if check_key_format(license_key).is_err() {
            return AnalyticsStatus::dropped(ClientError::MissingKey.to_string());
        }

        let mut body = match serde_json::to_value(event) {
            Ok(body) => body,
            Err(e) => return AnalyticsStatus::dropped(format!("event not serializable: {e}")),
        };
        body["licenseKey"] = license_key.into();
        body["timestamp"] = chrono::Utc::now().timestamp_millis().into();

        let response = self
            .client
            .post(self.config.track_url())
            .header(LICENSE_HEADER, license_key)
            .json(&body)
            .send()
            .await;

        match response {
            Ok(resp) if resp.status().is_success() => {
                debug!(event = %event.name, "analytics event delivered");
                AnalyticsStatus::Delivered
            }
            Ok(resp) => AnalyticsStatus::dropped(format!("tracking rejected: {}", resp.status())),
            Err(e) => AnalyticsStatus::dropped(format!("tracking transport error: {e}")),
        }
    }
}
