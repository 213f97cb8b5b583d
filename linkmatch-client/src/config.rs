//! Client configuration.
//!
//! All endpoints derive from a single base URL so tests can point every
//! collaborator at a mock server; the match endpoint can additionally be
//! overridden per deployment, since matching may be served from a separate
//! region-local host.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default hard timeout for a single request attempt (ms).
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Header carrying the license key on every request.
pub const LICENSE_HEADER: &str = "x-license-key";

/// Configuration shared by the HTTP collaborators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL for the validation and analytics endpoints.
    pub base_url: String,
    /// Override for the match endpoint; defaults to `{base_url}/custom-deep-link/match`.
    pub match_endpoint: Option<String>,
    /// Hard timeout for a single request attempt, in milliseconds.
    pub timeout_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.linkmatch.io/v1".to_string(),
            match_endpoint: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl ApiConfig {
    /// Creates a config rooted at the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Returns the validation endpoint.
    #[must_use]
    pub fn validate_url(&self) -> String {
        format!("{}/custom-deep-link/license/validate", self.base_url)
    }

    /// Returns the match endpoint.
    #[must_use]
    pub fn match_url(&self) -> String {
        self.match_endpoint
            .clone()
            .unwrap_or_else(|| format!("{}/custom-deep-link/match", self.base_url))
    }

    /// Returns the analytics endpoint.
    #[must_use]
    pub fn track_url(&self) -> String {
        format!("{}/custom-deep-link/track/event", self.base_url)
    }

    /// Returns the per-attempt timeout as a `Duration`.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
