//! Launch-URL provider seam.
//!
//! The OS attaches a URL to process startup when the app was opened via a
//! link. The value is single-shot per app launch: repeated queries may
//! return the same cached value or nothing. The session treats it as a
//! pure lookup, not a stream.

use async_trait::async_trait;

/// Supplies the URL the current app process was launched with, if any.
#[async_trait]
pub trait LaunchUrlProvider: Send + Sync {
    /// Returns the launch URL, or `None` when the process was not started
    /// via a link (or the platform has no such mechanism).
    async fn launch_url(&self) -> Option<String>;
}

/// Provider for platforms with no launch-URL mechanism.
pub struct NoLaunchUrl;

#[async_trait]
impl LaunchUrlProvider for NoLaunchUrl {
    async fn launch_url(&self) -> Option<String> {
        None
    }
}

/// Provider holding a value delivered out-of-band, e.g. handed across an
/// FFI boundary by the host app at startup.
pub struct StaticLaunchUrl {
    url: Option<String>,
}

impl StaticLaunchUrl {
    /// Creates a provider that reports the given URL.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
        }
    }

    /// Creates a provider that reports no launch URL.
    #[must_use]
    pub fn none() -> Self {
        Self { url: None }
    }
}

#[async_trait]
impl LaunchUrlProvider for StaticLaunchUrl {
    async fn launch_url(&self) -> Option<String> {
        self.url.clone()
    }
}
