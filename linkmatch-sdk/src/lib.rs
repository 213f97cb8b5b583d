//! Deferred deep-link resolution SDK.
//!
//! Given a license key and the device's identifying characteristics, the
//! SDK determines the URL the app should navigate to: either the OS handed
//! one over at process launch, or the matching service correlates a recent
//! web click with this installation by device fingerprint.
//!
//! # Design Principles
//!
//! - **Session-scoped state**: the license key lives on a
//!   [`DeepLinkSession`] owned by the caller, never in module-level state;
//!   parallel sessions are independent
//! - **Launch URL first**: an OS-delivered URL is ground truth and always
//!   wins over a probabilistic fingerprint match
//! - **Degrade, don't abort**: fingerprint collection never fails; missing
//!   signals fall back to fixed values
//! - **Analytics off the critical path**: event delivery failures are
//!   swallowed and can never change a resolution outcome

mod collector;
mod error;
mod launch;
mod session;

pub use collector::{DeviceProbe, FingerprintCollector, HostProbe};
pub use error::{SdkError, SdkResult};
pub use launch::{LaunchUrlProvider, NoLaunchUrl, StaticLaunchUrl};
pub use session::{DeepLinkSession, SessionConfig};

pub use linkmatch_client::{AnalyticsStatus, ApiConfig, ClientError, RetryPolicy};
pub use linkmatch_types::{AnalyticsEvent, DeviceFingerprint, MatchSource, Platform, Resolution};
