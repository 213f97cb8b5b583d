//! HTTP collaborators for LinkMatch.
//!
//! This crate owns the network edge of the SDK:
//! - License key gate and remote validation (`license`)
//! - Fingerprint matching with timeout + retry/backoff (`resolve`)
//! - Best-effort analytics relay (`analytics`)
//!
//! # Design Principles
//!
//! - **Fail fast locally**: the key format gate runs before any I/O
//! - **Typed retry decisions**: the retry loop never inspects message text;
//!   server messages are classified once into the error taxonomy
//! - **Miss is not an error**: a successful response without a URL is a
//!   first-class outcome
//! - **Analytics cannot fail the caller**: the relay returns a status, not
//!   a `Result`

mod analytics;
mod config;
mod error;
mod license;
mod resolve;

pub use analytics::{AnalyticsRelay, AnalyticsStatus};
pub use config::{ApiConfig, DEFAULT_TIMEOUT_MS, LICENSE_HEADER};
pub use error::{ClientError, ClientResult};
pub use license::{check_key_format, ValidationClient};
pub use resolve::{MatchClient, RetryPolicy};
