//! Core type definitions for LinkMatch.
//!
//! This crate defines the payload contracts shared by the HTTP clients and
//! the SDK orchestrator:
//! - The device fingerprint sent to the matching service
//! - Analytics events relayed to the tracking endpoint
//! - The tagged resolution outcome (hit / no-match)
//!
//! All types here are plain serde structs with camelCase wire names.
//! Transport, retry, and session logic live in `linkmatch-client` and
//! `linkmatch-sdk`.

mod event;
mod fingerprint;
mod outcome;

pub use event::AnalyticsEvent;
pub use fingerprint::{DeviceFingerprint, Platform};
pub use outcome::{MatchSource, Resolution};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unknown platform: {0}")]
    UnknownPlatform(String),
}
