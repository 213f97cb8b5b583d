//! Tagged resolution outcome.
//!
//! A resolution either finds a URL (hit) or terminates cleanly without one
//! (no-match). No-match is a first-class success, never an error; transport
//! and server failures are carried separately as `Err` values by callers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a resolved URL came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchSource {
    /// The OS delivered the URL at process launch.
    Linking,
    /// The matching service correlated a web click by fingerprint.
    Api,
}

impl MatchSource {
    /// Returns the wire tag for this source.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Linking => "linking",
            Self::Api => "api",
        }
    }
}

impl fmt::Display for MatchSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The terminal outcome of a successful resolution call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum Resolution {
    /// A deep link was found.
    Matched {
        /// The URL the app should navigate to.
        url: String,
        /// Where the URL came from.
        source: MatchSource,
    },
    /// Resolution completed but no link could be attributed.
    NoMatch,
}

impl Resolution {
    /// Returns the resolved URL, if any.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Matched { url, .. } => Some(url),
            Self::NoMatch => None,
        }
    }

    /// Returns true if a URL was resolved.
    #[must_use]
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Matched { .. })
    }
}
