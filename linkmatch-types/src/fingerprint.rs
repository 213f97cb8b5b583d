//! Device fingerprint payload for server-side click matching.
//!
//! The fingerprint is a snapshot of device identity and network context
//! taken at the moment of resolution. It is constructed fresh per attempt,
//! never persisted, and never mutated after construction.
//!
//! Eight fields are mandatory and always populated, even when collection
//! degrades: platform, os_version, device_id, device_model,
//! screen_resolution, screen_width, screen_height, app_version. Everything
//! else is optional and omitted from the wire JSON when absent.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The mobile operating system a fingerprint was collected on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Apple iOS (includes iPadOS).
    Ios,
    /// Android.
    Android,
}

impl Platform {
    /// Returns the wire identifier for this platform.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ios => "ios",
            Self::Android => "android",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ios" => Ok(Self::Ios),
            "android" => Ok(Self::Android),
            other => Err(Error::UnknownPlatform(other.to_string())),
        }
    }
}

/// A snapshot of device identity and network context.
///
/// Owned exclusively by the resolution call that created it; a copy may be
/// attached to an analytics event, but nothing else holds on to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceFingerprint {
    /// Operating system identifier.
    pub platform: Platform,
    /// Operating system version string.
    pub os_version: String,
    /// Device-unique identifier.
    pub device_id: String,
    /// Device model name.
    pub device_model: String,
    /// Device manufacturer, where the platform reports one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    /// Screen resolution as a "WxH" string.
    pub screen_resolution: String,
    /// Screen width in pixels.
    pub screen_width: u32,
    /// Screen height in pixels.
    pub screen_height: u32,
    /// IANA timezone name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    /// Primary language subtag (e.g. "en").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Full locale tag (e.g. "en-US").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// App version concatenated with the build number.
    pub app_version: String,
    /// Mobile carrier name (platform-dependent).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier: Option<String>,
    /// Connection type tag (e.g. "wifi", "cellular").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_type: Option<String>,
    /// Whether the app is running in a simulator/emulator.
    pub is_simulator: bool,
    /// Whether the device appears rooted or jailbroken.
    pub is_rooted: bool,
    /// Best-effort local IP address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
}

impl DeviceFingerprint {
    /// Creates a fingerprint with only the mandatory fields populated.
    ///
    /// Screen resolution is derived from the width/height pair so the
    /// string and numeric forms can never disagree.
    #[must_use]
    pub fn minimal(
        platform: Platform,
        os_version: impl Into<String>,
        device_id: impl Into<String>,
        device_model: impl Into<String>,
        screen_width: u32,
        screen_height: u32,
        app_version: impl Into<String>,
    ) -> Self {
        Self {
            platform,
            os_version: os_version.into(),
            device_id: device_id.into(),
            device_model: device_model.into(),
            manufacturer: None,
            screen_resolution: format!("{screen_width}x{screen_height}"),
            screen_width,
            screen_height,
            timezone: None,
            language: None,
            locale: None,
            app_version: app_version.into(),
            carrier: None,
            connection_type: None,
            is_simulator: false,
            is_rooted: false,
            ip_address: None,
        }
    }

    /// Returns true if every mandatory field is non-empty.
    #[must_use]
    pub fn has_mandatory_fields(&self) -> bool {
        !self.os_version.is_empty()
            && !self.device_id.is_empty()
            && !self.device_model.is_empty()
            && !self.screen_resolution.is_empty()
            && !self.app_version.is_empty()
    }
}
