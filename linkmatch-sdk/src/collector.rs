//! Fingerprint collection over capability probes.
//!
//! Device signals vary by platform build, so each signal is a method on
//! the [`DeviceProbe`] trait with an "unsupported" default; a platform
//! implementation overrides only what it actually has. The collector
//! queries every signal independently — a missing or degraded source never
//! blocks the others — and `collect()` is infallible: the eight mandatory
//! fingerprint fields always come out populated, with fixed fallbacks when
//! a probe has nothing.

use linkmatch_types::{DeviceFingerprint, Platform};
use std::env;
use std::sync::Arc;
use tracing::debug;

/// Fallback for mandatory string fields a probe cannot supply.
const UNKNOWN: &str = "unknown";

/// Final fallback locale when no source resolves one.
const DEFAULT_LOCALE: &str = "en";

/// Per-signal device capability provider.
///
/// Every method except `platform` defaults to "unsupported". Implementors
/// must not block; these are synchronous local lookups.
pub trait DeviceProbe: Send + Sync {
    /// The operating system this probe runs on.
    fn platform(&self) -> Platform;

    /// OS version string.
    fn os_version(&self) -> Option<String> {
        None
    }

    /// Device-unique identifier.
    fn device_id(&self) -> Option<String> {
        None
    }

    /// Device model name.
    fn device_model(&self) -> Option<String> {
        None
    }

    /// Device manufacturer.
    fn manufacturer(&self) -> Option<String> {
        None
    }

    /// Screen size in pixels as (width, height).
    fn screen_size(&self) -> Option<(u32, u32)> {
        None
    }

    /// IANA timezone name.
    fn timezone(&self) -> Option<String> {
        None
    }

    /// Platform-reported primary locale tag.
    fn primary_locale(&self) -> Option<String> {
        None
    }

    /// Locale from the platform's legacy API, where the primary source is
    /// unavailable on older OS builds.
    fn legacy_locale(&self) -> Option<String> {
        None
    }

    /// App version string.
    fn app_version(&self) -> Option<String> {
        None
    }

    /// App build number.
    fn build_number(&self) -> Option<String> {
        None
    }

    /// Mobile carrier name.
    fn carrier(&self) -> Option<String> {
        None
    }

    /// Connection type tag (e.g. "wifi", "cellular").
    fn connection_type(&self) -> Option<String> {
        None
    }

    /// Whether the app runs in a simulator/emulator.
    fn is_simulator(&self) -> Option<bool> {
        None
    }

    /// Whether the device appears rooted or jailbroken.
    fn is_rooted(&self) -> Option<bool> {
        None
    }

    /// Best-effort local IP address.
    fn ip_address(&self) -> Option<String> {
        None
    }
}

/// Assembles fingerprints from a probe. Infallible by contract.
pub struct FingerprintCollector {
    probe: Arc<dyn DeviceProbe>,
}

impl FingerprintCollector {
    /// Creates a collector over the given probe.
    #[must_use]
    pub fn new(probe: Arc<dyn DeviceProbe>) -> Self {
        Self { probe }
    }

    /// Takes a fresh fingerprint snapshot.
    ///
    /// Never fails: mandatory fields degrade to fixed fallbacks and
    /// optional fields are simply omitted when their source has nothing.
    #[must_use]
    pub fn collect(&self) -> DeviceFingerprint {
        let probe = &self.probe;

        let (width, height) = probe.screen_size().unwrap_or((0, 0));
        let version = probe
            .app_version()
            .unwrap_or_else(|| UNKNOWN.to_string());
        let build = probe.build_number().unwrap_or_else(|| "0".to_string());

        let locale = resolve_locale(probe.as_ref());
        let language = language_of(&locale);

        let mut fp = DeviceFingerprint::minimal(
            probe.platform(),
            probe.os_version().unwrap_or_else(|| UNKNOWN.to_string()),
            probe.device_id().unwrap_or_else(|| UNKNOWN.to_string()),
            probe.device_model().unwrap_or_else(|| UNKNOWN.to_string()),
            width,
            height,
            format!("{version}+{build}"),
        );

        fp.manufacturer = probe.manufacturer();
        fp.timezone = probe.timezone();
        fp.language = Some(language);
        fp.locale = Some(locale);
        fp.carrier = probe.carrier();
        fp.connection_type = probe.connection_type();
        fp.is_simulator = probe.is_simulator().unwrap_or(false);
        fp.is_rooted = probe.is_rooted().unwrap_or(false);
        fp.ip_address = probe.ip_address();

        debug!(platform = %fp.platform, "collected device fingerprint");
        fp
    }
}

/// Resolves the locale through the fallback chain:
/// probe primary → probe legacy → host environment → `"en"`.
fn resolve_locale(probe: &dyn DeviceProbe) -> String {
    probe
        .primary_locale()
        .or_else(|| probe.legacy_locale())
        .or_else(env_locale)
        .filter(|l| !l.is_empty())
        .unwrap_or_else(|| DEFAULT_LOCALE.to_string())
}

/// Reads the host runtime's resolved locale from the environment.
fn env_locale() -> Option<String> {
    env::var("LC_ALL")
        .or_else(|_| env::var("LANG"))
        .ok()
        .map(|raw| raw.split('.').next().unwrap_or(&raw).to_string())
        .filter(|l| !l.is_empty() && l != "C" && l != "POSIX")
}

/// Derives the language as the primary subtag before any region separator.
fn language_of(locale: &str) -> String {
    locale
        .split(['-', '_'])
        .next()
        .unwrap_or(locale)
        .to_string()
}

/// Development/simulator probe for host (non-device) runs.
///
/// Fingerprints the host the same way hardware-bound licensing does:
/// machine ID, hostname, and OS release. Always reports itself as a
/// simulator so server-side matching can discount these installs.
pub struct HostProbe {
    platform: Platform,
}

impl HostProbe {
    /// Creates a host probe reporting the given platform.
    #[must_use]
    pub fn new(platform: Platform) -> Self {
        Self { platform }
    }
}

impl DeviceProbe for HostProbe {
    fn platform(&self) -> Platform {
        self.platform
    }

    fn os_version(&self) -> Option<String> {
        get_os_version()
    }

    fn device_id(&self) -> Option<String> {
        get_machine_id()
    }

    fn device_model(&self) -> Option<String> {
        hostname::get().ok().and_then(|h| h.into_string().ok())
    }

    fn primary_locale(&self) -> Option<String> {
        env_locale()
    }

    fn is_simulator(&self) -> Option<bool> {
        Some(true)
    }
}

/// Gets the OS version string.
fn get_os_version() -> Option<String> {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("sw_vers")
            .arg("-productVersion")
            .output()
            .ok()
            .and_then(|o| String::from_utf8(o.stdout).ok())
            .map(|s| s.trim().to_string())
    }

    #[cfg(target_os = "linux")]
    {
        std::fs::read_to_string("/etc/os-release")
            .ok()
            .and_then(|content| {
                content
                    .lines()
                    .find(|l| l.starts_with("VERSION_ID="))
                    .map(|l| {
                        l.trim_start_matches("VERSION_ID=")
                            .trim_matches('"')
                            .to_string()
                    })
            })
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux")))]
    {
        None
    }
}

/// Gets the machine ID (platform-specific unique identifier).
fn get_machine_id() -> Option<String> {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("ioreg")
            .args(["-rd1", "-c", "IOPlatformExpertDevice"])
            .output()
            .ok()
            .and_then(|o| String::from_utf8(o.stdout).ok())
            .and_then(|output| {
                output
                    .lines()
                    .find(|l| l.contains("IOPlatformUUID"))
                    .and_then(|l| l.split('"').nth(3))
                    .map(String::from)
            })
    }

    #[cfg(target_os = "linux")]
    {
        std::fs::read_to_string("/etc/machine-id")
            .or_else(|_| std::fs::read_to_string("/var/lib/dbus/machine-id"))
            .ok()
            .map(|s| s.trim().to_string())
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux")))]
    {
        None
    }
}
