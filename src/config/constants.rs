//! Configuration constants.
//!
//! This module defines the provider endpoints, timeouts and demo data used
//! throughout the application.

use std::time::Duration;

// Provider timeouts
/// Per-request timeout for a single provider attempt.
/// Each attempt gets its own timer; expiry counts as a network failure and
/// advances the chain to the next provider.
pub const PROVIDER_TIMEOUT: Duration = Duration::from_secs(8);
/// Same value in whole seconds, used as the CLI default.
pub const PROVIDER_TIMEOUT_SECS: u64 = 8;

// Provider base URLs
/// ipapi.co, the detailed provider (also used for lookups by IP and enrichment)
pub const IPAPI_BASE_URL: &str = "https://ipapi.co";
/// ipify, reports the caller's address only
pub const IPIFY_BASE_URL: &str = "https://api.ipify.org";
/// ipinfo.io
pub const IPINFO_BASE_URL: &str = "https://ipinfo.io";
/// ipgeolocation.io
pub const IPGEOLOCATION_BASE_URL: &str = "https://api.ipgeolocation.io";

/// Default User-Agent string for provider requests.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str = concat!("ip_lookup/", env!("CARGO_PKG_VERSION"));

// Canonical record defaults
pub const UNKNOWN: &str = "Unknown";
pub const UNKNOWN_ISP: &str = "Unknown ISP";
pub const DEFAULT_TIMEZONE: &str = "UTC";
pub const DEFAULT_UTC_OFFSET: &str = "+00:00";

// Demo data
/// Well-known public resolvers, one of which is picked when a demo record is
/// produced without a requested IP.
pub const DEMO_IPS: [&str; 4] = ["8.8.8.8", "1.1.1.1", "208.67.222.222", "9.9.9.9"];
pub const DEMO_COUNTRY_NAME: &str = "United States";
pub const DEMO_COUNTRY_CODE: &str = "US";
pub const DEMO_REGION: &str = "California";
pub const DEMO_CITY: &str = "Mountain View";
pub const DEMO_POSTAL: &str = "94043";
pub const DEMO_LATITUDE: f64 = 37.4056;
pub const DEMO_LONGITUDE: f64 = -122.0775;
pub const DEMO_TIMEZONE: &str = "America/Los_Angeles";
pub const DEMO_UTC_OFFSET: &str = "-08:00";
pub const DEMO_ORG: &str = "Google LLC";
pub const DEMO_ASN: &str = "AS15169 Google LLC";

// Notices shown alongside demo records
pub const DEMO_MODE_NOTICE: &str = "Demo mode enabled - showing sample data";
pub const PROVIDERS_EXHAUSTED_NOTICE: &str = "Showing demo data - API services unavailable";
