//! GeoIP data structures.
//!
//! This module defines the canonical record every provider response is mapped
//! into, and the two-step normalization result that separates complete records
//! from ones still waiting on enrichment.

use serde::{Deserialize, Serialize};

use crate::config::{
    DEFAULT_TIMEZONE, DEFAULT_UTC_OFFSET, DEMO_ASN, DEMO_CITY, DEMO_COUNTRY_CODE,
    DEMO_COUNTRY_NAME, DEMO_LATITUDE, DEMO_LONGITUDE, DEMO_ORG, DEMO_POSTAL, DEMO_REGION,
    DEMO_TIMEZONE, DEMO_UTC_OFFSET, UNKNOWN, UNKNOWN_ISP,
};

/// Canonical IP geolocation record.
///
/// Every field is always populated; providers that omit a field get the
/// documented default (see [`IpRecord::unknown`]). Coordinates default to
/// `0.0`, so `(0, 0)` cannot be told apart from "no location data".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IpRecord {
    /// Textual address, echoed from the provider or the caller verbatim
    pub ip: String,
    pub country_name: String,
    pub country_code: String,
    pub region: String,
    pub city: String,
    pub postal: String,
    pub latitude: f64,
    pub longitude: f64,
    /// IANA timezone name (e.g. `America/Los_Angeles`)
    pub timezone: String,
    pub utc_offset: String,
    /// Network operator / ISP
    pub org: String,
    pub asn: String,
    pub proxy: bool,
    pub hosting: bool,
}

impl IpRecord {
    /// A record carrying only `ip`, every other field at its default.
    ///
    /// This is the result when an IP-only provider succeeded but enrichment
    /// failed.
    pub fn unknown(ip: impl Into<String>) -> Self {
        Self {
            ip: ip.into(),
            country_name: UNKNOWN.to_string(),
            country_code: UNKNOWN.to_string(),
            region: UNKNOWN.to_string(),
            city: UNKNOWN.to_string(),
            postal: UNKNOWN.to_string(),
            latitude: 0.0,
            longitude: 0.0,
            timezone: DEFAULT_TIMEZONE.to_string(),
            utc_offset: DEFAULT_UTC_OFFSET.to_string(),
            org: UNKNOWN_ISP.to_string(),
            asn: UNKNOWN.to_string(),
            proxy: false,
            hosting: false,
        }
    }

    /// The fixed demo geolocation attached to `ip`.
    pub fn demo(ip: impl Into<String>) -> Self {
        Self {
            ip: ip.into(),
            country_name: DEMO_COUNTRY_NAME.to_string(),
            country_code: DEMO_COUNTRY_CODE.to_string(),
            region: DEMO_REGION.to_string(),
            city: DEMO_CITY.to_string(),
            postal: DEMO_POSTAL.to_string(),
            latitude: DEMO_LATITUDE,
            longitude: DEMO_LONGITUDE,
            timezone: DEMO_TIMEZONE.to_string(),
            utc_offset: DEMO_UTC_OFFSET.to_string(),
            org: DEMO_ORG.to_string(),
            asn: DEMO_ASN.to_string(),
            proxy: false,
            hosting: true,
        }
    }
}

/// A record from an IP-only provider, pending enrichment.
///
/// Holds nothing but the confirmed address; it has no geolocation fields to
/// leak into output by mistake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionalRecord {
    pub ip: String,
}

/// Output of a provider normalizer.
#[derive(Debug, Clone, PartialEq)]
pub enum Normalized {
    /// Ready to hand to a renderer.
    Complete(IpRecord),
    /// Must be enriched by a second lookup first.
    Provisional(ProvisionalRecord),
}

impl Normalized {
    /// The address carried by either variant.
    pub fn ip(&self) -> &str {
        match self {
            Normalized::Complete(record) => &record.ip,
            Normalized::Provisional(provisional) => &provisional.ip,
        }
    }
}
