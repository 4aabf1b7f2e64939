//! ipapi.co responses.
//!
//! ```json
//! {"ip": "8.8.8.8", "country_name": "United States", "country_code": "US",
//!  "region": "California", "city": "Mountain View", "postal": "94043",
//!  "latitude": 37.42, "longitude": -122.08, "timezone": "America/Los_Angeles",
//!  "utc_offset": "-0800", "org": "GOOGLE", "asn": "AS15169"}
//! ```
//!
//! Rate limits and reserved ranges come back as HTTP 200 with
//! `{"error": true, "reason": "..."}`.

use serde_json::Value;

use super::fields::{coordinate, first_text_or, flag, object, text, text_or};
use crate::config::{DEFAULT_TIMEZONE, DEFAULT_UTC_OFFSET, UNKNOWN, UNKNOWN_ISP};
use crate::error_handling::ProviderError;
use crate::geoip::{IpRecord, Normalized};

pub(crate) fn normalize(body: &Value, requested_ip: Option<&str>) -> Result<Normalized, ProviderError> {
    let obj = object(body)?;

    if flag(obj, "error") {
        let reason = text_or(obj, "reason", "unspecified error");
        return Err(ProviderError::MalformedResponse(format!(
            "ipapi.co reported an error: {}",
            reason
        )));
    }

    let ip = text(obj, "ip")
        .or_else(|| requested_ip.map(str::to_string))
        .unwrap_or_default();

    Ok(Normalized::Complete(IpRecord {
        ip,
        country_name: text_or(obj, "country_name", UNKNOWN),
        country_code: first_text_or(obj, &["country_code", "country"], UNKNOWN),
        region: text_or(obj, "region", UNKNOWN),
        city: text_or(obj, "city", UNKNOWN),
        postal: text_or(obj, "postal", UNKNOWN),
        latitude: coordinate(obj, "latitude"),
        longitude: coordinate(obj, "longitude"),
        timezone: text_or(obj, "timezone", DEFAULT_TIMEZONE),
        utc_offset: text_or(obj, "utc_offset", DEFAULT_UTC_OFFSET),
        org: text_or(obj, "org", UNKNOWN_ISP),
        asn: text_or(obj, "asn", UNKNOWN),
        proxy: flag(obj, "proxy"),
        hosting: flag(obj, "hosting"),
    }))
}
