//! ipgeolocation.io responses.
//!
//! ```json
//! {"ip": "8.8.8.8", "country_name": "United States", "country_code2": "US",
//!  "state_prov": "California", "city": "Mountain View", "zipcode": "94043",
//!  "latitude": "37.42240", "longitude": "-122.08421",
//!  "time_zone": {"name": "America/Los_Angeles", "offset": -8},
//!  "organization": "Google LLC", "asn": "AS15169"}
//! ```
//!
//! Coordinates are strings; the offset is a number of hours (sometimes a
//! pre-formatted string).

use serde_json::{Map, Value};

use super::fields::{
    coordinate, first_text_or, format_hours_offset, nested, object, parse_float, text, text_or,
};
use crate::config::{DEFAULT_TIMEZONE, DEFAULT_UTC_OFFSET, UNKNOWN, UNKNOWN_ISP};
use crate::error_handling::ProviderError;
use crate::geoip::{IpRecord, Normalized};

pub(crate) fn normalize(body: &Value, requested_ip: Option<&str>) -> Result<Normalized, ProviderError> {
    let obj = object(body)?;

    let ip = text(obj, "ip")
        .or_else(|| requested_ip.map(str::to_string))
        .unwrap_or_default();
    let time_zone = nested(obj, "time_zone");

    Ok(Normalized::Complete(IpRecord {
        ip,
        country_name: text_or(obj, "country_name", UNKNOWN),
        country_code: text_or(obj, "country_code2", UNKNOWN),
        region: text_or(obj, "state_prov", UNKNOWN),
        city: text_or(obj, "city", UNKNOWN),
        postal: first_text_or(obj, &["zipcode", "postal"], UNKNOWN),
        latitude: coordinate(obj, "latitude"),
        longitude: coordinate(obj, "longitude"),
        timezone: time_zone
            .and_then(|tz| text(tz, "name"))
            .unwrap_or_else(|| DEFAULT_TIMEZONE.to_string()),
        utc_offset: time_zone
            .and_then(offset)
            .unwrap_or_else(|| DEFAULT_UTC_OFFSET.to_string()),
        org: first_text_or(obj, &["organization", "isp"], UNKNOWN_ISP),
        asn: text_or(obj, "asn", UNKNOWN),
        proxy: false,
        hosting: false,
    }))
}

fn offset(time_zone: &Map<String, Value>) -> Option<String> {
    match time_zone.get("offset")? {
        Value::Number(n) => n.as_f64().and_then(format_hours_offset),
        Value::String(s) if is_formatted_offset(s.trim()) => Some(s.trim().to_string()),
        Value::String(s) => parse_float(s).and_then(format_hours_offset),
        _ => None,
    }
}

/// Already `±HH:MM`.
fn is_formatted_offset(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 6
        && matches!(bytes[0], b'+' | b'-')
        && bytes[1..3].iter().all(u8::is_ascii_digit)
        && bytes[3] == b':'
        && bytes[4..6].iter().all(u8::is_ascii_digit)
}
