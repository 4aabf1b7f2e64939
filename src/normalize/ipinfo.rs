//! ipinfo.io responses.
//!
//! ```json
//! {"ip": "1.2.3.4", "city": "Mountain View", "region": "California",
//!  "country": "US", "loc": "37.4056,-122.0775", "org": "AS15169 Google LLC",
//!  "postal": "94043", "timezone": "America/Los_Angeles"}
//! ```
//!
//! `country` is a two-letter code and doubles as the country name. There is
//! no UTC offset and no ASN field; the ASN is taken from the `AS<digits>`
//! prefix of `org` when present.

use serde_json::Value;

use super::fields::{object, split_coordinates, text, text_or};
use crate::config::{DEFAULT_TIMEZONE, DEFAULT_UTC_OFFSET, UNKNOWN, UNKNOWN_ISP};
use crate::error_handling::ProviderError;
use crate::geoip::{IpRecord, Normalized};

pub(crate) fn normalize(body: &Value, requested_ip: Option<&str>) -> Result<Normalized, ProviderError> {
    let obj = object(body)?;

    let ip = text(obj, "ip")
        .or_else(|| requested_ip.map(str::to_string))
        .unwrap_or_default();
    let country = text_or(obj, "country", UNKNOWN);
    let (latitude, longitude) = split_coordinates(text(obj, "loc").as_deref());
    let org = text(obj, "org");
    let asn = org
        .as_deref()
        .and_then(asn_prefix)
        .map(str::to_string)
        .or_else(|| org.clone())
        .unwrap_or_else(|| UNKNOWN.to_string());

    Ok(Normalized::Complete(IpRecord {
        ip,
        country_name: country.clone(),
        country_code: country,
        region: text_or(obj, "region", UNKNOWN),
        city: text_or(obj, "city", UNKNOWN),
        postal: text_or(obj, "postal", UNKNOWN),
        latitude,
        longitude,
        timezone: text_or(obj, "timezone", DEFAULT_TIMEZONE),
        utc_offset: DEFAULT_UTC_OFFSET.to_string(),
        org: org.unwrap_or_else(|| UNKNOWN_ISP.to_string()),
        asn,
        proxy: false,
        hosting: false,
    }))
}

/// `"AS15169 Google LLC"` -> `Some("AS15169")`.
fn asn_prefix(org: &str) -> Option<&str> {
    let token = org.split_whitespace().next()?;
    let digits = token.strip_prefix("AS")?;
    (!digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())).then_some(token)
}
