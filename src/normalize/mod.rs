//! Provider response normalization.
//!
//! One normalizer per [`ProviderKind`]. Each is a pure function from the raw
//! JSON body (plus the originally requested IP, used when the body does not
//! echo one) to a [`Normalized`] record, applying the canonical defaults to
//! anything the provider left out.
//!
//! The normalizer is chosen by the provider that was queried. Bodies are never
//! inspected to guess their shape: an ipinfo.io body that happens to contain
//! `ip` and `country` is still an ipinfo.io body.

mod fields;
mod ipapi;
mod ipgeolocation;
mod ipify;
mod ipinfo;

use serde_json::Value;

use crate::error_handling::ProviderError;
use crate::geoip::Normalized;
use crate::providers::ProviderKind;

/// Normalizes `body` using the mapping for `kind`.
///
/// # Errors
///
/// Returns `ProviderError::MalformedResponse` when the body is not a JSON
/// object, or when the provider reports an error inside a successful reply.
pub fn normalize(
    kind: ProviderKind,
    body: &Value,
    requested_ip: Option<&str>,
) -> Result<Normalized, ProviderError> {
    match kind {
        ProviderKind::IpApi => ipapi::normalize(body, requested_ip),
        ProviderKind::Ipify => ipify::normalize(body, requested_ip),
        ProviderKind::IpInfo => ipinfo::normalize(body, requested_ip),
        ProviderKind::IpGeolocation => ipgeolocation::normalize(body, requested_ip),
    }
}
