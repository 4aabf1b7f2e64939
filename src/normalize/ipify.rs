//! ipify responses: `{"ip": "203.0.113.7"}` and nothing else.
//!
//! Always provisional; the resolver enriches the address afterwards.

use serde_json::Value;

use super::fields::{object, text};
use crate::error_handling::ProviderError;
use crate::geoip::{Normalized, ProvisionalRecord};

pub(crate) fn normalize(body: &Value, requested_ip: Option<&str>) -> Result<Normalized, ProviderError> {
    let obj = object(body)?;
    let ip = text(obj, "ip")
        .or_else(|| requested_ip.map(str::to_string))
        .unwrap_or_default();
    Ok(Normalized::Provisional(ProvisionalRecord { ip }))
}
