//! Lenient field accessors over provider JSON.
//!
//! Providers are inconsistent about types (coordinates arrive as numbers or
//! strings, offsets as strings or hours), and an empty string means the same as
//! an absent key. These helpers fold all of that into `Option`s so each
//! normalizer only has to name its keys and defaults.

use serde_json::{Map, Value};

use crate::error_handling::ProviderError;

/// The body as a JSON object, or a malformed-response error.
pub(crate) fn object(body: &Value) -> Result<&Map<String, Value>, ProviderError> {
    body.as_object().ok_or_else(|| {
        ProviderError::MalformedResponse(format!("expected a JSON object, got {}", kind_of(body)))
    })
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Non-empty text at `key`. Numbers and booleans are stringified.
pub(crate) fn text(obj: &Map<String, Value>, key: &str) -> Option<String> {
    match obj.get(key)? {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Text at `key`, or `default` when absent or empty.
pub(crate) fn text_or(obj: &Map<String, Value>, key: &str, default: &str) -> String {
    text(obj, key).unwrap_or_else(|| default.to_string())
}

/// First non-empty text among `keys`, or `default`.
pub(crate) fn first_text_or(obj: &Map<String, Value>, keys: &[&str], default: &str) -> String {
    keys.iter()
        .find_map(|key| text(obj, key))
        .unwrap_or_else(|| default.to_string())
}

/// Nested object at `key`, if present.
pub(crate) fn nested<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a Map<String, Value>> {
    obj.get(key)?.as_object()
}

/// Floating-point value at `key`, accepting numbers and numeric strings.
pub(crate) fn number(obj: &Map<String, Value>, key: &str) -> Option<f64> {
    match obj.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_float(s),
        _ => None,
    }
}

/// Coordinate at `key`; absent, unparseable or non-finite values become `0.0`.
pub(crate) fn coordinate(obj: &Map<String, Value>, key: &str) -> f64 {
    number(obj, key).unwrap_or(0.0)
}

/// True only for a JSON `true`.
pub(crate) fn flag(obj: &Map<String, Value>, key: &str) -> bool {
    matches!(obj.get(key), Some(Value::Bool(true)))
}

pub(crate) fn parse_float(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Splits a `"lat,lon"` pair; each half defaults to `0.0` independently.
pub(crate) fn split_coordinates(loc: Option<&str>) -> (f64, f64) {
    let mut parts = loc.unwrap_or_default().splitn(2, ',');
    let latitude = parts.next().and_then(parse_float).unwrap_or(0.0);
    let longitude = parts.next().and_then(parse_float).unwrap_or(0.0);
    (latitude, longitude)
}

/// Formats an offset given in hours as `±HH:MM`.
///
/// Zero and non-finite offsets yield `None` so the caller's default applies.
pub(crate) fn format_hours_offset(hours: f64) -> Option<String> {
    if !hours.is_finite() || hours == 0.0 || hours.abs() > 14.0 {
        return None;
    }
    let sign = if hours < 0.0 { '-' } else { '+' };
    let total_minutes = (hours.abs() * 60.0).round() as u32;
    Some(format!(
        "{}{:02}:{:02}",
        sign,
        total_minutes / 60,
        total_minutes % 60
    ))
}
