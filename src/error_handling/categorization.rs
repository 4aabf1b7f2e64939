//! Error categorization.
//!
//! This module converts low-level HTTP client errors into provider errors.

use super::types::ProviderError;

/// Categorizes a `reqwest::Error` into a `ProviderError`.
///
/// Status errors become `Rejected`, timeouts become `TimedOut`, decode errors
/// become `MalformedResponse` and everything else is treated as the provider
/// being unreachable.
///
/// # Arguments
///
/// * `error` - The `reqwest::Error` to categorize
/// * `timeout` - The timeout the request was issued with (reported on expiry)
pub fn categorize_reqwest_error(
    error: &reqwest::Error,
    timeout: std::time::Duration,
) -> ProviderError {
    // Check HTTP status codes first
    if let Some(status) = error.status() {
        return ProviderError::Rejected {
            status: status.as_u16(),
        };
    }

    if error.is_timeout() {
        ProviderError::TimedOut(timeout)
    } else if error.is_decode() {
        ProviderError::MalformedResponse(error.to_string())
    } else {
        ProviderError::Unreachable(error.to_string())
    }
}
