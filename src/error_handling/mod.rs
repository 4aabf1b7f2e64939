//! Error handling.
//!
//! This module provides:
//! - Error type definitions for initialization, lookups and provider attempts
//! - The failure taxonomy used when reporting provider attempts
//! - Categorization of HTTP client errors
//!
//! Provider failures are categorized into:
//! - **ProviderUnreachable**: network errors and timeouts
//! - **ProviderRejected**: non-2xx HTTP status
//! - **MalformedResponse**: unusable body or missing IP
//! - **AllProvidersExhausted**: every attempt failed (terminal, answered with demo data)

mod categorization;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use types::{FailureKind, InitializationError, LookupError, ProviderError};
