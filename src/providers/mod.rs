//! Upstream geolocation providers.
//!
//! This module provides:
//! - `ProviderKind`, the closed set of supported providers
//! - Endpoint descriptors and the ordered fallback chain
//! - The `ProviderClient` capability and its reqwest implementation

mod client;
mod kind;

// Re-export public API
pub use client::{HttpProviderClient, ProviderClient, ProviderResponse};
pub use kind::{ProviderEndpoint, ProviderEndpoints, ProviderKind};
