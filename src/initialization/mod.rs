//! Application initialization and resource setup.
//!
//! This module provides functions to initialize shared resources:
//! - Logger
//! - HTTP client
//! - The provider-backed resolver
//!
//! All initialization functions return proper error types for error handling.

mod client;
mod logger;

use std::time::Duration;

use crate::config::Config;
use crate::error_handling::InitializationError;
use crate::providers::HttpProviderClient;
use crate::resolver::Resolver;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;

/// Builds a resolver that talks to the production providers over HTTP.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if the HTTP client cannot be built.
pub fn init_resolver(config: &Config) -> Result<Resolver<HttpProviderClient>, InitializationError> {
    let client = init_client(config)?;
    Ok(Resolver::new(HttpProviderClient::new(client))
        .with_timeout(Duration::from_secs(config.timeout_seconds)))
}
