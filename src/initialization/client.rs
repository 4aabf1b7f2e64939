//! HTTP client initialization.
//!
//! This module provides the function that builds the HTTP client used to
//! reach geolocation providers.

use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::error_handling::InitializationError;
use reqwest::ClientBuilder;

/// Initializes the HTTP client with default settings.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the config
/// - Overall timeout from the config (each request also sets its own)
///
/// # Arguments
///
/// * `config` - Configuration containing user-agent and timeout settings
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(Arc::new(client))
}
