//! The capability used to reach providers.
//!
//! The resolver only ever talks to a [`ProviderClient`], so tests can swap the
//! network for scripted responses.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use url::Url;

use crate::error_handling::{categorize_reqwest_error, ProviderError};

/// Raw provider reply: status code and undecoded body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderResponse {
    pub status: u16,
    pub body: String,
}

impl ProviderResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// True for statuses in 200-299.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs one GET against a provider.
///
/// Implementations should honor `timeout`, but the resolver enforces it as
/// well, so a client that hangs cannot stall the chain.
#[async_trait]
pub trait ProviderClient: Send + Sync {
    async fn fetch(&self, url: &Url, timeout: Duration) -> Result<ProviderResponse, ProviderError>;
}

#[async_trait]
impl<T: ProviderClient + ?Sized> ProviderClient for Arc<T> {
    async fn fetch(&self, url: &Url, timeout: Duration) -> Result<ProviderResponse, ProviderError> {
        (**self).fetch(url, timeout).await
    }
}

/// [`ProviderClient`] backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpProviderClient {
    client: Arc<reqwest::Client>,
}

impl HttpProviderClient {
    pub fn new(client: Arc<reqwest::Client>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProviderClient for HttpProviderClient {
    async fn fetch(&self, url: &Url, timeout: Duration) -> Result<ProviderResponse, ProviderError> {
        let response = self
            .client
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| categorize_reqwest_error(&e, timeout))?;

        // Non-2xx bodies are still read; the resolver decides what a status means
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| categorize_reqwest_error(&e, timeout))?;

        Ok(ProviderResponse { status, body })
    }
}
