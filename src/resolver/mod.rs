//! Lookup resolution with provider fallback.
//!
//! The resolver walks an ordered list of providers, one request at a time,
//! and returns the first record that normalizes with a usable IP. Records
//! from the IP-only provider are enriched with one extra lookup before they
//! are returned. When every provider fails, the answer is demo data plus a
//! notice; `resolve` itself never fails.
//!
//! Nothing is shared between calls: each `resolve` builds its own attempt
//! list, timers and failure log, so overlapping lookups are independent.

mod demo;

use std::time::Duration;

use log::{debug, info, warn};
use serde::Serialize;
use serde_json::Value;

use crate::config::{DEMO_MODE_NOTICE, PROVIDERS_EXHAUSTED_NOTICE, PROVIDER_TIMEOUT};
use crate::error_handling::{FailureKind, ProviderError};
use crate::geoip::{IpRecord, Normalized, ProvisionalRecord};
use crate::normalize::normalize;
use crate::providers::{
    ProviderClient, ProviderEndpoint, ProviderEndpoints, ProviderKind, ProviderResponse,
};

/// Why a demo record was returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DemoReason {
    /// The caller asked for demo data.
    DemoMode,
    /// Every provider in the attempt list failed.
    AllProvidersExhausted,
}

/// Where the returned record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RecordSource {
    /// Normalized directly from this provider.
    Provider(ProviderKind),
    /// Address from `via`, details from a follow-up lookup by IP.
    Enriched { via: ProviderKind },
    /// Address from `via`; the follow-up lookup failed, so details are unknown.
    Unenriched { via: ProviderKind },
    /// Synthetic data.
    Demo(DemoReason),
}

/// One failed provider attempt, kept for reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderFailure {
    pub provider: ProviderKind,
    pub error: ProviderError,
}

/// The outcome of a lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// Always complete; provisional records never escape the resolver.
    pub record: IpRecord,
    pub source: RecordSource,
    /// Advisory text for the user when the record is synthetic.
    pub notice: Option<&'static str>,
    /// Provider attempts that failed along the way, in order.
    pub failures: Vec<ProviderFailure>,
}

impl Resolution {
    fn from_provider(record: IpRecord, source: RecordSource, failures: Vec<ProviderFailure>) -> Self {
        Self {
            record,
            source,
            notice: None,
            failures,
        }
    }

    fn demo(requested_ip: Option<&str>, reason: DemoReason, failures: Vec<ProviderFailure>) -> Self {
        let notice = match reason {
            DemoReason::DemoMode => DEMO_MODE_NOTICE,
            DemoReason::AllProvidersExhausted => PROVIDERS_EXHAUSTED_NOTICE,
        };
        Self {
            record: demo::demo_record(requested_ip),
            source: RecordSource::Demo(reason),
            notice: Some(notice),
            failures,
        }
    }

    /// True when the record is demo data rather than a provider answer.
    pub fn is_synthetic(&self) -> bool {
        matches!(self.source, RecordSource::Demo(_))
    }

    /// `AllProvidersExhausted` when the lookup fell through to demo data.
    pub fn terminal_failure(&self) -> Option<FailureKind> {
        match self.source {
            RecordSource::Demo(DemoReason::AllProvidersExhausted) => {
                Some(FailureKind::AllProvidersExhausted)
            }
            _ => None,
        }
    }
}

/// Resolves IP lookups against an ordered chain of providers.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use ip_lookup::{HttpProviderClient, Resolver};
///
/// # async fn example() {
/// let client = HttpProviderClient::new(Arc::new(reqwest::Client::new()));
/// let resolution = Resolver::new(client).resolve(Some("8.8.8.8"), false).await;
/// println!("{} is in {}", resolution.record.ip, resolution.record.city);
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Resolver<C> {
    client: C,
    endpoints: ProviderEndpoints,
    timeout: Duration,
}

impl<C: ProviderClient> Resolver<C> {
    /// A resolver using the production endpoints and the default 8-second timeout.
    pub fn new(client: C) -> Self {
        Self {
            client,
            endpoints: ProviderEndpoints::default(),
            timeout: PROVIDER_TIMEOUT,
        }
    }

    pub fn with_endpoints(mut self, endpoints: ProviderEndpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// Per-request timeout; applies to every attempt independently.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Looks up `requested_ip`, or the caller's own address when `None`.
    ///
    /// Surrounding whitespace is ignored and an empty string counts as `None`.
    /// With `demo_mode` set no request is made at all.
    pub async fn resolve(&self, requested_ip: Option<&str>, demo_mode: bool) -> Resolution {
        let requested_ip = requested_ip.map(str::trim).filter(|ip| !ip.is_empty());

        if demo_mode {
            info!("Demo mode enabled, skipping providers");
            return Resolution::demo(requested_ip, DemoReason::DemoMode, Vec::new());
        }

        let attempts = match requested_ip {
            Some(ip) => vec![self.endpoints.lookup_by_ip(ip)],
            None => self.endpoints.fallback_chain(),
        };

        let mut failures = Vec::new();
        for (index, endpoint) in attempts.iter().enumerate() {
            debug!(
                "Trying provider {}/{}: {}",
                index + 1,
                attempts.len(),
                endpoint.kind
            );
            match self.attempt(endpoint).await {
                Ok(Normalized::Complete(record)) => {
                    info!("Resolved {} via {}", record.ip, endpoint.kind);
                    return Resolution::from_provider(
                        record,
                        RecordSource::Provider(endpoint.kind),
                        failures,
                    );
                }
                Ok(Normalized::Provisional(provisional)) => {
                    return self.enrich(provisional, endpoint.kind, failures).await;
                }
                Err(error) => {
                    warn!("Provider {} failed: {}", endpoint.kind, error);
                    failures.push(ProviderFailure {
                        provider: endpoint.kind,
                        error,
                    });
                }
            }
        }

        warn!(
            "All {} provider(s) failed, falling back to demo data",
            attempts.len()
        );
        Resolution::demo(requested_ip, DemoReason::AllProvidersExhausted, failures)
    }

    /// Completes a provisional record with one lookup by IP.
    ///
    /// Failure here does not continue the chain: the address is already
    /// confirmed, so the result is that address with unknown details.
    async fn enrich(
        &self,
        provisional: ProvisionalRecord,
        via: ProviderKind,
        mut failures: Vec<ProviderFailure>,
    ) -> Resolution {
        let endpoint = self.endpoints.lookup_by_ip(&provisional.ip);
        debug!("Enriching {} from {} via {}", provisional.ip, via, endpoint.kind);

        let error = match self.attempt(&endpoint).await {
            Ok(Normalized::Complete(record)) => {
                info!("Resolved {} via {} (enriched by {})", record.ip, via, endpoint.kind);
                return Resolution::from_provider(record, RecordSource::Enriched { via }, failures);
            }
            Ok(Normalized::Provisional(_)) => ProviderError::MalformedResponse(
                "enrichment lookup returned no location details".to_string(),
            ),
            Err(error) => error,
        };

        warn!(
            "Enrichment of {} failed, using basic info: {}",
            provisional.ip, error
        );
        failures.push(ProviderFailure {
            provider: endpoint.kind,
            error,
        });
        Resolution::from_provider(
            IpRecord::unknown(provisional.ip),
            RecordSource::Unenriched { via },
            failures,
        )
    }

    /// One request to one provider, normalized.
    async fn attempt(&self, endpoint: &ProviderEndpoint) -> Result<Normalized, ProviderError> {
        let url = endpoint
            .url()
            .map_err(|e| ProviderError::Unreachable(format!("invalid provider URL: {}", e)))?;

        let response = self.fetch(&url).await?;
        let body: Value = serde_json::from_str(&response.body)
            .map_err(|e| ProviderError::MalformedResponse(format!("invalid JSON: {}", e)))?;

        let normalized = normalize(endpoint.kind, &body, endpoint.requested_ip())?;
        if normalized.ip().is_empty() {
            return Err(ProviderError::MalformedResponse(
                "response carried no IP address".to_string(),
            ));
        }
        Ok(normalized)
    }

    /// Issues the request under its own timer and rejects non-2xx replies.
    async fn fetch(&self, url: &url::Url) -> Result<ProviderResponse, ProviderError> {
        let response = tokio::time::timeout(self.timeout, self.client.fetch(url, self.timeout))
            .await
            .map_err(|_| ProviderError::TimedOut(self.timeout))??;

        if !response.is_success() {
            return Err(ProviderError::Rejected {
                status: response.status,
            });
        }
        Ok(response)
    }
}
