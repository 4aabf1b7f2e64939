//! Provider identities and endpoint descriptors.

use serde::Serialize;
use strum_macros::{Display, EnumIter};
use url::Url;

use crate::config::{IPAPI_BASE_URL, IPGEOLOCATION_BASE_URL, IPIFY_BASE_URL, IPINFO_BASE_URL};

/// The closed set of upstream geolocation providers.
///
/// Each variant has exactly one response shape and one normalizer; the
/// variant is always taken from the endpoint that was queried, never guessed
/// from the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter)]
pub enum ProviderKind {
    #[strum(to_string = "ipapi.co")]
    IpApi,
    #[strum(to_string = "ipify")]
    Ipify,
    #[strum(to_string = "ipinfo.io")]
    IpInfo,
    #[strum(to_string = "ipgeolocation.io")]
    IpGeolocation,
}

/// Base URLs for every provider.
///
/// End users never change these; tests point them at a local mock server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderEndpoints {
    pub ipapi: String,
    pub ipify: String,
    pub ipinfo: String,
    pub ipgeolocation: String,
}

impl Default for ProviderEndpoints {
    fn default() -> Self {
        Self {
            ipapi: IPAPI_BASE_URL.to_string(),
            ipify: IPIFY_BASE_URL.to_string(),
            ipinfo: IPINFO_BASE_URL.to_string(),
            ipgeolocation: IPGEOLOCATION_BASE_URL.to_string(),
        }
    }
}

impl ProviderEndpoints {
    /// Points every provider at the same base URL (handy with a single mock server).
    pub fn with_base(base: &str) -> Self {
        Self {
            ipapi: base.to_string(),
            ipify: base.to_string(),
            ipinfo: base.to_string(),
            ipgeolocation: base.to_string(),
        }
    }

    /// The full fallback chain used when no IP was requested, in priority order.
    pub fn fallback_chain(&self) -> Vec<ProviderEndpoint> {
        vec![
            ProviderEndpoint::own_address(ProviderKind::IpApi, &self.ipapi),
            ProviderEndpoint::own_address(ProviderKind::Ipify, &self.ipify),
            ProviderEndpoint::own_address(ProviderKind::IpInfo, &self.ipinfo),
            ProviderEndpoint::own_address(ProviderKind::IpGeolocation, &self.ipgeolocation),
        ]
    }

    /// The detailed provider queried for a specific address.
    ///
    /// Used both for explicit lookups and for enriching a provisional record.
    pub fn lookup_by_ip(&self, ip: &str) -> ProviderEndpoint {
        ProviderEndpoint {
            kind: ProviderKind::IpApi,
            base: self.ipapi.clone(),
            ip: Some(ip.to_string()),
        }
    }
}

/// One entry of the attempt list: which provider, and how to reach it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderEndpoint {
    pub kind: ProviderKind,
    base: String,
    ip: Option<String>,
}

impl ProviderEndpoint {
    fn own_address(kind: ProviderKind, base: &str) -> Self {
        Self {
            kind,
            base: base.to_string(),
            ip: None,
        }
    }

    /// Address this endpoint asks about, if it is not the caller's own.
    pub fn requested_ip(&self) -> Option<&str> {
        self.ip.as_deref()
    }

    /// Builds the request URL.
    ///
    /// The requested IP is pushed as a path segment, so anything unusual in
    /// it is percent-encoded rather than spliced into the path.
    pub fn url(&self) -> Result<Url, url::ParseError> {
        let mut url = Url::parse(&self.base)?;
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?;
            path.pop_if_empty();
            match (self.kind, self.ip.as_deref()) {
                (ProviderKind::IpApi, Some(ip)) => {
                    path.push(ip).push("json").push("");
                }
                (ProviderKind::IpApi, None) => {
                    path.push("json").push("");
                }
                (ProviderKind::Ipify, _) => {}
                (ProviderKind::IpInfo, _) => {
                    path.push("json");
                }
                (ProviderKind::IpGeolocation, _) => {
                    path.push("ipgeo");
                }
            }
        }
        if self.kind == ProviderKind::Ipify {
            url.query_pairs_mut().append_pair("format", "json");
        }
        Ok(url)
    }
}
