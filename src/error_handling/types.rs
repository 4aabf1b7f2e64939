//! Error type definitions.
//!
//! This module defines the errors raised while initializing the application and
//! while talking to geolocation providers.

use std::time::Duration;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::{Display, EnumIter as EnumIterMacro};
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Errors surfaced to callers of the lookup API.
///
/// Provider failures never appear here: they are recovered inside the
/// resolver. Only problems with the caller's own input are reported.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The supplied text is neither an IPv4 nor an IPv6 address.
    #[error("Please enter a valid IPv4 or IPv6 address (got {0:?})")]
    InvalidInput(String),
}

/// A single failed provider attempt.
///
/// Every variant is recoverable: the resolver logs it and moves on to the next
/// provider in the chain (or the demo record).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProviderError {
    /// Network-level failure (DNS, connect, TLS, body read).
    #[error("Provider unreachable: {0}")]
    Unreachable(String),

    /// The per-request timer fired before a response arrived.
    #[error("Provider timed out after {0:?}")]
    TimedOut(Duration),

    /// The provider answered with a status outside 200-299.
    #[error("Provider rejected the request with HTTP {status}")]
    Rejected { status: u16 },

    /// The body was not usable JSON, reported an error, or had no IP.
    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),
}

impl ProviderError {
    /// Maps the error onto the failure taxonomy.
    pub fn kind(&self) -> FailureKind {
        match self {
            ProviderError::Unreachable(_) | ProviderError::TimedOut(_) => {
                FailureKind::ProviderUnreachable
            }
            ProviderError::Rejected { .. } => FailureKind::ProviderRejected,
            ProviderError::MalformedResponse(_) => FailureKind::MalformedResponse,
        }
    }
}

/// Failure taxonomy for provider lookups.
///
/// `AllProvidersExhausted` is terminal but is still reported to callers as a
/// successful demo resolution with a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro, Display)]
pub enum FailureKind {
    ProviderUnreachable,
    ProviderRejected,
    MalformedResponse,
    AllProvidersExhausted,
}
