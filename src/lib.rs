//! ip_lookup library: IP geolocation with provider fallback
//!
//! This library looks up geolocation and network details for an IP address
//! (or the caller's own address) by querying several public providers in
//! priority order, normalizing whichever answers into one canonical record.
//! When every provider fails the result is demo data with a notice, so a
//! lookup always produces a record.
//!
//! # Example
//!
//! ```no_run
//! use ip_lookup::{run_lookup, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     ip: Some("8.8.8.8".to_string()),
//!     ..Default::default()
//! };
//!
//! let resolution = run_lookup(&config).await?;
//! println!("{} is in {}, {}", resolution.record.ip,
//!          resolution.record.city, resolution.record.country_name);
//! if let Some(notice) = resolution.notice {
//!     eprintln!("{}", notice);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

pub mod config;
pub mod error_handling;
pub mod geoip;
pub mod initialization;
mod input;
pub mod normalize;
pub mod providers;
pub mod render;
pub mod resolver;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, OutputFormat};
pub use error_handling::{FailureKind, InitializationError, LookupError, ProviderError};
pub use geoip::{IpRecord, RecordInsights};
pub use input::validate_ip_input;
pub use providers::{
    HttpProviderClient, ProviderClient, ProviderEndpoints, ProviderKind, ProviderResponse,
};
pub use render::{JsonRenderer, PlainRenderer, Renderer};
pub use resolver::{DemoReason, ProviderFailure, RecordSource, Resolution, Resolver};

use anyhow::Result;

/// Validates `config.ip` and resolves it against the production providers.
///
/// # Errors
///
/// Returns an error wrapping `LookupError::InvalidInput` when the address is
/// malformed, or `InitializationError` when the HTTP client cannot be built.
/// Provider failures are never errors: they end in a demo resolution.
pub async fn run_lookup(config: &Config) -> Result<Resolution> {
    let requested_ip = validate_ip_input(config.ip.as_deref().unwrap_or_default())?;
    let resolver = initialization::init_resolver(config)?;
    Ok(resolver.resolve(requested_ip.as_deref(), config.demo).await)
}
