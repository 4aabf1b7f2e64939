//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_USER_AGENT, PROVIDER_TIMEOUT_SECS};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// How the resolved record is written to stdout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Labelled sections, one field per line
    Plain,
    /// Pretty-printed JSON including derived insights
    Json,
}

/// Lookup configuration.
///
/// Parsed from the command line by the binary, or constructed programmatically
/// through `Default`.
///
/// # Examples
///
/// ```no_run
/// use ip_lookup::Config;
///
/// let config = Config {
///     ip: Some("8.8.8.8".to_string()),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "ip_lookup",
    version,
    about = "Look up geolocation and network details for an IP address"
)]
pub struct Config {
    /// IPv4 or IPv6 address to look up (omit to look up your own address)
    pub ip: Option<String>,

    /// Skip all network activity and show sample data
    #[arg(long)]
    pub demo: bool,

    /// Output format for the resolved record
    #[arg(long, value_enum, default_value = "plain")]
    pub format: OutputFormat,

    /// Per-provider request timeout in seconds
    #[arg(long, default_value_t = PROVIDER_TIMEOUT_SECS, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Log level
    #[arg(long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ip: None,
            demo: false,
            format: OutputFormat::Plain,
            timeout_seconds: PROVIDER_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
        }
    }
}
