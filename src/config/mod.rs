//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (provider URLs, timeouts, demo data)
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel, OutputFormat};
