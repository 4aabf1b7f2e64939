//! Canonical IP geolocation records.
//!
//! This module provides the record type all provider responses are normalized
//! into, the provisional/complete split used while a record waits for
//! enrichment, and read-only insights derived from a complete record.

mod insights;
mod types;

// Re-export public API
pub use insights::{
    connection_type, has_location, ip_version, local_time, parse_utc_offset, security_status,
    ConnectionType, IpVersion, RecordInsights, SecurityStatus,
};
pub use types::{IpRecord, Normalized, ProvisionalRecord};
