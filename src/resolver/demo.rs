//! Demo records.
//!
//! Used when demo mode is on, and as the terminal fallback when every
//! provider failed.

use rand::seq::IndexedRandom;

use crate::config::DEMO_IPS;
use crate::geoip::IpRecord;

/// The fixed demo record for `requested_ip`, or for a random well-known
/// public address when none was requested.
pub(crate) fn demo_record(requested_ip: Option<&str>) -> IpRecord {
    let ip = match requested_ip {
        Some(ip) => ip.to_string(),
        None => pick_demo_ip().to_string(),
    };
    IpRecord::demo(ip)
}

fn pick_demo_ip() -> &'static str {
    DEMO_IPS
        .choose(&mut rand::rng())
        .copied()
        .unwrap_or(DEMO_IPS[0])
}
