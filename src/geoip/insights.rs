//! Derived views over a complete record.
//!
//! Nothing here touches the network; these are the small classifications the
//! renderers show next to the raw fields.

use chrono::{DateTime, FixedOffset, Utc};
use chrono_tz::Tz;
use serde::Serialize;
use strum_macros::Display;

use super::types::IpRecord;
use crate::config::DEFAULT_TIMEZONE;

const LOCAL_TIME_FORMAT: &str = "%I:%M %p";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
pub enum IpVersion {
    IPv4,
    IPv6,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
pub enum ConnectionType {
    Mobile,
    Fiber,
    Cable,
    Broadband,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
pub enum SecurityStatus {
    #[strum(to_string = "Proxy/VPN Detected")]
    #[serde(rename = "Proxy/VPN Detected")]
    ProxyDetected,
    #[strum(to_string = "Hosting Provider")]
    #[serde(rename = "Hosting Provider")]
    HostingProvider,
    #[strum(to_string = "Clean")]
    Clean,
}

impl SecurityStatus {
    /// Whether the status deserves a warning badge.
    pub fn is_warning(self) -> bool {
        !matches!(self, SecurityStatus::Clean)
    }
}

/// All insights for one record, computed at a fixed instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordInsights {
    pub ip_version: IpVersion,
    pub connection_type: ConnectionType,
    pub security_status: SecurityStatus,
    pub local_time: Option<String>,
    pub has_location: bool,
}

impl RecordInsights {
    pub fn from_record(record: &IpRecord, now: DateTime<Utc>) -> Self {
        Self {
            ip_version: ip_version(&record.ip),
            connection_type: connection_type(&record.org),
            security_status: security_status(record),
            local_time: local_time(&record.timezone, &record.utc_offset, now),
            has_location: has_location(record),
        }
    }
}

/// Any colon means IPv6; the address itself is not parsed.
pub fn ip_version(ip: &str) -> IpVersion {
    if ip.contains(':') {
        IpVersion::IPv6
    } else {
        IpVersion::IPv4
    }
}

/// Keyword heuristic over the operator name.
pub fn connection_type(org: &str) -> ConnectionType {
    let org = org.to_lowercase();
    if org.contains("mobile") {
        ConnectionType::Mobile
    } else if org.contains("fiber") {
        ConnectionType::Fiber
    } else if org.contains("cable") {
        ConnectionType::Cable
    } else {
        ConnectionType::Broadband
    }
}

/// Proxy takes precedence over hosting.
pub fn security_status(record: &IpRecord) -> SecurityStatus {
    if record.proxy {
        SecurityStatus::ProxyDetected
    } else if record.hosting {
        SecurityStatus::HostingProvider
    } else {
        SecurityStatus::Clean
    }
}

/// False when either coordinate is exactly zero.
pub fn has_location(record: &IpRecord) -> bool {
    record.latitude != 0.0 && record.longitude != 0.0
}

/// Parses `+HH:MM`, `-HHMM` or `+HH` into a fixed offset.
pub fn parse_utc_offset(offset: &str) -> Option<FixedOffset> {
    let offset = offset.trim();
    let (sign, rest) = match offset.chars().next()? {
        '+' => (1, &offset[1..]),
        '-' => (-1, &offset[1..]),
        _ => return None,
    };

    let digits: String = rest.chars().filter(|c| *c != ':').collect();
    if digits.is_empty() || digits.len() > 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let (hours, minutes) = match digits.len() {
        1 | 2 => (digits.parse::<i32>().ok()?, 0),
        3 => (digits[..1].parse::<i32>().ok()?, digits[1..].parse::<i32>().ok()?),
        _ => (digits[..2].parse::<i32>().ok()?, digits[2..].parse::<i32>().ok()?),
    };
    if minutes >= 60 {
        return None;
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

/// Wall-clock time for a record, e.g. `04:07 PM`.
///
/// The IANA `timezone` name is used when it is known, so daylight saving
/// applies. The `UTC` placeholder and names the tz database does not know fall
/// back to the fixed `utc_offset`.
pub fn local_time(timezone: &str, utc_offset: &str, now: DateTime<Utc>) -> Option<String> {
    let timezone = timezone.trim();
    if timezone != DEFAULT_TIMEZONE {
        if let Ok(tz) = timezone.parse::<Tz>() {
            return Some(now.with_timezone(&tz).format(LOCAL_TIME_FORMAT).to_string());
        }
    }
    let offset = parse_utc_offset(utc_offset)?;
    Some(
        now.with_timezone(&offset)
            .format(LOCAL_TIME_FORMAT)
            .to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geoip::Normalized;
    use crate::providers::ProviderKind;
    use chrono::TimeZone;

    fn noon_utc() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_ip_version() {
        assert_eq!(ip_version("8.8.8.8"), IpVersion::IPv4);
        assert_eq!(ip_version("2001:4860:4860::8888"), IpVersion::IPv6);
    }

    #[test]
    fn test_connection_type_keywords() {
        assert_eq!(connection_type("T-Mobile USA"), ConnectionType::Mobile);
        assert_eq!(connection_type("Google Fiber Inc."), ConnectionType::Fiber);
        assert_eq!(connection_type("Comcast Cable"), ConnectionType::Cable);
        assert_eq!(connection_type("Google LLC"), ConnectionType::Broadband);
        assert_eq!(connection_type(""), ConnectionType::Broadband);
    }

    #[test]
    fn test_security_status_precedence() {
        let mut record = IpRecord::unknown("1.2.3.4");
        assert_eq!(security_status(&record), SecurityStatus::Clean);
        assert!(!SecurityStatus::Clean.is_warning());

        record.hosting = true;
        assert_eq!(security_status(&record), SecurityStatus::HostingProvider);

        record.proxy = true;
        assert_eq!(security_status(&record), SecurityStatus::ProxyDetected);
        assert_eq!(
            SecurityStatus::ProxyDetected.to_string(),
            "Proxy/VPN Detected"
        );
    }

    #[test]
    fn test_has_location() {
        let mut record = IpRecord::unknown("1.2.3.4");
        assert!(!has_location(&record));
        record.latitude = 37.4;
        assert!(!has_location(&record), "one zero coordinate means no location");
        record.longitude = -122.1;
        assert!(has_location(&record));
    }

    #[test]
    fn test_parse_utc_offset_formats() {
        assert_eq!(
            parse_utc_offset("+05:30"),
            FixedOffset::east_opt(5 * 3600 + 30 * 60)
        );
        assert_eq!(parse_utc_offset("-0800"), FixedOffset::west_opt(8 * 3600));
        assert_eq!(parse_utc_offset("+00:00"), FixedOffset::east_opt(0));
        assert_eq!(parse_utc_offset("+9"), FixedOffset::east_opt(9 * 3600));
        assert_eq!(parse_utc_offset("UTC"), None);
        assert_eq!(parse_utc_offset("America/New_York"), None);
        assert_eq!(parse_utc_offset("+12:75"), None);
        assert_eq!(parse_utc_offset(""), None);
    }

    fn midsummer_noon_utc() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 7, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_local_time_prefers_timezone_name() {
        // Offset left at the default, as ipinfo.io records always have it
        assert_eq!(
            local_time("America/Los_Angeles", "+00:00", noon_utc()).as_deref(),
            Some("04:00 AM")
        );
        assert_eq!(
            local_time("Asia/Kolkata", "+00:00", noon_utc()).as_deref(),
            Some("05:30 PM")
        );
    }

    #[test]
    fn test_local_time_applies_daylight_saving() {
        assert_eq!(
            local_time("America/Los_Angeles", "-08:00", midsummer_noon_utc()).as_deref(),
            Some("05:00 AM")
        );
    }

    #[test]
    fn test_local_time_falls_back_to_offset() {
        assert_eq!(
            local_time("UTC", "-08:00", noon_utc()).as_deref(),
            Some("04:00 AM")
        );
        assert_eq!(
            local_time("Not/A_Zone", "+05:30", noon_utc()).as_deref(),
            Some("05:30 PM")
        );
        assert_eq!(
            local_time("UTC", "+00:00", noon_utc()).as_deref(),
            Some("12:00 PM")
        );
        assert_eq!(local_time("garbage", "garbage", noon_utc()), None);
    }

    #[test]
    fn test_insights_for_ipinfo_record() {
        let body = serde_json::json!({
            "ip": "1.2.3.4",
            "country": "US",
            "loc": "37.4,-122.1",
            "timezone": "America/Los_Angeles"
        });
        let record = match crate::normalize::normalize(ProviderKind::IpInfo, &body, None) {
            Ok(Normalized::Complete(record)) => record,
            other => panic!("expected a complete record, got {:?}", other),
        };
        assert_eq!(record.utc_offset, "+00:00");

        let insights = RecordInsights::from_record(&record, noon_utc());
        assert_eq!(insights.local_time.as_deref(), Some("04:00 AM"));
    }

    #[test]
    fn test_security_status_serializes_as_label() {
        assert_eq!(
            serde_json::to_value(SecurityStatus::HostingProvider).unwrap(),
            "Hosting Provider"
        );
        assert_eq!(
            serde_json::to_value(SecurityStatus::ProxyDetected).unwrap(),
            "Proxy/VPN Detected"
        );
        assert_eq!(serde_json::to_value(SecurityStatus::Clean).unwrap(), "Clean");
    }

    #[test]
    fn test_insights_for_demo_record() {
        let insights = RecordInsights::from_record(&IpRecord::demo("8.8.8.8"), noon_utc());
        assert_eq!(insights.ip_version, IpVersion::IPv4);
        assert_eq!(insights.connection_type, ConnectionType::Broadband);
        assert_eq!(insights.security_status, SecurityStatus::HostingProvider);
        assert_eq!(insights.local_time.as_deref(), Some("04:00 AM"));
        assert!(insights.has_location);
    }
}
