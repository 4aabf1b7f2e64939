//! Output renderers for complete records.
//!
//! A renderer only ever sees a complete [`IpRecord`]; how the record was
//! obtained (provider, enrichment, demo) is the caller's business.

use std::io::{self, Write};

use chrono::{DateTime, Utc};
use colored::*;
use serde::Serialize;

use crate::geoip::{IpRecord, RecordInsights};

/// Writes a record to a target.
pub trait Renderer {
    fn render(&self, record: &IpRecord, out: &mut dyn Write) -> io::Result<()>;
}

/// Labelled sections (Location, Network, Security, Timezone).
#[derive(Debug, Clone, Default)]
pub struct PlainRenderer {
    /// Fixed clock for local-time output; `None` means "now".
    now: Option<DateTime<Utc>>,
}

impl PlainRenderer {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self { now: Some(now) }
    }
}

fn field(out: &mut dyn Write, label: &str, value: impl std::fmt::Display) -> io::Result<()> {
    writeln!(out, "  {:<16} {}", format!("{}:", label).dimmed(), value)
}

impl Renderer for PlainRenderer {
    fn render(&self, record: &IpRecord, out: &mut dyn Write) -> io::Result<()> {
        let insights = RecordInsights::from_record(record, self.now.unwrap_or_else(Utc::now));

        writeln!(out, "{}", "Location".bold().cyan())?;
        field(out, "IP Address", &record.ip)?;
        field(
            out,
            "Country",
            format!("{} ({})", record.country_name, record.country_code),
        )?;
        field(out, "Region", &record.region)?;
        field(out, "City", &record.city)?;
        field(out, "Postal Code", &record.postal)?;
        if insights.has_location {
            field(
                out,
                "Coordinates",
                format!("{}, {}", record.latitude, record.longitude),
            )?;
        } else {
            field(out, "Coordinates", "Location data not available")?;
        }

        writeln!(out, "{}", "Network".bold().cyan())?;
        field(out, "ISP", &record.org)?;
        field(out, "ASN", &record.asn)?;
        field(out, "Connection Type", insights.connection_type)?;
        field(out, "IP Version", insights.ip_version)?;

        writeln!(out, "{}", "Security".bold().cyan())?;
        let status = insights.security_status.to_string();
        let status = if insights.security_status.is_warning() {
            status.yellow()
        } else {
            status.green()
        };
        field(out, "Security Status", status)?;
        field(out, "Proxy/VPN", yes_no(record.proxy))?;
        field(out, "Hosting", yes_no(record.hosting))?;

        writeln!(out, "{}", "Timezone".bold().cyan())?;
        field(out, "Timezone", &record.timezone)?;
        field(out, "UTC Offset", &record.utc_offset)?;
        field(
            out,
            "Local Time",
            insights.local_time.as_deref().unwrap_or("N/A"),
        )?;

        Ok(())
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

/// Pretty JSON: the record's fields plus an `insights` object.
#[derive(Debug, Clone, Default)]
pub struct JsonRenderer {
    now: Option<DateTime<Utc>>,
}

impl JsonRenderer {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self { now: Some(now) }
    }
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    #[serde(flatten)]
    record: &'a IpRecord,
    insights: RecordInsights,
}

impl Renderer for JsonRenderer {
    fn render(&self, record: &IpRecord, out: &mut dyn Write) -> io::Result<()> {
        let output = JsonOutput {
            record,
            insights: RecordInsights::from_record(record, self.now.unwrap_or_else(Utc::now)),
        };
        serde_json::to_writer_pretty(&mut *out, &output)?;
        writeln!(out)
    }
}
