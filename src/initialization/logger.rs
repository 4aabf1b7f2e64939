//! Logger initialization.
//!
//! Logs go to stderr through `env_logger`, so the rendered record on stdout
//! stays clean enough to pipe into other tools.

use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::*;
use log::{Level, LevelFilter};

/// Initializes the logger with the specified level and format.
///
/// `RUST_LOG` is read first and the `level` argument then overrides the
/// global and crate-level filters, so `--log-level` always wins while
/// `RUST_LOG` can still tune third-party modules. HTTP plumbing (`reqwest`,
/// `hyper`) is capped at Info because its debug output drowns out the
/// provider attempts.
///
/// # Arguments
///
/// * `level` - Minimum log level to display
/// * `format` - `Plain` (colored, one line per record) or `Json` (one object per line)
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a global logger is already set.
///
/// # Examples
///
/// ```bash
/// # Watch every provider attempt
/// ip_lookup 8.8.8.8 --log-level debug
///
/// # Per-module filtering via RUST_LOG
/// RUST_LOG=reqwest=debug ip_lookup 8.8.8.8
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();

    builder.filter_level(level);
    builder.filter_module("reqwest", LevelFilter::Info);
    builder.filter_module("hyper", LevelFilter::Info);
    builder.filter_module("hyper_util", LevelFilter::Info);
    builder.filter_module("ip_lookup", level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{}",
                    json_line(
                        chrono::Utc::now().timestamp_millis(),
                        record.level(),
                        record.target(),
                        &record.args().to_string(),
                    )
                )
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                let level = record.level();
                writeln!(
                    buf,
                    "{} {} [{}] {}",
                    glyph(level),
                    record.target().cyan(),
                    colored_level(level),
                    record.args()
                )
            });
        }
    }

    // try_init() so a second initialization (tests) is an error, not a panic
    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

fn glyph(level: Level) -> &'static str {
    match level {
        Level::Error => "✗",
        Level::Warn => "!",
        Level::Info => "•",
        Level::Debug => "›",
        Level::Trace => "·",
    }
}

fn colored_level(level: Level) -> ColoredString {
    let text = level.to_string();
    match level {
        Level::Error => text.red(),
        Level::Warn => text.yellow(),
        Level::Info => text.green(),
        Level::Debug => text.blue(),
        Level::Trace => text.purple(),
    }
}

fn json_line(ts_millis: i64, level: Level, target: &str, msg: &str) -> String {
    serde_json::json!({
        "ts": ts_millis,
        "level": level.to_string(),
        "target": target,
        "msg": msg,
    })
    .to_string()
}
