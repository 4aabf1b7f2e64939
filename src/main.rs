//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `ip_lookup` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use std::io::{self, Write};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;

use ip_lookup::initialization::init_logger_with;
use ip_lookup::{
    run_lookup, Config, JsonRenderer, LookupError, OutputFormat, PlainRenderer, Renderer,
};

/// Initialization or output failure.
const EXIT_FAILURE: i32 = 1;
/// The address given on the command line is not an IP address. Distinct from
/// clap's usage errors, which exit with 2.
const EXIT_INVALID_INPUT: i32 = 3;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let resolution = match run_lookup(&config).await {
        Ok(resolution) => resolution,
        Err(e) => {
            eprintln!("ip_lookup error: {:#}", e);
            let code = if e.downcast_ref::<LookupError>().is_some() {
                EXIT_INVALID_INPUT
            } else {
                EXIT_FAILURE
            };
            process::exit(code);
        }
    };

    if let Some(notice) = resolution.notice {
        eprintln!("{} {}", "⚠".yellow(), notice.yellow());
    }

    let renderer: Box<dyn Renderer> = match config.format {
        OutputFormat::Plain => Box::new(PlainRenderer::default()),
        OutputFormat::Json => Box::new(JsonRenderer::default()),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    renderer
        .render(&resolution.record, &mut out)
        .context("Failed to write lookup result")?;
    out.flush().context("Failed to flush stdout")?;

    Ok(())
}
