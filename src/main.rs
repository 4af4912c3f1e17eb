//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `email_check` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use email_check::config::Opt;
use email_check::initialization::init_logger_with;
use email_check::output::get_formatter;
use email_check::{run_checks, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Lets EMAIL_CHECK_LOOKUP_URL / EMAIL_CHECK_DISCOVERY_URL live in a .env file
    let _ = dotenvy::dotenv();

    let opt = Opt::parse();
    let config = Config::from(&opt);

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    if opt.no_color {
        colored::control::set_override(false);
    }
    let formatter = get_formatter(opt.format, !opt.no_color);

    if let Some(line) = formatter.format_start(&config.domain) {
        println!("{}", line);
    }

    match run_checks(&config)
        .await
        .with_context(|| format!("Checks for {} did not complete", config.domain))
    {
        Ok(report) => {
            println!("{}", formatter.format_report(&report, opt.verbose));
            Ok(())
        }
        Err(e) => {
            eprintln!("email_check error: {:#}", e);
            process::exit(1);
        }
    }
}
