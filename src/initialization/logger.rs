//! Logger initialization.
//!
//! This module provides functions to initialize the logger with custom formatting.

use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::*;
use log::{Level, LevelFilter, Record};

/// Initializes the logger with the specified level and format.
///
/// Plain lines carry a local wall-clock time, the level and the module; JSON
/// lines are one object per record with an RFC 3339 UTC timestamp.
///
/// The logger reads from the `RUST_LOG` environment variable by default, but
/// the provided `level` parameter will override it.
///
/// Log records go to stderr, so they never interleave with a JSON report
/// printed on stdout.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if logger initialization fails.
///
/// # Examples
///
/// ```bash
/// # Override with CLI args (takes precedence)
/// RUST_LOG=debug email_check -d example.com --log-level info
///
/// # Per-module filtering via RUST_LOG
/// RUST_LOG=email_check=debug,reqwest=info email_check -d example.com
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();

    builder.filter_level(level);
    builder.filter_module("html5ever", LevelFilter::Error);
    builder.filter_module("selectors", LevelFilter::Warn);
    builder.filter_module("reqwest", LevelFilter::Info);
    builder.filter_module("hyper", LevelFilter::Info);
    builder.filter_module("hyper_util", LevelFilter::Info);
    builder.filter_module("email_check", level);
    builder.target(env_logger::Target::Stderr);

    match format {
        LogFormat::Json => builder.format(|buf, record| writeln!(buf, "{}", json_line(record))),
        LogFormat::Plain => builder.format(|buf, record| writeln!(buf, "{}", plain_line(record))),
    };

    // try_init() so repeated initialization in tests returns an error instead of panicking
    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

/// Module path relative to this crate; other crates keep their full target.
fn short_target(target: &str) -> &str {
    target
        .strip_prefix("email_check::")
        .unwrap_or(target)
}

fn json_line(record: &Record) -> String {
    serde_json::json!({
        "ts": chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        "level": record.level().as_str(),
        "target": short_target(record.target()),
        "msg": record.args().to_string(),
    })
    .to_string()
}

fn plain_line(record: &Record) -> String {
    let level = record.level();
    let label = format!("{:<5}", level);
    let label = match level {
        Level::Error => label.red(),
        Level::Warn => label.yellow(),
        Level::Info => label.green(),
        Level::Debug => label.blue(),
        Level::Trace => label.purple(),
    };
    let marker = match level {
        Level::Error => "❌",
        Level::Warn => "⚠️",
        Level::Info => "✔️",
        Level::Debug => "🔍",
        Level::Trace => "🔬",
    };

    format!(
        "{} {} {} [{}] {}",
        chrono::Local::now().format("%H:%M:%S%.3f"),
        marker,
        label,
        short_target(record.target()).cyan(),
        record.args()
    )
}
