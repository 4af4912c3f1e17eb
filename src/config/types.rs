//! Configuration types.
//!
//! This module defines the enums and structs that configure a check run.

use std::time::Duration;

use clap::ValueEnum;

use crate::config::constants::{
    DEFAULT_DISCOVERY_URL, DEFAULT_LOOKUP_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
    RETRY_DELAY, RETRY_MAX_ATTEMPTS,
};

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

/// Report output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal report (default)
    Plain,
    /// The full report serialized as JSON
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically without any CLI dependencies.
///
/// # Examples
///
/// ```no_run
/// use email_check::Config;
///
/// let config = Config {
///     domain: "example.com".to_string(),
///     selectors: Some(vec!["selector1".to_string()]),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Mail domain under test
    pub domain: String,

    /// DKIM selectors to check; `None` discovers them automatically
    pub selectors: Option<Vec<String>>,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Base URL of the record lookup service
    pub lookup_url: String,

    /// Base URL of the selector discovery service
    pub discovery_url: String,

    /// Maximum attempts per request (including the first)
    pub retry_attempts: usize,

    /// Delay between attempts
    pub retry_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            domain: String::new(),
            selectors: None,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            lookup_url: DEFAULT_LOOKUP_URL.to_string(),
            discovery_url: DEFAULT_DISCOVERY_URL.to_string(),
            retry_attempts: RETRY_MAX_ATTEMPTS,
            retry_delay: RETRY_DELAY,
        }
    }
}
