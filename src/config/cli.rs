//! Command-line options.

use clap::Parser;

use crate::config::constants::{
    DEFAULT_DISCOVERY_URL, DEFAULT_LOOKUP_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};
use crate::config::types::{Config, LogFormat, LogLevel, OutputFormat};

/// Command-line options.
///
/// This struct is automatically generated by `clap` from the field attributes.
///
/// # Examples
///
/// ```bash
/// # Discover selectors automatically
/// email_check -d example.com
///
/// # Check a known selector with full detail
/// email_check -d example.com -s selector1 -v
///
/// # Machine-readable report
/// email_check -d example.com --format json
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "email_check",
    about = "Checks a domain's DKIM, SPF and DMARC records."
)]
pub struct Opt {
    /// Domain name you want to test
    #[arg(short, long)]
    pub domain: String,

    /// DKIM selector, can be extracted from an email's DKIM-Signature header
    #[arg(short, long)]
    pub selector: Option<String>,

    /// Print detailed results
    #[arg(short, long)]
    pub verbose: bool,

    /// Report format: plain|json
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Base URL of the record lookup service
    #[arg(long, env = "EMAIL_CHECK_LOOKUP_URL", default_value = DEFAULT_LOOKUP_URL)]
    pub lookup_url: String,

    /// Base URL of the selector discovery service
    #[arg(long, env = "EMAIL_CHECK_DISCOVERY_URL", default_value = DEFAULT_DISCOVERY_URL)]
    pub discovery_url: String,
}

impl From<&Opt> for Config {
    fn from(opt: &Opt) -> Self {
        Config {
            domain: opt.domain.clone(),
            selectors: opt.selector.clone().map(|s| vec![s]),
            log_level: opt.log_level.clone(),
            log_format: opt.log_format.clone(),
            timeout_seconds: opt.timeout_seconds,
            user_agent: opt.user_agent.clone(),
            lookup_url: opt.lookup_url.clone(),
            discovery_url: opt.discovery_url.clone(),
            ..Config::default()
        }
    }
}
