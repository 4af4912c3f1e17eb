//! email_check library: DKIM, SPF and DMARC posture checks for a mail domain
//!
//! This library asks a third-party lookup service about a domain's DKIM
//! selectors, SPF record and DMARC record, and turns the service's findings
//! into PASS/FAIL verdicts with failure and warning messages. It does not
//! resolve DNS or validate records itself.
//!
//! # Example
//!
//! ```no_run
//! use email_check::{run_checks, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     domain: "example.com".to_string(),
//!     ..Default::default()
//! };
//!
//! let report = run_checks(&config).await?;
//! println!("DKIM {} / SPF {} / DMARC {}",
//!          report.dkim.verdict, report.spf.verdict, report.dmarc.verdict);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

pub mod checks;
pub mod config;
pub mod discovery;
pub mod domain;
pub mod error_handling;
pub mod initialization;
pub mod lookup;
pub mod output;
pub mod query;
mod utils;

// Re-export public API
pub use checks::{DkimResult, RecordResult, Selector, Verdict};
pub use config::{Config, LogFormat, LogLevel, OutputFormat};
pub use domain::{Domain, SelectorSpec};
pub use error_handling::CheckError;
pub use run::{run_checks, CheckReport};

// Internal run module (contains the orchestration logic)
mod run {
    use serde::Serialize;

    use crate::checks::{check_dkim, check_dmarc, check_spf, DkimResult, RecordResult};
    use crate::config::Config;
    use crate::discovery::DiscoveryClient;
    use crate::domain::{Domain, SelectorSpec};
    use crate::error_handling::CheckError;
    use crate::initialization::init_client;
    use crate::lookup::LookupClient;
    use crate::query::RetryPolicy;

    /// Combined result of the three checks for one domain.
    ///
    /// Built once per run and read-only afterwards.
    #[derive(Debug, Clone, PartialEq, Serialize)]
    pub struct CheckReport {
        /// Domain under test
        pub domain: Domain,
        /// DKIM check result
        pub dkim: DkimResult,
        /// SPF check result
        pub spf: RecordResult,
        /// DMARC check result
        pub dmarc: RecordResult,
    }

    /// Runs the DKIM, SPF and DMARC checks for the configured domain.
    ///
    /// Arguments are validated before any request is sent. The checks then
    /// run one after another (DKIM, SPF, DMARC); selectors are looked up in
    /// the order they were supplied or discovered.
    ///
    /// # Errors
    ///
    /// - `CheckError::Validation` for an empty or malformed domain, an empty
    ///   selector list, or a malformed selector name
    /// - `CheckError::Query` / `CheckError::Discovery` for service failures
    ///   that survive the retry policy
    ///
    /// Any error aborts the whole run: no partial report is returned.
    pub async fn run_checks(config: &Config) -> Result<CheckReport, CheckError> {
        let domain = Domain::parse(&config.domain)?;
        let spec = SelectorSpec::from_option(config.selectors.as_deref())?;

        let client = init_client(config)?;
        let policy = RetryPolicy::from_config(config);
        let lookup = LookupClient::new(client.clone(), config.lookup_url.clone(), policy.clone());
        let discovery = DiscoveryClient::new(client, config.discovery_url.clone(), policy);

        log::info!("Running DKIM, SPF and DMARC checks for {}", domain);
        let dkim = check_dkim(&lookup, &discovery, &domain, &spec).await?;
        let spf = check_spf(&lookup, &domain).await?;
        let dmarc = check_dmarc(&lookup, &domain).await?;

        Ok(CheckReport {
            domain,
            dkim,
            spf,
            dmarc,
        })
    }
}
