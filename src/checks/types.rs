//! Check result types.

use serde::Serialize;
use strum_macros::Display;

use crate::domain::{selector_dns_name, Domain};
use crate::lookup::{InformationEntry, LookupEntry, LookupResponse, RecordType};

/// Overall outcome of one check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Pass,
    Fail,
}

impl Verdict {
    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass)
    }
}

/// One DKIM selector together with the lookup service's findings for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Selector {
    /// Selector name as supplied or discovered
    pub name: String,
    /// Name that was looked up: `<name>._domainkey.<domain>`
    pub dns_name: String,
    pub failed: Vec<LookupEntry>,
    pub warnings: Vec<LookupEntry>,
    pub passed: Vec<LookupEntry>,
    pub information: Vec<InformationEntry>,
    pub errors: Vec<serde_json::Value>,
    pub timeouts: Vec<serde_json::Value>,
    /// Raw record text, when the service returned it
    pub record_content: Option<String>,
    /// The record is flagged as a test (non-production) record
    pub is_test: bool,
    /// The lookup reported no failures
    pub valid: bool,
}

impl Selector {
    /// Builds the selector record once its lookup data has arrived.
    pub fn from_lookup(name: &str, domain: &Domain, response: LookupResponse) -> Self {
        let record_content = response.record_content();
        let is_test = response.has_test_tag();
        let valid = response.failed.is_empty();
        Self {
            name: name.to_string(),
            dns_name: selector_dns_name(name, domain),
            failed: response.failed,
            warnings: response.warnings,
            passed: response.passed,
            information: response.information,
            errors: response.errors,
            timeouts: response.timeouts,
            record_content,
            is_test,
            valid,
        }
    }
}

/// Result of the DKIM check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DkimResult {
    pub domain: Domain,
    pub verdict: Verdict,
    /// Selectors in the order they were supplied or discovered
    pub selectors: Vec<Selector>,
    pub failures: Vec<String>,
    pub warnings: Vec<String>,
    /// Selectors came from automatic discovery rather than the caller
    pub discovered: bool,
}

/// Result of a single-record check (SPF or DMARC).
///
/// Lookup lists are kept verbatim for presentation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordResult {
    pub record: RecordType,
    pub domain: Domain,
    pub verdict: Verdict,
    pub failures: Vec<LookupEntry>,
    pub warnings: Vec<LookupEntry>,
    pub passed: Vec<LookupEntry>,
    pub information: Vec<InformationEntry>,
    pub errors: Vec<serde_json::Value>,
    pub timeouts: Vec<serde_json::Value>,
    pub record_content: Option<String>,
}
