//! SPF and DMARC checks: one lookup, verdict from its failure list.

use crate::domain::Domain;
use crate::error_handling::QueryError;
use crate::lookup::{LookupClient, LookupResponse, RecordType};

use super::types::{RecordResult, Verdict};

/// Turns a lookup response into a record result.
///
/// PASS iff the service reported no failed checks.
pub fn evaluate_record(record: RecordType, domain: &Domain, response: LookupResponse) -> RecordResult {
    let verdict = if response.failed.is_empty() {
        Verdict::Pass
    } else {
        Verdict::Fail
    };
    let record_content = response.record_content();

    RecordResult {
        record,
        domain: domain.clone(),
        verdict,
        failures: response.failed,
        warnings: response.warnings,
        passed: response.passed,
        information: response.information,
        errors: response.errors,
        timeouts: response.timeouts,
        record_content,
    }
}

/// Looks up `record` for `domain` and evaluates it.
pub async fn check_record(
    lookup: &LookupClient,
    record: RecordType,
    domain: &Domain,
) -> Result<RecordResult, QueryError> {
    let response = lookup.lookup(record, domain.as_str()).await?;
    let result = evaluate_record(record, domain, response);
    log::info!("{} verdict for {}: {}", record.label(), domain, result.verdict);
    Ok(result)
}

pub async fn check_spf(lookup: &LookupClient, domain: &Domain) -> Result<RecordResult, QueryError> {
    check_record(lookup, RecordType::Spf, domain).await
}

pub async fn check_dmarc(
    lookup: &LookupClient,
    domain: &Domain,
) -> Result<RecordResult, QueryError> {
    check_record(lookup, RecordType::Dmarc, domain).await
}
