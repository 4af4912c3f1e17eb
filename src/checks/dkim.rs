//! DKIM check: per-selector lookups aggregated into one domain verdict.

use crate::discovery::{Discovery, DiscoveryClient};
use crate::domain::{selector_dns_name, Domain, SelectorSpec};
use crate::error_handling::CheckError;
use crate::lookup::{LookupClient, RecordType};

use super::types::{DkimResult, Selector, Verdict};

/// Verdict and messages derived from a set of evaluated selectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub verdict: Verdict,
    pub failures: Vec<String>,
    pub warnings: Vec<String>,
}

/// Aggregates selector results into the domain-level DKIM verdict.
///
/// - No selectors at all: FAIL with a single "no selectors" failure.
/// - The first invalid non-test selector (in order) fails the domain and is
///   the only one named in `failures`; otherwise PASS.
/// - Whatever the verdict, each invalid test selector, each selector carrying
///   lookup warnings, and an all-test selector set add a warning.
pub fn evaluate_selectors(domain: &Domain, selectors: &[Selector]) -> Evaluation {
    if selectors.is_empty() {
        return Evaluation {
            verdict: Verdict::Fail,
            failures: vec![format!("No DKIM selectors found for {}.", domain)],
            warnings: Vec::new(),
        };
    }

    let mut failures = Vec::new();
    let mut warnings = Vec::new();

    let verdict = match selectors.iter().find(|s| !s.is_test && !s.valid) {
        Some(failing) => {
            failures.push(format!("Selector {} failed lookup checks.", failing.name));
            Verdict::Fail
        }
        None => Verdict::Pass,
    };

    for selector in selectors.iter().filter(|s| s.is_test && !s.valid) {
        warnings.push(format!(
            "Test selector {} failed lookup checks.",
            selector.name
        ));
    }

    for selector in selectors.iter().filter(|s| !s.warnings.is_empty()) {
        let names: Vec<&str> = selector.warnings.iter().map(|w| w.name.as_str()).collect();
        warnings.push(format!(
            "Selector {} has warnings: {}",
            selector.name,
            names.join(", ")
        ));
    }

    if selectors.iter().all(|s| s.is_test) {
        warnings.push(format!(
            "All selectors are test selectors for {}. Please add a non-test selector to your domain.",
            domain
        ));
    }

    Evaluation {
        verdict,
        failures,
        warnings,
    }
}

/// Runs the DKIM check for `domain`.
///
/// Selectors come from `spec`, or from `discovery` for
/// `SelectorSpec::Discover`. Each selector is looked up in order; any lookup
/// or discovery error aborts the check. When discovery finds no selectors,
/// no lookups are made and the verdict is FAIL.
pub async fn check_dkim(
    lookup: &LookupClient,
    discovery: &DiscoveryClient,
    domain: &Domain,
    spec: &SelectorSpec,
) -> Result<DkimResult, CheckError> {
    let (names, discovered) = match spec {
        SelectorSpec::Explicit(names) => (names.clone(), false),
        SelectorSpec::Discover => match discovery.discover(domain).await? {
            Discovery::Found(names) => (names, true),
            Discovery::NoSelectors => (Vec::new(), true),
        },
    };

    let mut selectors = Vec::with_capacity(names.len());
    for name in &names {
        let dns_name = selector_dns_name(name, domain);
        let response = lookup.lookup(RecordType::Dkim, &dns_name).await?;
        selectors.push(Selector::from_lookup(name, domain, response));
    }

    let evaluation = evaluate_selectors(domain, &selectors);
    log::info!(
        "DKIM verdict for {}: {} ({} selector(s), {} failure(s), {} warning(s))",
        domain,
        evaluation.verdict,
        selectors.len(),
        evaluation.failures.len(),
        evaluation.warnings.len()
    );

    Ok(DkimResult {
        domain: domain.clone(),
        verdict: evaluation.verdict,
        selectors,
        failures: evaluation.failures,
        warnings: evaluation.warnings,
        discovered,
    })
}
