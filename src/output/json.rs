use super::ReportFormatter;
use crate::CheckReport;

pub struct JsonFormatter {
    pretty: bool,
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }

    fn to_json<T: serde::Serialize + ?Sized>(&self, value: &T) -> String {
        if self.pretty {
            serde_json::to_string_pretty(value)
                .unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
        } else {
            serde_json::to_string(value).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
        }
    }
}

impl ReportFormatter for JsonFormatter {
    fn format_start(&self, _domain: &str) -> Option<String> {
        None
    }

    // The JSON report always carries every field; `verbose` only affects plain output.
    fn format_report(&self, report: &CheckReport, _verbose: bool) -> String {
        self.to_json(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::{evaluate_record, DkimResult, Verdict};
    use crate::domain::Domain;
    use crate::lookup::{LookupResponse, RecordType};

    fn report() -> CheckReport {
        let domain = Domain::parse("example.com").unwrap();
        CheckReport {
            domain: domain.clone(),
            dkim: DkimResult {
                domain: domain.clone(),
                verdict: Verdict::Fail,
                selectors: Vec::new(),
                failures: vec!["No DKIM selectors found for example.com.".to_string()],
                warnings: Vec::new(),
                discovered: true,
            },
            spf: evaluate_record(RecordType::Spf, &domain, LookupResponse::default()),
            dmarc: evaluate_record(RecordType::Dmarc, &domain, LookupResponse::default()),
        }
    }

    #[test]
    fn test_compact_report_is_single_line_json() {
        let output = JsonFormatter::new().compact().format_report(&report(), false);
        assert!(!output.contains('\n'));

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["domain"], "example.com");
        assert_eq!(value["dkim"]["verdict"], "FAIL");
        assert_eq!(value["spf"]["verdict"], "PASS");
        assert_eq!(value["dmarc"]["record"], "dmarc");
        assert_eq!(
            value["dkim"]["failures"][0],
            "No DKIM selectors found for example.com."
        );
    }

    #[test]
    fn test_pretty_output_matches_compact_content() {
        let pretty = JsonFormatter::new().format_report(&report(), true);
        let compact = JsonFormatter::new().compact().format_report(&report(), true);
        assert!(pretty.contains('\n'));

        let a: serde_json::Value = serde_json::from_str(&pretty).unwrap();
        let b: serde_json::Value = serde_json::from_str(&compact).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_no_start_line() {
        assert!(JsonFormatter::new().format_start("example.com").is_none());
    }
}
