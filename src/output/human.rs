use colored::Colorize;

use super::ReportFormatter;
use crate::checks::{DkimResult, RecordResult, Selector, Verdict};
use crate::config::{SELECTOR_COLUMNS, SELECTOR_COLUMN_WIDTH};
use crate::lookup::LookupEntry;
use crate::CheckReport;

const INDENT: &str = "    ";
const LIST_INDENT: &str = " -  ";

/// Splits `items` into rows of `num_columns`, filling column by column.
///
/// With 5 items and 2 columns the rows are `[a, d]`, `[b, e]`, `[c]`.
pub fn column_rows(items: &[String], num_columns: usize) -> Vec<Vec<&str>> {
    let num_columns = num_columns.max(1);
    let num_rows = items.len().div_ceil(num_columns);

    (0..num_rows)
        .map(|row| {
            (0..num_columns)
                .filter_map(|col| items.get(row + col * num_rows))
                .map(String::as_str)
                .collect()
        })
        .collect()
}

pub struct HumanFormatter {
    use_colors: bool,
}

impl Default for HumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl HumanFormatter {
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    fn success(&self, text: &str) -> String {
        if self.use_colors {
            text.bright_green().to_string()
        } else {
            text.to_string()
        }
    }

    fn failure(&self, text: &str) -> String {
        if self.use_colors {
            text.bright_red().to_string()
        } else {
            text.to_string()
        }
    }

    fn warning(&self, text: &str) -> String {
        if self.use_colors {
            text.bright_yellow().to_string()
        } else {
            text.to_string()
        }
    }

    fn info(&self, text: &str) -> String {
        if self.use_colors {
            text.bright_blue().to_string()
        } else {
            text.to_string()
        }
    }

    fn selector_name(&self, text: &str) -> String {
        if self.use_colors {
            text.bright_magenta().to_string()
        } else {
            text.to_string()
        }
    }

    fn heading(&self, text: &str) -> String {
        if self.use_colors {
            text.blue().underline().to_string()
        } else {
            text.to_string()
        }
    }

    fn check_name(&self, text: &str) -> String {
        if self.use_colors {
            text.bright_cyan().to_string()
        } else {
            text.to_string()
        }
    }

    fn verdict(&self, verdict: Verdict) -> String {
        let text = verdict.to_string();
        match verdict {
            Verdict::Pass => self.success(&text),
            Verdict::Fail => self.failure(&text),
        }
    }

    fn entry_names(entries: &[LookupEntry]) -> String {
        if entries.is_empty() {
            return "none".to_string();
        }
        entries
            .iter()
            .map(|e| e.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn format_selector_list(&self, dkim: &DkimResult, lines: &mut Vec<String>) {
        if dkim.discovered {
            lines.push(format!(
                "[*] Found {} DKIM selector(s) for {}:",
                dkim.selectors.len(),
                dkim.domain
            ));
            let names: Vec<String> = dkim.selectors.iter().map(|s| s.name.clone()).collect();
            for row in column_rows(&names, SELECTOR_COLUMNS) {
                let cells: Vec<String> = row
                    .iter()
                    .map(|name| {
                        let padded = format!("{:<width$}", name, width = SELECTOR_COLUMN_WIDTH);
                        format!("{}{}", LIST_INDENT, self.selector_name(&padded))
                    })
                    .collect();
                lines.push(cells.concat().trim_end().to_string());
            }
        } else {
            let names: Vec<&str> = dkim.selectors.iter().map(|s| s.name.as_str()).collect();
            lines.push(format!(
                "[*] Using DKIM selector {}",
                self.selector_name(&names.join(", "))
            ));
        }
    }

    fn format_messages(&self, failures: &[String], warnings: &[String], lines: &mut Vec<String>) {
        for failure in failures {
            lines.push(format!("{}{} {}", INDENT, self.failure("Failure:"), failure));
        }
        for warning in warnings {
            lines.push(format!("{}{} {}", INDENT, self.warning("Warning:"), warning));
        }
    }

    fn format_checks(
        &self,
        failed: &[LookupEntry],
        warnings: &[LookupEntry],
        passed: &[LookupEntry],
        indent: &str,
        lines: &mut Vec<String>,
    ) {
        lines.push(format!(
            "{}{} {}",
            indent,
            self.failure("Failed:"),
            Self::entry_names(failed)
        ));
        lines.push(format!(
            "{}{} {}",
            indent,
            self.warning("Warnings:"),
            Self::entry_names(warnings)
        ));
        lines.push(format!("{}{}", indent, self.info("Passed:")));
        for entry in passed {
            lines.push(format!(
                "{}{}{} {}",
                indent,
                INDENT,
                self.success("*"),
                self.check_name(&entry.name)
            ));
        }
    }

    fn format_selector_detail(&self, selector: &Selector, lines: &mut Vec<String>) {
        lines.push(format!("{}{}", INDENT, self.heading(&format!("{}:", selector.name))));
        let indent = format!("{}{}", INDENT, INDENT);
        if selector.is_test {
            lines.push(format!("{}{}", indent, self.warning("Test selector")));
        }
        if let Some(record) = &selector.record_content {
            lines.push(format!("{}Record: {}", indent, record));
        }
        self.format_checks(
            &selector.failed,
            &selector.warnings,
            &selector.passed,
            &indent,
            lines,
        );
    }

    fn format_record(&self, result: &RecordResult, verbose: bool, lines: &mut Vec<String>) {
        lines.push(format!(
            "[*] {} Check: {}",
            result.record.label(),
            self.verdict(result.verdict)
        ));
        if verbose {
            if let Some(record) = &result.record_content {
                lines.push(format!("{}Record: {}", INDENT, record));
            }
            self.format_checks(
                &result.failures,
                &result.warnings,
                &result.passed,
                INDENT,
                lines,
            );
        }
    }
}

impl ReportFormatter for HumanFormatter {
    fn format_start(&self, domain: &str) -> Option<String> {
        Some(format!(
            "[*] Running DMARC, DKIM, and SPF checks for {}...",
            domain
        ))
    }

    fn format_report(&self, report: &CheckReport, verbose: bool) -> String {
        let mut lines = Vec::new();

        self.format_selector_list(&report.dkim, &mut lines);
        lines.push(format!("[*] DKIM Check: {}", self.verdict(report.dkim.verdict)));
        self.format_messages(&report.dkim.failures, &report.dkim.warnings, &mut lines);
        if verbose {
            for selector in &report.dkim.selectors {
                self.format_selector_detail(selector, &mut lines);
            }
        }

        self.format_record(&report.spf, verbose, &mut lines);
        self.format_record(&report.dmarc, verbose, &mut lines);

        lines.join("\n")
    }
}
