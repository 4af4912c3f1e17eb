//! Report rendering.
//!
//! The checks return structured results only; everything about colors and
//! layout lives here.

mod human;
mod json;

pub use human::{column_rows, HumanFormatter};
pub use json::JsonFormatter;

use crate::config::OutputFormat;
use crate::CheckReport;

pub trait ReportFormatter {
    /// Line printed before any request is made.
    fn format_start(&self, domain: &str) -> Option<String>;
    /// The full report; `verbose` adds per-selector and per-record detail.
    fn format_report(&self, report: &CheckReport, verbose: bool) -> String;
}

pub fn get_formatter(format: OutputFormat, use_colors: bool) -> Box<dyn ReportFormatter> {
    match format {
        OutputFormat::Plain => {
            let formatter = HumanFormatter::new();
            if use_colors {
                Box::new(formatter)
            } else {
                Box::new(formatter.without_colors())
            }
        }
        OutputFormat::Json => Box::new(JsonFormatter::new()),
    }
}
