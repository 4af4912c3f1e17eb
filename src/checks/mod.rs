//! DKIM, SPF and DMARC checks.
//!
//! Each check queries the lookup service and turns its findings into a
//! [`Verdict`]. The checks do not validate records themselves; they only
//! aggregate the service's results.

mod dkim;
mod record;
mod types;

pub use dkim::{check_dkim, evaluate_selectors, Evaluation};
pub use record::{check_dmarc, check_record, check_spf, evaluate_record};
pub use types::{DkimResult, RecordResult, Selector, Verdict};
