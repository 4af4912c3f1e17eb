//! Utility functions.

mod selector;

pub use selector::parse_selector_unsafe;
