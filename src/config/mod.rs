//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (endpoints, timeouts, retry policy)
//! - HTTP header name constants
//! - CLI option types and parsing

mod cli;
mod constants;
mod headers;
mod types;

// Re-export all constants
pub use cli::Opt;
pub use constants::*;
pub use headers::*;
pub use types::{Config, LogFormat, LogLevel, OutputFormat};
