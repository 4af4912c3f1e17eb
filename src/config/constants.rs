//! Configuration constants.
//!
//! This module defines the constants used throughout the application: service
//! endpoints, retry defaults, timeouts and validation patterns.

use std::time::Duration;

// Service endpoints
/// Default base URL of the record lookup service.
pub const DEFAULT_LOOKUP_URL: &str = "https://mxtoolbox.com";
/// Path that issues short-lived bearer tokens (no authentication required).
pub const LOOKUP_TOKEN_PATH: &str = "/api/v1/user";
/// Path of the authenticated record lookup endpoint.
pub const LOOKUP_PATH: &str = "/api/v1/lookup";

/// Default base URL of the selector discovery service.
pub const DEFAULT_DISCOVERY_URL: &str = "https://easydmarc.com";
/// Path of the DKIM selector discovery page.
pub const DISCOVERY_PATH: &str = "/tools/dkim-lookup/status";

/// Label inserted between a selector and its domain when building a DKIM name.
pub const DKIM_DOMAIN_LABEL: &str = "_domainkey";

/// Information tag that marks a DKIM record as a test record.
pub const DKIM_TEST_TAG: &str = "t";

// Network operation timeouts
/// Per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default User-Agent string for HTTP requests.
///
/// The lookup service rejects requests whose profile does not look like a
/// mainstream browser, so every request carries a desktop Chrome User-Agent
/// together with [`crate::config::BROWSER_ACCEPT`] and
/// [`crate::config::BROWSER_ACCEPT_LANGUAGE`].
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

// Retry strategy
/// Maximum number of attempts per request (including the initial attempt)
pub const RETRY_MAX_ATTEMPTS: usize = 5;
/// Fixed delay between attempts
pub const RETRY_DELAY: Duration = Duration::from_secs(1);

// HTTP status codes
pub const HTTP_STATUS_UNAUTHORIZED: u16 = 401;

// Input validation
/// A dot-separated host name made of letters, digits, hyphens and underscores.
pub const DOMAIN_PATTERN: &str =
    r"^[a-z0-9_]([a-z0-9_-]{0,61}[a-z0-9_])?(\.[a-z0-9_]([a-z0-9_-]{0,61}[a-z0-9_])?)+$";
/// DKIM selectors are one or more dot-separated labels.
pub const SELECTOR_PATTERN: &str = r"^[A-Za-z0-9_-]+(\.[A-Za-z0-9_-]+)*$";

// Presentation
/// Width of each column when listing selectors
pub const SELECTOR_COLUMN_WIDTH: usize = 20;
/// Number of columns used when listing selectors
pub const SELECTOR_COLUMNS: usize = 2;
