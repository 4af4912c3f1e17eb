//! HTTP header name and value constants.
//!
//! Header values sent to the lookup and discovery services. Together with
//! [`crate::config::DEFAULT_USER_AGENT`] the browser values make requests look
//! like they come from a mainstream browser.

/// Header carrying the short-lived token issued by the lookup service
pub const HEADER_TEMP_AUTHORIZATION: &str = "Tempauthorization";

/// JSON field holding the token in the token endpoint's response
pub const FIELD_TEMP_AUTH_KEY: &str = "TempAuthKey";

/// Accept header value of a desktop Chrome navigation request
pub const BROWSER_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,application/json;q=0.9,*/*;q=0.8";
/// Accept-Language header value of a desktop Chrome navigation request
pub const BROWSER_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";
