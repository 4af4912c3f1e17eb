//! HTTP client initialization.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use reqwest::ClientBuilder;

use crate::config::{Config, BROWSER_ACCEPT, BROWSER_ACCEPT_LANGUAGE};
use crate::error_handling::InitializationError;

/// Initializes the HTTP client shared by the lookup and discovery services.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the configuration
/// - Browser `Accept`/`Accept-Language` defaults
/// - Per-request timeout from the configuration
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .default_headers(browser_headers())
        .build()?;
    Ok(Arc::new(client))
}

fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(BROWSER_ACCEPT));
    headers.insert(
        ACCEPT_LANGUAGE,
        HeaderValue::from_static(BROWSER_ACCEPT_LANGUAGE),
    );
    headers
}
