//! Automatic DKIM selector discovery.
//!
//! Fetches the discovery service's DKIM lookup page for a domain and reads the
//! selector names from it. Three outcomes are distinguished:
//! - selectors found: [`Discovery::Found`]
//! - the page says the domain has none: [`Discovery::NoSelectors`]
//! - the page is not recognized: `DiscoveryError::UnrecognizedResponse`

mod parse;

use std::sync::Arc;

use reqwest::header::HeaderMap;

use crate::config::DISCOVERY_PATH;
use crate::domain::Domain;
use crate::error_handling::DiscoveryError;
use crate::query::{build_endpoint, query, RetryPolicy};

pub use parse::{parse_discovery_page, NO_SELECTORS_MARKER};

/// Result of a successful discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Discovery {
    /// Selector names in page order.
    Found(Vec<String>),
    /// The service reports that the domain publishes no selectors.
    NoSelectors,
}

/// Discovery service client.
#[derive(Debug, Clone)]
pub struct DiscoveryClient {
    client: Arc<reqwest::Client>,
    base_url: String,
    policy: RetryPolicy,
}

impl DiscoveryClient {
    pub fn new(
        client: Arc<reqwest::Client>,
        base_url: impl Into<String>,
        policy: RetryPolicy,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            policy,
        }
    }

    /// Finds the DKIM selectors published for `domain`.
    ///
    /// # Errors
    ///
    /// - `DiscoveryError::Query` if the page cannot be fetched
    /// - `DiscoveryError::UnrecognizedResponse` if the page cannot be read
    pub async fn discover(&self, domain: &Domain) -> Result<Discovery, DiscoveryError> {
        let endpoint = build_endpoint(
            &self.base_url,
            DISCOVERY_PATH,
            &[("domain", domain.as_str()), ("selector", "auto")],
        )?;

        let response = query(&self.client, &endpoint, &HeaderMap::new(), &self.policy).await?;

        match parse_discovery_page(&response.body) {
            Some(Discovery::NoSelectors) => {
                log::info!("No DKIM selectors discovered for {}", domain);
                Ok(Discovery::NoSelectors)
            }
            Some(Discovery::Found(names)) => {
                log::info!(
                    "Discovered {} DKIM selector(s) for {}: {}",
                    names.len(),
                    domain,
                    names.join(", ")
                );
                Ok(Discovery::Found(names))
            }
            None => {
                log::error!(
                    "Unrecognized discovery page for {} ({} bytes)",
                    domain,
                    response.body.len()
                );
                Err(DiscoveryError::UnrecognizedResponse {
                    domain: domain.to_string(),
                })
            }
        }
    }
}
