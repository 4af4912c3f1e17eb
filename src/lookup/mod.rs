//! Client for the third-party record lookup service.
//!
//! Every lookup is two requests: an unauthenticated request for a short-lived
//! token, then the record lookup carrying that token in the
//! `Tempauthorization` header. Both go through [`crate::query::query`] and
//! share its retry policy.

mod types;

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::config::{
    FIELD_TEMP_AUTH_KEY, HEADER_TEMP_AUTHORIZATION, LOOKUP_PATH, LOOKUP_TOKEN_PATH,
};
use crate::error_handling::QueryError;
use crate::query::{build_endpoint, query, RetryPolicy};

pub use types::{InformationEntry, LookupEntry, LookupResponse, RecordType};
use types::TempAuth;

/// Lookup service client.
#[derive(Debug, Clone)]
pub struct LookupClient {
    client: Arc<reqwest::Client>,
    base_url: String,
    policy: RetryPolicy,
}

impl LookupClient {
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

    /// Requests a fresh short-lived token.
    ///
    /// # Errors
    ///
    /// Propagates query errors; a body without a token is `QueryError::Decode`.
    pub async fn temp_auth_key(&self) -> Result<String, QueryError> {
        let endpoint = build_endpoint(&self.base_url, LOOKUP_TOKEN_PATH, &[])?;
        let response = query(&self.client, &endpoint, &HeaderMap::new(), &self.policy).await?;

        let auth: TempAuth = response.json()?;
        match auth.temp_auth_key {
            Some(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(QueryError::Decode {
                endpoint: response.endpoint,
                message: format!("missing {}", FIELD_TEMP_AUTH_KEY),
            }),
        }
    }

    /// Looks up one record, fetching a new token first.
    ///
    /// `argument` is the DNS name for DKIM (`<selector>._domainkey.<domain>`)
    /// and the bare domain for SPF and DMARC.
    pub async fn lookup(
        &self,
        record: RecordType,
        argument: &str,
    ) -> Result<LookupResponse, QueryError> {
        let key = self.temp_auth_key().await?;

        let endpoint = build_endpoint(
            &self.base_url,
            LOOKUP_PATH,
            &[
                ("command", record.as_ref()),
                ("argument", argument),
                ("resultIndex", "1"),
                ("disableRhsbl", "true"),
                ("format", "0"),
            ],
        )?;

        let headers = token_headers(&key).map_err(|message| QueryError::Decode {
            endpoint: endpoint.to_string(),
            message,
        })?;

        log::debug!("Looking up {} record for {}", record.label(), argument);
        let response = query(&self.client, &endpoint, &headers, &self.policy).await?;
        let decoded: LookupResponse = response.json()?;
        log::info!(
            "{} lookup for {}: {} failed, {} warnings, {} passed",
            record.label(),
            argument,
            decoded.failed.len(),
            decoded.warnings.len(),
            decoded.passed.len()
        );
        Ok(decoded)
    }
}

fn token_headers(key: &str) -> Result<HeaderMap, String> {
    let name = HeaderName::from_bytes(HEADER_TEMP_AUTHORIZATION.as_bytes())
        .map_err(|e| format!("invalid header name {}: {}", HEADER_TEMP_AUTHORIZATION, e))?;
    let value = HeaderValue::from_str(key)
        .map_err(|e| format!("unusable {}: {}", FIELD_TEMP_AUTH_KEY, e))?;

    let mut headers = HeaderMap::new();
    headers.insert(name, value);
    Ok(headers)
}
