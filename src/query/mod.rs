//! Single-endpoint GET requests with a fixed-interval retry policy.
//!
//! Every request to the lookup and discovery services goes through [`query`]:
//! - HTTP 401: fail immediately with `QueryError::Unauthorized`
//! - other 4xx/5xx: sleep `RetryPolicy::delay` and try again, up to
//!   `RetryPolicy::max_attempts` attempts in total
//! - transport failures (connect, timeout, body read): fail immediately
//! - all attempts used up: `QueryError::RetriesExhausted` with the last status

mod retry;

use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use tokio_retry::RetryIf;
use url::Url;

use crate::error_handling::QueryError;

pub use retry::RetryPolicy;
use retry::{is_retriable_status, AttemptError, HttpFailure};

/// A successful response, fully read.
#[derive(Debug, Clone)]
pub struct QueryResponse {
    /// Endpoint that produced this response
    pub endpoint: String,
    /// HTTP status code
    pub status: u16,
    /// Response body
    pub body: String,
}

impl QueryResponse {
    /// Decodes the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::Decode` naming the endpoint if the body does not
    /// match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, QueryError> {
        serde_json::from_str(&self.body).map_err(|e| QueryError::Decode {
            endpoint: self.endpoint.clone(),
            message: e.to_string(),
        })
    }
}

/// Builds `<base><path>?<params>`.
///
/// # Errors
///
/// Returns `QueryError::InvalidEndpoint` if the result is not a valid URL.
pub fn build_endpoint(base: &str, path: &str, params: &[(&str, &str)]) -> Result<Url, QueryError> {
    let raw = format!("{}{}", base.trim_end_matches('/'), path);
    let parsed = if params.is_empty() {
        Url::parse(&raw)
    } else {
        Url::parse_with_params(&raw, params)
    };
    parsed.map_err(|source| QueryError::InvalidEndpoint {
        endpoint: raw,
        source,
    })
}

/// Issues a GET to `endpoint` with `headers`, retrying per `policy`.
///
/// The client's default headers (browser profile) are sent with every
/// attempt; `headers` are added on top.
///
/// # Errors
///
/// See the module documentation for the error each failure maps to.
pub async fn query(
    client: &reqwest::Client,
    endpoint: &Url,
    headers: &HeaderMap,
    policy: &RetryPolicy,
) -> Result<QueryResponse, QueryError> {
    let mut attempts = 0usize;

    let result = RetryIf::spawn(
        policy.strategy(),
        || {
            attempts += 1;
            send_once(client, endpoint, headers, attempts)
        },
        AttemptError::is_retriable,
    )
    .await;

    match result {
        Ok(response) => Ok(response),
        Err(AttemptError::Fatal(e)) => Err(e),
        Err(AttemptError::Status(failure)) => {
            log::error!(
                "Giving up on {} after {} attempts (last status {})",
                endpoint,
                attempts,
                failure.status
            );
            Err(QueryError::RetriesExhausted {
                endpoint: endpoint.to_string(),
                attempts,
                status: failure.status,
                reason: failure.reason,
                body: failure.body,
            })
        }
    }
}

async fn send_once(
    client: &reqwest::Client,
    endpoint: &Url,
    headers: &HeaderMap,
    attempt: usize,
) -> Result<QueryResponse, AttemptError> {
    log::debug!("GET {} (attempt {})", endpoint, attempt);

    let transport = |source: reqwest::Error| {
        AttemptError::Fatal(QueryError::Transport {
            endpoint: endpoint.to_string(),
            source,
        })
    };

    let response = client
        .get(endpoint.clone())
        .headers(headers.clone())
        .send()
        .await
        .map_err(transport)?;

    let status = response.status();
    if !(status.is_client_error() || status.is_server_error()) {
        let body = response.text().await.map_err(transport)?;
        return Ok(QueryResponse {
            endpoint: endpoint.to_string(),
            status: status.as_u16(),
            body,
        });
    }

    let code = status.as_u16();
    let reason = status.canonical_reason().unwrap_or_default().to_string();
    let body = response.text().await.unwrap_or_default();

    if !is_retriable_status(code) {
        return Err(AttemptError::Fatal(QueryError::Unauthorized {
            endpoint: endpoint.to_string(),
            status: code,
            reason,
            body,
        }));
    }

    log::warn!(
        "Attempt {} to {} failed with HTTP {} {}",
        attempt,
        endpoint,
        code,
        reason
    );
    Err(AttemptError::Status(HttpFailure {
        status: code,
        reason,
        body,
    }))
}
