//! Error type definitions.
//!
//! This module defines all error types used throughout the application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Invalid arguments, rejected before any network call is made.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The domain was empty or whitespace.
    #[error("Domain cannot be empty.")]
    EmptyDomain,

    /// The domain is not a host name.
    #[error("Invalid domain name: '{0}'")]
    InvalidDomain(String),

    /// An explicit selector list with no entries.
    #[error("Selector list cannot be empty.")]
    EmptySelectorList,

    /// A selector name that cannot be part of a DNS name.
    #[error("Invalid DKIM selector: '{0}'")]
    InvalidSelector(String),
}

/// Error types for requests to the lookup and discovery services.
#[derive(Error, Debug)]
pub enum QueryError {
    /// The endpoint could not be turned into a URL.
    #[error("Invalid endpoint {endpoint}: {source}")]
    InvalidEndpoint {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },

    /// The service answered 401; never retried.
    #[error("Unauthorized access to {endpoint}. Please check your credentials. - {status} - {reason} - {body}")]
    Unauthorized {
        endpoint: String,
        status: u16,
        reason: String,
        body: String,
    },

    /// Every attempt ended in a non-success HTTP status.
    #[error("Failed to query {endpoint} after {attempts} attempts. Last HTTP status code: {status} - {reason} - {body}")]
    RetriesExhausted {
        endpoint: String,
        attempts: usize,
        status: u16,
        reason: String,
        body: String,
    },

    /// A failure below HTTP (connection, timeout, body read); never retried.
    #[error("Failed to query {endpoint} with error: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: ReqwestError,
    },

    /// The response body did not have the expected shape.
    #[error("Unexpected response from {endpoint}: {message}")]
    Decode { endpoint: String, message: String },
}

impl QueryError {
    /// HTTP status attached to the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            QueryError::Unauthorized { status, .. } | QueryError::RetriesExhausted { status, .. } => {
                Some(*status)
            }
            QueryError::Transport { source, .. } => source.status().map(|s| s.as_u16()),
            QueryError::InvalidEndpoint { .. } | QueryError::Decode { .. } => None,
        }
    }
}

/// Error types for automatic selector discovery.
///
/// A page that reports "no selectors" is not an error; it is a normal
/// outcome that fails the DKIM check.
#[derive(Error, Debug)]
pub enum DiscoveryError {
    /// The discovery page could not be fetched.
    #[error("Selector discovery request failed: {0}")]
    Query(#[from] QueryError),

    /// The page neither listed selectors nor reported that none exist.
    #[error("Failed to find selectors in the discovery response for {domain}.")]
    UnrecognizedResponse { domain: String },
}

/// Any error that aborts a check run.
#[derive(Error, Debug)]
pub enum CheckError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Initialization(#[from] InitializationError),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Discovery(#[from] DiscoveryError),
}
