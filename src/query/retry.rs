//! Retry policy and error retriability.

use std::time::Duration;

use tokio_retry::strategy::FixedInterval;

use crate::config::{Config, HTTP_STATUS_UNAUTHORIZED, RETRY_DELAY, RETRY_MAX_ATTEMPTS};
use crate::error_handling::QueryError;

/// How often a request is attempted and how long to wait in between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of attempts (including the initial attempt).
    pub max_attempts: usize,
    /// Fixed delay between two attempts.
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: RETRY_MAX_ATTEMPTS,
            delay: RETRY_DELAY,
        }
    }
}

impl RetryPolicy {
    /// Creates a policy; at least one attempt is always made.
    pub fn new(max_attempts: usize, delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            delay,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.retry_attempts, config.retry_delay)
    }

    /// Delays slept between attempts, ready for use with `tokio_retry::RetryIf`.
    ///
    /// Yields `max_attempts - 1` delays: the first attempt is not preceded by
    /// a sleep and nothing is slept after the last one.
    pub fn strategy(&self) -> impl Iterator<Item = Duration> {
        FixedInterval::new(self.delay).take(self.max_attempts.saturating_sub(1))
    }
}

/// An HTTP error status observed on one attempt.
#[derive(Debug, Clone)]
pub(crate) struct HttpFailure {
    pub status: u16,
    pub reason: String,
    pub body: String,
}

/// Outcome of a failed attempt.
#[derive(Debug)]
pub(crate) enum AttemptError {
    /// An HTTP error status other than 401; worth another attempt.
    Status(HttpFailure),
    /// Anything else; ends the request immediately.
    Fatal(QueryError),
}

impl AttemptError {
    pub(crate) fn is_retriable(&self) -> bool {
        matches!(self, AttemptError::Status(_))
    }
}

/// Whether an HTTP error status is retried. Only 401 is not.
pub(crate) fn is_retriable_status(status: u16) -> bool {
    status != HTTP_STATUS_UNAUTHORIZED
}
