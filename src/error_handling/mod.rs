//! Error handling.
//!
//! Errors are grouped by layer:
//! - **Validation**: bad arguments, rejected before any request is sent
//! - **Query**: transport and authorization failures from the lookup services
//! - **Discovery**: selector discovery failures
//! - **Initialization**: logger and HTTP client setup
//!
//! `CheckError` wraps all of them for the orchestrator. Any error aborts the
//! whole run; there is no partial report.

mod types;

// Re-export public API
pub use types::{CheckError, DiscoveryError, InitializationError, QueryError, ValidationError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_message_names_endpoint_status_and_body() {
        let err = QueryError::Unauthorized {
            endpoint: "https://lookup.test/api/v1/user".to_string(),
            status: 401,
            reason: "Unauthorized".to_string(),
            body: "denied".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("https://lookup.test/api/v1/user"));
        assert!(msg.contains("401"));
        assert!(msg.contains("denied"));
        assert_eq!(err.status(), Some(401));
    }

    #[test]
    fn test_retries_exhausted_message() {
        let err = QueryError::RetriesExhausted {
            endpoint: "https://lookup.test/api/v1/lookup".to_string(),
            attempts: 5,
            status: 503,
            reason: "Service Unavailable".to_string(),
            body: "busy".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to query https://lookup.test/api/v1/lookup after 5 attempts. \
             Last HTTP status code: 503 - Service Unavailable - busy"
        );
        assert_eq!(err.status(), Some(503));
    }

    #[test]
    fn test_decode_error_has_no_status() {
        let err = QueryError::Decode {
            endpoint: "https://lookup.test".to_string(),
            message: "missing TempAuthKey".to_string(),
        };
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_check_error_is_transparent() {
        let err = CheckError::from(ValidationError::EmptySelectorList);
        assert_eq!(err.to_string(), "Selector list cannot be empty.");

        let err = CheckError::from(DiscoveryError::UnrecognizedResponse {
            domain: "example.com".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "Failed to find selectors in the discovery response for example.com."
        );
    }
}
