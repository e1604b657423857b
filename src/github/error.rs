// src/github/error.rs
// =============================================================================
// This module defines the error type for all GitHub API operations.
//
// Why an enum instead of anyhow everywhere?
// - Callers need to tell failure kinds apart (404 vs network vs bad JSON)
// - anyhow::Error is great at the binary boundary but erases the kind
// - thiserror gives us a proper std::error::Error impl with zero boilerplate
//
// The variants map one-to-one onto the ways a fetch can go wrong:
// - InvalidUrl: we could not even build the request URL
// - Network: the request never completed (DNS, connection, timeout)
// - Unauthorized / NotFound: the two status codes GitHub uses meaningfully
// - Status: any other non-200, carrying the body as diagnostic text
// - EmptyBody: a 200 with nothing to decode
// - Decode: the payload did not match the shape we expected
//
// Rust concepts:
// - thiserror derive: Generates Display and Error impls from attributes
// - #[from]: Generates From impls so the ? operator converts automatically
// =============================================================================

use thiserror::Error;

// Every failure a fetch operation can report
//
// None of these are retried - each one is terminal for the operation
// that hit it. The caller decides what to do next.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request URL could not be constructed from the input
    #[error("invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The request never got a response (connection, DNS, timeout, TLS)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// GitHub answered 401 - requests without a token hit this on private data
    #[error("unauthorized (HTTP 401)")]
    Unauthorized,

    /// GitHub answered 404 - the user or repository does not exist
    #[error("not found (HTTP 404)")]
    NotFound,

    /// Any other non-200 status, with the response body for diagnostics
    #[error("unexpected HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// A 200 response with an empty body - nothing to decode
    #[error("empty response body")]
    EmptyBody,

    /// The body was not valid JSON for the expected shape
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// Helper to check for the "repository/user does not exist" case
    ///
    /// The CLI uses this to pick exit code 1 instead of 2.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_not_found() {
        assert!(FetchError::NotFound.is_not_found());
        assert!(!FetchError::Unauthorized.is_not_found());
        assert!(!FetchError::EmptyBody.is_not_found());
    }

    #[test]
    fn test_status_error_keeps_body() {
        let err = FetchError::Status {
            status: 500,
            body: "server on fire".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("500"));
        assert!(message.contains("server on fire"));
    }
}
