//! Error types for the catalog client.
//!
//! These never cross the public operations in [`search`](crate::SaavnClient::search)
//! and friends, which log and degrade to an empty result; they are surfaced
//! by [`SaavnClient::request`](crate::SaavnClient::request) for callers that
//! need the raw envelope.

use thiserror::Error;

/// Errors that can occur when talking to the catalog endpoint.
#[derive(Debug, Error)]
pub enum SaavnError {
    /// HTTP transport error (connection refused, timeout, TLS failure, etc.).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The catalog answered with a non-2xx status.
    #[error("catalog returned HTTP {0}")]
    Status(reqwest::StatusCode),

    /// The response body was not JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for `Result<T, SaavnError>`.
pub type Result<T> = std::result::Result<T, SaavnError>;
