//! Transport error type for record store requests.

use thiserror::Error;

/// Any failed record store request.
///
/// Status codes are deliberately not discriminated: a 404 on `get` and a 500
/// on `create` both surface as [`TransportError::Status`].
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network failure, or the response body could not be decoded.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The store answered with a non-success HTTP status.
    #[error("HTTP {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The outgoing payload could not be serialized.
    #[error("payload encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}
