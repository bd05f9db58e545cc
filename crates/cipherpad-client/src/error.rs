//! Client error taxonomy.
//!
//! Transport-class failures (connection, HTTP status, undecodable body) are
//! kept distinct from service-reported failures so callers can surface the
//! service's own message verbatim for bad keys, IVs, or tampered ciphertext.

use thiserror::Error;

/// Errors returned by [`crate::RemoteCryptoClient`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network-level failure: service unreachable, request could not be sent,
    /// or the body could not be read.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Service replied with a non-success HTTP status and no structured error.
    #[error("service returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code.
        status: reqwest::StatusCode,
        /// Raw response body, possibly empty.
        body: String,
    },

    /// Success status but the body was not the expected JSON shape.
    #[error("malformed response: {0}")]
    Malformed(String),

    /// The service explicitly reported an encrypt/hash failure.
    #[error("{0}")]
    Service(String),

    /// The service explicitly reported a decrypt failure (wrong key, wrong
    /// IV, or corrupt ciphertext). Message is service-supplied.
    #[error("{0}")]
    Decrypt(String),

    /// The configured base URL could not be joined with an endpoint path.
    #[error("invalid endpoint url: {0}")]
    Url(#[from] url::ParseError),
}
