//! Error types for the crypto endpoint client.
//!
//! # Design
//! `ApiError` is flat: every failure of a single exchange is one of three
//! kinds, and each is terminal for the call that produced it. Startup problems
//! (an unusable base address, an HTTP client that cannot be built) are kept in
//! a separate `ConfigError` because they are configuration bugs rather than
//! runtime conditions.

use thiserror::Error;

/// Result of one dispatched exchange.
pub type Outcome<T> = Result<T, ApiError>;

/// Errors produced while dispatching a request to an endpoint.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No response body was obtained: the exchange failed at the transport
    /// level or the server answered with an empty body.
    #[error("no response data: {0}")]
    Transport(String),

    /// The request payload could not be serialized to JSON. Raised before any
    /// network call is attempted.
    #[error("encoding failed: {0}")]
    Encoding(#[source] serde_json::Error),

    /// The response body could not be decoded into the expected type.
    #[error("decoding failed: {0}")]
    Decoding(#[source] serde_json::Error),
}

/// Errors raised while building a `ClientConfig` or its HTTP client.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
