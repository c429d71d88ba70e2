//! Error types for x-client.

use thiserror::Error;

/// Errors raised while signing a request.
#[derive(Debug, Error)]
pub enum OAuthError {
    /// The request URL could not be parsed.
    #[error("invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The HMAC key was rejected.
    #[error("invalid signing key")]
    InvalidKey,
}
