use reqwest::{Method, StatusCode};

pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the [`Connector`](crate::Connector).
///
/// A rejected login is not an error: `authenticate` reports it as `Ok(false)`.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An HTTP verb other than GET or POST was requested internally.
    /// Guarded before any request value is constructed.
    #[error("invalid request method {0}, only GET and POST are supported")]
    InvalidMethod(Method),

    /// Network-level failure: timeout, connection refused, DNS.
    #[error("transport error")]
    Transport(#[from] reqwest::Error),

    /// Malformed JSON in a response body.
    #[error("failed to decode response body")]
    Decode(#[source] serde_json::Error),

    /// Malformed JSON in the login response. Unrecoverable: without a parseable
    /// login body the client cannot know its authentication state.
    #[error("failed to decode authentication response, cannot determine authentication state")]
    FatalAuthDecode(#[source] serde_json::Error),

    /// The server answered with a status that rules out decoding the body.
    #[error("unexpected HTTP status {status} from {url}: {body}")]
    HttpStatus {
        status: StatusCode,
        url: String,
        body: String,
    },

    /// Missing or invalid configuration in [`Connector::from_env`](crate::Connector::from_env).
    #[error("configuration error: {0}")]
    Config(String),
}
