//! Error types for transport initialisation.

use thiserror::Error;

/// Errors that can occur while bringing up the HTTP transport.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The HTTP client could not be built from the settings
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The proxy URL was rejected
    #[error("invalid proxy '{proxy}': {source}")]
    Proxy {
        proxy: String,
        #[source]
        source: reqwest::Error,
    },

    /// The base URL could not be parsed
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Failed to reach the server
    #[error("request to '{url}' failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status
    #[error("'{url}' returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// No answer within the request timeout
    #[error("request to '{url}' timed out after {duration}s")]
    Timeout { url: String, duration: u64 },

    /// The media server answered but refused the ping
    #[error("media server at '{url}' rejected the ping")]
    MediaServer { url: String },

    /// The async runtime driving the client could not start
    #[error("failed to start HTTP runtime: {0}")]
    Runtime(#[source] std::io::Error),
}
