//! HTTP transport collaborator.
//!
//! The resolution pipeline only needs to know whether the transport came
//! up for a given base URL and settings. [`HttpTransport`] is the real
//! implementation; tests substitute their own.

pub mod error;
mod http;

pub use error::TransportError;
pub use http::{build_client, reachability_url, HttpTransport, DEFAULT_USER_AGENT, SUBSONIC_API_VERSION};

use crate::config::Settings;

/// Something that can be initialised against a remote base URL.
pub trait Transport {
    fn initialize(&mut self, base_url: &str, settings: &Settings) -> Result<(), TransportError>;
}
