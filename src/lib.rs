//! httpdirfs: mount an HTTP directory listing as a local filesystem.
//!
//! This crate resolves the program's configuration: it merges the option
//! file with the command line, decides what the HTTP transport needs and
//! what is forwarded to the mount runtime, then hands off to both.

pub mod args;
pub mod config;
pub mod error;
pub mod logging;
pub mod mount;
pub mod transport;

pub use error::{ResolveError, EXIT_FAILURE};
