//! Top-level resolution errors and how they are shown to the user.

use std::io::{self, Write};

use thiserror::Error;

use crate::args::help::{usage_hint, usage_line};
use crate::args::UsageError;
use crate::config::ConfigError;
use crate::mount::MountError;
use crate::transport::TransportError;

/// Exit status for every fatal resolution error.
pub const EXIT_FAILURE: i32 = 1;

/// Errors that stop the program before or during hand-off.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Bad invocation (unknown option, missing value, no arguments)
    #[error(transparent)]
    Usage(#[from] UsageError),

    /// Base URL without an http:// or https:// scheme
    #[error("Please supply a valid URL.")]
    InvalidUrl { url: String },

    /// Only one of the media-server credentials was given
    #[error("You have to supply both username and password to activate Sonic mode.")]
    MediaCredentials,

    /// The transport reported failure
    #[error("Network initialisation failed: {0}")]
    Initialization(#[from] TransportError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Mount(#[from] MountError),
}

impl ResolveError {
    pub fn exit_code(&self) -> i32 {
        EXIT_FAILURE
    }

    /// Write the user-facing message for this error.
    pub fn report(&self, program: &str, out: &mut dyn Write) -> io::Result<()> {
        match self {
            ResolveError::Usage(UsageError::NoArguments) => {
                writeln!(out, "{}", usage_line(program))?;
                writeln!(out, "For more information, run \"{program} --help.\"")
            }
            ResolveError::Usage(e) => {
                writeln!(out, "{program}: {e}")?;
                writeln!(out, "{}", usage_hint(program))
            }
            ResolveError::InvalidUrl { .. } => {
                writeln!(out, "Error: {self}")?;
                writeln!(out, "{}", usage_line(program))
            }
            _ => writeln!(out, "Error: {self}"),
        }
    }
}
