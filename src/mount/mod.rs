//! Mount runtime collaborator.
//!
//! The mount runtime receives the pass-through argument vector unchanged
//! and blocks until the filesystem is unmounted. [`CommandRuntime`] runs
//! it as a separate program.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Command;

use thiserror::Error;

/// Environment variable overriding the mount runtime program.
pub const RUNTIME_ENV: &str = "HTTPDIRFS_MOUNT_RUNTIME";
/// Program used when [`RUNTIME_ENV`] is not set.
pub const DEFAULT_RUNTIME: &str = "httpdirfs-mount";

/// Errors that can occur when handing off to the mount runtime.
#[derive(Debug, Error)]
pub enum MountError {
    #[error("failed to start mount runtime '{program}': {source}")]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Something that mounts the filesystem given a FUSE-style argv.
pub trait MountRuntime {
    /// Run until unmounted; returns the runtime's exit code.
    fn run(&mut self, argv: &[String]) -> Result<i32, MountError>;
}

/// Runs the mount runtime as a child process.
///
/// `argv[0]` is passed as the child's program name, the rest as its
/// arguments.
#[derive(Debug, Clone)]
pub struct CommandRuntime {
    program: PathBuf,
}

impl CommandRuntime {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Use `$HTTPDIRFS_MOUNT_RUNTIME`, falling back to [`DEFAULT_RUNTIME`].
    pub fn from_env() -> Self {
        let program = std::env::var_os(RUNTIME_ENV)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| OsString::from(DEFAULT_RUNTIME));
        Self::new(program)
    }
}

impl MountRuntime for CommandRuntime {
    fn run(&mut self, argv: &[String]) -> Result<i32, MountError> {
        let mut cmd = Command::new(&self.program);
        if let Some((program_name, rest)) = argv.split_first() {
            set_program_name(&mut cmd, program_name);
            cmd.args(rest);
        }

        tracing::debug!(program = %self.program.display(), ?argv, "starting mount runtime");
        let status = cmd.status().map_err(|source| MountError::Spawn {
            program: self.program.clone(),
            source,
        })?;

        // Killed by a signal: report a generic failure.
        let code = status.code().unwrap_or(1);
        tracing::debug!(code, "mount runtime exited");
        Ok(code)
    }
}

#[cfg(unix)]
fn set_program_name(cmd: &mut Command, name: &str) {
    use std::os::unix::process::CommandExt;
    cmd.arg0(name);
}

#[cfg(not(unix))]
fn set_program_name(_cmd: &mut Command, _name: &str) {}
