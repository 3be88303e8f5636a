//! Shared test fakes for the transport and mount runtime.

#![allow(dead_code)]

pub mod mock_backend;

use std::path::PathBuf;

use httpdirfs::config::{ConfigFile, Settings};
use httpdirfs::mount::{MountError, MountRuntime};
use httpdirfs::transport::{Transport, TransportError};
use tempfile::TempDir;

pub fn args(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}

/// Transport that records every call and succeeds unless told otherwise.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    pub calls: Vec<(String, Settings)>,
    pub fail: bool,
}

impl RecordingTransport {
    pub fn failing() -> Self {
        Self {
            calls: Vec::new(),
            fail: true,
        }
    }
}

impl Transport for RecordingTransport {
    fn initialize(&mut self, base_url: &str, settings: &Settings) -> Result<(), TransportError> {
        self.calls.push((base_url.to_string(), settings.clone()));
        if self.fail {
            return Err(TransportError::Status {
                url: base_url.to_string(),
                status: 503,
            });
        }
        Ok(())
    }
}

/// Mount runtime that records the argv it was given.
#[derive(Debug, Default)]
pub struct RecordingRuntime {
    pub argv: Option<Vec<String>>,
    pub exit_code: i32,
}

impl MountRuntime for RecordingRuntime {
    fn run(&mut self, argv: &[String]) -> Result<i32, MountError> {
        self.argv = Some(argv.to_vec());
        Ok(self.exit_code)
    }
}

/// Write an option file into a temp dir laid out like a config home.
pub fn temp_config(content: &str) -> (TempDir, ConfigFile) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let dir = temp_dir.path().join("httpdirfs");
    std::fs::create_dir_all(&dir).expect("Failed to create config dir");
    let path: PathBuf = dir.join("config");
    std::fs::write(&path, content).expect("Failed to write config");
    (temp_dir, ConfigFile::at(path))
}
