use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

use crate::args::ArgVec;

/// Directory under the config home holding our files.
pub const CONFIG_DIR_NAME: &str = "httpdirfs";
/// Name of the option file inside [`CONFIG_DIR_NAME`].
pub const CONFIG_FILE_NAME: &str = "config";

/// Errors that can occur when loading the option file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Resolve the option file path.
///
/// Uses `<config_home>/httpdirfs/config` when a config home is given,
/// otherwise `<home>/.config/httpdirfs/config`. Returns `None` when
/// neither is known.
pub fn config_path_from(config_home: Option<PathBuf>, home: Option<PathBuf>) -> Option<PathBuf> {
    let base = config_home.or_else(|| home.map(|h| h.join(".config")))?;
    Some(base.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Append the tokens of an option file's `content` to `argv`.
///
/// Only lines starting with `-` count; everything else is a comment.
/// A line is split at its first space into flag and value, with the line
/// terminator removed beforehand. Returns the number of tokens added.
pub fn tokenize(content: &str, argv: &mut ArgVec) -> usize {
    let before = argv.len();
    for line in content.lines().filter(|l| l.starts_with('-')) {
        match line.split_once(' ') {
            Some((flag, value)) => {
                argv.append(flag);
                argv.append(value);
            }
            None => argv.append(line),
        }
    }
    argv.len() - before
}

/// The persisted option file, which may or may not exist.
#[derive(Debug, Clone, Default)]
pub struct ConfigFile {
    path: Option<PathBuf>,
}

impl ConfigFile {
    /// Locate the option file from `XDG_CONFIG_HOME` and the home directory.
    pub fn locate() -> Self {
        let config_home = std::env::var_os("XDG_CONFIG_HOME")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        Self {
            path: config_path_from(config_home, dirs::home_dir()),
        }
    }

    /// Use an explicit path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// No option file at all.
    pub fn none() -> Self {
        Self { path: None }
    }

    /// Append the file's tokens to `argv`.
    ///
    /// A missing file contributes nothing. An existing file that cannot
    /// be read is an error.
    pub fn load_into(&self, argv: &mut ArgVec) -> Result<usize, ConfigError> {
        let Some(path) = &self.path else {
            tracing::debug!("no config location available");
            return Ok(0);
        };

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file");
                return Ok(0);
            }
            Err(e) => {
                return Err(ConfigError::ReadError {
                    path: path.clone(),
                    source: e,
                })
            }
        };

        let added = tokenize(&content, argv);
        tracing::debug!(path = %path.display(), tokens = added, "loaded config file");
        Ok(added)
    }
}
