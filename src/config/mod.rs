//! Persisted option file and the resolved settings record.

mod loader;
mod settings;

pub use loader::{config_path_from, tokenize, ConfigError, ConfigFile, CONFIG_DIR_NAME, CONFIG_FILE_NAME};
pub use settings::{MediaCredentials, Settings, MIB};
