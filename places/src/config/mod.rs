//! User configuration stored in `~/.places/config.ini`.
//!
//! - [`settings`]: one struct per INI section
//! - [`defaults`]: default values and well-known paths
//! - [`file`]: loading and saving
//! - [`keys`]: get/set by dotted key name with validation
//!
//! # Example
//!
//! ```
//! use places::config::{ConfigFile, ConfigKey};
//!
//! let mut config = ConfigFile::default();
//! let key: ConfigKey = "display.mode".parse().unwrap();
//! key.set(&mut config, "olc").unwrap();
//! assert_eq!(key.get(&config), "olc");
//! ```

mod defaults;
mod file;
mod keys;
mod parser;
mod settings;
mod writer;

pub use defaults::{
    config_directory, config_file_path, default_log_file, default_places_file, CONFIG_FILE_NAME,
    DEFAULT_DISPLAY_MODE, DEFAULT_LOG_LEVEL,
};
pub use file::ConfigFileError;
pub use keys::{ConfigKey, ConfigKeyError};
pub use settings::{ConfigFile, DisplaySettings, LoggingSettings, StorageSettings};
