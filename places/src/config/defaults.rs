//! Default values and the `ConfigFile::default()` implementation.

use std::path::PathBuf;

use super::settings::*;
use crate::facade::Mode;
use crate::log::LogLevel;

/// Directory under the home directory holding all `places` files.
pub const CONFIG_DIR_NAME: &str = ".places";

/// Config file name inside [`CONFIG_DIR_NAME`].
pub const CONFIG_FILE_NAME: &str = "config.ini";

/// Default place book file name.
pub const DEFAULT_PLACES_FILE_NAME: &str = "places.ini";

/// Default log file name.
pub const DEFAULT_LOG_FILE_NAME: &str = "places.log";

pub const DEFAULT_DISPLAY_MODE: Mode = Mode::Decimal;

pub const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

/// `~/.places`, or `./.places` when no home directory is known.
pub fn config_directory() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
}

/// `~/.places/config.ini`
pub fn config_file_path() -> PathBuf {
    config_directory().join(CONFIG_FILE_NAME)
}

pub fn default_places_file() -> PathBuf {
    config_directory().join(DEFAULT_PLACES_FILE_NAME)
}

pub fn default_log_file() -> PathBuf {
    config_directory().join(DEFAULT_LOG_FILE_NAME)
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            storage: StorageSettings {
                places_file: default_places_file(),
            },
            display: DisplaySettings {
                mode: DEFAULT_DISPLAY_MODE,
            },
            logging: LoggingSettings {
                file: default_log_file(),
                level: DEFAULT_LOG_LEVEL,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths_share_config_directory() {
        let dir = config_directory();
        assert!(dir.ends_with(".places"));
        assert_eq!(config_file_path(), dir.join("config.ini"));
        assert_eq!(default_places_file(), dir.join("places.ini"));
        assert_eq!(default_log_file(), dir.join("places.log"));
    }

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default();
        assert_eq!(config.display.mode, Mode::Decimal);
        assert_eq!(config.logging.level, LogLevel::Info);
        assert_eq!(config.storage.places_file, default_places_file());
    }
}
