//! Settings structs for each configuration section.
//!
//! Each struct is one `[section]` of `config.ini`. Parsing lives in
//! [`super::parser`] and serialization in [`super::writer`].

use std::path::PathBuf;

use crate::facade::Mode;
use crate::log::LogLevel;

/// Complete configuration loaded from config.ini.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    pub storage: StorageSettings,
    pub display: DisplaySettings,
    pub logging: LoggingSettings,
}

/// Where the place book lives.
#[derive(Debug, Clone, PartialEq)]
pub struct StorageSettings {
    /// Place book INI file
    pub places_file: PathBuf,
}

/// How positions are shown.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplaySettings {
    /// View used by `place show` and as the default edit mode
    pub mode: Mode,
}

/// Logging output.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingSettings {
    /// Log file path
    pub file: PathBuf,
    /// Minimum level written
    pub level: LogLevel,
}
