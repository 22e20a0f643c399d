//! Configuration key access and validation.
//!
//! Gets and sets configuration values by dotted key name (`display.mode`),
//! validating each value before it is stored.

use std::str::FromStr;
use thiserror::Error;

use super::file::ConfigFile;
use super::parser::expand_tilde;
use super::writer::path_to_string;
use crate::facade::Mode;
use crate::log::LogLevel;

/// Errors from getting or setting configuration values.
#[derive(Debug, Error)]
pub enum ConfigKeyError {
    #[error("Unknown configuration key '{0}'")]
    UnknownKey(String),

    #[error("Invalid value for {key}: {reason}")]
    ValidationFailed { key: String, reason: String },
}

/// Supported configuration keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    StoragePlacesFile,
    DisplayMode,
    LoggingFile,
    LoggingLevel,
}

impl FromStr for ConfigKey {
    type Err = ConfigKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "storage.places_file" => Ok(ConfigKey::StoragePlacesFile),
            "display.mode" => Ok(ConfigKey::DisplayMode),
            "logging.file" => Ok(ConfigKey::LoggingFile),
            "logging.level" => Ok(ConfigKey::LoggingLevel),
            _ => Err(ConfigKeyError::UnknownKey(s.to_string())),
        }
    }
}

impl ConfigKey {
    /// Canonical key name, e.g. `display.mode`.
    pub fn name(&self) -> &'static str {
        match self {
            ConfigKey::StoragePlacesFile => "storage.places_file",
            ConfigKey::DisplayMode => "display.mode",
            ConfigKey::LoggingFile => "logging.file",
            ConfigKey::LoggingLevel => "logging.level",
        }
    }

    /// Section part of the name, e.g. `display`.
    pub fn section(&self) -> &'static str {
        self.name().split('.').next().unwrap_or("")
    }

    /// Key part of the name, e.g. `mode`.
    pub fn key_name(&self) -> &'static str {
        self.name().split('.').nth(1).unwrap_or(self.name())
    }

    /// Current value as a string.
    pub fn get(&self, config: &ConfigFile) -> String {
        match self {
            ConfigKey::StoragePlacesFile => path_to_string(&config.storage.places_file),
            ConfigKey::DisplayMode => config.display.mode.to_string(),
            ConfigKey::LoggingFile => path_to_string(&config.logging.file),
            ConfigKey::LoggingLevel => config.logging.level.to_string(),
        }
    }

    /// Validates `value` and stores it in `config`.
    pub fn set(&self, config: &mut ConfigFile, value: &str) -> Result<(), ConfigKeyError> {
        self.validate(value)?;
        match self {
            ConfigKey::StoragePlacesFile => {
                config.storage.places_file = expand_tilde(value.trim());
            }
            ConfigKey::DisplayMode => {
                config.display.mode = value.parse::<Mode>().map_err(|reason| {
                    ConfigKeyError::ValidationFailed {
                        key: self.name().to_string(),
                        reason,
                    }
                })?;
            }
            ConfigKey::LoggingFile => {
                config.logging.file = expand_tilde(value.trim());
            }
            ConfigKey::LoggingLevel => {
                config.logging.level = value.parse::<LogLevel>().map_err(|reason| {
                    ConfigKeyError::ValidationFailed {
                        key: self.name().to_string(),
                        reason,
                    }
                })?;
            }
        }
        Ok(())
    }

    /// Checks `value` against the rule for this key.
    pub fn validate(&self, value: &str) -> Result<(), ConfigKeyError> {
        self.specification()
            .is_satisfied_by(value)
            .map_err(|reason| ConfigKeyError::ValidationFailed {
                key: self.name().to_string(),
                reason,
            })
    }

    fn specification(&self) -> Box<dyn ValueSpecification> {
        match self {
            ConfigKey::StoragePlacesFile | ConfigKey::LoggingFile => Box::new(PathSpec),
            ConfigKey::DisplayMode => Box::new(OneOfSpec::new(&[
                "decimal", "dec", "dms", "olc", "pluscode", "plus", "geohash", "geo",
            ])),
            ConfigKey::LoggingLevel => Box::new(OneOfSpec::new(&[
                "trace", "debug", "info", "warn", "warning", "error",
            ])),
        }
    }

    /// Every supported key, in file order.
    pub fn all() -> &'static [ConfigKey] {
        &[
            ConfigKey::StoragePlacesFile,
            ConfigKey::DisplayMode,
            ConfigKey::LoggingFile,
            ConfigKey::LoggingLevel,
        ]
    }
}

// ============================================================================
// Value Specifications
// ============================================================================

/// A rule a raw string value must satisfy.
trait ValueSpecification {
    /// `Err(reason)` when the value is rejected.
    fn is_satisfied_by(&self, value: &str) -> Result<(), String>;
}

/// Value must be one of a fixed set, case-insensitive.
struct OneOfSpec {
    options: &'static [&'static str],
}

impl OneOfSpec {
    fn new(options: &'static [&'static str]) -> Self {
        Self { options }
    }
}

impl ValueSpecification for OneOfSpec {
    fn is_satisfied_by(&self, value: &str) -> Result<(), String> {
        let lower = value.trim().to_lowercase();
        if self.options.iter().any(|opt| *opt == lower) {
            Ok(())
        } else {
            Err(format!("must be one of: {}", self.options.join(", ")))
        }
    }
}

/// Non-empty path.
struct PathSpec;

impl ValueSpecification for PathSpec {
    fn is_satisfied_by(&self, value: &str) -> Result<(), String> {
        if value.trim().is_empty() {
            Err("must be a valid path".to_string())
        } else {
            Ok(())
        }
    }
}
