//! INI parsing: `Ini` → `ConfigFile`.
//!
//! The single place where INI key names map to struct fields.

use ini::Ini;
use std::path::PathBuf;

use super::file::ConfigFileError;
use super::settings::ConfigFile;

/// Parses an `Ini` into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found.
/// Unknown sections and keys are ignored.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [storage] section
    if let Some(section) = ini.section(Some("storage")) {
        if let Some(v) = section.get("places_file") {
            let v = v.trim();
            if v.is_empty() {
                tracing::warn!("storage.places_file is empty, keeping the default");
            } else {
                config.storage.places_file = expand_tilde(v);
            }
        }
    }

    // [display] section
    if let Some(section) = ini.section(Some("display")) {
        if let Some(v) = section.get("mode") {
            config.display.mode = v.parse().map_err(|_| ConfigFileError::InvalidValue {
                section: "display".to_string(),
                key: "mode".to_string(),
                value: v.to_string(),
                reason: "must be one of: decimal, dms, olc, geohash".to_string(),
            })?;
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if v.is_empty() {
                tracing::warn!("logging.file is empty, keeping the default");
            } else {
                config.logging.file = expand_tilde(v);
            }
        }
        if let Some(v) = section.get("level") {
            config.logging.level = v.parse().map_err(|_| ConfigFileError::InvalidValue {
                section: "logging".to_string(),
                key: "level".to_string(),
                value: v.to_string(),
                reason: "must be one of: trace, debug, info, warn, error".to_string(),
            })?;
        }
    }

    Ok(config)
}

/// Expands a leading `~/` to the home directory.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
