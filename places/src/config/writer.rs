//! INI serialization: `ConfigFile` → commented INI string.

use std::path::Path;

use super::settings::ConfigFile;

/// Renders the config with comments describing each key.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    format!(
        r#"[storage]
; Place book file (five named slots, canonical coordinates only)
places_file = {}

[display]
; View used by 'places place show' and as the default edit mode:
;   decimal - signed decimal degrees (+40.75000 -73.98000)
;   dms     - degrees, minutes, seconds (40°45'00"N 73°58'48"W)
;   olc     - Open Location Code / Plus Code (87G8Q22C+22)
;   geohash - 10-character geohash (dr5rud33vn)
mode = {}

[logging]
; Log file, cleared at the start of each run
file = {}
; Minimum level: trace, debug, info, warn, error (RUST_LOG overrides)
level = {}
"#,
        path_to_string(&config.storage.places_file),
        config.display.mode,
        path_to_string(&config.logging.file),
        config.logging.level,
    )
}

/// Path as a string, with the home directory collapsed to `~`.
pub(super) fn path_to_string(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facade::Mode;
    use crate::log::LogLevel;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.ini");

        let mut config = ConfigFile::default();
        config.storage.places_file = PathBuf::from("/data/places.ini");
        config.display.mode = Mode::Geohash;
        config.logging.level = LogLevel::Warn;
        config.save_to(&config_path).unwrap();

        let loaded = ConfigFile::load_from(&config_path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_output_is_commented() {
        let content = to_config_string(&ConfigFile::default());
        assert!(content.contains("[storage]"));
        assert!(content.contains("mode = decimal"));
        assert!(content.contains("level = info"));
        assert!(content.contains("; Minimum level"));
    }

    #[test]
    fn test_home_paths_are_collapsed() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(path_to_string(&home.join(".places/places.ini")), "~/.places/places.ini");
        }
        assert_eq!(path_to_string(Path::new("/tmp/x.ini")), "/tmp/x.ini");
    }
}
