//! Place book persistence as an INI file.
//!
//! ```ini
//! [place1]
//! name = HOME
//! latitude = 4075000
//! longitude = -7398000
//! ```
//!
//! Only canonical coordinates are written; every other view is re-derived
//! on load. Missing sections leave their slot blank.

use ini::Ini;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::StorageError;
use crate::coord::CanonicalCoordinate;
use crate::log::Logger;
use crate::place::{Place, PlaceBook, PlaceName, SLOT_COUNT};
use crate::{log_debug, log_info};

/// Reads and writes a place book at a fixed path.
pub struct PlaceFile {
    path: PathBuf,
    logger: Arc<dyn Logger>,
}

impl PlaceFile {
    pub fn new(path: impl Into<PathBuf>, logger: Arc<dyn Logger>) -> Self {
        Self {
            path: path.into(),
            logger,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the book. A missing file yields an empty book.
    pub fn load(&self) -> Result<PlaceBook, StorageError> {
        if !self.path.exists() {
            log_debug!(
                self.logger,
                "No place file at {}, starting with an empty book",
                self.path.display()
            );
            return Ok(PlaceBook::new(Arc::clone(&self.logger)));
        }

        let ini = Ini::load_from_file(&self.path)?;
        let places = parse_places(&ini)?;
        log_info!(self.logger, "Loaded places from {}", self.path.display());
        Ok(PlaceBook::with_places(places, Arc::clone(&self.logger)))
    }

    /// Writes every slot, creating the parent directory if needed.
    pub fn save(&self, book: &PlaceBook) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(StorageError::DirectoryError)?;
            }
        }
        to_ini(book.places())
            .write_to_file(&self.path)
            .map_err(StorageError::WriteError)?;
        log_info!(self.logger, "Saved places to {}", self.path.display());
        Ok(())
    }
}

fn section_name(slot: usize) -> String {
    format!("place{}", slot)
}

fn parse_places(ini: &Ini) -> Result<[Place; SLOT_COUNT], StorageError> {
    let mut places = [Place::default(); SLOT_COUNT];
    for (index, place) in places.iter_mut().enumerate() {
        let name = section_name(index + 1);
        let Some(section) = ini.section(Some(name.as_str())) else {
            continue;
        };

        if let Some(v) = section.get("name") {
            place.name = v.parse::<PlaceName>().map_err(|e| StorageError::InvalidEntry {
                section: name.clone(),
                key: "name".to_string(),
                value: v.to_string(),
                reason: e.to_string(),
            })?;
        }

        let lat = parse_e5(&name, "latitude", section.get("latitude"))?;
        let lon = parse_e5(&name, "longitude", section.get("longitude"))?;
        place.coordinate = CanonicalCoordinate::new(lat, lon).map_err(|e| {
            StorageError::InvalidEntry {
                section: name.clone(),
                key: "latitude/longitude".to_string(),
                value: format!("{}, {}", lat, lon),
                reason: e.to_string(),
            }
        })?;
    }
    Ok(places)
}

fn parse_e5(section: &str, key: &str, value: Option<&str>) -> Result<i32, StorageError> {
    match value {
        None => Ok(0),
        Some(v) => v.trim().parse().map_err(|_| StorageError::InvalidEntry {
            section: section.to_string(),
            key: key.to_string(),
            value: v.to_string(),
            reason: "expected an integer in 1e-5 degree units".to_string(),
        }),
    }
}

fn to_ini(places: &[Place; SLOT_COUNT]) -> Ini {
    let mut ini = Ini::new();
    for (index, place) in places.iter().enumerate() {
        ini.with_section(Some(section_name(index + 1)))
            .set("name", place.name.to_string().trim())
            .set("latitude", place.coordinate.lat_e5.to_string())
            .set("longitude", place.coordinate.lon_e5.to_string());
    }
    ini
}
