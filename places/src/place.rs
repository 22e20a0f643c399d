//! Named places and the five-slot place book.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

use crate::coord::CanonicalCoordinate;
use crate::edit::{EditSession, Mode};
use crate::facade::{self, Views};
use crate::log::Logger;
use crate::{log_debug, log_info};

/// Characters a place name may use, in button-press order.
pub const NAME_ALPHABET: &[u8; 38] = b" ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789-";

/// Characters in a place name.
pub const NAME_LENGTH: usize = 5;

/// Number of slots in a place book.
pub const SLOT_COUNT: usize = 5;

/// Errors from place book operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlaceError {
    #[error("Invalid place name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("Slot {0} does not exist (slots are 1-5)")]
    SlotOutOfRange(usize),
}

/// A five-character name stored as alphabet indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PlaceName {
    chars: [u8; NAME_LENGTH],
}

impl PlaceName {
    /// Cycles the character at `position` to the next alphabet entry.
    /// Positions past the end are ignored.
    pub fn advance(&mut self, position: usize) {
        if let Some(c) = self.chars.get_mut(position) {
            *c = (*c + 1) % NAME_ALPHABET.len() as u8;
        }
    }

    /// Alphabet indices, left to right.
    pub fn indices(&self) -> [u8; NAME_LENGTH] {
        self.chars
    }

    pub fn is_blank(&self) -> bool {
        self.chars.iter().all(|&c| c == 0)
    }
}

impl fmt::Display for PlaceName {
    /// Writes all five characters, trailing blanks included.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &c in &self.chars {
            let ch = NAME_ALPHABET.get(c as usize).copied().unwrap_or(b' ');
            write!(f, "{}", ch as char)?;
        }
        Ok(())
    }
}

impl FromStr for PlaceName {
    type Err = PlaceError;

    /// Accepts up to five characters, case-insensitive, padding with blanks.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| PlaceError::InvalidName {
            name: s.to_string(),
            reason: reason.to_string(),
        };
        if s.chars().count() > NAME_LENGTH {
            return Err(invalid("at most five characters"));
        }
        let mut chars = [0u8; NAME_LENGTH];
        for (slot, c) in chars.iter_mut().zip(s.chars()) {
            let upper = c.to_ascii_uppercase();
            *slot = NAME_ALPHABET
                .iter()
                .position(|&a| a as char == upper)
                .ok_or_else(|| invalid("only A-Z, 0-9, '-' and space are allowed"))?
                as u8;
        }
        Ok(Self { chars })
    }
}

impl Serialize for PlaceName {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.to_string().trim_end())
    }
}

impl<'de> Deserialize<'de> for PlaceName {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// One slot of the book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Place {
    pub name: PlaceName,
    pub coordinate: CanonicalCoordinate,
}

impl Place {
    pub fn new(name: PlaceName, coordinate: CanonicalCoordinate) -> Self {
        Self { name, coordinate }
    }

    pub fn views(&self) -> Views {
        facade::materialize(self.coordinate)
    }
}

/// Five places, addressed by slot number 1 to 5.
///
/// Only canonical coordinates are stored. Views are re-derived on demand.
pub struct PlaceBook {
    places: [Place; SLOT_COUNT],
    logger: Arc<dyn Logger>,
}

impl fmt::Debug for PlaceBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaceBook")
            .field("places", &self.places)
            .finish_non_exhaustive()
    }
}

impl PlaceBook {
    /// An empty book: blank names at (0, 0).
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self::with_places([Place::default(); SLOT_COUNT], logger)
    }

    pub fn with_places(places: [Place; SLOT_COUNT], logger: Arc<dyn Logger>) -> Self {
        Self { places, logger }
    }

    pub fn places(&self) -> &[Place; SLOT_COUNT] {
        &self.places
    }

    /// Place in `slot` (1-based).
    pub fn get(&self, slot: usize) -> Result<&Place, PlaceError> {
        let index = slot_index(slot)?;
        Ok(&self.places[index])
    }

    /// Stores a coordinate directly, bypassing the edit cursor.
    pub fn set(&mut self, slot: usize, coordinate: CanonicalCoordinate) -> Result<(), PlaceError> {
        let index = slot_index(slot)?;
        self.places[index].coordinate = coordinate;
        log_info!(self.logger, "Place {} set to {}", slot, coordinate);
        Ok(())
    }

    pub fn rename(&mut self, slot: usize, name: PlaceName) -> Result<(), PlaceError> {
        let index = slot_index(slot)?;
        log_info!(
            self.logger,
            "Place {} renamed from '{}' to '{}'",
            slot,
            self.places[index].name.to_string().trim_end(),
            name.to_string().trim_end()
        );
        self.places[index].name = name;
        Ok(())
    }

    /// Opens the slot's coordinate for editing in `mode`.
    pub fn edit(&self, slot: usize, mode: Mode) -> Result<EditSession, PlaceError> {
        let place = self.get(slot)?;
        log_debug!(self.logger, "Editing place {} in {} mode", slot, mode);
        Ok(EditSession::new(place.coordinate, mode))
    }

    /// Commits an edit into `slot` and returns the re-derived views.
    pub fn commit(&mut self, slot: usize, session: EditSession) -> Result<Views, PlaceError> {
        let index = slot_index(slot)?;
        let mode = session.mode();
        let views = session.commit();
        let before = self.places[index].coordinate;
        self.places[index].coordinate = views.canonical;
        log_info!(
            self.logger,
            "Place {} committed from {} mode: {} -> {}",
            slot,
            mode,
            before,
            views.canonical
        );
        Ok(views)
    }

    /// All four views of the slot's coordinate.
    pub fn views(&self, slot: usize) -> Result<Views, PlaceError> {
        Ok(self.get(slot)?.views())
    }
}

fn slot_index(slot: usize) -> Result<usize, PlaceError> {
    if (1..=SLOT_COUNT).contains(&slot) {
        Ok(slot - 1)
    } else {
        Err(PlaceError::SlotOutOfRange(slot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::NoOpLogger;

    fn book() -> PlaceBook {
        PlaceBook::new(Arc::new(NoOpLogger))
    }

    #[test]
    fn test_name_parse_and_display() {
        let name: PlaceName = "home".parse().unwrap();
        assert_eq!(name.to_string(), "HOME ");
        assert_eq!(name.indices(), [8, 15, 13, 5, 0]);

        let name: PlaceName = "NYC-1".parse().unwrap();
        assert_eq!(name.to_string(), "NYC-1");
    }

    #[test]
    fn test_name_rejects_bad_input() {
        assert!("TOOLONG".parse::<PlaceName>().is_err());
        assert!("a_b".parse::<PlaceName>().is_err());
        assert!("café".parse::<PlaceName>().is_err());
    }

    #[test]
    fn test_name_advance_wraps() {
        let mut name: PlaceName = "9".parse().unwrap();
        name.advance(0);
        assert_eq!(name.to_string(), "-    ");
        name.advance(0);
        assert!(name.is_blank());
        name.advance(7);
        assert!(name.is_blank());
    }

    #[test]
    fn test_name_json() {
        let name: PlaceName = "work".parse().unwrap();
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"WORK\"");
        let back: PlaceName = serde_json::from_str("\"WORK\"").unwrap();
        assert_eq!(back, name);
    }

    #[test]
    fn test_new_book_is_blank() {
        let book = book();
        for place in book.places() {
            assert!(place.name.is_blank());
            assert_eq!(place.coordinate, CanonicalCoordinate::default());
        }
    }

    #[test]
    fn test_slot_bounds() {
        let mut book = book();
        assert_eq!(book.get(0).unwrap_err(), PlaceError::SlotOutOfRange(0));
        assert!(book.get(6).is_err());
        assert!(book.set(6, CanonicalCoordinate::default()).is_err());
        assert!(book.get(5).is_ok());
    }

    #[test]
    fn test_edit_and_commit() {
        let mut book = book();
        book.set(2, CanonicalCoordinate::from_e5(4_075_000, -7_398_000)).unwrap();

        let mut session = book.edit(2, Mode::Decimal).unwrap();
        session.advance(); // latitude sign
        let views = book.commit(2, session).unwrap();

        let expected = CanonicalCoordinate::from_e5(-4_075_000, -7_398_000);
        assert_eq!(views.canonical, expected);
        assert_eq!(book.get(2).unwrap().coordinate, expected);
        assert_eq!(book.views(2).unwrap(), views);
    }

    #[test]
    fn test_commit_from_olc_stores_cell_centre() {
        let mut book = book();
        book.set(1, CanonicalCoordinate::from_e5(4_075_000, -7_398_000)).unwrap();
        let session = book.edit(1, Mode::Olc).unwrap();
        book.commit(1, session).unwrap();
        assert_eq!(
            book.get(1).unwrap().coordinate,
            CanonicalCoordinate::from_e5(4_075_006, -7_397_994)
        );
    }

    #[test]
    fn test_rename() {
        let mut book = book();
        book.rename(3, "PARIS".parse().unwrap()).unwrap();
        assert_eq!(book.get(3).unwrap().name.to_string(), "PARIS");
    }
}
