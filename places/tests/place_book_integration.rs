//! Integration tests for the place book flow.
//!
//! Covers the path a watch user takes:
//! - open a slot, edit digits in one view, commit
//! - all four views re-derived from the committed canonical value
//! - persist the book to disk and load it back
//! - pack a slot into the 32-bit location register
//!
//! Run with: `cargo test --test place_book_integration`

use std::sync::Arc;

use places::coord::CanonicalCoordinate;
use places::edit::Mode;
use places::facade::{self, Representation};
use places::log::{LogLevel, MemoryLogger, NoOpLogger};
use places::place::{PlaceBook, PlaceName};
use places::storage::{LocationRegister, PlaceFile};

// ============================================================================
// Test Helpers
// ============================================================================

const NEW_YORK: CanonicalCoordinate = CanonicalCoordinate::from_e5(4_075_000, -7_398_000);
const SYDNEY: CanonicalCoordinate = CanonicalCoordinate::from_e5(-3_386_882, 15_120_930);

/// A book with New York in slot 1 and Sydney in slot 2.
fn seeded_book() -> PlaceBook {
    let mut book = PlaceBook::new(Arc::new(NoOpLogger));
    book.set(1, NEW_YORK).unwrap();
    book.rename(1, "NYC".parse().unwrap()).unwrap();
    book.set(2, SYDNEY).unwrap();
    book.rename(2, "SYD".parse().unwrap()).unwrap();
    book
}

// ============================================================================
// Edit and commit
// ============================================================================

#[test]
fn test_decimal_edit_commits_to_every_view() {
    let mut book = seeded_book();

    let mut session = book.edit(1, Mode::Decimal).unwrap();
    assert_eq!(session.cursor(), (0, 0));
    session.next_digit();
    assert_eq!(session.cursor(), (0, 2));
    session.advance();

    let views = book.commit(1, session).unwrap();
    assert_eq!(views.canonical, CanonicalCoordinate::from_e5(5_075_000, -7_398_000));
    assert_eq!(book.get(1).unwrap().coordinate, views.canonical);

    // Every other view agrees with the committed value.
    assert_eq!(views, facade::materialize(views.canonical));
    assert_eq!(
        views.representation(Mode::Decimal).to_string(),
        "+50.75000 -73.98000"
    );
}

#[test]
fn test_olc_edit_moves_one_latitude_band() {
    let mut book = seeded_book();

    let mut session = book.edit(1, Mode::Olc).unwrap();
    assert_eq!(session.working().to_string(), "87G8Q22C+22");
    session.advance();
    assert_eq!(session.working().to_string(), "97G8Q22C+22");

    let views = book.commit(1, session).unwrap();
    assert!((views.canonical.lat_e5 - 6_075_000).abs() <= 7);
    assert!((views.canonical.lon_e5 - NEW_YORK.lon_e5).abs() <= 7);
}

#[test]
fn test_geohash_edit_wraps_through_alphabet() {
    let book = seeded_book();
    let mut session = book.edit(2, Mode::Geohash).unwrap();
    let before = *session.working();

    for _ in 0..32 {
        session.advance();
    }

    assert_eq!(*session.working(), before);
}

#[test]
fn test_discard_leaves_slot_untouched() {
    let book = seeded_book();

    let mut session = book.edit(2, Mode::Dms).unwrap();
    session.advance();
    session.advance();

    assert_eq!(session.discard(), SYDNEY);
    assert_eq!(book.get(2).unwrap().coordinate, SYDNEY);
}

#[test]
fn test_switching_mode_keeps_position() {
    let book = seeded_book();
    let mut session = book.edit(1, Mode::Decimal).unwrap();

    for mode in [Mode::Dms, Mode::Olc, Mode::Geohash, Mode::Decimal] {
        session.switch_mode(mode);
        assert_eq!(session.mode(), mode);
        assert_eq!(session.cursor().0, 0);
        let coord = facade::load(session.working());
        assert!((coord.lat_e5 - NEW_YORK.lat_e5).abs() <= 14);
        assert!((coord.lon_e5 - NEW_YORK.lon_e5).abs() <= 14);
    }
}

#[test]
fn test_commit_is_logged() {
    let logger = Arc::new(MemoryLogger::new());
    let mut book = PlaceBook::new(logger.clone());

    let session = book.edit(3, Mode::Decimal).unwrap();
    book.commit(3, session).unwrap();

    let messages = logger.messages_at_least(LogLevel::Info);
    assert!(messages.iter().any(|m| m.contains("Place 3 committed")));
}

#[test]
fn test_slot_out_of_range() {
    let mut book = seeded_book();
    assert!(book.edit(0, Mode::Decimal).is_err());
    assert!(book.set(6, NEW_YORK).is_err());
}

// ============================================================================
// Persistence
// ============================================================================

#[test]
fn test_book_survives_save_and_load() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let file = PlaceFile::new(temp_dir.path().join("watch/places.ini"), Arc::new(NoOpLogger));

    let mut book = seeded_book();
    let mut session = book.edit(2, Mode::Decimal).unwrap();
    session.advance();
    book.commit(2, session).unwrap();
    file.save(&book).unwrap();

    let loaded = file.load().unwrap();
    assert_eq!(loaded.places(), book.places());
    assert_eq!(loaded.get(1).unwrap().name.to_string(), "NYC  ");
    assert_eq!(loaded.views(2).unwrap(), book.views(2).unwrap());
    assert_eq!(
        loaded.get(2).unwrap().coordinate,
        CanonicalCoordinate::from_e5(3_386_882, 15_120_930)
    );
}

#[test]
fn test_missing_file_loads_blank_book() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let file = PlaceFile::new(temp_dir.path().join("places.ini"), Arc::new(NoOpLogger));

    let book = file.load().unwrap();
    for place in book.places() {
        assert!(place.name.is_blank());
        assert_eq!(place.coordinate, CanonicalCoordinate::default());
    }
}

// ============================================================================
// Location register
// ============================================================================

#[test]
fn test_register_round_trip_through_slot() {
    let book = seeded_book();
    let reg = LocationRegister::pack(book.get(1).unwrap().coordinate);

    assert_eq!(reg.raw(), 0xE31A_0FEB);
    assert_eq!(reg.unpack().unwrap(), NEW_YORK);
}

#[test]
fn test_register_value_edits_like_any_other_position() {
    let coord = LocationRegister::pack(SYDNEY).unpack().unwrap();
    let views = facade::commit(&Representation::from_canonical(Mode::Dms, coord));

    assert!((views.canonical.lat_e5 - coord.lat_e5).abs() <= 14);
    assert_eq!(views.dms.latitude.degrees(), 33);
}

#[test]
fn test_place_name_cycles_alphabet() {
    let mut name: PlaceName = "A".parse().unwrap();
    name.advance(0);
    assert_eq!(name.to_string(), "B    ");
}
