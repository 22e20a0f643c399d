//! Fixed-width digit codecs over the canonical coordinate.
//!
//! Each submodule owns one view of a position:
//!
//! - [`decimal`]: signed decimal degrees as eight BCD digits per axis
//! - [`dms`]: degrees, minutes and whole seconds per axis
//! - [`olc`]: ten-digit Open Location Code for the pair
//! - [`geohash`]: ten-character Geohash for the pair
//!
//! All functions here are pure and total over their input types. They hold
//! no state, so they are safe to call from any thread.

pub mod decimal;
pub mod dms;
pub mod geohash;
pub mod olc;

pub use decimal::DecimalDigits;
pub use dms::DmsDigits;
pub use geohash::{GeohashDigits, GEOHASH_ALPHABET};
pub use olc::{OlcDigits, OLC_ALPHABET};
