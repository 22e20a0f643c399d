//! Places - geographic coordinates for a five-slot wristwatch place book
//!
//! Every position is held as one canonical pair of signed integers in
//! units of 1e-5 degree. Four digit-level views are derived from it:
//!
//! - [`codec::decimal`]: signed decimal degrees, `+DDD.ddddd`
//! - [`codec::dms`]: degrees, minutes and whole seconds
//! - [`codec::olc`]: 10-digit Open Location Code (Plus Code)
//! - [`codec::geohash`]: 10-character geohash
//!
//! The [`facade`] keeps all views consistent with the canonical value,
//! [`edit`] implements the watch's digit-by-digit editor, and [`place`]
//! holds the named slots that [`storage`] persists.
//!
//! # Example
//!
//! ```
//! use places::coord::CanonicalCoordinate;
//! use places::facade::{self, Mode};
//!
//! let views = facade::materialize(CanonicalCoordinate::from_e5(4_075_000, -7_398_000));
//! assert_eq!(views.olc.to_string(), "87G8Q22C+22");
//! assert_eq!(views.representation(Mode::Decimal).to_string(), "+40.75000 -73.98000");
//! ```

pub mod codec;
pub mod config;
pub mod coord;
pub mod edit;
pub mod facade;
pub mod log;
pub mod logging;
pub mod place;
pub mod storage;

/// Version of the places library and CLI, from `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
