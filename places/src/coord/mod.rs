//! Canonical coordinate model
//!
//! Every position is held as a pair of signed integers scaled by 100 000
//! (1e-5°, roughly 1.1 m). The decimal, DMS, Plus Code and Geohash views in
//! [`crate::codec`] are all derived from, and folded back into, this form.

mod types;

pub use types::{
    Axis, CanonicalCoordinate, CoordError, LatLon, E5_PER_DEGREE, MAX_LAT_E5, MAX_LON_E5,
    MIN_LAT_E5, MIN_LON_E5,
};

#[cfg(test)]
mod tests;
