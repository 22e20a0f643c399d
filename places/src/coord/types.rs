//! Coordinate type definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Canonical fixed-point scale: degrees are stored as `degrees × 100 000`.
pub const E5_PER_DEGREE: i32 = 100_000;

/// Valid latitude range in canonical units (±90°)
pub const MIN_LAT_E5: i32 = -9_000_000;
pub const MAX_LAT_E5: i32 = 9_000_000;

/// Valid longitude range in canonical units (±180°)
pub const MIN_LON_E5: i32 = -18_000_000;
pub const MAX_LON_E5: i32 = 18_000_000;

/// Which half of a coordinate pair a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    /// Largest magnitude allowed on this axis, in canonical units.
    #[inline]
    pub const fn limit_e5(self) -> i32 {
        match self {
            Axis::Latitude => MAX_LAT_E5,
            Axis::Longitude => MAX_LON_E5,
        }
    }

    /// Largest magnitude allowed on this axis, in whole degrees.
    #[inline]
    pub const fn limit_degrees(self) -> u32 {
        match self {
            Axis::Latitude => 90,
            Axis::Longitude => 180,
        }
    }

    /// Hemisphere letter for a value on this axis.
    pub const fn hemisphere(self, negative: bool) -> char {
        match (self, negative) {
            (Axis::Latitude, false) => 'N',
            (Axis::Latitude, true) => 'S',
            (Axis::Longitude, false) => 'E',
            (Axis::Longitude, true) => 'W',
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Latitude => write!(f, "latitude"),
            Axis::Longitude => write!(f, "longitude"),
        }
    }
}

/// A latitude/longitude pair of any per-axis view.
///
/// The decimal and DMS views are per-axis structs, so a full position is a
/// `LatLon<DecimalDigits>` or `LatLon<DmsDigits>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct LatLon<T> {
    pub latitude: T,
    pub longitude: T,
}

impl<T> LatLon<T> {
    pub fn new(latitude: T, longitude: T) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns the value stored for `axis`.
    pub fn get(&self, axis: Axis) -> &T {
        match axis {
            Axis::Latitude => &self.latitude,
            Axis::Longitude => &self.longitude,
        }
    }

    /// Returns a mutable reference to the value stored for `axis`.
    pub fn get_mut(&mut self, axis: Axis) -> &mut T {
        match axis {
            Axis::Latitude => &mut self.latitude,
            Axis::Longitude => &mut self.longitude,
        }
    }

    /// Applies `f` to both axes, passing the axis along.
    pub fn map<U>(self, mut f: impl FnMut(Axis, T) -> U) -> LatLon<U> {
        LatLon {
            latitude: f(Axis::Latitude, self.latitude),
            longitude: f(Axis::Longitude, self.longitude),
        }
    }
}

/// The single source of truth for a position.
///
/// Both values are degrees scaled by [`E5_PER_DEGREE`], giving a resolution of
/// 1e-5° (about 1.1 m). All other representations are derived from this one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CanonicalCoordinate {
    /// Latitude × 100 000, in `[-9 000 000, 9 000 000]`
    pub lat_e5: i32,
    /// Longitude × 100 000, in `[-18 000 000, 18 000 000]`
    pub lon_e5: i32,
}

impl CanonicalCoordinate {
    /// Creates a coordinate after checking both ranges.
    pub fn new(lat_e5: i32, lon_e5: i32) -> Result<Self, CoordError> {
        if !(MIN_LAT_E5..=MAX_LAT_E5).contains(&lat_e5) {
            return Err(CoordError::InvalidLatitude(lat_e5));
        }
        if !(MIN_LON_E5..=MAX_LON_E5).contains(&lon_e5) {
            return Err(CoordError::InvalidLongitude(lon_e5));
        }
        Ok(Self { lat_e5, lon_e5 })
    }

    /// Creates a coordinate without range checks.
    ///
    /// The codec works on values the editing layer has already kept in range.
    #[inline]
    pub const fn from_e5(lat_e5: i32, lon_e5: i32) -> Self {
        Self { lat_e5, lon_e5 }
    }

    /// Converts floating-point degrees, rounding to the nearest 1e-5°.
    pub fn from_degrees(lat: f64, lon: f64) -> Result<Self, CoordError> {
        if !lat.is_finite() || lat.abs() > 90.0 {
            return Err(CoordError::LatitudeOutOfRange(lat));
        }
        if !lon.is_finite() || lon.abs() > 180.0 {
            return Err(CoordError::LongitudeOutOfRange(lon));
        }
        let lat_e5 = (lat * E5_PER_DEGREE as f64).round() as i32;
        let lon_e5 = (lon * E5_PER_DEGREE as f64).round() as i32;
        Self::new(lat_e5, lon_e5)
    }

    /// Latitude in floating-point degrees.
    pub fn latitude(&self) -> f64 {
        self.lat_e5 as f64 / E5_PER_DEGREE as f64
    }

    /// Longitude in floating-point degrees.
    pub fn longitude(&self) -> f64 {
        self.lon_e5 as f64 / E5_PER_DEGREE as f64
    }

    /// Canonical value for one axis.
    pub fn axis(&self, axis: Axis) -> i32 {
        match axis {
            Axis::Latitude => self.lat_e5,
            Axis::Longitude => self.lon_e5,
        }
    }

    /// Splits into per-axis canonical integers.
    pub fn split(self) -> LatLon<i32> {
        LatLon::new(self.lat_e5, self.lon_e5)
    }

    /// True when both values are inside their axis ranges.
    pub fn is_valid(&self) -> bool {
        Self::new(self.lat_e5, self.lon_e5).is_ok()
    }
}

impl From<LatLon<i32>> for CanonicalCoordinate {
    fn from(pair: LatLon<i32>) -> Self {
        Self::from_e5(pair.latitude, pair.longitude)
    }
}

impl fmt::Display for CanonicalCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5}, {:.5}", self.latitude(), self.longitude())
    }
}

/// Errors raised at the fallible edges of the codec (construction and text parsing).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordError {
    /// Canonical latitude outside ±9 000 000
    #[error("Invalid latitude: {0} (must be between -9000000 and 9000000 e5 units)")]
    InvalidLatitude(i32),
    /// Canonical longitude outside ±18 000 000
    #[error("Invalid longitude: {0} (must be between -18000000 and 18000000 e5 units)")]
    InvalidLongitude(i32),
    /// Floating-point latitude outside ±90° or not finite
    #[error("Invalid latitude: {0} (must be between -90 and 90)")]
    LatitudeOutOfRange(f64),
    /// Floating-point longitude outside ±180° or not finite
    #[error("Invalid longitude: {0} (must be between -180 and 180)")]
    LongitudeOutOfRange(f64),
    /// A textual code could not be parsed
    #[error("Invalid {kind} code '{code}': {reason}")]
    InvalidCode {
        kind: &'static str,
        code: String,
        reason: String,
    },
}

impl CoordError {
    pub(crate) fn invalid_code(kind: &'static str, code: &str, reason: impl Into<String>) -> Self {
        Self::InvalidCode {
            kind,
            code: code.to_string(),
            reason: reason.into(),
        }
    }
}
