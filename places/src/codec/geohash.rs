//! Ten-character Geohash by interleaved interval bisection.
//!
//! Both axes are bisected 25 times, longitude first, giving 50 bits packed
//! five to a character. The intervals are kept in exact fixed point: each
//! canonical offset from the south-west corner is scaled by 2^25, so every
//! midpoint along the way is an integer and no float rounding can move a
//! point across a cell edge.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::coord::{CanonicalCoordinate, CoordError, MAX_LAT_E5, MAX_LON_E5, MIN_LAT_E5, MIN_LON_E5};

/// Standard Geohash base-32 alphabet (no `a`, `i`, `l`, `o`).
pub const GEOHASH_ALPHABET: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

/// Number of characters in a full hash.
pub const HASH_LENGTH: usize = 10;

const BITS_PER_CHAR: usize = 5;
const BITS_PER_AXIS: u32 = (HASH_LENGTH * BITS_PER_CHAR / 2) as u32;

/// Half-open search interval in fixed point.
#[derive(Debug, Clone, Copy)]
struct Interval {
    low: u64,
    high: u64,
}

impl Interval {
    /// Full interval for an axis spanning `span_e5` canonical units.
    fn full(span_e5: i32) -> Self {
        Self {
            low: 0,
            high: (span_e5 as u64) << BITS_PER_AXIS,
        }
    }

    fn mid(&self) -> u64 {
        self.low + (self.high - self.low) / 2
    }

    /// Narrows to the upper half for bit 1, the lower half for bit 0.
    fn narrow(&mut self, bit: bool) {
        let mid = self.mid();
        if bit {
            self.low = mid;
        } else {
            self.high = mid;
        }
    }

    /// Midpoint rounded back to whole canonical units.
    fn centre_e5(&self) -> i32 {
        ((self.mid() + (1 << (BITS_PER_AXIS - 1))) >> BITS_PER_AXIS) as i32
    }
}

/// Ten base-32 values, most significant first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GeohashDigits {
    pub digits: [u8; HASH_LENGTH],
}

impl GeohashDigits {
    pub fn new(digits: [u8; HASH_LENGTH]) -> Self {
        Self { digits }
    }

    pub fn is_valid(&self) -> bool {
        self.digits.iter().all(|&d| d < 32)
    }

    /// Bits in transmission order, longitude bit first.
    fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        self.digits.iter().flat_map(|&d| {
            (0..BITS_PER_CHAR)
                .rev()
                .map(move |shift| (d >> shift) & 1 == 1)
        })
    }
}

/// Encodes a canonical position. Out-of-range input is clamped to the globe.
pub fn encode(lat_e5: i32, lon_e5: i32) -> GeohashDigits {
    let lat = (lat_e5.clamp(MIN_LAT_E5, MAX_LAT_E5) - MIN_LAT_E5) as u64;
    let lon = (lon_e5.clamp(MIN_LON_E5, MAX_LON_E5) - MIN_LON_E5) as u64;
    let targets = [lon << BITS_PER_AXIS, lat << BITS_PER_AXIS];
    let mut intervals = [
        Interval::full(MAX_LON_E5 - MIN_LON_E5),
        Interval::full(MAX_LAT_E5 - MIN_LAT_E5),
    ];

    let mut digits = [0u8; HASH_LENGTH];
    for (n, slot) in digits.iter_mut().enumerate() {
        for b in 0..BITS_PER_CHAR {
            let axis = (n * BITS_PER_CHAR + b) % 2;
            let bit = targets[axis] >= intervals[axis].mid();
            intervals[axis].narrow(bit);
            *slot = (*slot << 1) | bit as u8;
        }
    }
    GeohashDigits { digits }
}

/// Decodes a hash to the midpoint of its final interval.
pub fn decode(hash: &GeohashDigits) -> CanonicalCoordinate {
    let mut intervals = [
        Interval::full(MAX_LON_E5 - MIN_LON_E5),
        Interval::full(MAX_LAT_E5 - MIN_LAT_E5),
    ];
    for (i, bit) in hash.bits().enumerate() {
        intervals[i % 2].narrow(bit);
    }
    CanonicalCoordinate::from_e5(
        intervals[1].centre_e5() + MIN_LAT_E5,
        intervals[0].centre_e5() + MIN_LON_E5,
    )
}

impl fmt::Display for GeohashDigits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &d in &self.digits {
            let c = GEOHASH_ALPHABET.get(d as usize).copied().unwrap_or(b'?');
            write!(f, "{}", c as char)?;
        }
        Ok(())
    }
}

impl FromStr for GeohashDigits {
    type Err = CoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.chars().count() != HASH_LENGTH {
            return Err(CoordError::invalid_code(
                "geohash",
                s,
                format!("expected {} characters", HASH_LENGTH),
            ));
        }
        let mut digits = [0u8; HASH_LENGTH];
        for (slot, c) in digits.iter_mut().zip(text.chars()) {
            let lower = c.to_ascii_lowercase();
            *slot = GEOHASH_ALPHABET
                .iter()
                .position(|&a| a as char == lower)
                .ok_or_else(|| {
                    CoordError::invalid_code(
                        "geohash",
                        s,
                        format!("'{}' is not a geohash character", c),
                    )
                })? as u8;
        }
        Ok(GeohashDigits { digits })
    }
}
