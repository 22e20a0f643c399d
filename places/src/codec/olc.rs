//! Open Location Code (Plus Code) at full ten-digit precision.
//!
//! The code is five latitude/longitude digit pairs in base 20. The first
//! pair addresses 20° cells, each following pair divides the cell by 20 on
//! both axes, so the finest cell is 1/8000° (0.000125°) on each side.
//! Arithmetic runs in integer micro-degrees measured from the south-west
//! corner (−90°, −180°), the same unit the public reference uses.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::coord::{CanonicalCoordinate, CoordError, MAX_LAT_E5, MAX_LON_E5};

/// Public OLC character set; digit value `n` renders as the `n`th character.
pub const OLC_ALPHABET: &[u8; 20] = b"23456789CFGHJMPQRVWX";

/// Separator written after the eighth character.
pub const SEPARATOR: char = '+';

/// Number of digits in a full code.
pub const CODE_LENGTH: usize = 10;

const SEPARATOR_POSITION: usize = 8;
const BASE: i64 = 20;

/// Micro-degrees per canonical unit.
const MICRO_PER_E5: i64 = 10;

/// Side of the finest cell in micro-degrees.
const FINEST_CELL_MICRO: i64 = 125;

/// Place value of the first digit pair in micro-degrees (20°).
const FIRST_PLACE_MICRO: i64 = 20_000_000;

const LAT_SPAN_MICRO: i64 = 2 * MAX_LAT_E5 as i64 * MICRO_PER_E5;
const LON_SPAN_MICRO: i64 = 2 * MAX_LON_E5 as i64 * MICRO_PER_E5;

/// Largest legal value of the first latitude digit (80°..90° band).
pub const MAX_LAT1: u8 = 8;
/// Largest legal value of the first longitude digit (160°..180° band).
pub const MAX_LON1: u8 = 17;

/// Ten base-20 digits in code order: `lat1, lon1, lat2, lon2, … lat5, lon5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct OlcDigits {
    pub digits: [u8; CODE_LENGTH],
}

impl OlcDigits {
    pub fn new(digits: [u8; CODE_LENGTH]) -> Self {
        Self { digits }
    }

    /// Latitude digit of pair `pair` (0 = most significant).
    pub fn lat(&self, pair: usize) -> u8 {
        self.digits[2 * pair]
    }

    /// Longitude digit of pair `pair` (0 = most significant).
    pub fn lon(&self, pair: usize) -> u8 {
        self.digits[2 * pair + 1]
    }

    /// True when every digit is base 20 and the leading pair stays on the globe.
    pub fn is_valid(&self) -> bool {
        self.digits.iter().all(|&d| d < BASE as u8)
            && self.digits[0] <= MAX_LAT1
            && self.digits[1] <= MAX_LON1
    }
}

/// Encodes a canonical position into a ten-digit code.
///
/// Latitude 90° is clipped into the northernmost cell and longitude 180°
/// wraps to −180°, so every in-range input produces a valid code.
pub fn encode(lat_e5: i32, lon_e5: i32) -> OlcDigits {
    let mut lat = ((lat_e5 as i64 + MAX_LAT_E5 as i64) * MICRO_PER_E5).clamp(0, LAT_SPAN_MICRO - 1);
    let mut lon = ((lon_e5 as i64 + MAX_LON_E5 as i64) * MICRO_PER_E5).rem_euclid(LON_SPAN_MICRO);

    // Peel digits from the least significant end: the longitude digit of a
    // pair comes first, then the two accumulators swap and the one just used
    // is divided by the base.
    let mut digits = [0u8; CODE_LENGTH];
    for slot in digits.iter_mut().rev() {
        *slot = ((lon / FINEST_CELL_MICRO) % BASE) as u8;
        let used = lon;
        lon = lat;
        lat = used / BASE;
    }
    OlcDigits { digits }
}

/// Decodes a code to the centre of its cell, rounded to the canonical scale.
pub fn decode(code: &OlcDigits) -> CanonicalCoordinate {
    let mut lat: i64 = 0;
    let mut lon: i64 = 0;
    let mut place = FIRST_PLACE_MICRO;
    for pair in code.digits.chunks_exact(2) {
        lat += pair[0] as i64 * place;
        lon += pair[1] as i64 * place;
        place /= BASE;
    }
    CanonicalCoordinate::from_e5(
        (cell_centre_e5(lat) - MAX_LAT_E5 as i64) as i32,
        (cell_centre_e5(lon) - MAX_LON_E5 as i64) as i32,
    )
}

/// Centre of the finest cell whose corner is `corner` micro-degrees,
/// converted to canonical units and rounded half up.
fn cell_centre_e5(corner: i64) -> i64 {
    (2 * corner + FINEST_CELL_MICRO + MICRO_PER_E5) / (2 * MICRO_PER_E5)
}

impl fmt::Display for OlcDigits {
    /// Renders as `87G8Q22C+22`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &d) in self.digits.iter().enumerate() {
            if i == SEPARATOR_POSITION {
                write!(f, "{}", SEPARATOR)?;
            }
            let c = OLC_ALPHABET.get(d as usize).copied().unwrap_or(b'?');
            write!(f, "{}", c as char)?;
        }
        Ok(())
    }
}

impl FromStr for OlcDigits {
    type Err = CoordError;

    /// Parses a full ten-digit code. Case is ignored and the separator is
    /// optional, but when present it must sit after the eighth character.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let body: String = match text.find(SEPARATOR) {
            Some(SEPARATOR_POSITION) => text.replacen(SEPARATOR, "", 1),
            Some(_) => {
                return Err(CoordError::invalid_code(
                    "OLC",
                    s,
                    "separator must follow the eighth character",
                ))
            }
            None => text.to_string(),
        };

        if body.chars().count() != CODE_LENGTH {
            return Err(CoordError::invalid_code(
                "OLC",
                s,
                format!("expected {} code characters", CODE_LENGTH),
            ));
        }

        let mut digits = [0u8; CODE_LENGTH];
        for (slot, c) in digits.iter_mut().zip(body.chars()) {
            let upper = c.to_ascii_uppercase();
            *slot = OLC_ALPHABET
                .iter()
                .position(|&a| a as char == upper)
                .ok_or_else(|| {
                    CoordError::invalid_code("OLC", s, format!("'{}' is not a code character", c))
                })? as u8;
        }

        let code = OlcDigits { digits };
        if !code.is_valid() {
            return Err(CoordError::invalid_code(
                "OLC",
                s,
                "leading pair is outside the globe",
            ));
        }
        Ok(code)
    }
}
