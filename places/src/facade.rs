//! Coordinate facade: one canonical position, four views.
//!
//! Callers hold one working [`Representation`] while editing. On commit,
//! [`load`] turns it into a [`CanonicalCoordinate`] and [`materialize`]
//! re-derives every view from that single value, so all four always
//! describe the same position.
//!
//! ```
//! use places::facade::{self, Mode};
//! use places::coord::CanonicalCoordinate;
//!
//! let views = facade::materialize(CanonicalCoordinate::from_e5(4_075_000, -7_398_000));
//! assert_eq!(views.olc.to_string(), "87G8Q22C+22");
//! assert_eq!(views.geohash.to_string(), "dr5rud33vn");
//!
//! let working = views.representation(Mode::Dms);
//! assert_eq!(working.mode(), Mode::Dms);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::codec::{decimal, dms, geohash, olc};
use crate::codec::{DecimalDigits, DmsDigits, GeohashDigits, OlcDigits};
use crate::coord::{Axis, CanonicalCoordinate, LatLon};

/// Which view the user is looking at or editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Decimal,
    Dms,
    Olc,
    Geohash,
}

impl Mode {
    /// All modes in display-cycle order.
    pub const ALL: [Mode; 4] = [Mode::Decimal, Mode::Dms, Mode::Olc, Mode::Geohash];

    /// Mode shown after this one when the display cycles.
    pub fn next(self) -> Mode {
        match self {
            Mode::Decimal => Mode::Dms,
            Mode::Dms => Mode::Olc,
            Mode::Olc => Mode::Geohash,
            Mode::Geohash => Mode::Decimal,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Decimal => "decimal",
            Mode::Dms => "dms",
            Mode::Olc => "olc",
            Mode::Geohash => "geohash",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "decimal" | "dec" => Ok(Mode::Decimal),
            "dms" => Ok(Mode::Dms),
            "olc" | "pluscode" | "plus" => Ok(Mode::Olc),
            "geohash" | "geo" => Ok(Mode::Geohash),
            other => Err(format!(
                "unknown mode '{}' (expected decimal, dms, olc or geohash)",
                other
            )),
        }
    }
}

/// A working view of a position, tagged by mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "digits", rename_all = "lowercase")]
pub enum Representation {
    Decimal(LatLon<DecimalDigits>),
    Dms(LatLon<DmsDigits>),
    Olc(OlcDigits),
    Geohash(GeohashDigits),
}

impl Representation {
    pub fn mode(&self) -> Mode {
        match self {
            Representation::Decimal(_) => Mode::Decimal,
            Representation::Dms(_) => Mode::Dms,
            Representation::Olc(_) => Mode::Olc,
            Representation::Geohash(_) => Mode::Geohash,
        }
    }

    /// Builds the `mode` view of a canonical position.
    pub fn from_canonical(mode: Mode, coord: CanonicalCoordinate) -> Self {
        let pair = coord.split();
        match mode {
            Mode::Decimal => Representation::Decimal(pair.map(|_, v| decimal::decode(v))),
            Mode::Dms => Representation::Dms(pair.map(|_, v| dms::decimal_to_dms(v))),
            Mode::Olc => Representation::Olc(olc::encode(coord.lat_e5, coord.lon_e5)),
            Mode::Geohash => Representation::Geohash(geohash::encode(coord.lat_e5, coord.lon_e5)),
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Representation::Decimal(pair) => write!(f, "{} {}", pair.latitude, pair.longitude),
            Representation::Dms(pair) => write!(
                f,
                "{} {}",
                pair.latitude.display_for(Axis::Latitude),
                pair.longitude.display_for(Axis::Longitude)
            ),
            Representation::Olc(code) => write!(f, "{}", code),
            Representation::Geohash(hash) => write!(f, "{}", hash),
        }
    }
}

/// All four views of one canonical position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Views {
    pub canonical: CanonicalCoordinate,
    pub decimal: LatLon<DecimalDigits>,
    pub dms: LatLon<DmsDigits>,
    pub olc: OlcDigits,
    pub geohash: GeohashDigits,
}

impl Views {
    /// Copies out the view for `mode` as a working representation.
    pub fn representation(&self, mode: Mode) -> Representation {
        match mode {
            Mode::Decimal => Representation::Decimal(self.decimal),
            Mode::Dms => Representation::Dms(self.dms),
            Mode::Olc => Representation::Olc(self.olc),
            Mode::Geohash => Representation::Geohash(self.geohash),
        }
    }
}

/// Normalizes any view to the canonical form.
///
/// The input is assumed well formed; the edit layer keeps every digit
/// within its modulus and every position on the globe.
pub fn load(rep: &Representation) -> CanonicalCoordinate {
    match rep {
        Representation::Decimal(pair) => pair.map(|_, d| decimal::encode(&d)).into(),
        Representation::Dms(pair) => pair.map(|_, d| dms::dms_to_decimal(&d)).into(),
        Representation::Olc(code) => olc::decode(code),
        Representation::Geohash(hash) => geohash::decode(hash),
    }
}

/// Runs all four encoders over a canonical position.
pub fn materialize(coord: CanonicalCoordinate) -> Views {
    let pair = coord.split();
    Views {
        canonical: coord,
        decimal: pair.map(|_, v| decimal::decode(v)),
        dms: pair.map(|_, v| dms::decimal_to_dms(v)),
        olc: olc::encode(coord.lat_e5, coord.lon_e5),
        geohash: geohash::encode(coord.lat_e5, coord.lon_e5),
    }
}

/// Loads `rep` and re-derives every view from the result.
pub fn commit(rep: &Representation) -> Views {
    materialize(load(rep))
}
