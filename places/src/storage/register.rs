//! 32-bit location backup register.
//!
//! The watch keeps a low-precision copy of the current location in one
//! backup register: latitude in the low 16 bits and longitude in the high
//! 16 bits, each as signed hundredths of a degree.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::codec::decimal;
use crate::coord::{CanonicalCoordinate, CoordError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationRegister(u32);

impl LocationRegister {
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Builds a register from its two signed halves.
    pub fn from_parts(latitude: i16, longitude: i16) -> Self {
        Self((latitude as u16 as u32) | ((longitude as u16 as u32) << 16))
    }

    /// Packs a position, rounding each axis to hundredths of a degree.
    pub fn pack(coord: CanonicalCoordinate) -> Self {
        Self::from_parts(
            decimal::encode_hundredths(&decimal::decode(coord.lat_e5)),
            decimal::encode_hundredths(&decimal::decode(coord.lon_e5)),
        )
    }

    /// Latitude half, hundredths of a degree.
    pub fn latitude(self) -> i16 {
        (self.0 & 0xFFFF) as u16 as i16
    }

    /// Longitude half, hundredths of a degree.
    pub fn longitude(self) -> i16 {
        (self.0 >> 16) as u16 as i16
    }

    /// Widens both halves to canonical units.
    ///
    /// A register written by something other than [`pack`](Self::pack) can
    /// hold up to ±327.67° per half, so the result is range-checked.
    pub fn unpack(self) -> Result<CanonicalCoordinate, CoordError> {
        CanonicalCoordinate::new(
            decimal::decode_hundredths(self.latitude()),
            decimal::decode_hundredths(self.longitude()),
        )
    }

    /// True when the register has never been written.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for LocationRegister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08X}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_pack_new_york() {
        let reg = LocationRegister::pack(CanonicalCoordinate::from_e5(4_075_000, -7_398_000));
        assert_eq!(reg.latitude(), 4075);
        assert_eq!(reg.longitude(), -7398);
        // -7398 = 0xE31A, 4075 = 0x0FEB
        assert_eq!(reg.raw(), 0xE31A_0FEB);
        assert_eq!(reg.to_string(), "0xE31A0FEB");
    }

    #[test]
    fn test_unpack_widens_to_e5() {
        let reg = LocationRegister::from_raw(0xE31A_0FEB);
        assert_eq!(
            reg.unpack().unwrap(),
            CanonicalCoordinate::from_e5(4_075_000, -7_398_000)
        );
    }

    #[test]
    fn test_pack_rounds_half_up() {
        let reg = LocationRegister::pack(CanonicalCoordinate::from_e5(5_150_740, -12_780));
        assert_eq!(reg.latitude(), 5151);
        assert_eq!(reg.longitude(), -13);
    }

    #[test]
    fn test_unpack_rejects_out_of_range_halves() {
        let reg = LocationRegister::from_parts(9_001, 0);
        assert!(matches!(reg.unpack(), Err(CoordError::InvalidLatitude(9_001_000))));
    }

    #[test]
    fn test_empty_register() {
        assert!(LocationRegister::default().is_empty());
        assert_eq!(
            LocationRegister::default().unpack().unwrap(),
            CanonicalCoordinate::default()
        );
    }

    proptest! {
        /// Packing keeps each axis within 0.01° of the input.
        #[test]
        fn pack_unpack_within_one_hundredth(
            lat in -9_000_000i32..=9_000_000,
            lon in -18_000_000i32..=18_000_000,
        ) {
            let back = LocationRegister::pack(CanonicalCoordinate::from_e5(lat, lon))
                .unpack()
                .unwrap();
            prop_assert!((back.lat_e5 - lat).abs() <= 1_000);
            prop_assert!((back.lon_e5 - lon).abs() <= 1_000);
        }

        /// The two halves never bleed into each other.
        #[test]
        fn halves_are_independent(lat in any::<i16>(), lon in any::<i16>()) {
            let reg = LocationRegister::from_parts(lat, lon);
            prop_assert_eq!(reg.latitude(), lat);
            prop_assert_eq!(reg.longitude(), lon);
        }
    }
}
