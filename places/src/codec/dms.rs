//! Degrees, minutes and whole seconds as BCD digits.
//!
//! Conversion runs entirely in integers: the canonical value is rounded to
//! whole arcseconds (`e5 × 0.036`) and back (`seconds × 250 / 9`), both half
//! away from zero. One arcsecond is about 27.8 canonical units, so a value
//! that did not come from a DMS reading moves by at most half an arcsecond;
//! values that did come from one survive the round trip unchanged.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::coord::Axis;

/// Canonical units per whole arcsecond, as the exact ratio `250 / 9`.
const E5_PER_ARCSEC_NUM: i64 = 250;
const E5_PER_ARCSEC_DEN: i64 = 9;

/// DMS view of one axis.
///
/// Minutes and seconds stay within `0..=59`; the degree magnitude is bounded
/// by 90 or 180 depending on the axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct DmsDigits {
    pub negative: bool,
    pub hundreds: u8,
    pub tens: u8,
    pub ones: u8,
    pub mins_tens: u8,
    pub mins_ones: u8,
    pub secs_tens: u8,
    pub secs_ones: u8,
}

impl DmsDigits {
    /// Builds the digit fields from whole components.
    pub fn from_components(negative: bool, degrees: u32, minutes: u32, seconds: u32) -> Self {
        DmsDigits {
            negative,
            hundreds: (degrees / 100 % 10) as u8,
            tens: (degrees / 10 % 10) as u8,
            ones: (degrees % 10) as u8,
            mins_tens: (minutes / 10 % 10) as u8,
            mins_ones: (minutes % 10) as u8,
            secs_tens: (seconds / 10 % 10) as u8,
            secs_ones: (seconds % 10) as u8,
        }
    }

    pub fn degrees(&self) -> u32 {
        self.hundreds as u32 * 100 + self.tens as u32 * 10 + self.ones as u32
    }

    pub fn minutes(&self) -> u32 {
        self.mins_tens as u32 * 10 + self.mins_ones as u32
    }

    pub fn seconds(&self) -> u32 {
        self.secs_tens as u32 * 10 + self.secs_ones as u32
    }

    /// Total unsigned arcseconds.
    pub fn total_seconds(&self) -> u32 {
        self.degrees() * 3_600 + self.minutes() * 60 + self.seconds()
    }

    /// Signed `DDDMMSS` integer, the form the watch displays and range-checks.
    ///
    /// 90°00'00" packs to `900000` and 180°00'00" to `1800000`.
    pub fn packed(&self) -> i32 {
        let magnitude = (self.degrees() * 10_000 + self.minutes() * 100 + self.seconds()) as i32;
        if self.negative {
            -magnitude
        } else {
            magnitude
        }
    }

    /// Inverse of [`packed`](Self::packed).
    pub fn from_packed(value: i32) -> Self {
        let mut rest = value.unsigned_abs();
        let mut digits = [0u8; 7];
        for slot in digits.iter_mut().rev() {
            *slot = (rest % 10) as u8;
            rest /= 10;
        }
        let [hundreds, tens, ones, mins_tens, mins_ones, secs_tens, secs_ones] = digits;
        DmsDigits {
            negative: value < 0,
            hundreds,
            tens,
            ones,
            mins_tens,
            mins_ones,
            secs_tens,
            secs_ones,
        }
    }

    /// True when all digits are in range and the magnitude fits `axis`.
    pub fn is_valid_for(&self, axis: Axis) -> bool {
        let digits_ok = [
            self.hundreds,
            self.tens,
            self.ones,
            self.mins_ones,
            self.secs_ones,
        ]
        .iter()
        .all(|&d| d <= 9)
            && self.mins_tens <= 5
            && self.secs_tens <= 5;
        digits_ok && self.total_seconds() <= axis.limit_degrees() * 3_600
    }

    /// Renders with a hemisphere letter, e.g. `40°45'00"N`.
    pub fn display_for(&self, axis: Axis) -> String {
        format!(
            "{}°{:02}'{:02}\"{}",
            self.degrees(),
            self.minutes(),
            self.seconds(),
            axis.hemisphere(self.negative)
        )
    }
}

/// Converts a canonical value to whole degrees, minutes and seconds.
///
/// The sign is carried separately, so `-0.00001°` yields a negative
/// `0°00'00"`.
pub fn decimal_to_dms(raw: i32) -> DmsDigits {
    let magnitude = raw.unsigned_abs() as i64;
    // round(|raw| / 100 000 × 3600) = round(|raw| × 36 / 1000)
    let total = ((magnitude * 36 + 500) / 1_000) as u32;
    let degrees = total / 3_600;
    let remainder = total % 3_600;
    DmsDigits::from_components(raw < 0, degrees, remainder / 60, remainder % 60)
}

/// Converts a DMS view back to the canonical scale, rounding to nearest.
pub fn dms_to_decimal(dms: &DmsDigits) -> i32 {
    let seconds = dms.total_seconds() as i64;
    // round(seconds × 250 / 9) with the usual (2n + d) / 2d trick
    let magnitude = (2 * seconds * E5_PER_ARCSEC_NUM + E5_PER_ARCSEC_DEN)
        / (2 * E5_PER_ARCSEC_DEN);
    let magnitude = magnitude as i32;
    if dms.negative {
        -magnitude
    } else {
        magnitude
    }
}

impl fmt::Display for DmsDigits {
    /// Signed form without hemisphere, e.g. `-73°58'48"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.negative { '-' } else { '+' };
        write!(
            f,
            "{}{}°{:02}'{:02}\"",
            sign,
            self.degrees(),
            self.minutes(),
            self.seconds()
        )
    }
}
