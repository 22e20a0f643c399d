//! Signed decimal degrees as eight BCD digits.
//!
//! The canonical integer `±DDD.DDDDD × 100 000` is split into three degree
//! digits and five fractional digits, least significant first. Values wider
//! than eight digits lose their high digits; that is the storage ceiling of
//! the watch, not an error.
//!
//! A second, lossy encoder squeezes the same digits into signed hundredths
//! of a degree for the 16-bit halves of the location backup register.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::coord::CoordError;

/// Digit weights from `hundreds` down to `d05`.
const WEIGHTS: [u32; 8] = [
    10_000_000, 1_000_000, 100_000, 10_000, 1_000, 100, 10, 1,
];

/// Decimal-degree view of one axis.
///
/// Each digit field holds `0..=9`. `negative` is kept even when every digit
/// is zero, so `-0.00000` stays distinct from `+0.00000` while editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct DecimalDigits {
    pub negative: bool,
    pub hundreds: u8,
    pub tens: u8,
    pub ones: u8,
    pub d01: u8,
    pub d02: u8,
    pub d03: u8,
    pub d04: u8,
    pub d05: u8,
}

impl DecimalDigits {
    /// Builds the struct from digits ordered `hundreds` to `d05`.
    pub fn from_digits(negative: bool, digits: [u8; 8]) -> Self {
        let [hundreds, tens, ones, d01, d02, d03, d04, d05] = digits;
        Self {
            negative,
            hundreds,
            tens,
            ones,
            d01,
            d02,
            d03,
            d04,
            d05,
        }
    }

    /// Digits ordered `hundreds` to `d05`.
    pub fn digits(&self) -> [u8; 8] {
        [
            self.hundreds,
            self.tens,
            self.ones,
            self.d01,
            self.d02,
            self.d03,
            self.d04,
            self.d05,
        ]
    }

    /// Unsigned canonical magnitude (degrees × 100 000).
    pub fn magnitude(&self) -> u32 {
        self.digits()
            .iter()
            .zip(WEIGHTS)
            .map(|(&d, w)| d as u32 * w)
            .sum()
    }

    /// Whole-degree part of the magnitude.
    pub fn whole_degrees(&self) -> u32 {
        self.hundreds as u32 * 100 + self.tens as u32 * 10 + self.ones as u32
    }

    /// Five fractional digits as a number `0..=99999`.
    pub fn fraction(&self) -> u32 {
        self.magnitude() % 100_000
    }

    /// True when every field is a decimal digit.
    pub fn is_valid(&self) -> bool {
        self.digits().iter().all(|&d| d <= 9)
    }
}

/// Splits a canonical integer into its sign and eight digits.
pub fn decode(raw: i32) -> DecimalDigits {
    let mut value = raw.unsigned_abs();
    let mut digits = [0u8; 8];
    for slot in digits.iter_mut().rev() {
        *slot = (value % 10) as u8;
        value /= 10;
    }
    DecimalDigits::from_digits(raw < 0, digits)
}

/// Weighted sum of the digits with the sign applied; exact inverse of [`decode`].
pub fn encode(digits: &DecimalDigits) -> i32 {
    let magnitude = digits.magnitude() as i32;
    if digits.negative {
        -magnitude
    } else {
        magnitude
    }
}

/// Lossy encoding to signed hundredths of a degree.
///
/// The three dropped digits are rounded half up into `d02`. A carry never
/// pushes a field past 9: when `d02` is already 9 it stays 9 and nothing
/// spills into `d01`, so the result is at most 0.01° short of exact rounding.
pub fn encode_hundredths(digits: &DecimalDigits) -> i16 {
    let mut d02 = digits.d02;
    if digits.d03 >= 5 && d02 < 9 {
        d02 += 1;
    }
    let magnitude = digits.hundreds as i32 * 10_000
        + digits.tens as i32 * 1_000
        + digits.ones as i32 * 100
        + digits.d01 as i32 * 10
        + d02 as i32;
    let value = if digits.negative { -magnitude } else { magnitude };
    value.clamp(i16::MIN as i32, i16::MAX as i32) as i16
}

/// Widens signed hundredths of a degree back to the canonical scale.
pub fn decode_hundredths(value: i16) -> i32 {
    value as i32 * 1_000
}

impl fmt::Display for DecimalDigits {
    /// Formats as `+DD.DDDDD`, with as many degree digits as needed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.negative { '-' } else { '+' };
        write!(f, "{}{}.{:05}", sign, self.whole_degrees(), self.fraction())
    }
}

impl FromStr for DecimalDigits {
    type Err = CoordError;

    /// Parses `[+-]DDD[.DDDDD]` digit by digit, without going through floats.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let (negative, body) = match text.as_bytes().first() {
            Some(b'-') => (true, &text[1..]),
            Some(b'+') => (false, &text[1..]),
            _ => (false, text),
        };
        let (whole, frac) = body.split_once('.').unwrap_or((body, ""));

        if whole.is_empty() || whole.len() > 3 {
            return Err(CoordError::invalid_code(
                "decimal",
                s,
                "expected one to three degree digits",
            ));
        }
        if frac.len() > 5 {
            return Err(CoordError::invalid_code(
                "decimal",
                s,
                "at most five fractional digits are stored",
            ));
        }
        if !whole.bytes().chain(frac.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(CoordError::invalid_code("decimal", s, "non-digit character"));
        }

        let mut digits = [0u8; 8];
        for (slot, b) in digits[3 - whole.len()..3].iter_mut().zip(whole.bytes()) {
            *slot = b - b'0';
        }
        for (slot, b) in digits[3..].iter_mut().zip(frac.bytes()) {
            *slot = b - b'0';
        }
        Ok(DecimalDigits::from_digits(negative, digits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_decode_new_york_latitude() {
        let digits = decode(4_075_000);
        assert_eq!(
            digits,
            DecimalDigits {
                negative: false,
                hundreds: 0,
                tens: 4,
                ones: 0,
                d01: 7,
                d02: 5,
                d03: 0,
                d04: 0,
                d05: 0,
            }
        );
    }

    #[test]
    fn test_decode_negative_longitude() {
        let digits = decode(-7_398_000);
        assert!(digits.negative);
        assert_eq!(digits.digits(), [0, 7, 3, 9, 8, 0, 0, 0]);
        assert_eq!(encode(&digits), -7_398_000);
    }

    #[test]
    fn test_decode_full_width_longitude() {
        let digits = decode(-17_999_999);
        assert_eq!(digits.digits(), [1, 7, 9, 9, 9, 9, 9, 9]);
        assert_eq!(encode(&digits), -17_999_999);
    }

    #[test]
    fn test_decode_smallest_negative_keeps_sign() {
        let digits = decode(-1);
        assert!(digits.negative);
        assert_eq!(digits.digits(), [0, 0, 0, 0, 0, 0, 0, 1]);
        assert_ne!(digits, decode(1));
    }

    #[test]
    fn test_negative_zero_is_distinct_but_encodes_to_zero() {
        let negative_zero = DecimalDigits {
            negative: true,
            ..DecimalDigits::default()
        };
        assert_ne!(negative_zero, DecimalDigits::default());
        assert_eq!(encode(&negative_zero), 0);
    }

    #[test]
    fn test_decode_truncates_past_eight_digits() {
        // 1 234 567 890 keeps only its low eight digits
        let digits = decode(1_234_567_890);
        assert_eq!(digits.digits(), [3, 4, 5, 6, 7, 8, 9, 0]);
    }

    #[test]
    fn test_decode_extreme_input_does_not_panic() {
        let digits = decode(i32::MIN);
        assert!(digits.negative);
        assert!(digits.is_valid());
    }

    #[test]
    fn test_encode_hundredths_rounds_half_up() {
        assert_eq!(encode_hundredths(&decode(4_075_000)), 4075);
        assert_eq!(encode_hundredths(&decode(4_075_499)), 4075);
        assert_eq!(encode_hundredths(&decode(4_075_500)), 4076);
        assert_eq!(encode_hundredths(&decode(-7_398_765)), -7399);
    }

    #[test]
    fn test_encode_hundredths_saturates_instead_of_overflowing() {
        // 40.99600 would round to 41.00; the carry stops at d02 = 9
        assert_eq!(encode_hundredths(&decode(4_099_600)), 4099);
        assert_eq!(encode_hundredths(&decode(-17_999_999)), -17999);
    }

    #[test]
    fn test_decode_hundredths_widens_to_e5() {
        assert_eq!(decode_hundredths(4075), 4_075_000);
        assert_eq!(decode_hundredths(-7398), -7_398_000);
    }

    #[test]
    fn test_display() {
        assert_eq!(decode(4_075_000).to_string(), "+40.75000");
        assert_eq!(decode(-7_398_000).to_string(), "-73.98000");
        assert_eq!(decode(-1).to_string(), "-0.00001");
        assert_eq!(decode(18_000_000).to_string(), "+180.00000");
    }

    #[test]
    fn test_parse() {
        let digits: DecimalDigits = "-73.98".parse().unwrap();
        assert_eq!(encode(&digits), -7_398_000);
        let digits: DecimalDigits = "+151.20930".parse().unwrap();
        assert_eq!(encode(&digits), 15_120_930);
        let digits: DecimalDigits = "7".parse().unwrap();
        assert_eq!(encode(&digits), 700_000);
        let digits: DecimalDigits = "-0.0".parse().unwrap();
        assert!(digits.negative);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!("".parse::<DecimalDigits>().is_err());
        assert!("1234.5".parse::<DecimalDigits>().is_err());
        assert!("12.123456".parse::<DecimalDigits>().is_err());
        assert!("12.3a".parse::<DecimalDigits>().is_err());
        assert!(".5".parse::<DecimalDigits>().is_err());
    }

    fn digit_struct() -> impl Strategy<Value = DecimalDigits> {
        (any::<bool>(), prop::array::uniform8(0u8..=9))
            .prop_map(|(negative, digits)| DecimalDigits::from_digits(negative, digits))
            // -0 encodes to 0, which decodes as +0
            .prop_filter("non-zero magnitude", |d| d.magnitude() != 0)
    }

    proptest! {
        /// decode(encode(d)) reproduces every valid digit struct exactly.
        #[test]
        fn decode_is_left_inverse_of_encode(digits in digit_struct()) {
            prop_assert_eq!(decode(encode(&digits)), digits);
        }

        /// encode(decode(x)) is exact across the longitude range.
        #[test]
        fn encode_inverts_decode(raw in -18_000_000i32..=18_000_000) {
            prop_assert_eq!(encode(&decode(raw)), raw);
        }

        /// The register encoding never strays more than 0.01° from the value.
        #[test]
        fn hundredths_stay_within_one_step(raw in -18_000_000i32..=18_000_000) {
            let back = decode_hundredths(encode_hundredths(&decode(raw)));
            prop_assert!((back - raw).abs() <= 1_000, "raw {} back {}", raw, back);
        }

        /// Display output parses back to the same digits.
        #[test]
        fn display_parses_back(raw in -18_000_000i32..=18_000_000) {
            let digits = decode(raw);
            let parsed: DecimalDigits = digits.to_string().parse().unwrap();
            prop_assert_eq!(parsed, digits);
        }
    }
}
