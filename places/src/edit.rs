//! Digit-by-digit editing of a working representation.
//!
//! The watch face edits one digit at a time: a page shows a group of digits
//! and a cursor picks one of them. [`advance`] is the pure step function
//! behind a button press. [`EditSession`] wraps a working representation
//! with a cursor and the commit/discard pair.
//!
//! Page and digit layout:
//!
//! | Mode | Pages | Digits |
//! |------|-------|--------|
//! | Decimal | 0 lat degrees, 2 lon degrees | 0 sign, 1 hundreds (lon only), 2 tens, 3 ones |
//! | Decimal | 1 lat fraction, 3 lon fraction | 1..=5 |
//! | Dms | 0 lat degrees, 2 lon degrees | as Decimal |
//! | Dms | 1 lat min/sec, 3 lon min/sec | 2 min tens, 3 min ones, 4 sec tens, 5 sec ones |
//! | Olc / Geohash | 0, 1 | 1..=5, five code digits per page |

use crate::codec::{DecimalDigits, DmsDigits};
use crate::coord::{Axis, CanonicalCoordinate};
use crate::facade::{self, Representation, Views};

pub use crate::facade::Mode;

const DEGREE_PAGE_LAT: &[usize] = &[0, 2, 3];
const DEGREE_PAGE_LON: &[usize] = &[0, 1, 2, 3];
const FRACTION_PAGE: &[usize] = &[1, 2, 3, 4, 5];
const MIN_SEC_PAGE: &[usize] = &[2, 3, 4, 5];
const CODE_PAGE: &[usize] = &[1, 2, 3, 4, 5];

/// Digits per code page (OLC and Geohash).
const CODE_DIGITS_PER_PAGE: usize = 5;

/// Number of pages in `mode`.
pub fn page_count(mode: Mode) -> usize {
    match mode {
        Mode::Decimal | Mode::Dms => 4,
        Mode::Olc | Mode::Geohash => 2,
    }
}

/// Editable digit positions on `page`, left to right. Empty when the page
/// does not exist.
pub fn page_digits(mode: Mode, page: usize) -> &'static [usize] {
    match (mode, page) {
        (Mode::Decimal | Mode::Dms, 0) => DEGREE_PAGE_LAT,
        (Mode::Decimal | Mode::Dms, 2) => DEGREE_PAGE_LON,
        (Mode::Decimal, 1 | 3) => FRACTION_PAGE,
        (Mode::Dms, 1 | 3) => MIN_SEC_PAGE,
        (Mode::Olc | Mode::Geohash, 0 | 1) => CODE_PAGE,
        _ => &[],
    }
}

/// True when `(page, digit)` names an editable field in `mode`.
pub fn is_editable(mode: Mode, page: usize, digit: usize) -> bool {
    page_digits(mode, page).contains(&digit)
}

/// Increments one digit with wraparound and boundary clamping.
///
/// Addresses outside the layout return the input unchanged.
pub fn advance(rep: Representation, page: usize, digit: usize) -> Representation {
    if !is_editable(rep.mode(), page, digit) {
        return rep;
    }
    let axis = if page < 2 {
        Axis::Latitude
    } else {
        Axis::Longitude
    };
    let degree_page = page % 2 == 0;

    match rep {
        Representation::Decimal(mut pair) => {
            advance_decimal(pair.get_mut(axis), axis, degree_page, digit);
            Representation::Decimal(pair)
        }
        Representation::Dms(mut pair) => {
            advance_dms(pair.get_mut(axis), axis, degree_page, digit);
            Representation::Dms(pair)
        }
        Representation::Olc(mut code) => {
            let index = page * CODE_DIGITS_PER_PAGE + digit - 1;
            let modulus = match index {
                0 => crate::codec::olc::MAX_LAT1 + 1,
                1 => crate::codec::olc::MAX_LON1 + 1,
                _ => 20,
            };
            wrap_increment(&mut code.digits[index], modulus);
            Representation::Olc(code)
        }
        Representation::Geohash(mut hash) => {
            let index = page * CODE_DIGITS_PER_PAGE + digit - 1;
            wrap_increment(&mut hash.digits[index], 32);
            Representation::Geohash(hash)
        }
    }
}

fn wrap_increment(field: &mut u8, modulus: u8) {
    *field = (*field + 1) % modulus;
}

fn advance_decimal(d: &mut DecimalDigits, axis: Axis, degree_page: bool, digit: usize) {
    if degree_page {
        match digit {
            0 => {
                d.negative = !d.negative;
                return;
            }
            1 => wrap_increment(&mut d.hundreds, 2),
            2 => wrap_increment(&mut d.tens, 10),
            _ => wrap_increment(&mut d.ones, 10),
        }
    } else {
        match digit {
            1 => wrap_increment(&mut d.d01, 10),
            2 => wrap_increment(&mut d.d02, 10),
            3 => wrap_increment(&mut d.d03, 10),
            4 => wrap_increment(&mut d.d04, 10),
            _ => wrap_increment(&mut d.d05, 10),
        }
    }

    if d.magnitude() <= axis.limit_e5() as u32 {
        return;
    }
    if degree_page && is_leading_digit(axis, digit) {
        // Land on the limit itself: keep the leading digit, clear the rest.
        let leading = (d.hundreds, d.tens);
        *d = DecimalDigits {
            negative: d.negative,
            ..Default::default()
        };
        match axis {
            Axis::Latitude => d.tens = leading.1,
            Axis::Longitude => d.hundreds = leading.0,
        }
        return;
    }
    match (degree_page, digit) {
        (true, 2) => d.tens = 0,
        (true, _) => d.ones = 0,
        (false, 1) => d.d01 = 0,
        (false, 2) => d.d02 = 0,
        (false, 3) => d.d03 = 0,
        (false, 4) => d.d04 = 0,
        (false, _) => d.d05 = 0,
    }
}

fn advance_dms(d: &mut DmsDigits, axis: Axis, degree_page: bool, digit: usize) {
    if degree_page {
        match digit {
            0 => {
                d.negative = !d.negative;
                return;
            }
            1 => wrap_increment(&mut d.hundreds, 2),
            2 => wrap_increment(&mut d.tens, 10),
            _ => wrap_increment(&mut d.ones, 10),
        }
    } else {
        match digit {
            2 => wrap_increment(&mut d.mins_tens, 6),
            3 => wrap_increment(&mut d.mins_ones, 10),
            4 => wrap_increment(&mut d.secs_tens, 6),
            _ => wrap_increment(&mut d.secs_ones, 10),
        }
    }

    if d.total_seconds() <= axis.limit_degrees() * 3_600 {
        return;
    }
    if degree_page && is_leading_digit(axis, digit) {
        let leading = (d.hundreds, d.tens);
        *d = DmsDigits {
            negative: d.negative,
            ..Default::default()
        };
        match axis {
            Axis::Latitude => d.tens = leading.1,
            Axis::Longitude => d.hundreds = leading.0,
        }
        return;
    }
    match (degree_page, digit) {
        (true, 2) => d.tens = 0,
        (true, _) => d.ones = 0,
        (false, 2) => d.mins_tens = 0,
        (false, 3) => d.mins_ones = 0,
        (false, 4) => d.secs_tens = 0,
        (false, _) => d.secs_ones = 0,
    }
}

/// Most significant degree digit on the axis: latitude tens, longitude hundreds.
fn is_leading_digit(axis: Axis, digit: usize) -> bool {
    match axis {
        Axis::Latitude => digit == 2,
        Axis::Longitude => digit == 1,
    }
}

/// A working representation plus the cursor editing it.
#[derive(Debug, Clone)]
pub struct EditSession {
    origin: CanonicalCoordinate,
    working: Representation,
    page: usize,
    digit: usize,
}

impl EditSession {
    /// Opens `coord` for editing in `mode`, cursor on the first digit.
    pub fn new(coord: CanonicalCoordinate, mode: Mode) -> Self {
        Self {
            origin: coord,
            working: Representation::from_canonical(mode, coord),
            page: 0,
            digit: page_digits(mode, 0)[0],
        }
    }

    pub fn mode(&self) -> Mode {
        self.working.mode()
    }

    pub fn working(&self) -> &Representation {
        &self.working
    }

    /// Current `(page, digit)`.
    pub fn cursor(&self) -> (usize, usize) {
        (self.page, self.digit)
    }

    /// Position the session was opened on.
    pub fn origin(&self) -> CanonicalCoordinate {
        self.origin
    }

    /// Increments the digit under the cursor.
    pub fn advance(&mut self) {
        self.working = advance(self.working, self.page, self.digit);
    }

    /// Moves the cursor right, rolling over to the next page and from the
    /// last page back to the first.
    pub fn next_digit(&mut self) {
        let mode = self.mode();
        let digits = page_digits(mode, self.page);
        match digits.iter().position(|&d| d == self.digit) {
            Some(i) if i + 1 < digits.len() => self.digit = digits[i + 1],
            _ => {
                self.page = (self.page + 1) % page_count(mode);
                self.digit = page_digits(mode, self.page)[0];
            }
        }
    }

    /// Re-expresses the working value in another mode.
    ///
    /// The current edit is committed first, so the new view shows the same
    /// position. The cursor returns to the first digit.
    pub fn switch_mode(&mut self, mode: Mode) {
        let coord = facade::load(&self.working);
        self.working = Representation::from_canonical(mode, coord);
        self.page = 0;
        self.digit = page_digits(mode, 0)[0];
    }

    /// Normalizes the working view and re-derives all four views.
    pub fn commit(self) -> Views {
        facade::commit(&self.working)
    }

    /// Drops the edit and returns the untouched starting position.
    pub fn discard(self) -> CanonicalCoordinate {
        self.origin
    }
}
