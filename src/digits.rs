//! Digit wraparound math and glyph lookup.
//!
//! [`calc_num`] is the single primitive behind the roll: it picks the start
//! digit of each position (`offset = +5`) and the glyphs of its stack
//! (`offset = 0, -1, .., -5`). A descending stack scrolled upward reads as
//! an ascending roll.

use heapless::Vec;

use crate::config::{GLYPH_STACK, MAX_DIGITS, START_OFFSET};
use crate::error::Error;

/// Glyph text for every decimal digit. Avoids formatting during draw.
pub const DIGIT_GLYPHS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// Add `offset` to `num` with modulo-10 wraparound.
///
/// Defined for `num` in `0..=9` and `offset` in `-9..=9`; the result is
/// always in `0..=9`.
#[inline]
pub const fn calc_num(
    num: u8,
    offset: i8,
) -> u8 {
    let mut result = num as i8 + offset;
    if result > 9 {
        result -= 10;
    } else if result < 0 {
        result += 10;
    }
    result as u8
}

/// Start digit of a position showing `target` once settled.
#[inline]
pub const fn start_digit(target: u8) -> u8 { calc_num(target, START_OFFSET) }

/// Digit drawn at `index` (0 = top) of the stack that starts at `start`.
#[inline]
pub const fn stack_digit(
    start: u8,
    index: usize,
) -> u8 {
    calc_num(start, -((index % GLYPH_STACK) as i8))
}

/// Glyph text for a digit in `0..=9`.
#[inline]
pub const fn glyph(digit: u8) -> &'static str { DIGIT_GLYPHS[(digit % 10) as usize] }

/// Check that `text` holds only decimal digits and fits the widget.
///
/// An empty string is accepted here; the caller decides whether empty is an
/// error for the operation at hand.
pub fn validate(text: &str) -> Result<(), Error> {
    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidNumberFormat);
    }
    if text.len() > MAX_DIGITS {
        return Err(Error::TooManyDigits { max: MAX_DIGITS });
    }
    Ok(())
}

/// Compute the start digit of every position of `text`.
pub fn start_digits(text: &str) -> Result<Vec<u8, MAX_DIGITS>, Error> {
    validate(text)?;
    let mut starts = Vec::new();
    for b in text.bytes() {
        starts
            .push(start_digit(b - b'0'))
            .map_err(|_| Error::TooManyDigits { max: MAX_DIGITS })?;
    }
    Ok(starts)
}

/// Parse `text` into an integer.
///
/// Empty text, non-digits and overflow are all [`Error::InvalidNumberFormat`].
pub fn parse_number(text: &str) -> Result<u32, Error> {
    if text.is_empty() {
        return Err(Error::InvalidNumberFormat);
    }
    validate(text)?;
    text.parse::<u32>().map_err(|_| Error::InvalidNumberFormat)
}

// =============================================================================
// Unit Tests
// =============================================================================
