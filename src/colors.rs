//! Digit color constants.
//!
//! Colors are `Rgb565`, the native format of most SPI display controllers.
//! Standard colors come from the `RgbColor` trait constants; the raw `u16`
//! helpers convert to and from the representation used by
//! [`NumberViewConfig`](crate::NumberViewConfig).

use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
use embedded_graphics::prelude::IntoStorage;

/// Default digit color, same as an unconfigured text view.
pub const BLACK: Rgb565 = Rgb565::BLACK;

pub const WHITE: Rgb565 = Rgb565::WHITE;

pub const RED: Rgb565 = Rgb565::RED;

pub const GREEN: Rgb565 = Rgb565::GREEN;

pub const YELLOW: Rgb565 = Rgb565::YELLOW;

/// Odometer amber. RGB565: (31, 40, 0).
pub const AMBER: Rgb565 = Rgb565::new(31, 40, 0);

/// Colors cycled through by the simulator's color key.
pub const PALETTE: [Rgb565; 5] = [WHITE, AMBER, GREEN, YELLOW, RED];

/// Convert a raw RGB565 word (`0bRRRRRGGGGGGBBBBB`) to a color.
#[inline]
pub fn from_raw(raw: u16) -> Rgb565 { Rgb565::from(RawU16::new(raw)) }

/// Convert a color to its raw RGB565 word.
#[inline]
pub fn to_raw(color: Rgb565) -> u16 { color.into_storage() }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_roundtrip_of_palette() {
        for color in PALETTE {
            assert_eq!(from_raw(to_raw(color)), color);
        }
    }

    #[test]
    fn test_raw_constants() {
        assert_eq!(to_raw(BLACK), 0x0000);
        assert_eq!(to_raw(WHITE), 0xFFFF);
        assert_eq!(from_raw(0xF800), RED);
        assert_eq!(to_raw(AMBER), 0xFD00);
    }
}
