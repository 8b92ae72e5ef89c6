//! Widget constants and declarative configuration.
//!
//! # Roll Geometry
//!
//! Every position draws a stack of [`GLYPH_STACK`] glyphs and scrolls it by
//! [`ROLL_STEPS`] digit heights. The start digit is [`START_OFFSET`] ahead of
//! the target, so after a full roll the last glyph of the stack (the target)
//! lands where the first one started:
//!
//! ```text
//! p = 0.0        p = 1.0
//! [ 9 ] <- slot  [ 4 ] <- slot
//!   8
//!   7
//!   6
//!   5
//!   4
//! ```
//!
//! # Declarative Configuration
//!
//! [`NumberViewConfig`] carries the initial attributes of a widget and can be
//! deserialized from any serde format. Dimensions are signed so negative
//! values from a config source are reported instead of wrapping.

use heapless::String;
use serde::Deserialize;

use crate::colors;
use crate::error::Error;
use crate::layout::Padding;

// =============================================================================
// Capacity
// =============================================================================

/// Maximum number of digit positions a widget can hold.
pub const MAX_DIGITS: usize = 16;

// =============================================================================
// Roll Geometry
// =============================================================================

/// Digit heights the glyph stack scrolls during one roll.
pub const ROLL_STEPS: i32 = 5;

/// Glyphs drawn per position (start digit plus one per roll step).
pub const GLYPH_STACK: usize = ROLL_STEPS as usize + 1;

/// Offset from the target digit to the start digit ("half a revolution").
pub const START_OFFSET: i8 = 5;

/// Largest accepted text size in pixels. Larger values are clamped.
pub const MAX_TEXT_SIZE: u32 = 1024;

const _: () = assert!(GLYPH_STACK == ROLL_STEPS as usize + 1);
const _: () = assert!((MAX_TEXT_SIZE as u64) * (GLYPH_STACK as u64 + 1) < i32::MAX as u64);
const _: () = assert!(START_OFFSET as i32 == ROLL_STEPS);

// =============================================================================
// Timing
// =============================================================================

/// Roll duration of the first (leftmost) position in milliseconds.
pub const DEFAULT_ANIM_DURATION_MS: u32 = 1000;

/// Extra duration per position so digits settle left to right.
pub const STAGGER_MS: u32 = 100;

// =============================================================================
// Declarative Configuration
// =============================================================================

/// Initial attributes of a [`NumberView`](crate::NumberView).
///
/// Every field is optional in the source; missing fields fall back to the
/// defaults of an unconfigured widget (empty number, black, size 0).
///
/// ```ignore
/// let config: NumberViewConfig = toml::from_str(r#"
///     number = "2048"
///     text_color = 0xFFFF
///     text_size = 40
///     char_spacing = 4
/// "#)?;
/// let view = NumberView::from_config(&config)?;
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NumberViewConfig {
    /// Decimal digits to display.
    pub number: String<MAX_DIGITS>,
    /// Raw RGB565 digit color.
    pub text_color: u16,
    /// Digit height in pixels, also the vertical stride of the glyph stack.
    pub text_size: i32,
    /// Extra horizontal space between positions in pixels.
    pub char_spacing: i32,
    /// Roll duration of the first position.
    pub anim_duration_ms: u32,
    /// Padding as `[left, top, right, bottom]`.
    pub padding: [i32; 4],
}

impl NumberViewConfig {
    /// Check dimensions and convert them to unsigned pixel values.
    ///
    /// Returns `(text_size, char_spacing, padding)`.
    pub fn dimensions(&self) -> Result<(u32, u32, Padding), Error> {
        let text_size = non_negative("text_size", self.text_size)?;
        let char_spacing = non_negative("char_spacing", self.char_spacing)?;
        let [left, top, right, bottom] = self.padding;
        let padding = Padding {
            left: non_negative("padding.left", left)?,
            top: non_negative("padding.top", top)?,
            right: non_negative("padding.right", right)?,
            bottom: non_negative("padding.bottom", bottom)?,
        };
        Ok((text_size, char_spacing, padding))
    }
}

impl Default for NumberViewConfig {
    fn default() -> Self {
        Self {
            number: String::new(),
            text_color: colors::to_raw(colors::BLACK),
            text_size: 0,
            char_spacing: 0,
            anim_duration_ms: DEFAULT_ANIM_DURATION_MS,
            padding: [0; 4],
        }
    }
}

fn non_negative(
    field: &'static str,
    value: i32,
) -> Result<u32, Error> {
    u32::try_from(value).map_err(|_| Error::NegativeDimension { field, value })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_unconfigured_view() {
        let config = NumberViewConfig::default();
        assert!(config.number.is_empty());
        assert_eq!(config.text_color, 0x0000);
        assert_eq!(config.text_size, 0);
        assert_eq!(config.char_spacing, 0);
        assert_eq!(config.anim_duration_ms, 1000);
    }

    #[test]
    fn test_parse_full_toml() {
        let config: NumberViewConfig = toml::from_str(
            r#"
            number = "2048"
            text_color = 65535
            text_size = 40
            char_spacing = 4
            anim_duration_ms = 800
            padding = [2, 4, 6, 8]
            "#,
        )
        .unwrap();

        assert_eq!(config.number.as_str(), "2048");
        assert_eq!(config.text_color, 0xFFFF);
        assert_eq!(config.anim_duration_ms, 800);

        let (size, spacing, padding) = config.dimensions().unwrap();
        assert_eq!(size, 40);
        assert_eq!(spacing, 4);
        assert_eq!(padding, Padding { left: 2, top: 4, right: 6, bottom: 8 });
    }

    #[test]
    fn test_parse_partial_toml_uses_defaults() {
        let config: NumberViewConfig = toml::from_str(r#"number = "7""#).unwrap();
        assert_eq!(config.number.as_str(), "7");
        assert_eq!(config.anim_duration_ms, DEFAULT_ANIM_DURATION_MS);
        assert_eq!(config.text_size, 0);
    }

    #[test]
    fn test_number_longer_than_capacity_is_rejected() {
        let result: Result<NumberViewConfig, _> = toml::from_str(r#"number = "12345678901234567""#);
        assert!(result.is_err(), "17 digits exceed MAX_DIGITS");
    }

    #[test]
    fn test_negative_text_size_is_error() {
        let config = NumberViewConfig {
            text_size: -12,
            ..NumberViewConfig::default()
        };
        assert_eq!(
            config.dimensions(),
            Err(Error::NegativeDimension {
                field: "text_size",
                value: -12
            })
        );
    }

    #[test]
    fn test_negative_spacing_and_padding_are_errors() {
        let config = NumberViewConfig {
            char_spacing: -1,
            ..NumberViewConfig::default()
        };
        assert!(matches!(
            config.dimensions(),
            Err(Error::NegativeDimension { field: "char_spacing", .. })
        ));

        let config = NumberViewConfig {
            padding: [0, 0, -3, 0],
            ..NumberViewConfig::default()
        };
        assert!(matches!(
            config.dimensions(),
            Err(Error::NegativeDimension { field: "padding.right", value: -3 })
        ));
    }
}
