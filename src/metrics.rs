//! Font selection and cached text measurements.
//!
//! The text size is the vertical stride of the glyph stack. Glyphs come from
//! the largest ProFont size that fits inside that stride, so a roll never
//! overlaps neighbouring digits.
//!
//! [`TextMetrics`] is recomputed as a whole whenever the number, the text size
//! or the color change; there is no way to mutate a single field.

use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::Point;
use embedded_graphics::text::Baseline;
use embedded_graphics::text::renderer::TextRenderer;
use profont::{
    PROFONT_7_POINT,
    PROFONT_9_POINT,
    PROFONT_10_POINT,
    PROFONT_12_POINT,
    PROFONT_14_POINT,
    PROFONT_18_POINT,
    PROFONT_24_POINT,
};

/// Available digit fonts, smallest first.
const FONTS: [&MonoFont<'static>; 7] = [
    &PROFONT_7_POINT,
    &PROFONT_9_POINT,
    &PROFONT_10_POINT,
    &PROFONT_12_POINT,
    &PROFONT_14_POINT,
    &PROFONT_18_POINT,
    &PROFONT_24_POINT,
];

/// Pick the font for a text size in pixels.
///
/// Returns the largest font whose glyph height fits `text_size`, or the
/// smallest font when none fits. A text size of 0 renders nothing.
pub fn font_for_text_size(text_size: u32) -> Option<&'static MonoFont<'static>> {
    if text_size == 0 {
        return None;
    }
    let fitting = FONTS
        .iter()
        .rev()
        .find(|font| font.character_size.height <= text_size)
        .copied();
    Some(fitting.unwrap_or(FONTS[0]))
}

/// Cached measurements of the current number text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextMetrics {
    /// Text style ("paint") used for drawing. `None` when text size is 0.
    style: Option<MonoTextStyle<'static, Rgb565>>,
    /// Total rendered width of the number text.
    text_width: u32,
    /// Average advance per character (0 for an empty number).
    char_width: f32,
    /// Distance from baseline to the bottom of the glyph cell.
    descent: u32,
}

impl TextMetrics {
    /// Metrics of an unconfigured widget: nothing to draw.
    pub const fn empty() -> Self {
        Self {
            style: None,
            text_width: 0,
            char_width: 0.0,
            descent: 0,
        }
    }

    /// Measure `text` drawn at `text_size` in `color`.
    pub fn measure(
        text: &str,
        text_size: u32,
        color: Rgb565,
    ) -> Self {
        let Some(font) = font_for_text_size(text_size) else {
            return Self::empty();
        };
        let style = MonoTextStyle::new(font, color);

        let text_width = style
            .measure_string(text, Point::zero(), Baseline::Alphabetic)
            .bounding_box
            .size
            .width;
        let digit_count = text.len();
        let char_width = if digit_count == 0 {
            0.0
        } else {
            text_width as f32 / digit_count as f32
        };
        let descent = font.character_size.height.saturating_sub(font.baseline + 1);

        Self {
            style: Some(style),
            text_width,
            char_width,
            descent,
        }
    }

    #[inline]
    pub const fn style(&self) -> Option<MonoTextStyle<'static, Rgb565>> { self.style }

    #[inline]
    pub const fn text_width(&self) -> u32 { self.text_width }

    #[inline]
    pub const fn char_width(&self) -> f32 { self.char_width }

    #[inline]
    pub const fn descent(&self) -> u32 { self.descent }
}

impl Default for TextMetrics {
    fn default() -> Self { Self::empty() }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLACK, WHITE};

    #[test]
    fn test_fonts_sorted_by_height() {
        for pair in FONTS.windows(2) {
            assert!(pair[0].character_size.height < pair[1].character_size.height);
        }
    }

    #[test]
    fn test_zero_text_size_has_no_font() {
        assert!(font_for_text_size(0).is_none());
    }

    #[test]
    fn test_tiny_text_size_uses_smallest_font() {
        let font = font_for_text_size(1).unwrap();
        assert_eq!(font.character_size, PROFONT_7_POINT.character_size);
    }

    #[test]
    fn test_large_text_size_uses_largest_font() {
        let font = font_for_text_size(40).unwrap();
        assert_eq!(font.character_size, PROFONT_24_POINT.character_size);
    }

    #[test]
    fn test_selected_font_fits_text_size() {
        for size in PROFONT_7_POINT.character_size.height..64 {
            let font = font_for_text_size(size).unwrap();
            assert!(font.character_size.height <= size, "size {size}");
        }
    }

    #[test]
    fn test_measure_two_digits() {
        let metrics = TextMetrics::measure("42", 40, WHITE);
        let font = &PROFONT_24_POINT;
        let expected = 2 * font.character_size.width + font.character_spacing;

        assert_eq!(metrics.text_width(), expected);
        assert!((metrics.char_width() - expected as f32 / 2.0).abs() < f32::EPSILON);
        assert!(metrics.descent() < font.character_size.height);
        assert_eq!(metrics.style().unwrap().text_color, Some(WHITE));
    }

    #[test]
    fn test_measure_empty_text_has_zero_width() {
        let metrics = TextMetrics::measure("", 40, BLACK);
        assert_eq!(metrics.text_width(), 0);
        assert_eq!(metrics.char_width(), 0.0);
        assert!(metrics.style().is_some());
    }

    #[test]
    fn test_measure_zero_size_is_empty() {
        assert_eq!(TextMetrics::measure("123", 0, BLACK), TextMetrics::empty());
    }
}
