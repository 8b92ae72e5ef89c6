//! Padding, size negotiation and strip geometry.

use embedded_graphics::prelude::Size;
use embedded_graphics::primitives::Rectangle;

use crate::metrics::TextMetrics;

/// Inner padding of the widget bounds in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Padding {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Padding {
    /// Same padding on every side.
    pub const fn uniform(px: u32) -> Self {
        Self {
            left: px,
            top: px,
            right: px,
            bottom: px,
        }
    }
}

/// Size constraint offered by the host for one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MeasureSpec {
    /// The widget must be exactly this size.
    Exactly(u32),
    /// The widget may be at most this size.
    AtMost(u32),
    /// The host leaves the size up to the widget.
    Unspecified,
}

impl MeasureSpec {
    /// Size carried by the spec (0 for `Unspecified`).
    #[inline]
    pub const fn size(self) -> u32 {
        match self {
            Self::Exactly(px) | Self::AtMost(px) => px,
            Self::Unspecified => 0,
        }
    }
}

/// Desired widget size under the given constraints.
///
/// Width is whatever the host offers. Height is one text line unless the host
/// demands an exact height.
pub const fn measure(
    width: MeasureSpec,
    height: MeasureSpec,
    text_size: u32,
) -> Size {
    let height = match height {
        MeasureSpec::Exactly(px) => px,
        MeasureSpec::AtMost(_) | MeasureSpec::Unspecified => text_size,
    };
    Size::new(width.size(), height)
}

/// Per-draw geometry of the digit strip.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StripLayout {
    /// Left edge of the first glyph.
    pub start_x: f32,
    /// Top edge used as the origin of every glyph stack.
    pub top: i32,
    /// Horizontal advance from one position to the next.
    pub advance: f32,
}

impl StripLayout {
    /// Center the strip, spacing included, inside the padded bounds.
    pub fn compute(
        bounds: &Rectangle,
        padding: Padding,
        metrics: &TextMetrics,
        digit_count: usize,
        char_spacing: u32,
    ) -> Self {
        let content_width = bounds.size.width as f32 - padding.left as f32 - padding.right as f32;
        let gaps = digit_count.saturating_sub(1) as f32;

        let mut start_x = bounds.top_left.x as f32 + padding.left as f32;
        start_x += (content_width - metrics.text_width() as f32) / 2.0;
        start_x -= char_spacing as f32 * gaps / 2.0;

        Self {
            start_x,
            top: bounds.top_left.y,
            advance: metrics.char_width() + char_spacing as f32,
        }
    }

    /// Left edge of position `index`.
    #[inline]
    pub fn x(
        &self,
        index: usize,
    ) -> f32 {
        self.start_x + self.advance * index as f32
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics::prelude::Point;

    use super::*;
    use crate::colors::WHITE;

    #[test]
    fn test_measure_unbounded_height_is_text_size() {
        let size = measure(MeasureSpec::Exactly(200), MeasureSpec::Unspecified, 40);
        assert_eq!(size, Size::new(200, 40));

        let size = measure(MeasureSpec::AtMost(320), MeasureSpec::AtMost(240), 40);
        assert_eq!(size, Size::new(320, 40));
    }

    #[test]
    fn test_measure_exact_height_is_accepted() {
        let size = measure(MeasureSpec::Exactly(100), MeasureSpec::Exactly(64), 40);
        assert_eq!(size, Size::new(100, 64));
    }

    #[test]
    fn test_measure_unspecified_width_is_zero() {
        let size = measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified, 12);
        assert_eq!(size, Size::new(0, 12));
    }

    #[test]
    fn test_strip_centered_without_spacing() {
        let metrics = TextMetrics::measure("42", 40, WHITE);
        let bounds = Rectangle::new(Point::new(0, 0), Size::new(200, 40));
        let layout = StripLayout::compute(&bounds, Padding::default(), &metrics, 2, 0);

        let width = metrics.text_width() as f32;
        assert!((layout.start_x - (200.0 - width) / 2.0).abs() < 1e-4);
        assert!((layout.x(1) - layout.start_x - metrics.char_width()).abs() < 1e-4);

        // Symmetric margins
        let right_edge = layout.x(2);
        assert!((layout.start_x - (200.0 - right_edge)).abs() < 1e-3);
    }

    #[test]
    fn test_strip_centered_with_spacing_and_padding() {
        let metrics = TextMetrics::measure("123", 40, WHITE);
        let bounds = Rectangle::new(Point::new(10, 20), Size::new(300, 40));
        let padding = Padding {
            left: 30,
            top: 0,
            right: 10,
            bottom: 0,
        };
        let layout = StripLayout::compute(&bounds, padding, &metrics, 3, 8);

        let total = metrics.text_width() as f32 + 2.0 * 8.0;
        let expected = 10.0 + 30.0 + (260.0 - total) / 2.0;
        assert!((layout.start_x - expected).abs() < 1e-3);
        assert_eq!(layout.top, 20);
        assert!((layout.advance - (metrics.char_width() + 8.0)).abs() < 1e-4);
    }

    #[test]
    fn test_strip_with_no_digits() {
        let metrics = TextMetrics::measure("", 40, WHITE);
        let bounds = Rectangle::new(Point::zero(), Size::new(100, 40));
        let layout = StripLayout::compute(&bounds, Padding::uniform(0), &metrics, 0, 6);
        assert_eq!(layout.start_x, 50.0);
        assert_eq!(layout.top, 0);
    }
}
