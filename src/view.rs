//! The rolling number widget.
//!
//! [`NumberView`] owns the digit strip model (number text, start digits,
//! text metrics) and one [`RollDriver`] per position while animating.
//!
//! # Drawing
//!
//! For every position the widget draws a stack of [`GLYPH_STACK`] glyphs,
//! one text size apart, starting at the start digit and counting down. The
//! whole stack is shifted up by `round(text_size * 5 * progress)`:
//!
//! - `progress = 0`: the start digit sits in the slot
//! - `progress = 1`: the stack moved five digit heights, the target digit
//!   (last glyph) sits in the slot
//!
//! Drawing is clipped to the widget bounds, which is what hides the rest of
//! the stack. `draw` only reads state; all time handling lives in `tick`.
//!
//! # Redraw Requests
//!
//! Every setter, `play` and every `tick` that advanced a running roll raise
//! the redraw request flag and bump [`NumberView::invalidation_count`]. The
//! host polls the flag with [`NumberView::take_redraw_request`].

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::{Baseline, Text};
use heapless::{String, Vec};
#[cfg(not(test))]
use micromath::F32Ext;

use crate::colors::{self, BLACK};
use crate::config::{
    DEFAULT_ANIM_DURATION_MS, GLYPH_STACK, MAX_DIGITS, MAX_TEXT_SIZE, NumberViewConfig, ROLL_STEPS, STAGGER_MS,
};
use crate::digits::{self, glyph, stack_digit};
use crate::driver::{Easing, RollDriver};
use crate::error::Error;
use crate::layout::{self, MeasureSpec, Padding, StripLayout};
use crate::metrics::TextMetrics;

/// Number display with a per-digit rolling animation.
pub struct NumberView {
    // Configuration
    number: String<MAX_DIGITS>,
    text_color: Rgb565,
    text_size: u32,
    char_spacing: u32,
    anim_duration_ms: u32,
    easing: Easing,
    padding: Padding,
    bounds: Rectangle,

    // Derived state, recomputed on every configuration change
    start_digits: Vec<u8, MAX_DIGITS>,
    metrics: TextMetrics,

    // Animation state, replaced on every play()
    drivers: Vec<RollDriver, MAX_DIGITS>,

    redraw_requested: bool,
    invalidations: u32,
}

impl NumberView {
    /// Create an empty widget: no digits, black, text size 0.
    pub const fn new() -> Self {
        Self {
            number: String::new(),
            text_color: BLACK,
            text_size: 0,
            char_spacing: 0,
            anim_duration_ms: DEFAULT_ANIM_DURATION_MS,
            easing: Easing::AccelerateDecelerate,
            padding: Padding::uniform(0),
            bounds: Rectangle::zero(),
            start_digits: Vec::new(),
            metrics: TextMetrics::empty(),
            drivers: Vec::new(),
            redraw_requested: false,
            invalidations: 0,
        }
    }

    /// Create a widget from declarative attributes.
    pub fn from_config(config: &NumberViewConfig) -> Result<Self, Error> {
        let (text_size, char_spacing, padding) = config.dimensions()?;
        let mut view = Self::new();
        view.anim_duration_ms = config.anim_duration_ms;
        view.padding = padding;
        view.configure(
            config.number.as_str(),
            text_size,
            colors::from_raw(config.text_color),
            char_spacing,
        )?;
        Ok(view)
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Replace number, text size, color and spacing in one go.
    ///
    /// The number text must contain only decimal digits. An empty number is
    /// accepted and renders nothing. On error nothing changes.
    pub fn configure(
        &mut self,
        number_text: &str,
        text_size: u32,
        color: Rgb565,
        char_spacing: u32,
    ) -> Result<(), Error> {
        digits::validate(number_text)?;
        self.text_size = text_size.min(MAX_TEXT_SIZE);
        self.text_color = color;
        self.char_spacing = char_spacing;
        self.apply_number(number_text)
    }

    /// Show `number`.
    pub fn set_number(
        &mut self,
        number: u32,
    ) {
        let mut text: String<MAX_DIGITS> = String::new();
        // u32 has at most 10 digits, always fits
        let _ = write!(text, "{number}");
        if let Err(e) = self.apply_number(&text) {
            roll_warn!("set_number({}) rejected: {}", number, e);
        }
    }

    /// Show the digits of `text` (leading zeros are kept).
    pub fn set_number_text(
        &mut self,
        text: &str,
    ) -> Result<(), Error> {
        self.apply_number(text)
    }

    pub fn set_text_color(
        &mut self,
        color: Rgb565,
    ) {
        self.text_color = color;
        self.invalidate_model();
    }

    /// Set the digit height in pixels, clamped to [`MAX_TEXT_SIZE`].
    /// 0 hides the widget content.
    pub fn set_text_size(
        &mut self,
        text_size: u32,
    ) {
        self.text_size = text_size.min(MAX_TEXT_SIZE);
        self.invalidate_model();
    }

    /// Set the extra space between positions in pixels.
    pub fn set_char_spacing(
        &mut self,
        char_spacing: u32,
    ) {
        self.char_spacing = char_spacing;
        self.invalidate_model();
    }

    /// Roll duration of the first position. Takes effect on the next `play`.
    pub fn set_anim_duration_ms(
        &mut self,
        duration_ms: u32,
    ) {
        self.anim_duration_ms = duration_ms;
    }

    /// Easing of the roll. Takes effect on the next `play`.
    pub fn set_easing(
        &mut self,
        easing: Easing,
    ) {
        self.easing = easing;
    }

    pub fn set_padding(
        &mut self,
        padding: Padding,
    ) {
        self.padding = padding;
        self.request_redraw();
    }

    /// Place the widget on the display. Drawing is clipped to these bounds.
    pub fn set_bounds(
        &mut self,
        bounds: Rectangle,
    ) {
        self.bounds = bounds;
        self.request_redraw();
    }

    fn apply_number(
        &mut self,
        text: &str,
    ) -> Result<(), Error> {
        digits::validate(text)?;
        self.number.clear();
        self.number
            .push_str(text)
            .map_err(|_| Error::TooManyDigits { max: MAX_DIGITS })?;

        // Position count may have changed, old drivers no longer line up
        self.drivers.clear();
        roll_debug!("number set to {}", self.number.as_str());
        self.invalidate_model();
        Ok(())
    }

    /// Recompute start digits and text metrics, then request a redraw.
    fn invalidate_model(&mut self) {
        self.metrics = TextMetrics::measure(&self.number, self.text_size, self.text_color);
        match digits::start_digits(&self.number) {
            Ok(starts) => self.start_digits = starts,
            Err(_) => self.start_digits.clear(),
        }
        self.request_redraw();
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Parse the displayed number.
    ///
    /// Fails with [`Error::InvalidNumberFormat`] when the widget is empty or
    /// the digits overflow a `u32`.
    pub fn number(&self) -> Result<u32, Error> { digits::parse_number(&self.number) }

    #[inline]
    pub fn number_text(&self) -> &str { &self.number }

    #[inline]
    pub const fn text_color(&self) -> Rgb565 { self.text_color }

    #[inline]
    pub const fn text_size(&self) -> u32 { self.text_size }

    #[inline]
    pub const fn char_spacing(&self) -> u32 { self.char_spacing }

    #[inline]
    pub const fn anim_duration_ms(&self) -> u32 { self.anim_duration_ms }

    #[inline]
    pub const fn padding(&self) -> Padding { self.padding }

    #[inline]
    pub const fn bounds(&self) -> Rectangle { self.bounds }

    #[inline]
    pub fn start_digits(&self) -> &[u8] { &self.start_digits }

    #[inline]
    pub const fn metrics(&self) -> &TextMetrics { &self.metrics }

    /// Drivers of the current roll, empty before the first `play`.
    #[inline]
    pub fn drivers(&self) -> &[RollDriver] { &self.drivers }

    /// Number of redraw requests raised so far (wraps).
    #[inline]
    pub const fn invalidation_count(&self) -> u32 { self.invalidations }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Desired size under the host's constraints.
    pub const fn measure(
        &self,
        width: MeasureSpec,
        height: MeasureSpec,
    ) -> Size {
        layout::measure(width, height, self.text_size)
    }

    // =========================================================================
    // Animation
    // =========================================================================

    /// Start (or restart) the roll at `now_ms`.
    ///
    /// All running drivers are dropped and every position restarts from
    /// progress 0. Position `i` rolls for `duration + i * 100` ms.
    pub fn play(
        &mut self,
        now_ms: u64,
    ) {
        self.drivers.clear();
        for i in 0..self.start_digits.len() {
            let duration_ms = self.anim_duration_ms.saturating_add(STAGGER_MS * i as u32);
            let mut driver = RollDriver::new(duration_ms, self.easing);
            driver.start(now_ms);
            if self.drivers.push(driver).is_err() {
                break;
            }
        }
        roll_debug!("play: {} positions at {} ms", self.drivers.len(), now_ms);
        self.request_redraw();
    }

    /// Advance all drivers to `now_ms`.
    ///
    /// Requests a redraw whenever a roll was in progress, including the tick
    /// that finishes it, so the settled frame gets drawn. Returns `true` while
    /// any position is still rolling.
    pub fn tick(
        &mut self,
        now_ms: u64,
    ) -> bool {
        let was_running = self.is_animating();
        let mut running = false;
        for driver in &mut self.drivers {
            running |= driver.update(now_ms);
        }

        if was_running {
            self.request_redraw();
            if !running {
                roll_debug!("roll settled at {} ms", now_ms);
            }
        }
        running
    }

    /// Whether any position is still rolling.
    pub fn is_animating(&self) -> bool { self.drivers.iter().any(RollDriver::is_running) }

    /// Progress of position `index`. Settled (1.0) when no driver exists.
    pub fn progress(
        &self,
        index: usize,
    ) -> f32 {
        self.drivers.get(index).map_or(1.0, RollDriver::progress)
    }

    /// Upward shift of the glyph stack of position `index` in pixels.
    pub fn scroll_offset(
        &self,
        index: usize,
    ) -> i32 {
        (self.text_size as f32 * ROLL_STEPS as f32 * self.progress(index)).round() as i32
    }

    /// Digit currently closest to the slot of position `index`.
    pub fn visible_digit(
        &self,
        index: usize,
    ) -> Option<u8> {
        let start = *self.start_digits.get(index)?;
        let steps = (ROLL_STEPS as f32 * self.progress(index)).round() as usize;
        Some(stack_digit(start, steps.min(GLYPH_STACK - 1)))
    }

    // =========================================================================
    // Redraw
    // =========================================================================

    fn request_redraw(&mut self) {
        self.redraw_requested = true;
        self.invalidations = self.invalidations.wrapping_add(1);
    }

    /// Return and clear the pending redraw request.
    pub fn take_redraw_request(&mut self) -> bool { core::mem::take(&mut self.redraw_requested) }

    /// Draw the digit strip.
    ///
    /// Nothing is drawn for an empty number or a text size of 0.
    pub fn draw<D>(
        &self,
        display: &mut D,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        let Some(style) = self.metrics.style() else {
            return;
        };
        if self.start_digits.is_empty() {
            return;
        }

        let strip = StripLayout::compute(
            &self.bounds,
            self.padding,
            &self.metrics,
            self.start_digits.len(),
            self.char_spacing,
        );
        roll_trace!(
            "draw: bounds {}x{} padding {} {} {} {} text {}x{} descent {}",
            self.bounds.size.width,
            self.bounds.size.height,
            self.padding.left,
            self.padding.top,
            self.padding.right,
            self.padding.bottom,
            self.metrics.text_width(),
            self.text_size,
            self.metrics.descent()
        );

        let mut clipped = display.clipped(&self.bounds);
        let stride = i32::try_from(self.text_size).unwrap_or(i32::MAX);
        let half_descent = i32::try_from(self.metrics.descent() / 2).unwrap_or(0);
        let baseline = strip.top.saturating_add(stride).saturating_sub(half_descent);

        for (i, &start) in self.start_digits.iter().enumerate() {
            let x = strip.x(i).round() as i32;
            let mut y = baseline.saturating_sub(self.scroll_offset(i));
            for j in 0..GLYPH_STACK {
                Text::with_baseline(glyph(stack_digit(start, j)), Point::new(x, y), style, Baseline::Alphabetic)
                    .draw(&mut clipped)
                    .ok();
                y = y.saturating_add(stride);
            }
        }
    }
}

impl Default for NumberView {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================
