//! Status line and key hints drawn around the widget.

use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::mono_font::ascii::{FONT_6X10, FONT_10X20};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle};
use embedded_graphics::text::{Alignment, Text, TextStyle, TextStyleBuilder};
use heapless::String;
use rolling_digits::NumberView;
use rolling_digits::colors::{AMBER, GREEN, WHITE};

const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

const TITLE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_10X20, AMBER);
const HINT_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, WHITE);
const STATUS_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, GREEN);
const DIVIDER_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(AMBER, 1);

const TITLE_POS: Point = Point::new(160, 25);
const STATUS_POS: Point = Point::new(160, 180);
const HINT_POS: Point = Point::new(160, 205);
const HINT_POS_2: Point = Point::new(160, 220);

/// Draw title, status and key hints. The widget strip sits between the dividers.
pub fn draw_hud<D>(
    display: &mut D,
    view: &NumberView,
    strip_top: i32,
    strip_height: u32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_text_style("ROLLING DIGITS", TITLE_POS, TITLE_STYLE, CENTERED)
        .draw(display)
        .ok();

    let top = strip_top - 4;
    let bottom = strip_top + strip_height as i32 + 3;
    for y in [top, bottom] {
        Line::new(Point::new(10, y), Point::new(310, y))
            .into_styled(DIVIDER_STYLE)
            .draw(display)
            .ok();
    }

    let mut status: String<48> = String::new();
    let state = if view.is_animating() { "ROLLING" } else { "SETTLED" };
    let _ = write!(status, "{state}  size {}  digits {}", view.text_size(), view.number_text().len());
    Text::with_text_style(&status, STATUS_POS, STATUS_STYLE, CENTERED)
        .draw(display)
        .ok();

    Text::with_text_style("P play  W/S number", HINT_POS, HINT_STYLE, CENTERED)
        .draw(display)
        .ok();
    Text::with_text_style("C color  A/Z text size", HINT_POS_2, HINT_STYLE, CENTERED)
        .draw(display)
        .ok();
}
