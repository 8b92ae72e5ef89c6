//! Rolling digits simulator for Windows/Desktop.
//!
//! Hosts a single [`NumberView`] in an `embedded-graphics-simulator` window
//! and drives it with a fixed frame loop.
//!
//! # Keys
//!
//! - `P`: play the roll
//! - `W` / `S`: change the number and play
//! - `C`: cycle the digit color
//! - `A` / `Z`: grow / shrink the text

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]

mod hud;
mod timing;

use std::thread;
use std::time::Instant;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use log::{debug, error, info};
use rolling_digits::colors::{BLACK, PALETTE};
use rolling_digits::{MeasureSpec, NumberView, NumberViewConfig};

use crate::hud::draw_hud;
use crate::timing::{FRAME_TIME, millis_since};

const SCREEN_WIDTH: u32 = 320;
const SCREEN_HEIGHT: u32 = 240;

/// Vertical center of the digit strip.
const STRIP_CENTER_Y: i32 = 100;

/// Number change per W/S press. Touches every digit position.
const NUMBER_STEP: u32 = 1111;

const TEXT_SIZE_STEP: u32 = 4;
const TEXT_SIZE_MAX: u32 = 64;

/// Initial widget attributes.
const DEMO_CONFIG: &str = r#"
number = "1234567890"
text_color = 65535
text_size = 40
char_spacing = 4
anim_duration_ms = 1000
padding = [8, 0, 8, 0]
"#;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config: NumberViewConfig = match toml::from_str(DEMO_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid demo config: {e}");
            return;
        }
    };
    let mut view = match NumberView::from_config(&config) {
        Ok(view) => view,
        Err(e) => {
            error!("Cannot build widget: {e}");
            return;
        }
    };
    layout_view(&mut view);

    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("Rolling Digits Sim", &output_settings);

    display.clear(BLACK).ok();
    window.update(&display);

    let clock = Instant::now();
    let mut number = view.number().unwrap_or(0);
    let mut color_idx = 0usize;

    view.play(millis_since(clock));
    info!("Simulator started with {}", view.number_text());

    loop {
        let frame_start = Instant::now();
        let now_ms = millis_since(clock);

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::P => view.play(now_ms),
                        Keycode::W => {
                            number = number.saturating_add(NUMBER_STEP);
                            view.set_number(number);
                            view.play(now_ms);
                        }
                        Keycode::S => {
                            number = number.saturating_sub(NUMBER_STEP);
                            view.set_number(number);
                            view.play(now_ms);
                        }
                        Keycode::C => {
                            color_idx = (color_idx + 1) % PALETTE.len();
                            view.set_text_color(PALETTE[color_idx]);
                        }
                        Keycode::A => {
                            view.set_text_size((view.text_size() + TEXT_SIZE_STEP).min(TEXT_SIZE_MAX));
                            layout_view(&mut view);
                        }
                        Keycode::Z => {
                            view.set_text_size(view.text_size().saturating_sub(TEXT_SIZE_STEP));
                            layout_view(&mut view);
                        }
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        view.tick(now_ms);
        if view.take_redraw_request() {
            display.clear(BLACK).ok();
            view.draw(&mut display);
            let bounds = view.bounds();
            draw_hud(&mut display, &view, bounds.top_left.y, bounds.size.height);
        }
        window.update(&display);

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_TIME {
            thread::sleep(FRAME_TIME - elapsed);
        }
    }
}

/// Measure the widget against the screen and center it vertically.
fn layout_view(view: &mut NumberView) {
    let size = view.measure(MeasureSpec::Exactly(SCREEN_WIDTH), MeasureSpec::AtMost(SCREEN_HEIGHT));
    let top = STRIP_CENTER_Y - size.height as i32 / 2;
    view.set_bounds(Rectangle::new(Point::new(0, top), size));
    debug!("Widget laid out at y={top} size {}x{}", size.width, size.height);
}
