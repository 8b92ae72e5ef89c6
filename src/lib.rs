//! Rolling number widget for `embedded-graphics` displays.
//!
//! Displays a decimal number and animates every digit with a slot-machine
//! style roll: each position starts half a revolution away from its target
//! digit and scrolls upward until the target settles into the visible slot.
//! Later positions settle later (staggered durations).
//!
//! - [`digits`]: Digit wraparound math and the glyph lookup table
//! - [`metrics`]: Font selection and cached text measurements
//! - [`driver`]: Per-position time-based progress drivers
//! - [`layout`]: Padding, measure specs and strip geometry
//! - [`config`]: Constants and the declarative [`NumberViewConfig`]
//! - [`view`]: The [`NumberView`] widget tying it all together
//!
//! # Frame Loop
//!
//! The widget never schedules itself. The host calls [`NumberView::tick`]
//! once per frame and redraws when a redraw was requested:
//!
//! ```ignore
//! view.play(now_ms);
//! loop {
//!     let now_ms = clock.millis();
//!     view.tick(now_ms);
//!     if view.take_redraw_request() {
//!         display.clear(BLACK).ok();
//!         view.draw(&mut display);
//!     }
//! }
//! ```
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test -p rolling-digits --lib
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), the library itself is `no_std`.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

#[macro_use]
mod trace;

pub mod colors;
pub mod config;
pub mod digits;
pub mod driver;
mod error;
pub mod layout;
pub mod metrics;
pub mod view;

pub use config::NumberViewConfig;
pub use digits::calc_num;
pub use driver::{DriverState, Easing, RollDriver};
pub use error::Error;
pub use layout::{MeasureSpec, Padding};
pub use metrics::TextMetrics;
pub use view::NumberView;
