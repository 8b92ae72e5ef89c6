//! Frame timing for the simulator.
//!
//! The widget takes plain millisecond timestamps, the simulator derives them
//! from a `std::time::Instant` taken at startup.

use std::time::{Duration, Instant};

/// Target frame time (~60 FPS). The main loop sleeps if a frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(16);

/// Milliseconds elapsed since `start`.
#[inline]
pub fn millis_since(start: Instant) -> u64 { start.elapsed().as_millis() as u64 }
