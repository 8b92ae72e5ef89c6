//! Per-position roll progress.
//!
//! Each digit position owns one [`RollDriver`]. A driver maps wall-clock
//! time to a progress value in `0.0..=1.0` over its duration:
//!
//! ```text
//! Idle --start()--> Running --elapsed >= duration--> Finished
//! ```
//!
//! Drivers are never restarted. `play()` discards all of them and creates
//! new ones, so a superseded `Running` driver simply disappears.
//!
//! **FPS Independence**: progress is computed from elapsed milliseconds, not
//! from the number of ticks. A host that stops ticking for a while sees the
//! roll jump ahead when it resumes.

#[cfg(not(test))]
use micromath::F32Ext;

/// Lifecycle of a [`RollDriver`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriverState {
    /// Created, not started yet.
    #[default]
    Idle,
    /// Progress advancing with time.
    Running,
    /// Progress reached 1.0.
    Finished,
}

/// Mapping from linear time fraction to progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Easing {
    /// Progress equals the time fraction.
    Linear,
    /// Slow start and end, fast middle: `cos((t + 1)π) / 2 + 0.5`.
    #[default]
    AccelerateDecelerate,
}

impl Easing {
    /// Apply the easing curve. `0.0` and `1.0` map to themselves exactly.
    pub fn apply(
        self,
        t: f32,
    ) -> f32 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Self::Linear => t,
            Self::AccelerateDecelerate => {
                let eased = ((t + 1.0) * core::f32::consts::PI).cos() / 2.0 + 0.5;
                eased.clamp(0.0, 1.0)
            }
        }
    }
}

/// Time-based progress driver for one digit position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RollDriver {
    duration_ms: u32,
    easing: Easing,
    start_ms: u64,
    progress: f32,
    state: DriverState,
}

impl RollDriver {
    /// Create an idle driver. Progress stays 0 until started.
    pub const fn new(
        duration_ms: u32,
        easing: Easing,
    ) -> Self {
        Self {
            duration_ms,
            easing,
            start_ms: 0,
            progress: 0.0,
            state: DriverState::Idle,
        }
    }

    /// Start the driver at `now_ms`.
    ///
    /// A zero duration finishes immediately. Starting a driver that is not
    /// idle has no effect.
    pub fn start(
        &mut self,
        now_ms: u64,
    ) {
        if self.state != DriverState::Idle {
            return;
        }
        self.start_ms = now_ms;
        self.state = DriverState::Running;
        self.update(now_ms);
    }

    /// Advance progress to `now_ms`.
    ///
    /// Returns `true` while the driver is still running afterwards.
    pub fn update(
        &mut self,
        now_ms: u64,
    ) -> bool {
        if self.state != DriverState::Running {
            return false;
        }

        // A clock that goes backwards never rewinds progress
        let elapsed = now_ms.saturating_sub(self.start_ms);
        if elapsed >= u64::from(self.duration_ms) {
            self.progress = 1.0;
            self.state = DriverState::Finished;
            return false;
        }

        let t = elapsed as f32 / self.duration_ms as f32;
        self.progress = self.progress.max(self.easing.apply(t));
        true
    }

    /// Current progress in `0.0..=1.0`.
    #[inline]
    pub const fn progress(&self) -> f32 { self.progress }

    #[inline]
    pub const fn state(&self) -> DriverState { self.state }

    #[inline]
    pub const fn is_running(&self) -> bool { matches!(self.state, DriverState::Running) }

    #[inline]
    pub const fn duration_ms(&self) -> u32 { self.duration_ms }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_endpoints_exact() {
        for easing in [Easing::Linear, Easing::AccelerateDecelerate] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
            assert_eq!(easing.apply(-0.5), 0.0);
            assert_eq!(easing.apply(2.0), 1.0);
        }
    }

    #[test]
    fn test_accelerate_decelerate_midpoint_and_shape() {
        let mid = Easing::AccelerateDecelerate.apply(0.5);
        assert!((mid - 0.5).abs() < 1e-3, "midpoint {mid}");

        // Slow start: eased value lags behind linear in the first half
        assert!(Easing::AccelerateDecelerate.apply(0.2) < 0.2);
        // Fast finish: eased value leads in the second half
        assert!(Easing::AccelerateDecelerate.apply(0.8) > 0.8);
    }

    #[test]
    fn test_accelerate_decelerate_monotonic() {
        let mut prev = 0.0f32;
        for i in 0..=100 {
            let value = Easing::AccelerateDecelerate.apply(i as f32 / 100.0);
            assert!(value >= prev, "step {i}: {value} < {prev}");
            prev = value;
        }
    }

    #[test]
    fn test_new_driver_is_idle() {
        let mut driver = RollDriver::new(1000, Easing::Linear);
        assert_eq!(driver.state(), DriverState::Idle);
        assert_eq!(driver.progress(), 0.0);
        assert!(!driver.update(500), "idle drivers do not advance");
        assert_eq!(driver.progress(), 0.0);
    }

    #[test]
    fn test_linear_progress_over_time() {
        let mut driver = RollDriver::new(1000, Easing::Linear);
        driver.start(10_000);
        assert_eq!(driver.state(), DriverState::Running);
        assert_eq!(driver.progress(), 0.0);

        assert!(driver.update(10_250));
        assert!((driver.progress() - 0.25).abs() < 1e-6);

        assert!(driver.update(10_999));
        assert!(driver.progress() < 1.0);

        assert!(!driver.update(11_000));
        assert_eq!(driver.progress(), 1.0);
        assert_eq!(driver.state(), DriverState::Finished);
    }

    #[test]
    fn test_finished_driver_stays_finished() {
        let mut driver = RollDriver::new(100, Easing::AccelerateDecelerate);
        driver.start(0);
        driver.update(5_000);
        assert_eq!(driver.state(), DriverState::Finished);

        // Neither updates nor restarts leave the finished state
        assert!(!driver.update(50));
        driver.start(6_000);
        assert_eq!(driver.state(), DriverState::Finished);
        assert_eq!(driver.progress(), 1.0);
    }

    #[test]
    fn test_zero_duration_finishes_on_start() {
        let mut driver = RollDriver::new(0, Easing::Linear);
        driver.start(42);
        assert_eq!(driver.state(), DriverState::Finished);
        assert_eq!(driver.progress(), 1.0);
    }

    #[test]
    fn test_clock_going_backwards_holds_progress() {
        let mut driver = RollDriver::new(1000, Easing::Linear);
        driver.start(5_000);
        assert!(driver.update(4_000));
        assert_eq!(driver.progress(), 0.0);

        assert!(driver.update(5_500));
        assert!((driver.progress() - 0.5).abs() < 1e-6);

        // Stepping back before the start or to an earlier frame keeps 0.5
        assert!(driver.update(4_000));
        assert!((driver.progress() - 0.5).abs() < 1e-6);
        assert!(driver.update(5_200));
        assert!((driver.progress() - 0.5).abs() < 1e-6);

        assert!(driver.update(5_750));
        assert!((driver.progress() - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_long_gap_jumps_to_end() {
        let mut driver = RollDriver::new(1000, Easing::AccelerateDecelerate);
        driver.start(0);
        driver.update(100);
        // Host stopped ticking, resumes much later
        assert!(!driver.update(60_000));
        assert_eq!(driver.progress(), 1.0);
    }
}
