use std::fmt;
use std::time::Duration;

use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// SimTime
// ---------------------------------------------------------------------------

/// Integer-nanosecond simulation clock.
///
/// Tracks elapsed simulated time as a monotonically increasing `u64`
/// nanosecond count, which avoids floating-point accumulation drift over
/// long runs.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize, Resource,
)]
pub struct SimTime {
    nanos: u64,
}

impl SimTime {
    /// Create a new `SimTime` at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self { nanos: 0 }
    }

    /// Create a `SimTime` from seconds.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_secs(secs: f64) -> Self {
        Self {
            nanos: (secs * 1_000_000_000.0) as u64,
        }
    }

    /// Raw nanosecond count.
    #[must_use]
    pub const fn nanos(&self) -> u64 {
        self.nanos
    }

    /// Elapsed milliseconds (truncated).
    #[must_use]
    pub const fn millis(&self) -> u64 {
        self.nanos / 1_000_000
    }

    /// Elapsed seconds as `f64`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn secs_f64(&self) -> f64 {
        self.nanos as f64 / 1_000_000_000.0
    }

    /// Advance the clock by `delta_secs` seconds.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn advance_secs(&mut self, delta_secs: f64) {
        let delta_nanos = (delta_secs * 1_000_000_000.0) as u64;
        self.nanos = self.nanos.saturating_add(delta_nanos);
    }

    /// Reset the clock to zero.
    pub const fn reset(&mut self) {
        self.nanos = 0;
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.nanos / 1_000_000_000;
        let millis = (self.nanos % 1_000_000_000) / 1_000_000;
        write!(f, "{secs}.{millis:03}s")
    }
}

// ---------------------------------------------------------------------------
// Clock
// ---------------------------------------------------------------------------

/// Fixed-rate tick pacer implementing the "fix your timestep" pattern.
///
/// Feed real-world frame deltas with [`tick`](Self::tick); each call to
/// [`should_step`](Self::should_step) that returns `true` consumes one tick
/// worth of accumulated time. The number of catch-up ticks per frame is
/// capped so a long stall cannot spiral into an ever-growing backlog.
#[derive(Debug, Clone)]
pub struct Clock {
    accumulated: u64,
    tick_nanos: u64,
    max_catch_up: u32,
    ticks_this_frame: u32,
}

impl Clock {
    /// Create a clock ticking at `tick_hz` ticks per second.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn new(tick_hz: f64) -> Self {
        Self {
            accumulated: 0,
            tick_nanos: (1_000_000_000.0 / tick_hz) as u64,
            max_catch_up: 10,
            ticks_this_frame: 0,
        }
    }

    /// Set the maximum number of catch-up ticks per frame.
    #[must_use]
    pub const fn with_max_catch_up(mut self, max_catch_up: u32) -> Self {
        self.max_catch_up = max_catch_up;
        self
    }

    /// Feed a real-world frame delta and reset the per-frame tick counter.
    #[allow(clippy::cast_possible_truncation)]
    pub const fn tick(&mut self, delta: Duration) {
        self.accumulated = self.accumulated.saturating_add(delta.as_nanos() as u64);
        self.ticks_this_frame = 0;
    }

    /// Returns `true` while at least one tick worth of time is accumulated
    /// and the per-frame cap has not been reached; each `true` consumes one
    /// tick from the accumulator.
    pub const fn should_step(&mut self) -> bool {
        if self.ticks_this_frame >= self.max_catch_up {
            return false;
        }
        if self.accumulated >= self.tick_nanos {
            self.accumulated -= self.tick_nanos;
            self.ticks_this_frame += 1;
            return true;
        }
        false
    }

    /// Duration of one tick.
    #[must_use]
    pub const fn tick_interval(&self) -> Duration {
        Duration::from_nanos(self.tick_nanos)
    }

    /// One tick in seconds.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn tick_dt(&self) -> f64 {
        self.tick_nanos as f64 / 1_000_000_000.0
    }

    /// Drop any accumulated time and reset the per-frame counter.
    pub const fn reset(&mut self) {
        self.accumulated = 0;
        self.ticks_this_frame = 0;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // ---- SimTime ----

    #[test]
    fn simtime_starts_at_zero() {
        assert_eq!(SimTime::new().nanos(), 0);
    }

    #[test]
    fn simtime_from_secs() {
        let t = SimTime::from_secs(2.5);
        assert_eq!(t.nanos(), 2_500_000_000);
        assert_eq!(t.millis(), 2500);
        assert!((t.secs_f64() - 2.5).abs() < 1e-9);
    }

    #[test]
    fn simtime_advance_accumulates() {
        let mut t = SimTime::new();
        for _ in 0..60 {
            t.advance_secs(1.0 / 60.0);
        }
        // 60 ticks of 1/60 s ≈ 1 s, within integer truncation per step.
        assert!((t.secs_f64() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn simtime_reset() {
        let mut t = SimTime::from_secs(5.0);
        t.reset();
        assert_eq!(t.nanos(), 0);
    }

    #[test]
    fn simtime_display() {
        assert_eq!(SimTime::from_secs(1.234).to_string(), "1.234s");
        assert_eq!(SimTime::new().to_string(), "0.000s");
    }

    #[test]
    fn simtime_ordering() {
        assert!(SimTime::from_secs(1.0) < SimTime::from_secs(2.0));
        assert_eq!(SimTime::from_secs(1.0), SimTime::from_secs(1.0));
    }

    // ---- Clock ----

    #[test]
    fn clock_steps_once_per_tick_interval() {
        let mut clock = Clock::new(60.0);
        clock.tick(clock.tick_interval());
        assert!(clock.should_step());
        assert!(!clock.should_step());
    }

    #[test]
    fn clock_accumulates_partial_frames() {
        let mut clock = Clock::new(100.0); // 10 ms ticks
        clock.tick(Duration::from_millis(35));
        let mut count = 0;
        while clock.should_step() {
            count += 1;
        }
        assert_eq!(count, 3);

        // The 5 ms remainder carries into the next frame.
        clock.tick(Duration::from_millis(5));
        assert!(clock.should_step());
    }

    #[test]
    fn clock_caps_catch_up_ticks() {
        let mut clock = Clock::new(1000.0).with_max_catch_up(3);
        clock.tick(Duration::from_millis(100)); // 100 ticks worth
        let mut count = 0;
        while clock.should_step() {
            count += 1;
        }
        assert_eq!(count, 3);
    }

    #[test]
    fn clock_default_catch_up_cap() {
        let mut clock = Clock::new(1000.0);
        clock.tick(Duration::from_millis(50)); // 50 ticks worth
        let mut count = 0;
        while clock.should_step() {
            count += 1;
        }
        assert_eq!(count, 10);
    }

    #[test]
    fn clock_tick_dt() {
        let clock = Clock::new(60.0);
        assert!((clock.tick_dt() - 1.0 / 60.0).abs() < 1e-9);
    }

    #[test]
    fn clock_reset_drops_backlog() {
        let mut clock = Clock::new(60.0);
        clock.tick(Duration::from_secs(1));
        clock.reset();
        assert!(!clock.should_step());
    }
}
