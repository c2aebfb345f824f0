//! Speed schedule for bounded angle interpolation.

// ---------------------------------------------------------------------------
// SpeedProfile
// ---------------------------------------------------------------------------

/// Distance-proportional speed schedule with floor and ceiling, in degrees
/// per tick.
///
/// The per-tick step for a joint `dist` degrees away from its target is
/// `clamp(dist × gain, min_step, max_step)`, further capped at `dist` so a
/// single step never crosses the target. Distances at or below
/// `snap_epsilon` snap straight to the target, which terminates the
/// floating-point tail instead of approaching it asymptotically.
///
/// The defaults give ease-out motion: far joints sweep at `max_step`,
/// near joints slow down proportionally until the floor, then snap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpeedProfile {
    /// Slowest per-tick step (degrees). Keeps the final approach moving.
    pub min_step: f64,
    /// Fastest per-tick step (degrees).
    pub max_step: f64,
    /// Fraction of the remaining distance covered per tick before clamping.
    pub gain: f64,
    /// Distances at or below this snap directly onto the target (degrees).
    pub snap_epsilon: f64,
}

impl Default for SpeedProfile {
    fn default() -> Self {
        Self {
            min_step: 0.2,
            max_step: 5.0,
            gain: 0.1,
            snap_epsilon: 0.05,
        }
    }
}

impl SpeedProfile {
    /// Create a profile from all four parameters.
    #[must_use]
    pub const fn new(min_step: f64, max_step: f64, gain: f64, snap_epsilon: f64) -> Self {
        Self {
            min_step,
            max_step,
            gain,
            snap_epsilon,
        }
    }

    /// Builder: set the per-tick floor.
    #[must_use]
    pub const fn with_min_step(mut self, min_step: f64) -> Self {
        self.min_step = min_step;
        self
    }

    /// Builder: set the per-tick ceiling.
    #[must_use]
    pub const fn with_max_step(mut self, max_step: f64) -> Self {
        self.max_step = max_step;
        self
    }

    /// Builder: set the proportional gain.
    #[must_use]
    pub const fn with_gain(mut self, gain: f64) -> Self {
        self.gain = gain;
        self
    }

    /// Builder: set the snap threshold.
    #[must_use]
    pub const fn with_snap_epsilon(mut self, snap_epsilon: f64) -> Self {
        self.snap_epsilon = snap_epsilon;
        self
    }

    /// Per-tick step size for a joint `dist` degrees from its target.
    ///
    /// `dist` must be non-negative. The result never exceeds `dist`.
    #[must_use]
    pub fn step_size(&self, dist: f64) -> f64 {
        (dist * self.gain).clamp(self.min_step, self.max_step).min(dist)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
