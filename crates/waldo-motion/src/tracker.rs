//! Per-joint angle state and stepping.

use crate::profile::SpeedProfile;

// ---------------------------------------------------------------------------
// AngleTracker
// ---------------------------------------------------------------------------

/// Current and target angle for one joint, in degrees.
///
/// [`step`](Self::step) eases `current` toward `target` under a
/// [`SpeedProfile`]. Whether the joint is moving is a derived predicate
/// ([`is_settled`](Self::is_settled)), not stored state: a tracker is at
/// rest exactly when `current == target`, and once settled further steps
/// are no-ops.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngleTracker {
    current: f64,
    target: f64,
}

impl AngleTracker {
    /// Create a tracker at rest at `angle` degrees.
    #[must_use]
    pub const fn new(angle: f64) -> Self {
        Self {
            current: angle,
            target: angle,
        }
    }

    /// Current angle in degrees.
    #[must_use]
    pub const fn current(&self) -> f64 {
        self.current
    }

    /// Target angle in degrees.
    #[must_use]
    pub const fn target(&self) -> f64 {
        self.target
    }

    /// Remaining distance to the target, in degrees (non-negative).
    #[must_use]
    pub fn distance(&self) -> f64 {
        (self.current - self.target).abs()
    }

    /// Whether the tracker has reached its target exactly.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }

    /// Set a new target; the current angle is untouched and subsequent
    /// steps move toward the new target.
    pub const fn retarget(&mut self, target: f64) {
        self.target = target;
    }

    /// Teleport both current and target to `angle` (at rest).
    pub const fn snap_to(&mut self, angle: f64) {
        self.current = angle;
        self.target = angle;
    }

    /// Advance one tick toward the target.
    ///
    /// Within `snap_epsilon` of the target the tracker lands on it exactly;
    /// otherwise it moves by the profile's step size, which never crosses
    /// the target.
    pub fn step(&mut self, profile: &SpeedProfile) {
        let dist = self.distance();
        if dist <= profile.snap_epsilon {
            self.current = self.target;
            return;
        }

        let step = profile.step_size(dist);
        if self.current < self.target {
            self.current += step;
        } else {
            self.current -= step;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
