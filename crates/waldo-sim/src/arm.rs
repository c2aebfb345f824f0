//! Arm pose state and the fixed pieces of the simulation rig.

use bevy::prelude::*;
use waldo_core::config::SimConfig;
use waldo_ik::{JointAngles, PlanarArm};
use waldo_motion::prelude::{AngleTracker, SpeedProfile};

use crate::viewport::Viewport;

// ---------------------------------------------------------------------------
// ArmState
// ---------------------------------------------------------------------------

/// The arm's pose: current and target angle per joint.
///
/// This is the single owner of the pose. The stepping system is the only
/// writer of the current angles; clicks only ever move the targets.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct ArmState {
    shoulder: AngleTracker,
    elbow: AngleTracker,
}

impl Default for ArmState {
    /// At rest in the home pose (90°, 0°).
    fn default() -> Self {
        Self::new(JointAngles::home())
    }
}

impl ArmState {
    /// Create an arm at rest in `pose`.
    #[must_use]
    pub const fn new(pose: JointAngles) -> Self {
        Self {
            shoulder: AngleTracker::new(pose.shoulder),
            elbow: AngleTracker::new(pose.elbow),
        }
    }

    /// Current joint configuration.
    #[must_use]
    pub const fn current(&self) -> JointAngles {
        JointAngles::new(self.shoulder.current(), self.elbow.current())
    }

    /// Target joint configuration.
    #[must_use]
    pub const fn target(&self) -> JointAngles {
        JointAngles::new(self.shoulder.target(), self.elbow.target())
    }

    /// Aim both joints at a new configuration.
    pub const fn retarget(&mut self, pose: JointAngles) {
        self.shoulder.retarget(pose.shoulder);
        self.elbow.retarget(pose.elbow);
    }

    /// Teleport both joints to `pose`, at rest.
    pub const fn snap_to(&mut self, pose: JointAngles) {
        self.shoulder.snap_to(pose.shoulder);
        self.elbow.snap_to(pose.elbow);
    }

    /// Advance both joints one tick, independently.
    pub fn step(&mut self, profile: &SpeedProfile) {
        self.shoulder.step(profile);
        self.elbow.step(profile);
    }

    /// Whether both joints sit exactly on their targets.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.shoulder.is_settled() && self.elbow.is_settled()
    }
}

// ---------------------------------------------------------------------------
// ArmRig
// ---------------------------------------------------------------------------

/// The immutable pieces of the simulation, derived from [`SimConfig`] once
/// at build time: link geometry, speed schedule, coordinate transform.
#[derive(Resource, Clone, Copy, Debug)]
pub struct ArmRig {
    /// Link geometry and solver.
    pub arm: PlanarArm,
    /// Stepping speed schedule.
    pub profile: SpeedProfile,
    /// Screen ↔ arm-space transform.
    pub viewport: Viewport,
}

impl ArmRig {
    /// Derive the rig from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`waldo_ik::GeometryError`] if the configured link lengths
    /// are not positive (callers normally run `SimConfig::validate` first,
    /// which rejects the same values).
    pub fn from_config(config: &SimConfig) -> Result<Self, waldo_ik::GeometryError> {
        Ok(Self {
            arm: PlanarArm::new(config.upper_arm, config.forearm)?,
            profile: SpeedProfile::new(
                config.motion.min_step,
                config.motion.max_step,
                config.motion.gain,
                config.motion.snap_epsilon,
            ),
            viewport: Viewport::new(&config.viewport),
        })
    }
}

impl Default for ArmRig {
    fn default() -> Self {
        Self::from_config(&SimConfig::default()).expect("default config has valid geometry")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
