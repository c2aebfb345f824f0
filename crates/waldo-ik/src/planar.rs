//! Planar two-link arm geometry.
//!
//! A [`PlanarArm`] is an upper arm and a forearm joined by revolute joints
//! in a plane: the shoulder sits at the origin, the elbow at the end of the
//! upper arm, the wrist (end effector) at the end of the forearm. Angles
//! are exposed in degrees; conversion to radians happens only inside the
//! trigonometry.

use nalgebra::Point2;
use thiserror::Error;

// ---------------------------------------------------------------------------
// GeometryError
// ---------------------------------------------------------------------------

/// Errors constructing arm geometry.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    #[error("Link length must be positive: upper={upper}, fore={fore}")]
    NonPositiveLink { upper: f64, fore: f64 },
}

// ---------------------------------------------------------------------------
// JointAngles
// ---------------------------------------------------------------------------

/// A joint configuration, in degrees.
///
/// `shoulder` is measured from the positive x-axis; `elbow` is measured
/// relative to the upper-arm direction, so the forearm's absolute angle is
/// `shoulder + elbow`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct JointAngles {
    /// Shoulder angle in degrees, from the +x axis.
    pub shoulder: f64,
    /// Elbow angle in degrees, relative to the upper arm.
    pub elbow: f64,
}

impl JointAngles {
    /// Create a configuration from degrees.
    #[must_use]
    pub const fn new(shoulder: f64, elbow: f64) -> Self {
        Self { shoulder, elbow }
    }

    /// The rest pose the simulator starts in: upper arm straight up,
    /// elbow extended.
    #[must_use]
    pub const fn home() -> Self {
        Self {
            shoulder: 90.0,
            elbow: 0.0,
        }
    }
}

impl std::fmt::Display for JointAngles {
    /// On-screen readout format: `θ1: 90.0° | θ2: 0.0°`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "\u{3b8}1: {:.1}\u{b0} | \u{3b8}2: {:.1}\u{b0}",
            self.shoulder, self.elbow
        )
    }
}

// ---------------------------------------------------------------------------
// PlanarArm
// ---------------------------------------------------------------------------

/// Link geometry of a two-link planar arm.
///
/// Immutable once constructed; one instance lives for the whole simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanarArm {
    upper: f64,
    fore: f64,
}

impl PlanarArm {
    /// Create an arm from the two link lengths (upper arm, forearm).
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NonPositiveLink`] if either length is not
    /// strictly positive.
    pub fn new(upper: f64, fore: f64) -> Result<Self, GeometryError> {
        if upper <= 0.0 || fore <= 0.0 {
            return Err(GeometryError::NonPositiveLink { upper, fore });
        }
        Ok(Self { upper, fore })
    }

    /// Upper-arm length.
    #[must_use]
    pub const fn upper(&self) -> f64 {
        self.upper
    }

    /// Forearm length.
    #[must_use]
    pub const fn fore(&self) -> f64 {
        self.fore
    }

    /// Outer radius of the reachable workspace (`upper + fore`).
    #[must_use]
    pub fn max_reach(&self) -> f64 {
        self.upper + self.fore
    }

    /// Inner radius of the reachable workspace (`|upper − fore|`).
    ///
    /// Targets closer to the shoulder than this sit inside the annulus the
    /// elbow cannot fold past.
    #[must_use]
    pub fn min_reach(&self) -> f64 {
        (self.upper - self.fore).abs()
    }

    /// Whether `target` lies inside the reachable annulus (boundary
    /// inclusive).
    #[must_use]
    pub fn is_reachable(&self, target: Point2<f64>) -> bool {
        let r = target.coords.norm();
        r >= self.min_reach() && r <= self.max_reach()
    }

    /// Forward kinematics: wrist (end-effector) position for a joint
    /// configuration.
    #[must_use]
    pub fn forward(&self, angles: JointAngles) -> Point2<f64> {
        self.joint_points(angles).1
    }

    /// Elbow and wrist positions for a joint configuration.
    ///
    /// Renderers draw the two segments shoulder→elbow and elbow→wrist from
    /// these points.
    #[must_use]
    pub fn joint_points(&self, angles: JointAngles) -> (Point2<f64>, Point2<f64>) {
        let t1 = angles.shoulder.to_radians();
        let t2 = (angles.shoulder + angles.elbow).to_radians();

        let elbow = Point2::new(self.upper * t1.cos(), self.upper * t1.sin());
        let wrist = Point2::new(elbow.x + self.fore * t2.cos(), elbow.y + self.fore * t2.sin());
        (elbow, wrist)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
