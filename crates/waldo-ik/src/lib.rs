//! Inverse kinematics for a planar two-link arm.
//!
//! Provides forward kinematics, reachable-workspace queries, and a
//! closed-form (analytic) IK solve for an arm with two revolute joints
//! moving in a plane.
//!
//! # Architecture
//!
//! ```text
//! PlanarArm ──► solve(target) ──► JointAngles (or None when out of reach)
//! ```
//!
//! The [`PlanarArm`] owns the link geometry. [`PlanarArm::solve`] maps a
//! target point in arm space to a joint configuration; the target is
//! unreachable exactly when its distance from the shoulder falls outside
//! the annulus between [`PlanarArm::min_reach`] and [`PlanarArm::max_reach`].

pub mod planar;
pub mod solver;

pub use planar::{GeometryError, JointAngles, PlanarArm};
