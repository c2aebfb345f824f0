//! Closed-form IK solve for the two-link planar arm.
//!
//! Unlike an iterative solver, a two-link planar chain admits an exact
//! trigonometric solution: the elbow angle follows from the law of cosines,
//! the shoulder angle from the target bearing minus the forearm's angular
//! offset. An unreachable target is an expected outcome and maps to `None`,
//! never to an error.

use nalgebra::Point2;

use crate::planar::{JointAngles, PlanarArm};

impl PlanarArm {
    /// Solve for the joint configuration placing the wrist at `target`.
    ///
    /// Returns `None` when the target lies outside the reachable annulus
    /// (`r > upper + fore` or `r < |upper − fore|`).
    ///
    /// Only the elbow-up branch (non-negative elbow angle) is returned.
    /// The mirrored elbow-down solution with a negated elbow angle is
    /// equally valid but never produced; callers that need branch choice
    /// must negate the elbow angle themselves.
    #[must_use]
    pub fn solve(&self, target: Point2<f64>) -> Option<JointAngles> {
        let r = target.coords.norm();
        if r > self.max_reach() || r < self.min_reach() {
            return None;
        }

        let upper = self.upper();
        let fore = self.fore();

        // Law of cosines for the elbow. At the annulus boundaries rounding
        // can push the ratio a hair outside [-1, 1] and acos would return
        // NaN, so clamp before taking the arccosine.
        let cos_elbow = (r * r - upper * upper - fore * fore) / (2.0 * upper * fore);
        let elbow = cos_elbow.clamp(-1.0, 1.0).acos();

        let shoulder = target.y.atan2(target.x)
            - (fore * elbow.sin()).atan2(upper + fore * elbow.cos());

        Some(JointAngles::new(shoulder.to_degrees(), elbow.to_degrees()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn test_arm() -> PlanarArm {
        PlanarArm::new(8.0, 10.0).unwrap()
    }

    /// Solve, then check the wrist lands back on the target via FK.
    fn assert_round_trips(arm: &PlanarArm, target: Point2<f64>) {
        let angles = arm
            .solve(target)
            .unwrap_or_else(|| panic!("target ({}, {}) should be reachable", target.x, target.y));
        let wrist = arm.forward(angles);
        assert_relative_eq!(wrist.x, target.x, epsilon = 1e-6);
        assert_relative_eq!(wrist.y, target.y, epsilon = 1e-6);
    }

    // -- reachable targets --

    #[test]
    fn solves_interior_target() {
        // r = hypot(5, 5) ≈ 7.07, well inside [2, 18].
        assert_round_trips(&test_arm(), Point2::new(5.0, 5.0));
    }

    #[test]
    fn solves_targets_in_all_quadrants() {
        let arm = test_arm();
        assert_round_trips(&arm, Point2::new(10.0, 4.0));
        assert_round_trips(&arm, Point2::new(-10.0, 4.0));
        assert_round_trips(&arm, Point2::new(-6.0, -9.0));
        assert_round_trips(&arm, Point2::new(6.0, -9.0));
    }

    #[test]
    fn solves_target_on_negative_x_axis() {
        assert_round_trips(&test_arm(), Point2::new(-12.0, 0.0));
    }

    #[test]
    fn elbow_branch_is_never_negative() {
        let arm = test_arm();
        for target in [
            Point2::new(5.0, 5.0),
            Point2::new(14.0, 2.0),
            Point2::new(-3.0, 7.0),
            Point2::new(0.0, -10.0),
        ] {
            let angles = arm.solve(target).unwrap();
            assert!(
                (0.0..=180.0).contains(&angles.elbow),
                "elbow {} out of the acos branch for ({}, {})",
                angles.elbow,
                target.x,
                target.y
            );
        }
    }

    // -- boundaries --

    #[test]
    fn full_extension_boundary_solves_with_straight_elbow() {
        let arm = test_arm();
        let angles = arm.solve(Point2::new(18.0, 0.0)).unwrap();
        assert_relative_eq!(angles.elbow, 0.0, epsilon = 1e-6);
        assert_relative_eq!(angles.shoulder, 0.0, epsilon = 1e-6);
        assert!(angles.shoulder.is_finite() && angles.elbow.is_finite());
    }

    #[test]
    fn full_extension_boundary_straight_up() {
        // r = 18 exactly at a 90° bearing: cos ratio lands on 1.0 and the
        // clamp keeps acos in-domain.
        let arm = test_arm();
        let angles = arm.solve(Point2::new(0.0, 18.0)).unwrap();
        assert_relative_eq!(angles.elbow, 0.0, epsilon = 1e-6);
        assert_relative_eq!(angles.shoulder, 90.0, epsilon = 1e-6);
        assert_round_trips(&arm, Point2::new(0.0, 18.0));
    }

    #[test]
    fn inner_boundary_solves_with_folded_elbow() {
        // r = |8 − 10| = 2 exactly: the arm folds back on itself.
        let arm = test_arm();
        let angles = arm.solve(Point2::new(2.0, 0.0)).unwrap();
        assert_relative_eq!(angles.elbow, 180.0, epsilon = 1e-6);
        assert_round_trips(&arm, Point2::new(2.0, 0.0));
    }

    #[test]
    fn inner_boundary_off_axis() {
        let arm = test_arm();
        assert_round_trips(&arm, Point2::new(0.0, 2.0));
    }

    // -- unreachable targets --

    #[test]
    fn origin_is_unreachable() {
        // r = 0 < min_reach = 2.
        assert!(test_arm().solve(Point2::new(0.0, 0.0)).is_none());
    }

    #[test]
    fn too_close_is_unreachable() {
        assert!(test_arm().solve(Point2::new(1.0, 1.0)).is_none());
    }

    #[test]
    fn too_far_is_unreachable() {
        assert!(test_arm().solve(Point2::new(18.1, 0.0)).is_none());
        assert!(test_arm().solve(Point2::new(13.0, 13.0)).is_none());
    }

    #[test]
    fn solvability_matches_reachability_query() {
        let arm = test_arm();
        for target in [
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(5.0, 5.0),
            Point2::new(18.0, 0.0),
            Point2::new(19.0, 0.0),
            Point2::new(-1.5, 0.5),
        ] {
            assert_eq!(arm.solve(target).is_some(), arm.is_reachable(target));
        }
    }

    // -- equal link lengths --

    #[test]
    fn equal_links_can_reach_the_shoulder() {
        // min_reach = 0: the arm can fold the wrist onto the origin.
        let arm = PlanarArm::new(5.0, 5.0).unwrap();
        let angles = arm.solve(Point2::new(0.0, 0.0)).unwrap();
        let wrist = arm.forward(angles);
        assert_relative_eq!(wrist.coords.norm(), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn solver_is_deterministic() {
        let arm = test_arm();
        let a = arm.solve(Point2::new(7.5, -3.25)).unwrap();
        let b = arm.solve(Point2::new(7.5, -3.25)).unwrap();
        assert_eq!(a, b);
    }
}
