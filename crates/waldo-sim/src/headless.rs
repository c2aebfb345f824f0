//! Headless end-to-end scenarios.
//!
//! Drives the full loop (scripted input, IK targeting, stepping, flash,
//! render capture) with no window and no GPU, and checks the externally
//! observable behavior.

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::Point2;
    use waldo_ik::JointAngles;

    use crate::arm::ArmRig;
    use crate::builder::SimBuilder;
    use crate::input::ScriptedInput;
    use crate::render::{RecordingRenderer, Tint};

    // Screen coordinates for notable arm-space points under the default
    // viewport (origin (400, 500), 25 px per unit).
    const CLICK_5_5: (f64, f64) = (525.0, 375.0); // arm (5, 5)
    const CLICK_ORIGIN: (f64, f64) = (400.0, 500.0); // arm (0, 0), unreachable
    const CLICK_0_10: (f64, f64) = (400.0, 250.0); // arm (0, 10)

    // -------------------------------------------------------------------
    // Click → converge → render
    // -------------------------------------------------------------------

    #[test]
    fn click_converges_and_wrist_lands_on_target() {
        let renderer = RecordingRenderer::new();
        let log = renderer.log();
        let mut sim = SimBuilder::new()
            .with_input(ScriptedInput::new().click(CLICK_5_5.0, CLICK_5_5.1))
            .with_renderer(renderer)
            .build()
            .unwrap();

        sim.run(200);
        assert!(sim.is_settled());

        // The settled wrist sits on the clicked arm-space point.
        let rig = *sim.app.world().resource::<ArmRig>();
        let wrist = rig.arm.forward(sim.pose());
        assert_relative_eq!(wrist.x, 5.0, epsilon = 1e-6);
        assert_relative_eq!(wrist.y, 5.0, epsilon = 1e-6);

        // One frame per tick, the last one showing the settled pose on a
        // plain background.
        assert_eq!(log.len(), 200);
        let last = log.last().unwrap();
        assert_eq!(last.angles, sim.pose());
        assert_eq!(last.tint, Tint::Normal);
        assert_relative_eq!(last.workspace_radius, 18.0);
    }

    #[test]
    fn motion_eases_out_without_overshoot() {
        let mut sim = SimBuilder::new()
            .with_input(ScriptedInput::new().click(CLICK_0_10.0, CLICK_0_10.1))
            .build()
            .unwrap();

        let target = {
            let rig = *sim.app.world().resource::<ArmRig>();
            rig.arm.solve(Point2::new(0.0, 10.0)).unwrap()
        };

        let mut prev_dist = f64::INFINITY;
        for _ in 0..200 {
            sim.step();
            let pose = sim.pose();
            let dist = (pose.shoulder - target.shoulder)
                .abs()
                .max((pose.elbow - target.elbow).abs());
            assert!(dist <= prev_dist + 1e-9, "distance to target increased");
            prev_dist = dist;
            if sim.is_settled() {
                break;
            }
        }
        assert!(sim.is_settled());
        assert_eq!(sim.pose(), target);
    }

    // -------------------------------------------------------------------
    // Unreachable click → flash
    // -------------------------------------------------------------------

    #[test]
    fn unreachable_click_tints_exactly_flash_ticks_frames() {
        let renderer = RecordingRenderer::new();
        let log = renderer.log();
        let mut sim = SimBuilder::new()
            .with_input(ScriptedInput::new().click(CLICK_ORIGIN.0, CLICK_ORIGIN.1))
            .with_renderer(renderer)
            .build()
            .unwrap();

        sim.run(15);

        let frames = log.frames();
        let tinted = frames
            .iter()
            .filter(|f| f.tint == Tint::ReachAlert)
            .count();
        assert_eq!(tinted, 10);
        // The flash is a prefix: tinted frames come before plain ones.
        assert!(frames[..10].iter().all(|f| f.tint == Tint::ReachAlert));
        assert!(frames[10..].iter().all(|f| f.tint == Tint::Normal));

        // The pose never left home.
        assert_eq!(sim.pose(), JointAngles::home());
        assert_eq!(sim.target_pose(), JointAngles::home());
        assert_eq!(sim.stats().clicks_unreachable, 1);
    }

    #[test]
    fn unreachable_click_mid_flight_does_not_divert_the_arm() {
        let mut sim = SimBuilder::new()
            .with_input(
                ScriptedInput::new()
                    .click(CLICK_5_5.0, CLICK_5_5.1)
                    .idle(3)
                    .click(CLICK_ORIGIN.0, CLICK_ORIGIN.1),
            )
            .build()
            .unwrap();

        sim.run(200);
        assert!(sim.is_settled());

        let rig = *sim.app.world().resource::<ArmRig>();
        let wrist = rig.arm.forward(sim.pose());
        assert_relative_eq!(wrist.x, 5.0, epsilon = 1e-6);
        assert_relative_eq!(wrist.y, 5.0, epsilon = 1e-6);
        assert_eq!(sim.stats().clicks_solved, 1);
        assert_eq!(sim.stats().clicks_unreachable, 1);
    }

    // -------------------------------------------------------------------
    // Retargeting
    // -------------------------------------------------------------------

    #[test]
    fn second_click_redirects_mid_flight() {
        let mut sim = SimBuilder::new()
            .with_input(
                ScriptedInput::new()
                    .click(CLICK_5_5.0, CLICK_5_5.1)
                    .idle(5)
                    .click(CLICK_0_10.0, CLICK_0_10.1),
            )
            .build()
            .unwrap();

        sim.run(250);
        assert!(sim.is_settled());

        let rig = *sim.app.world().resource::<ArmRig>();
        let wrist = rig.arm.forward(sim.pose());
        assert_relative_eq!(wrist.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(wrist.y, 10.0, epsilon = 1e-6);
    }

    // -------------------------------------------------------------------
    // Quit
    // -------------------------------------------------------------------

    #[test]
    fn quit_freezes_pose_and_rendering() {
        let renderer = RecordingRenderer::new();
        let log = renderer.log();
        let mut sim = SimBuilder::new()
            .with_input(
                ScriptedInput::new()
                    .click(CLICK_5_5.0, CLICK_5_5.1)
                    .idle(2)
                    .quit(),
            )
            .with_renderer(renderer)
            .build()
            .unwrap();

        let ran = sim.run(100);
        assert!(ran < 100);
        assert!(!sim.is_running());

        // 3 stepped ticks rendered; the quit tick and everything after
        // rendered nothing.
        assert_eq!(log.len(), 3);
        assert_eq!(sim.stats().ticks, 3);

        let frozen = sim.pose();
        sim.step();
        assert_eq!(sim.pose(), frozen);
        assert_eq!(log.len(), 3);
    }
}
