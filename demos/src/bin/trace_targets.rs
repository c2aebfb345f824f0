//! Two-link arm driven through a sequence of click targets.
//!
//! Demonstrates the full loop: targets in arm space are converted to
//! screen clicks, solved via inverse kinematics, and the arm animates to
//! each one under the bounded-speed schedule. Unreachable targets flash
//! instead of moving the arm.
//!
//! Run: `cargo run -p waldo-demos --bin trace_targets`

use nalgebra::Point2;

use waldo_core::prelude::*;
use waldo_sim::prelude::*;

/// Ticks to wait on each target; generous enough to settle from anywhere
/// in the workspace under the default speed schedule.
const TICKS_PER_TARGET: usize = 120;

fn main() {
    println!("=== Two-Link Arm Target Trace ===\n");

    let config = SimConfig::default();
    let viewport = Viewport::new(&config.viewport);

    // Targets in arm space: reachable sweep plus two unreachable probes.
    let targets = [
        Point2::new(5.0, 5.0),    // interior
        Point2::new(0.0, 10.0),   // straight up
        Point2::new(-12.0, 3.0),  // left side
        Point2::new(18.0, 0.0),   // outer boundary, fully extended
        Point2::new(0.0, 0.0),    // shoulder itself, out of reach
        Point2::new(14.0, 14.0),  // past the outer boundary, out of reach
        Point2::new(6.0, -4.0),   // below the axis
    ];

    let mut script = ScriptedInput::new();
    for target in &targets {
        let (sx, sy) = viewport.to_screen(*target);
        script = script.click(sx, sy).idle(TICKS_PER_TARGET);
    }
    script = script.quit();

    let mut sim = SimBuilder::new()
        .with_config(config)
        .with_input(script)
        .build()
        .expect("default configuration is valid");

    let rig = *sim.app.world().resource::<ArmRig>();
    println!(
        "links: upper={} fore={}  reach: [{}, {}]",
        rig.arm.upper(),
        rig.arm.fore(),
        rig.arm.min_reach(),
        rig.arm.max_reach()
    );
    println!("targets: {} positions, {TICKS_PER_TARGET} ticks each\n", targets.len());

    // Drive the whole script, reporting the pose as each target window ends.
    for (i, target) in targets.iter().enumerate() {
        sim.run(1 + TICKS_PER_TARGET as u64);
        let pose = sim.pose();
        let wrist = rig.arm.forward(pose);
        let err = (wrist - *target).norm();
        println!(
            "  target {i}: ({:>6.2}, {:>6.2})  wrist ({:>7.3}, {:>7.3})  err={:.2e}  {}",
            target.x,
            target.y,
            wrist.x,
            wrist.y,
            err,
            if rig.arm.is_reachable(*target) {
                "REACHED"
            } else {
                "OUT OF REACH"
            },
        );
    }
    sim.run(5); // consume the quit

    let stats = sim.stats();
    println!(
        "\nran {} ticks ({}), clicks solved={}, out of reach={}",
        stats.ticks,
        sim.sim_time(),
        stats.clicks_solved,
        stats.clicks_unreachable
    );

    // Solver verification pass, no stepping involved.
    println!("\n--- IK verification (direct solve) ---");
    for (i, target) in targets.iter().enumerate() {
        match rig.arm.solve(*target) {
            Some(angles) => {
                let wrist = rig.arm.forward(angles);
                let err = (wrist - *target).norm();
                println!("  target {i}: {angles}  err={err:.2e}");
            }
            None => println!("  target {i}: out of reach"),
        }
    }
}
