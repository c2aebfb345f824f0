//! Per-tick systems, one per [`WaldoSet`](waldo_core::WaldoSet) phase.

use bevy::prelude::*;
use waldo_core::config::SimConfig;
use waldo_core::time::SimTime;

use crate::arm::{ArmRig, ArmState};
use crate::flash::ReachFlash;
use crate::input::{InputChannel, InputEvent, PendingInput};
use crate::render::{RenderTarget, Tint};
use crate::state::RunState;
use crate::stats::TickStats;

// ---------------------------------------------------------------------------
// drain_input_system
// ---------------------------------------------------------------------------

/// Polls the input source once and drains the whole batch.
///
/// Runs in `WaldoSet::Sense`. Pointer events queue up for the decide phase;
/// a quit event stops the run immediately, this tick included.
pub fn drain_input_system(
    mut channel: ResMut<InputChannel>,
    mut pending: ResMut<PendingInput>,
    mut run_state: ResMut<RunState>,
) {
    if !run_state.is_running() {
        return;
    }
    for event in channel.poll() {
        match event {
            InputEvent::Quit => run_state.stop(),
            InputEvent::PointerDown { .. } => pending.events.push(event),
        }
    }
}

// ---------------------------------------------------------------------------
// apply_clicks_system
// ---------------------------------------------------------------------------

/// Turns this tick's pointer events into joint targets.
///
/// Runs in `WaldoSet::Decide`. Each click is transformed to arm space and
/// solved; a solvable click retargets the arm and cancels any flash, an
/// unreachable one starts the flash countdown and leaves the targets alone.
#[allow(clippy::needless_pass_by_value)]
pub fn apply_clicks_system(
    config: Res<SimConfig>,
    rig: Res<ArmRig>,
    run_state: Res<RunState>,
    mut pending: ResMut<PendingInput>,
    mut arm: ResMut<ArmState>,
    mut flash: ResMut<ReachFlash>,
    mut stats: ResMut<TickStats>,
) {
    if !run_state.is_running() {
        pending.events.clear();
        return;
    }

    for event in pending.events.drain(..) {
        let InputEvent::PointerDown { x, y } = event else {
            continue;
        };
        let target = rig.viewport.to_arm(x, y);
        if let Some(angles) = rig.arm.solve(target) {
            arm.retarget(angles);
            flash.clear();
            stats.clicks_solved += 1;
        } else {
            flash.start(config.flash_ticks);
            stats.clicks_unreachable += 1;
        }
    }
}

// ---------------------------------------------------------------------------
// step_arm_system
// ---------------------------------------------------------------------------

/// Advances both joints one tick and the simulation clock with them.
///
/// Runs in `WaldoSet::Act`, after every event of the tick has been applied.
/// The only writer of the arm's current angles.
#[allow(clippy::needless_pass_by_value)]
pub fn step_arm_system(
    config: Res<SimConfig>,
    rig: Res<ArmRig>,
    run_state: Res<RunState>,
    mut arm: ResMut<ArmState>,
    mut time: ResMut<SimTime>,
    mut stats: ResMut<TickStats>,
) {
    if !run_state.is_running() {
        return;
    }
    arm.step(&rig.profile);
    time.advance_secs(config.tick_dt());
    stats.ticks += 1;
}

// ---------------------------------------------------------------------------
// render_frame_system / tick_flash_system
// ---------------------------------------------------------------------------

/// Hands the tick's resulting pose to the renderer.
///
/// Runs first in `WaldoSet::Present`: flash tint while the countdown is
/// live, plain background otherwise, plus the reachable-workspace radius
/// for the boundary circle.
#[allow(clippy::needless_pass_by_value)]
pub fn render_frame_system(
    rig: Res<ArmRig>,
    arm: Res<ArmState>,
    flash: Res<ReachFlash>,
    run_state: Res<RunState>,
    mut target: ResMut<RenderTarget>,
) {
    if !run_state.is_running() {
        return;
    }
    let tint = if flash.is_active() {
        Tint::ReachAlert
    } else {
        Tint::Normal
    };
    target.render(arm.current(), tint, rig.arm.max_reach());
}

/// Decrements the flash countdown, chained after the render so a countdown
/// of N tints exactly N frames (the frame that starts the flash included).
#[allow(clippy::needless_pass_by_value)]
pub fn tick_flash_system(run_state: Res<RunState>, mut flash: ResMut<ReachFlash>) {
    if run_state.is_running() {
        flash.tick();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
