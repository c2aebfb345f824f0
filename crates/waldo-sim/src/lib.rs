//! Fixed-rate simulation loop for the waldo two-link arm.
//!
//! One tick runs four phases in order (see [`WaldoSet`](waldo_core::WaldoSet)):
//!
//! ```text
//! InputSource ──► pointer events ──► IK solve ──► targets
//!                                                   │
//!            Renderer ◄── current pose ◄── bounded stepping
//! ```
//!
//! Everything mutable (pose, flash countdown, run state, stats) lives in
//! ECS resources owned by the single loop thread. Windowing and pixels stay
//! outside, behind the [`InputSource`](input::InputSource) and
//! [`Renderer`](render::Renderer) collaborator traits.
//!
//! # Example
//!
//! ```
//! use waldo_sim::prelude::*;
//!
//! // Click at arm-space (5, 5), let the arm settle, then quit.
//! let script = ScriptedInput::new().click(525.0, 375.0).idle(150).quit();
//! let mut sim = SimBuilder::new().with_input(script).build().unwrap();
//!
//! sim.run(200);
//! assert!(sim.is_settled());
//! assert_eq!(sim.stats().clicks_solved, 1);
//! ```

pub mod arm;
pub mod builder;
pub mod flash;
pub mod input;
pub mod render;
pub mod state;
pub mod stats;
pub mod systems;
pub mod viewport;

#[cfg(test)]
mod headless;

use bevy::prelude::*;
use waldo_core::{WaldoCorePlugin, WaldoSet};

// ---------------------------------------------------------------------------
// Re-exports
// ---------------------------------------------------------------------------

pub use arm::{ArmRig, ArmState};
pub use builder::{SimBuilder, Simulator};
pub use flash::ReachFlash;
pub use input::{InputChannel, InputEvent, InputSource, ScriptedInput};
pub use render::{NullRenderer, RecordingRenderer, RenderTarget, Renderer, Tint};
pub use state::RunState;
pub use stats::TickStats;
pub use viewport::Viewport;

// ---------------------------------------------------------------------------
// WaldoSimPlugin
// ---------------------------------------------------------------------------

/// Plugin wiring the full simulation loop.
///
/// Adds [`WaldoCorePlugin`] (system ordering, config, clock), initializes
/// every loop resource, and registers one system per phase:
///
/// - `Sense` — [`systems::drain_input_system`]
/// - `Decide` — [`systems::apply_clicks_system`]
/// - `Act` — [`systems::step_arm_system`]
/// - `Present` — [`systems::render_frame_system`] then
///   [`systems::tick_flash_system`]
///
/// Prefer [`SimBuilder`] over adding this plugin by hand; the builder also
/// derives the [`ArmRig`] from the (validated) configuration.
pub struct WaldoSimPlugin;

impl Plugin for WaldoSimPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(WaldoCorePlugin)
            .init_resource::<ArmState>()
            .init_resource::<ArmRig>()
            .init_resource::<ReachFlash>()
            .init_resource::<RunState>()
            .init_resource::<TickStats>()
            .init_resource::<input::PendingInput>()
            .init_resource::<InputChannel>()
            .init_resource::<RenderTarget>()
            .add_systems(
                Update,
                (
                    systems::drain_input_system.in_set(WaldoSet::Sense),
                    systems::apply_clicks_system.in_set(WaldoSet::Decide),
                    systems::step_arm_system.in_set(WaldoSet::Act),
                    (systems::render_frame_system, systems::tick_flash_system)
                        .chain()
                        .in_set(WaldoSet::Present),
                ),
            );
    }
}

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

pub mod prelude {
    pub use crate::arm::{ArmRig, ArmState};
    pub use crate::builder::{SimBuilder, Simulator};
    pub use crate::flash::ReachFlash;
    pub use crate::input::{InputChannel, InputEvent, InputSource, ScriptedInput};
    pub use crate::render::{
        NullRenderer, RecordingRenderer, RenderTarget, Renderer, Tint,
    };
    pub use crate::state::RunState;
    pub use crate::stats::TickStats;
    pub use crate::viewport::Viewport;
    pub use crate::WaldoSimPlugin;
    pub use waldo_core::prelude::*;
    pub use waldo_ik::{JointAngles, PlanarArm};
    pub use waldo_motion::prelude::*;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
