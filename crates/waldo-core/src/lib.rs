// waldo-core: System ordering, clock, config, and errors for the waldo arm simulator.

pub mod config;
pub mod error;
pub mod time;

use bevy::prelude::*;

// ---------------------------------------------------------------------------
// Re-exports
// ---------------------------------------------------------------------------

pub use config::SimConfig;
pub use error::{ConfigError, WaldoError};
pub use time::{Clock, SimTime};

// ---------------------------------------------------------------------------
// WaldoSet
// ---------------------------------------------------------------------------

/// System ordering for one simulation tick.
///
/// The core plugin chains these in `Update`, so within a tick every input
/// event is drained (`Sense`) before targets change (`Decide`), targets
/// change before the arm steps (`Act`), and the frame renders last
/// (`Present`).
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WaldoSet {
    /// Poll and drain the input source.
    Sense,
    /// Turn pointer events into joint targets (IK).
    Decide,
    /// Step joint angles and tick countdowns.
    Act,
    /// Hand the frame to the renderer.
    Present,
}

// ---------------------------------------------------------------------------
// WaldoCorePlugin
// ---------------------------------------------------------------------------

/// Base plugin: inserts [`SimConfig`] and [`SimTime`] and chains the
/// [`WaldoSet`] phases in `Update`.
///
/// Every other waldo plugin assumes this one is present.
pub struct WaldoCorePlugin;

impl Plugin for WaldoCorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimConfig>()
            .insert_resource(SimTime::new())
            .configure_sets(
                Update,
                (
                    WaldoSet::Sense,
                    WaldoSet::Decide,
                    WaldoSet::Act,
                    WaldoSet::Present,
                )
                    .chain(),
            );
    }
}

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

pub mod prelude {
    pub use crate::config::SimConfig;
    pub use crate::error::{ConfigError, WaldoError};
    pub use crate::time::{Clock, SimTime};
    pub use crate::{WaldoCorePlugin, WaldoSet};
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
