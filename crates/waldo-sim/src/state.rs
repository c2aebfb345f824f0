//! Simulation run lifecycle.

use bevy::prelude::*;

// ---------------------------------------------------------------------------
// RunState
// ---------------------------------------------------------------------------

/// Whether the loop is live.
///
/// Starts `Running`; a `Quit` input event moves it to `Stopped`, after which
/// the tick systems become no-ops and the runner exits. There is no other
/// cancellation path.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RunState {
    /// Ticks advance normally.
    #[default]
    Running,
    /// A quit was requested; ticks no longer advance.
    Stopped,
}

impl RunState {
    /// Whether ticks should advance.
    #[must_use]
    pub const fn is_running(self) -> bool {
        matches!(self, Self::Running)
    }

    /// Request shutdown.
    pub const fn stop(&mut self) {
        *self = Self::Stopped;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
