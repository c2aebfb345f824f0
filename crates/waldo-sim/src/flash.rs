//! Unreachable-click flash countdown.

use bevy::prelude::*;

// ---------------------------------------------------------------------------
// ReachFlash
// ---------------------------------------------------------------------------

/// Plain tick countdown driving the background flash after an unreachable
/// click.
///
/// A fresh click restarts the countdown; a reachable click clears it. The
/// frame that starts the flash is tinted, and the countdown decrements once
/// per rendered frame, so a countdown of N tints exactly N frames.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReachFlash {
    remaining: u32,
}

impl ReachFlash {
    /// Start (or restart) the countdown at `ticks`.
    pub const fn start(&mut self, ticks: u32) {
        self.remaining = ticks;
    }

    /// Cancel the flash.
    pub const fn clear(&mut self) {
        self.remaining = 0;
    }

    /// Decrement once, saturating at zero.
    pub const fn tick(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    /// Whether the flash tint should show this frame.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.remaining > 0
    }

    /// Ticks left on the countdown.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
