//! Cumulative tick statistics.

use bevy::prelude::*;

// ---------------------------------------------------------------------------
// TickStats
// ---------------------------------------------------------------------------

/// Counters accumulated over a run.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickStats {
    /// Ticks the arm has been stepped.
    pub ticks: u64,
    /// Clicks that produced a solvable target.
    pub clicks_solved: u32,
    /// Clicks rejected as unreachable.
    pub clicks_unreachable: u32,
}

impl TickStats {
    /// Total pointer clicks seen.
    #[must_use]
    pub const fn clicks_total(&self) -> u32 {
        self.clicks_solved + self.clicks_unreachable
    }

    /// Zero all counters.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
