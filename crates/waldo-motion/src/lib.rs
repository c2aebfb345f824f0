//! Framework-agnostic angle interpolation for animated joint motion.
//!
//! Pure Rust library with no game engine dependencies.  Provides the
//! bounded, distance-proportional stepping rule that eases a joint angle
//! toward its target without overshoot or terminal oscillation.
//!
//! # Stepping Pipeline
//!
//! ```text
//! Target Angle → Distance → Speed Schedule → Step (or Snap) → Current Angle
//!                           (clamp d·gain)    (≤ distance)
//! ```
//!
//! # Quick Start
//!
//! ```
//! use waldo_motion::prelude::*;
//!
//! let profile = SpeedProfile::default();
//! let mut joint = AngleTracker::new(0.0);
//! joint.retarget(90.0);
//!
//! while !joint.is_settled() {
//!     joint.step(&profile);
//! }
//! assert_eq!(joint.current(), 90.0);
//! ```

pub mod profile;
pub mod tracker;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::profile::SpeedProfile;
    pub use crate::tracker::AngleTracker;
}
