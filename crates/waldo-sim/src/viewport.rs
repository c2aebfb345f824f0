//! Screen ↔ arm-space coordinate transform.

use nalgebra::Point2;
use waldo_core::config::ViewportConfig;

/// How far above the bottom edge the shoulder origin sits, in pixels.
const SHOULDER_LIFT_PX: f64 = 100.0;

// ---------------------------------------------------------------------------
// Viewport
// ---------------------------------------------------------------------------

/// Maps screen pixels (y-down, origin top-left) to arm space (y-up, origin
/// at the shoulder) and back.
///
/// The shoulder sits horizontally centered, `SHOULDER_LIFT_PX` above the
/// bottom edge; `scale` is pixels per arm-space unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    origin_x: f64,
    origin_y: f64,
    scale: f64,
}

impl Viewport {
    /// Build the transform from screen geometry.
    #[must_use]
    pub fn new(config: &ViewportConfig) -> Self {
        Self {
            origin_x: f64::from(config.width) / 2.0,
            origin_y: f64::from(config.height) - SHOULDER_LIFT_PX,
            scale: config.scale,
        }
    }

    /// Shoulder origin in screen coordinates.
    #[must_use]
    pub const fn origin(&self) -> (f64, f64) {
        (self.origin_x, self.origin_y)
    }

    /// Pixels per arm-space unit.
    #[must_use]
    pub const fn scale(&self) -> f64 {
        self.scale
    }

    /// Screen position to arm space (flips the y-axis).
    #[must_use]
    pub fn to_arm(&self, screen_x: f64, screen_y: f64) -> Point2<f64> {
        Point2::new(
            (screen_x - self.origin_x) / self.scale,
            -(screen_y - self.origin_y) / self.scale,
        )
    }

    /// Arm-space point to screen position.
    #[must_use]
    pub fn to_screen(&self, point: Point2<f64>) -> (f64, f64) {
        (
            self.origin_x + point.x * self.scale,
            self.origin_y - point.y * self.scale,
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(&ViewportConfig::default())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
