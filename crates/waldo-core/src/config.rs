use std::time::Duration;

use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// Serde default functions
// ---------------------------------------------------------------------------

const fn default_tick_hz() -> f64 {
    60.0
}
const fn default_upper_arm() -> f64 {
    8.0
}
const fn default_forearm() -> f64 {
    10.0
}
const fn default_flash_ticks() -> u32 {
    10
}
const fn default_width() -> u32 {
    800
}
const fn default_height() -> u32 {
    600
}
const fn default_scale() -> f64 {
    25.0
}
const fn default_min_step() -> f64 {
    0.2
}
const fn default_max_step() -> f64 {
    5.0
}
const fn default_gain() -> f64 {
    0.1
}
const fn default_snap_epsilon() -> f64 {
    0.05
}

// ---------------------------------------------------------------------------
// ViewportConfig
// ---------------------------------------------------------------------------

/// Screen geometry for the screen↔arm coordinate transform.
///
/// The shoulder origin sits at `(width / 2, height − 100)` in screen
/// coordinates; `scale` is pixels per arm-space unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportConfig {
    /// Screen width in pixels (default: 800).
    #[serde(default = "default_width")]
    pub width: u32,

    /// Screen height in pixels (default: 600).
    #[serde(default = "default_height")]
    pub height: u32,

    /// Pixels per arm-space unit (default: 25).
    #[serde(default = "default_scale")]
    pub scale: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            scale: default_scale(),
        }
    }
}

// ---------------------------------------------------------------------------
// MotionConfig
// ---------------------------------------------------------------------------

/// Numbers for the bounded-speed stepping rule, in degrees per tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotionConfig {
    /// Slowest per-tick step (default: 0.2).
    #[serde(default = "default_min_step")]
    pub min_step: f64,

    /// Fastest per-tick step (default: 5.0).
    #[serde(default = "default_max_step")]
    pub max_step: f64,

    /// Fraction of the remaining distance covered per tick (default: 0.1).
    #[serde(default = "default_gain")]
    pub gain: f64,

    /// Distances at or below this snap onto the target (default: 0.05).
    #[serde(default = "default_snap_epsilon")]
    pub snap_epsilon: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            min_step: default_min_step(),
            max_step: default_max_step(),
            gain: default_gain(),
            snap_epsilon: default_snap_epsilon(),
        }
    }
}

// ---------------------------------------------------------------------------
// SimConfig
// ---------------------------------------------------------------------------

/// Main simulation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Resource)]
pub struct SimConfig {
    /// Simulation tick rate in Hz (default: 60).
    #[serde(default = "default_tick_hz")]
    pub tick_hz: f64,

    /// Upper-arm link length in arm-space units (default: 8).
    #[serde(default = "default_upper_arm")]
    pub upper_arm: f64,

    /// Forearm link length in arm-space units (default: 10).
    #[serde(default = "default_forearm")]
    pub forearm: f64,

    /// How many ticks the background flashes after an unreachable click
    /// (default: 10).
    #[serde(default = "default_flash_ticks")]
    pub flash_ticks: u32,

    /// Screen geometry for the coordinate transform.
    #[serde(default)]
    pub viewport: ViewportConfig,

    /// Stepping-rule numbers.
    #[serde(default)]
    pub motion: MotionConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_hz: default_tick_hz(),
            upper_arm: default_upper_arm(),
            forearm: default_forearm(),
            flash_ticks: default_flash_ticks(),
            viewport: ViewportConfig::default(),
            motion: MotionConfig::default(),
        }
    }
}

impl SimConfig {
    /// Validate configuration. Returns Err on invalid values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_hz <= 0.0 {
            return Err(ConfigError::InvalidTickRate(self.tick_hz));
        }
        if self.upper_arm <= 0.0 || self.forearm <= 0.0 {
            return Err(ConfigError::InvalidLinkLength {
                upper_arm: self.upper_arm,
                forearm: self.forearm,
            });
        }
        if self.viewport.scale <= 0.0 {
            return Err(ConfigError::InvalidScale(self.viewport.scale));
        }
        if self.motion.min_step <= 0.0 {
            return Err(ConfigError::InvalidMotionProfile {
                field: "min_step",
                message: "must be > 0",
            });
        }
        if self.motion.max_step < self.motion.min_step {
            return Err(ConfigError::InvalidMotionProfile {
                field: "max_step",
                message: "must be >= min_step",
            });
        }
        if self.motion.gain <= 0.0 {
            return Err(ConfigError::InvalidMotionProfile {
                field: "gain",
                message: "must be > 0",
            });
        }
        if self.motion.snap_epsilon < 0.0 {
            return Err(ConfigError::InvalidMotionProfile {
                field: "snap_epsilon",
                message: "must be >= 0",
            });
        }
        Ok(())
    }

    /// Duration of one simulation tick.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.tick_hz)
    }

    /// One tick in seconds.
    pub fn tick_dt(&self) -> f64 {
        1.0 / self.tick_hz
    }

    /// Load from TOML file.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
