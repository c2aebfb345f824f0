use thiserror::Error;

/// Top-level error type for the waldo simulator.
#[derive(Debug, Error)]
pub enum WaldoError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Configuration errors.
///
/// The unreachable-target outcome is deliberately not represented here: it
/// is an expected result of a solve, surfaced to the user as a background
/// flash, never as an error.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid tick_hz: {0} (must be > 0)")]
    InvalidTickRate(f64),

    #[error("Invalid link length: upper_arm={upper_arm}, forearm={forearm} (both must be > 0)")]
    InvalidLinkLength { upper_arm: f64, forearm: f64 },

    #[error("Invalid viewport scale: {0} (must be > 0)")]
    InvalidScale(f64),

    #[error("Invalid motion profile: {field}: {message}")]
    InvalidMotionProfile {
        field: &'static str,
        message: &'static str,
    },
}
