//! Simulator construction and the driving loop.
//!
//! [`SimBuilder`] composes a fully configured Bevy [`App`] (configuration,
//! input source, renderer, initial pose) and hands back a [`Simulator`]
//! that steps it either in lockstep or paced at the configured tick rate.
//!
//! # Example
//!
//! ```
//! use waldo_sim::prelude::*;
//!
//! let script = ScriptedInput::new().click(525.0, 375.0).idle(120).quit();
//! let mut sim = SimBuilder::new().with_input(script).build().unwrap();
//!
//! sim.run(200);
//! assert!(sim.is_settled());
//! ```

use std::time::Instant;

use bevy::prelude::*;
use waldo_core::config::SimConfig;
use waldo_core::error::ConfigError;
use waldo_core::time::{Clock, SimTime};
use waldo_ik::JointAngles;

use crate::arm::{ArmRig, ArmState};
use crate::input::{InputChannel, InputSource};
use crate::render::{RenderTarget, Renderer};
use crate::state::RunState;
use crate::stats::TickStats;
use crate::WaldoSimPlugin;

// ---------------------------------------------------------------------------
// SimBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for a complete simulator.
pub struct SimBuilder {
    config: Option<SimConfig>,
    initial_pose: Option<JointAngles>,
    input: Option<Box<dyn InputSource>>,
    renderer: Option<Box<dyn Renderer>>,
}

impl Default for SimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SimBuilder {
    /// Create a builder with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            config: None,
            initial_pose: None,
            input: None,
            renderer: None,
        }
    }

    /// Set the simulation configuration.
    #[must_use]
    pub fn with_config(mut self, config: SimConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Start the arm at rest in `pose` instead of the home pose.
    #[must_use]
    pub const fn with_initial_pose(mut self, pose: JointAngles) -> Self {
        self.initial_pose = Some(pose);
        self
    }

    /// Set the input source the loop polls.
    #[must_use]
    pub fn with_input(mut self, source: impl InputSource) -> Self {
        self.input = Some(Box::new(source));
        self
    }

    /// Set the renderer the loop draws through.
    #[must_use]
    pub fn with_renderer(mut self, renderer: impl Renderer) -> Self {
        self.renderer = Some(Box::new(renderer));
        self
    }

    /// Validate the configuration and assemble the [`Simulator`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration fails validation.
    pub fn build(self) -> Result<Simulator, ConfigError> {
        let config = self.config.unwrap_or_default();
        config.validate()?;
        let rig = ArmRig::from_config(&config).map_err(|_| ConfigError::InvalidLinkLength {
            upper_arm: config.upper_arm,
            forearm: config.forearm,
        })?;
        let tick_hz = config.tick_hz;

        let mut app = App::new();
        app.add_plugins(WaldoSimPlugin);
        app.insert_resource(config);
        app.insert_resource(rig);

        if let Some(pose) = self.initial_pose {
            app.insert_resource(ArmState::new(pose));
        }
        if let Some(source) = self.input {
            app.insert_resource(InputChannel::from_boxed(source));
        }
        if let Some(renderer) = self.renderer {
            app.insert_resource(RenderTarget::from_boxed(renderer));
        }

        app.finish();
        app.cleanup();

        Ok(Simulator { app, tick_hz })
    }
}

// ---------------------------------------------------------------------------
// Simulator
// ---------------------------------------------------------------------------

/// A built simulation: the Bevy app plus the tick pacing.
pub struct Simulator {
    /// The fully configured Bevy application.
    pub app: App,
    tick_hz: f64,
}

impl Simulator {
    /// Advance exactly one tick (input → decide → step → render).
    pub fn step(&mut self) {
        self.app.update();
    }

    /// Advance up to `max_ticks` ticks in lockstep, stopping early on quit.
    ///
    /// Returns the number of ticks actually run.
    pub fn run(&mut self, max_ticks: u64) -> u64 {
        for tick in 0..max_ticks {
            if !self.is_running() {
                return tick;
            }
            self.app.update();
        }
        max_ticks
    }

    /// Run paced at the configured tick rate until a quit event arrives.
    ///
    /// Wall time feeds a fixed-rate [`Clock`]; stalls are absorbed by its
    /// capped catch-up. Returns the number of ticks run.
    pub fn run_realtime(&mut self) -> u64 {
        let mut clock = Clock::new(self.tick_hz);
        let mut last = Instant::now();
        let mut ticks = 0;

        while self.is_running() {
            let now = Instant::now();
            clock.tick(now.duration_since(last));
            last = now;

            let mut stepped = false;
            while clock.should_step() {
                self.app.update();
                ticks += 1;
                stepped = true;
                if !self.is_running() {
                    break;
                }
            }
            if !stepped {
                std::thread::sleep(clock.tick_interval() / 4);
            }
        }
        ticks
    }

    /// Whether the loop is still live (no quit seen).
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.app.world().resource::<RunState>().is_running()
    }

    /// Current joint configuration.
    #[must_use]
    pub fn pose(&self) -> JointAngles {
        self.app.world().resource::<ArmState>().current()
    }

    /// Target joint configuration.
    #[must_use]
    pub fn target_pose(&self) -> JointAngles {
        self.app.world().resource::<ArmState>().target()
    }

    /// Whether both joints sit exactly on their targets.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.app.world().resource::<ArmState>().is_settled()
    }

    /// Cumulative run statistics.
    #[must_use]
    pub fn stats(&self) -> TickStats {
        *self.app.world().resource::<TickStats>()
    }

    /// Elapsed simulated time.
    #[must_use]
    pub fn sim_time(&self) -> SimTime {
        *self.app.world().resource::<SimTime>()
    }

    /// The configured tick rate in Hz.
    #[must_use]
    pub const fn tick_hz(&self) -> f64 {
        self.tick_hz
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ScriptedInput;
    use crate::render::RecordingRenderer;

    #[test]
    fn build_with_defaults() {
        let sim = SimBuilder::new().build().unwrap();
        assert!(sim.is_running());
        assert_eq!(sim.pose(), JointAngles::home());
        assert!((sim.tick_hz() - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn build_rejects_invalid_config() {
        let config = SimConfig {
            tick_hz: 0.0,
            ..SimConfig::default()
        };
        assert!(SimBuilder::new().with_config(config).build().is_err());
    }

    #[test]
    fn build_with_initial_pose() {
        let sim = SimBuilder::new()
            .with_initial_pose(JointAngles::new(0.0, 45.0))
            .build()
            .unwrap();
        assert_eq!(sim.pose(), JointAngles::new(0.0, 45.0));
        assert!(sim.is_settled());
    }

    #[test]
    fn run_stops_early_on_quit() {
        let mut sim = SimBuilder::new()
            .with_input(ScriptedInput::new().idle(4).quit())
            .build()
            .unwrap();
        let ticks = sim.run(100);
        // 4 idle ticks stepped; the quit tick itself does not step.
        assert_eq!(sim.stats().ticks, 4);
        assert!(ticks <= 6);
        assert!(!sim.is_running());
    }

    #[test]
    fn run_without_quit_runs_to_the_limit() {
        let mut sim = SimBuilder::new().build().unwrap();
        assert_eq!(sim.run(25), 25);
        assert_eq!(sim.stats().ticks, 25);
    }

    #[test]
    fn renderer_sees_one_frame_per_tick() {
        let renderer = RecordingRenderer::new();
        let log = renderer.log();
        let mut sim = SimBuilder::new().with_renderer(renderer).build().unwrap();

        sim.run(5);
        assert_eq!(log.len(), 5);
    }

    #[test]
    fn run_realtime_terminates_on_quit() {
        let config = SimConfig {
            tick_hz: 2000.0,
            ..SimConfig::default()
        };
        let mut sim = SimBuilder::new()
            .with_config(config)
            .with_input(ScriptedInput::new().click(525.0, 375.0).idle(8).quit())
            .build()
            .unwrap();

        let ticks = sim.run_realtime();
        assert!(ticks >= 9);
        assert!(!sim.is_running());
        assert_eq!(sim.stats().clicks_solved, 1);
    }
}
