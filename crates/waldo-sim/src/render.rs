//! Render collaborator interface.
//!
//! Drawing is a pure output side effect behind [`Renderer`]: the loop hands
//! over the current pose, a background tint, and the workspace-boundary
//! radius once per tick and consumes nothing back. Pixel work (segments,
//! joint markers, shadows, the readout text) lives entirely in
//! implementations.

use std::sync::{Arc, Mutex};

use bevy::prelude::*;
use waldo_ik::JointAngles;

// ---------------------------------------------------------------------------
// Tint
// ---------------------------------------------------------------------------

/// Background tint for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tint {
    /// Plain background.
    #[default]
    Normal,
    /// Flash shown while an unreachable click is being signalled.
    ReachAlert,
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Draws one frame of the simulation.
pub trait Renderer: Send + Sync + 'static {
    /// Render the arm at `angles` over a background of `tint`, with a
    /// faint circle of `workspace_radius` marking the reachable boundary.
    fn render_frame(&mut self, angles: JointAngles, tint: Tint, workspace_radius: f64);

    /// Human-readable name for this renderer.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

// ---------------------------------------------------------------------------
// RenderTarget
// ---------------------------------------------------------------------------

/// Resource holding the boxed renderer the loop draws through.
#[derive(Resource)]
pub struct RenderTarget(Box<dyn Renderer>);

impl RenderTarget {
    /// Wrap a renderer.
    pub fn new(renderer: impl Renderer) -> Self {
        Self(Box::new(renderer))
    }

    /// Wrap an already-boxed renderer.
    #[must_use]
    pub fn from_boxed(renderer: Box<dyn Renderer>) -> Self {
        Self(renderer)
    }

    /// Forward one frame to the underlying renderer.
    pub fn render(&mut self, angles: JointAngles, tint: Tint, workspace_radius: f64) {
        self.0.render_frame(angles, tint, workspace_radius);
    }

    /// Name of the underlying renderer.
    #[must_use]
    pub fn renderer_name(&self) -> &str {
        self.0.name()
    }
}

impl Default for RenderTarget {
    fn default() -> Self {
        Self::new(NullRenderer)
    }
}

// ---------------------------------------------------------------------------
// NullRenderer
// ---------------------------------------------------------------------------

/// Discards every frame. Default for headless runs.
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render_frame(&mut self, _angles: JointAngles, _tint: Tint, _workspace_radius: f64) {}

    #[allow(clippy::unnecessary_literal_bound)]
    fn name(&self) -> &str {
        "NullRenderer"
    }
}

// ---------------------------------------------------------------------------
// RecordingRenderer
// ---------------------------------------------------------------------------

/// One captured frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub angles: JointAngles,
    pub tint: Tint,
    pub workspace_radius: f64,
}

/// Shared handle onto the frames a [`RecordingRenderer`] has captured.
///
/// Clone it before handing the renderer to the simulator, then inspect the
/// frames after the run.
#[derive(Debug, Clone, Default)]
pub struct FrameLog(Arc<Mutex<Vec<Frame>>>);

impl FrameLog {
    /// Number of captured frames.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.lock().expect("frame log poisoned").len()
    }

    /// Whether nothing has been captured yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of all captured frames.
    #[must_use]
    pub fn frames(&self) -> Vec<Frame> {
        self.0.lock().expect("frame log poisoned").clone()
    }

    /// The most recent frame, if any.
    #[must_use]
    pub fn last(&self) -> Option<Frame> {
        self.0.lock().expect("frame log poisoned").last().copied()
    }

    fn push(&self, frame: Frame) {
        self.0.lock().expect("frame log poisoned").push(frame);
    }
}

/// Captures every frame into a [`FrameLog`] for later assertions.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    log: FrameLog,
}

impl RecordingRenderer {
    /// Create a recorder with an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle onto the captured frames; clone before moving the renderer
    /// into the simulator.
    #[must_use]
    pub fn log(&self) -> FrameLog {
        self.log.clone()
    }
}

impl Renderer for RecordingRenderer {
    fn render_frame(&mut self, angles: JointAngles, tint: Tint, workspace_radius: f64) {
        self.log.push(Frame {
            angles,
            tint,
            workspace_radius,
        });
    }

    #[allow(clippy::unnecessary_literal_bound)]
    fn name(&self) -> &str {
        "RecordingRenderer"
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
