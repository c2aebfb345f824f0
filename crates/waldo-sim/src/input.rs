//! Input collaborator interface and event plumbing.
//!
//! The simulation never talks to a windowing system directly. Whatever
//! produces pointer events (a windowed frontend, a script, a test) sits
//! behind [`InputSource`]; the loop polls it exactly once per tick and
//! drains the whole batch before any target changes.

use std::collections::VecDeque;

use bevy::prelude::*;

// ---------------------------------------------------------------------------
// InputEvent
// ---------------------------------------------------------------------------

/// One external input event, in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Stop the simulation loop.
    Quit,
    /// Pointer pressed at a screen position.
    PointerDown { x: f64, y: f64 },
}

// ---------------------------------------------------------------------------
// InputSource
// ---------------------------------------------------------------------------

/// Produces input events for the simulation loop.
pub trait InputSource: Send + Sync + 'static {
    /// Return every event that arrived since the previous call.
    ///
    /// Called exactly once per tick; the returned batch is fully processed
    /// before the arm steps.
    fn poll_events(&mut self) -> Vec<InputEvent>;

    /// Human-readable name for this source.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

// ---------------------------------------------------------------------------
// InputChannel
// ---------------------------------------------------------------------------

/// Resource holding the boxed input source the loop polls.
#[derive(Resource)]
pub struct InputChannel(Box<dyn InputSource>);

impl InputChannel {
    /// Wrap an input source.
    pub fn new(source: impl InputSource) -> Self {
        Self(Box::new(source))
    }

    /// Wrap an already-boxed input source.
    #[must_use]
    pub fn from_boxed(source: Box<dyn InputSource>) -> Self {
        Self(source)
    }

    /// Poll the underlying source once.
    pub fn poll(&mut self) -> Vec<InputEvent> {
        self.0.poll_events()
    }

    /// Name of the underlying source.
    #[must_use]
    pub fn source_name(&self) -> &str {
        self.0.name()
    }
}

impl Default for InputChannel {
    /// An empty scripted source: never emits anything.
    fn default() -> Self {
        Self::new(ScriptedInput::new())
    }
}

// ---------------------------------------------------------------------------
// PendingInput
// ---------------------------------------------------------------------------

/// Pointer events drained this tick, waiting for the decide phase.
#[derive(Resource, Debug, Default)]
pub struct PendingInput {
    pub events: Vec<InputEvent>,
}

// ---------------------------------------------------------------------------
// ScriptedInput
// ---------------------------------------------------------------------------

/// Tick-indexed input timeline.
///
/// Each poll pops the next batch off the front; an exhausted timeline polls
/// as empty forever. Drives headless runs and tests.
///
/// # Example
///
/// ```
/// use waldo_sim::input::{InputEvent, InputSource, ScriptedInput};
///
/// let mut script = ScriptedInput::new()
///     .click(525.0, 375.0)
///     .idle(30)
///     .quit();
///
/// assert_eq!(
///     script.poll_events(),
///     vec![InputEvent::PointerDown { x: 525.0, y: 375.0 }]
/// );
/// ```
#[derive(Debug, Default)]
pub struct ScriptedInput {
    timeline: VecDeque<Vec<InputEvent>>,
}

impl ScriptedInput {
    /// An empty timeline.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one tick containing a single pointer-down at `(x, y)`.
    #[must_use]
    pub fn click(mut self, x: f64, y: f64) -> Self {
        self.timeline
            .push_back(vec![InputEvent::PointerDown { x, y }]);
        self
    }

    /// Append `ticks` event-free ticks.
    #[must_use]
    pub fn idle(mut self, ticks: usize) -> Self {
        for _ in 0..ticks {
            self.timeline.push_back(Vec::new());
        }
        self
    }

    /// Append one tick containing a quit event.
    #[must_use]
    pub fn quit(mut self) -> Self {
        self.timeline.push_back(vec![InputEvent::Quit]);
        self
    }

    /// Append one tick with an arbitrary event batch.
    #[must_use]
    pub fn tick(mut self, events: Vec<InputEvent>) -> Self {
        self.timeline.push_back(events);
        self
    }

    /// Ticks remaining on the timeline.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.timeline.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        self.timeline.pop_front().unwrap_or_default()
    }

    #[allow(clippy::unnecessary_literal_bound)]
    fn name(&self) -> &str {
        "ScriptedInput"
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_script_polls_empty_forever() {
        let mut script = ScriptedInput::new();
        assert!(script.poll_events().is_empty());
        assert!(script.poll_events().is_empty());
    }

    #[test]
    fn script_plays_back_in_order() {
        let mut script = ScriptedInput::new().click(1.0, 2.0).idle(1).quit();
        assert_eq!(script.remaining(), 3);

        assert_eq!(
            script.poll_events(),
            vec![InputEvent::PointerDown { x: 1.0, y: 2.0 }]
        );
        assert!(script.poll_events().is_empty());
        assert_eq!(script.poll_events(), vec![InputEvent::Quit]);
        assert!(script.poll_events().is_empty());
    }

    #[test]
    fn tick_batches_multiple_events() {
        let mut script = ScriptedInput::new().tick(vec![
            InputEvent::PointerDown { x: 1.0, y: 1.0 },
            InputEvent::PointerDown { x: 2.0, y: 2.0 },
        ]);
        assert_eq!(script.poll_events().len(), 2);
    }

    #[test]
    fn channel_polls_wrapped_source() {
        let mut channel = InputChannel::new(ScriptedInput::new().quit());
        assert_eq!(channel.poll(), vec![InputEvent::Quit]);
        assert_eq!(channel.source_name(), "ScriptedInput");
    }

    #[test]
    fn default_channel_is_silent() {
        let mut channel = InputChannel::default();
        assert!(channel.poll().is_empty());
    }
}
