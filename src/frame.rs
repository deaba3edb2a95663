//! Cooperative frame loop: one update then one render per host frame.

use crate::creature::Creature;
use crate::float::Float;
use crate::observer::FrameObserver;
use crate::surface::Surface;

/// Lifecycle of the animation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LoopState {
    /// Waiting for the first user gesture.
    Dormant,
    Running,
    /// Stopped for good; the host should stop requesting frames.
    Stopped,
}

/// Drives a [`Creature`] from host frame callbacks.
///
/// The host calls [`tick`](Self::tick) from each animation-frame callback and
/// schedules the next one only while it returns `true`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FrameLoop {
    state: LoopState,
}

impl FrameLoop {
    pub fn new() -> Self {
        FrameLoop { state: LoopState::Dormant }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Handle the start gesture. Only the first call from `Dormant` has any effect.
    pub fn start(&mut self) -> bool {
        if self.state != LoopState::Dormant {
            return false;
        }
        self.state = LoopState::Running;
        true
    }

    pub fn stop(&mut self) {
        self.state = LoopState::Stopped;
    }

    /// Update then render once. Returns whether another frame should be requested.
    pub fn tick<F, S, O>(&mut self, creature: &mut Creature<F>, surface: &mut S, observer: &mut O) -> bool
    where
        F: Float,
        S: Surface<F>,
        O: FrameObserver,
    {
        if !self.is_running() {
            return false;
        }
        creature.update(observer);
        creature.render(surface, observer);
        true
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}
