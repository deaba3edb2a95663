//! Frame observer trait for watching the creature update and draw.

use crate::render::Layer;

/// Hooks into the frame pipeline, e.g. for logging or profiling.
/// All methods have default no-op implementations.
pub trait FrameObserver {
    /// Called after the spine was laid out afresh.
    fn on_rebuild(&mut self, _points: usize) {}

    /// Called after the head, spine and phases advanced. `walked` is whether the legs stepped.
    fn on_update(&mut self, _frame: u64, _walked: bool) {}

    /// Called as each layer starts drawing, back to front.
    fn on_layer(&mut self, _layer: Layer) {}

    /// Called when a configured leg is rooted past the end of the spine.
    fn on_leg_skipped(&mut self, _spine_index: usize) {}

    /// Called once a frame has been fully drawn.
    fn on_frame_complete(&mut self, _frame: u64) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpFrameObserver;

impl FrameObserver for NoOpFrameObserver {}
