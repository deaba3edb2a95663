//! Pointer follow policy: when pointer events move the creature's target.

use crate::float::Float;
use crate::vec::Vec2;

/// Source of a pointer event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
    Pen,
}

impl PointerKind {
    /// Parse a DOM `pointerType`; unknown types are treated as touch.
    pub fn from_dom(name: &str) -> Self {
        match name {
            "mouse" => PointerKind::Mouse,
            "pen" => PointerKind::Pen,
            _ => PointerKind::Touch,
        }
    }
}

/// Decides which pointer events become target updates.
///
/// A mouse always steers. On coarse (touch-first) devices the creature only
/// follows while a press is held; fine-pointer devices follow continuously.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FollowInput {
    coarse: bool,
    active: bool,
}

impl FollowInput {
    pub fn new(coarse: bool) -> Self {
        FollowInput { coarse, active: !coarse }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// A press always engages and moves the target.
    pub fn pointer_down<F: Float>(&mut self, at: Vec2<F>) -> Option<Vec2<F>> {
        self.active = true;
        Some(at)
    }

    pub fn pointer_move<F: Float>(&mut self, kind: PointerKind, at: Vec2<F>) -> Option<Vec2<F>> {
        if kind == PointerKind::Mouse || self.active {
            Some(at)
        } else {
            None
        }
    }

    pub fn pointer_up(&mut self) {
        self.active = !self.coarse;
    }

    pub fn pointer_cancel(&mut self) {
        self.pointer_up();
    }
}
