//! Drag input shared by pointer and touch sources
//!
//! Both sources reduce to the same thing: a drag phase plus (maybe) one
//! client-space point. Mouse events always carry a point; touch events use the
//! first active touch and carry none once the last finger lifts.

use glam::Vec2;

/// Stage of a drag gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    Start,
    Move,
    End,
}

/// A normalized drag event
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragEvent {
    pub phase: DragPhase,
    /// Client-space position, if the event has one
    pub point: Option<Vec2>,
}

impl DragEvent {
    /// Event from a mouse/pointer at client `(x, y)`
    pub fn pointer(phase: DragPhase, x: f32, y: f32) -> Self {
        Self {
            phase,
            point: Some(Vec2::new(x, y)),
        }
    }

    /// Event from a touch list (client coordinates), using the first touch
    pub fn touch(phase: DragPhase, touches: &[Vec2]) -> Self {
        Self {
            phase,
            point: touches.first().copied(),
        }
    }
}

/// Axis-aligned rectangle in client space (a `getBoundingClientRect` result)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}
