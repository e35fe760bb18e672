//! Virtual joystick
//!
//! Turns a drag gesture into a knob offset bounded by a circle of radius
//! `max_distance` around the joystick center. The offset divided by that
//! radius is the deflection the simulation steers with.

use glam::Vec2;

/// Clamp `v` to length `max_distance`, keeping its direction
///
/// The zero vector maps to itself.
pub fn clamp_offset(v: Vec2, max_distance: f32) -> Vec2 {
    let distance = v.length();
    if distance > max_distance && distance > 0.0 {
        v / distance * max_distance
    } else {
        v
    }
}

#[derive(Debug, Clone)]
pub struct Joystick {
    /// Center of the joystick zone in client space
    center: Vec2,
    /// Knob displacement from the center, |offset| <= max_distance
    offset: Vec2,
    dragging: bool,
    max_distance: f32,
}

impl Joystick {
    pub fn new(max_distance: f32) -> Self {
        Self {
            center: Vec2::ZERO,
            offset: Vec2::ZERO,
            dragging: false,
            max_distance,
        }
    }

    /// Begin a drag at `point`
    ///
    /// `center` is re-read on every drag start, so a resize between drags
    /// never leaves a stale center behind.
    pub fn drag_start(&mut self, center: Vec2, point: Vec2) {
        self.center = center;
        self.dragging = true;
        self.drag_move(point);
    }

    /// Follow the pointer. Returns false (and does nothing) when not dragging.
    pub fn drag_move(&mut self, point: Vec2) -> bool {
        if !self.dragging {
            return false;
        }
        self.offset = clamp_offset(point - self.center, self.max_distance);
        true
    }

    /// Release the knob back to center
    pub fn drag_end(&mut self) {
        self.dragging = false;
        self.offset = Vec2::ZERO;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn max_distance(&self) -> f32 {
        self.max_distance
    }

    /// Offset scaled into the unit disk
    pub fn deflection(&self) -> Vec2 {
        if self.max_distance > 0.0 {
            self.offset / self.max_distance
        } else {
            Vec2::ZERO
        }
    }

    /// Velocity for a player whose full-deflection speed is `speed`
    pub fn velocity(&self, speed: f32) -> Vec2 {
        self.deflection() * speed
    }
}
