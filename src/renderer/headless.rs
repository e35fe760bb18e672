//! Surfaces and sinks that need no browser
//!
//! `NullSurface` discards everything (native driver). `RecordingSurface` and
//! `RecordingScoreSink` keep what they were given so it can be inspected.

use super::{ScoreSink, Surface};
use crate::color::Color;

/// A recorded drawing operation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCall {
    ClearRect(f32, f32, f32, f32),
    SetFill(Color),
    FillRect(f32, f32, f32, f32),
    Save,
    Restore,
    Translate(f32, f32),
    Rotate(f32),
}

/// Surface that records every call in order
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    /// Drop recorded calls, keeping the allocation
    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Surface for RecordingSurface {
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.calls.push(DrawCall::ClearRect(x, y, width, height));
    }

    fn set_fill_color(&mut self, color: Color) {
        self.calls.push(DrawCall::SetFill(color));
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.calls.push(DrawCall::FillRect(x, y, width, height));
    }

    fn save(&mut self) {
        self.calls.push(DrawCall::Save);
    }

    fn restore(&mut self) {
        self.calls.push(DrawCall::Restore);
    }

    fn translate(&mut self, x: f32, y: f32) {
        self.calls.push(DrawCall::Translate(x, y));
    }

    fn rotate(&mut self, angle: f32) {
        self.calls.push(DrawCall::Rotate(angle));
    }
}

/// Surface that draws nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn clear_rect(&mut self, _x: f32, _y: f32, _width: f32, _height: f32) {}
    fn set_fill_color(&mut self, _color: Color) {}
    fn fill_rect(&mut self, _x: f32, _y: f32, _width: f32, _height: f32) {}
    fn save(&mut self) {}
    fn restore(&mut self) {}
    fn translate(&mut self, _x: f32, _y: f32) {}
    fn rotate(&mut self, _angle: f32) {}
}

/// Score sink that remembers every value shown
#[derive(Debug, Default)]
pub struct RecordingScoreSink {
    pub shown: Vec<u64>,
}

impl RecordingScoreSink {
    pub fn latest(&self) -> Option<u64> {
        self.shown.last().copied()
    }
}

impl ScoreSink for RecordingScoreSink {
    fn show_score(&mut self, score: u64) {
        log::debug!("Score: {}", score);
        self.shown.push(score);
    }
}
