//! Rendering module
//!
//! Draws the game onto anything that behaves like a Canvas 2D context. The
//! browser build implements [`Surface`] for `CanvasRenderingContext2d`;
//! headless runs and tests use the surfaces in [`headless`].

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod headless;
pub mod scene;

pub use headless::{DrawCall, NullSurface, RecordingScoreSink, RecordingSurface};
pub use scene::draw;

use crate::color::Color;

/// The drawing operations the game needs from a 2D context
pub trait Surface {
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32);
    fn set_fill_color(&mut self, color: Color);
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32);
    /// Push the current transform
    fn save(&mut self);
    /// Pop back to the last saved transform
    fn restore(&mut self);
    fn translate(&mut self, x: f32, y: f32);
    fn rotate(&mut self, angle: f32);
}

/// Write-only score display
pub trait ScoreSink {
    fn show_score(&mut self, score: u64);
}
