//! Color Chase - a joystick-driven square collecting game
//!
//! Core modules:
//! - `sim`: Simulation (joystick, integration, collisions, pool respawn)
//! - `renderer`: Draws game state onto an abstract 2D surface
//! - `input`: Pointer/touch drag events and joystick zone geometry
//! - `game`: Owned game instance wiring sim, input and render together
//! - `platform`: Browser glue (DOM score display, joystick knob, event coordinates)
//! - `settings`: Data-driven tuning and palette

pub mod color;
pub mod game;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use color::Color;
pub use game::Game;
pub use settings::{Settings, SettingsError};

/// Default tuning constants
pub mod consts {
    use crate::color::Color;

    /// Entity size as a fraction of the shorter canvas side
    pub const SIZE_RATIO: f32 = 0.05;
    /// Player speed as a fraction of the shorter canvas side (px per tick)
    pub const SPEED_RATIO: f32 = 0.008;
    /// Base player spin (radians per tick at full deflection)
    pub const ROTATION_SPEED: f32 = 0.1;
    /// Joystick knob travel radius (px)
    pub const JOYSTICK_MAX_DISTANCE: f32 = 30.0;
    /// One collectible per `DENSITY_FACTOR` collectible areas of canvas
    pub const DENSITY_FACTOR: f32 = 10.0;

    /// Accepted `size_ratio` range
    pub const MIN_SIZE_RATIO: f32 = 0.005;
    pub const MAX_SIZE_RATIO: f32 = 1.0;
    /// Smallest accepted `density_factor`
    pub const MIN_DENSITY_FACTOR: f32 = 1.0;
    /// Hard ceiling on the collectible pool, whatever the canvas shape
    pub const MAX_COLLECTIBLES: usize = 4096;

    /// Collectible palette
    pub const PALETTE: [Color; 6] = [
        Color::rgb(0xFF, 0x6B, 0x6B),
        Color::rgb(0x4E, 0xCD, 0xC4),
        Color::rgb(0x45, 0xB7, 0xD1),
        Color::rgb(0x96, 0xCE, 0xB4),
        Color::rgb(0xFF, 0xEE, 0xAD),
        Color::rgb(0xD4, 0xA5, 0xA5),
    ];
    /// Player color before the first pickup
    pub const START_COLOR: Color = Color::rgb(0x33, 0x33, 0x33);
}

/// Clamp `value` so a square of `size` centered on it stays inside `[0, extent]`
///
/// When the extent is smaller than the square the lower bound wins.
#[inline]
pub fn clamp_centered(value: f32, size: f32, extent: f32) -> f32 {
    let half = size / 2.0;
    value.min(extent - half).max(half)
}
