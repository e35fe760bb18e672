//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering
//! and platform dependencies:
//! - One step per frame, no wall clock
//! - Seeded RNG only
//! - Stable iteration order (pool insertion order)

pub mod collision;
pub mod joystick;
pub mod state;
pub mod tick;

pub use collision::{PickupReport, resolve_pickups, squares_touch};
pub use joystick::{Joystick, clamp_offset};
pub use state::{Collectible, GameState, Player, Scale, target_count};
pub use tick::{TickInput, TickOutcome, tick};
