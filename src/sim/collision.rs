//! Player/collectible pickup detection and pool upkeep
//!
//! Squares are tested as circles: two squares touch when their centers are
//! closer than the sum of their half-sizes.

use glam::Vec2;

use super::state::GameState;
use crate::color::Color;

/// Result of a collision pass
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PickupReport {
    /// Collectibles removed this pass
    pub collected: u32,
    /// Color of the last one removed, in pool order
    pub last_color: Option<Color>,
}

/// Circular proximity test between two squares given their centers
#[inline]
pub fn squares_touch(a_center: Vec2, a_size: f32, b_center: Vec2, b_size: f32) -> bool {
    a_center.distance(b_center) < a_size / 2.0 + b_size / 2.0
}

/// Remove every collectible the player overlaps
///
/// Each pickup adds one point. Hits are visited in pool order and each one
/// repaints the player, so with several hits in a tick the last one wins.
pub fn resolve_pickups(state: &mut GameState) -> PickupReport {
    let player_pos = state.player.pos;
    let player_size = state.player.size;
    let size = state.collectible_size;
    let mut report = PickupReport::default();

    state.collectibles.retain(|c| {
        if squares_touch(player_pos, player_size, c.center(size), size) {
            report.collected += 1;
            report.last_color = Some(c.color);
            log::debug!("Picked up {} at ({:.0}, {:.0})", c.color, c.pos.x, c.pos.y);
            false
        } else {
            true
        }
    });

    if let Some(color) = report.last_color {
        state.player.color = color;
    }
    state.score += u64::from(report.collected);
    report
}
