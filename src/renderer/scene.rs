//! Frame drawing

use super::Surface;
use crate::sim::GameState;

/// Draw one frame: clear, collectibles, then the player on top
pub fn draw<S: Surface + ?Sized>(state: &GameState, surface: &mut S) {
    surface.clear_rect(0.0, 0.0, state.width, state.height);

    let size = state.collectible_size;
    for collectible in &state.collectibles {
        surface.set_fill_color(collectible.color);
        surface.fill_rect(collectible.pos.x, collectible.pos.y, size, size);
    }

    // Player is stored by center; rotate about it
    let player = &state.player;
    let half = player.half_size();
    surface.save();
    surface.translate(player.pos.x, player.pos.y);
    surface.rotate(player.rotation);
    surface.set_fill_color(player.color);
    surface.fill_rect(-half, -half, player.size, player.size);
    surface.restore();
}
