//! Game state and core simulation types

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::clamp_centered;
use crate::color::Color;
use crate::consts::MAX_COLLECTIBLES;
use crate::settings::Settings;

/// Quantities derived from the canvas dimensions
///
/// Pure function of `(settings, width, height)`, recomputed on every resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    /// Side length of the player and of every collectible
    pub entity_size: f32,
    /// Player speed at full joystick deflection (px per tick)
    pub player_speed: f32,
    /// Number of collectibles kept on screen
    pub target_count: usize,
}

impl Scale {
    pub fn for_canvas(settings: &Settings, width: f32, height: f32) -> Self {
        let short_side = width.min(height).max(0.0);
        let entity_size = short_side * settings.size_ratio;
        Self {
            entity_size,
            player_speed: short_side * settings.speed_ratio,
            target_count: target_count(width, height, entity_size, settings.density_factor),
        }
    }
}

/// `floor(width * height / (size² * density))`, capped at `MAX_COLLECTIBLES`
///
/// A degenerate canvas or a non-finite quotient yields 0.
pub fn target_count(width: f32, height: f32, size: f32, density_factor: f32) -> usize {
    let cell = size * size * density_factor;
    if !(cell > 0.0) || !(width > 0.0) || !(height > 0.0) {
        return 0;
    }
    let count = (width * height / cell).floor();
    if !count.is_finite() {
        return 0;
    }
    (count as usize).min(MAX_COLLECTIBLES)
}

/// The player-controlled square
#[derive(Debug, Clone)]
pub struct Player {
    /// Center in canvas space
    pub pos: Vec2,
    /// Displacement per tick
    pub vel: Vec2,
    pub size: f32,
    /// Speed at full deflection
    pub speed: f32,
    /// Radians, advances while moving
    pub rotation: f32,
    /// Base spin per tick at full deflection
    pub rotation_speed: f32,
    pub color: Color,
}

impl Player {
    pub fn new(pos: Vec2, scale: &Scale, settings: &Settings) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            size: scale.entity_size,
            speed: scale.player_speed,
            rotation: 0.0,
            rotation_speed: settings.rotation_speed,
            color: settings.start_color,
        }
    }

    #[inline]
    pub fn half_size(&self) -> f32 {
        self.size / 2.0
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        self.vel != Vec2::ZERO
    }

    /// Set velocity from a joystick deflection in the unit disk
    pub fn steer(&mut self, deflection: Vec2) {
        self.vel = deflection * self.speed;
    }

    /// One Euler step, plus spin proportional to the current speed
    ///
    /// There is no delta-time: the player moves `vel` per frame, so on-screen
    /// speed follows the display refresh rate.
    pub fn advance(&mut self) {
        self.pos += self.vel;
        if self.is_moving() {
            let ratio = if self.speed > 0.0 {
                (self.vel.length() / self.speed).min(1.0)
            } else {
                0.0
            };
            self.rotation += self.rotation_speed * ratio;
        }
    }

    /// Keep the player's bounding square inside the canvas
    pub fn clamp_to(&mut self, width: f32, height: f32) {
        self.pos.x = clamp_centered(self.pos.x, self.size, width);
        self.pos.y = clamp_centered(self.pos.y, self.size, height);
    }
}

/// A static square waiting to be picked up
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collectible {
    /// Top-left corner in canvas space
    pub pos: Vec2,
    pub color: Color,
}

impl Collectible {
    pub fn center(&self, size: f32) -> Vec2 {
        self.pos + Vec2::splat(size / 2.0)
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub width: f32,
    pub height: f32,
    pub player: Player,
    /// Collectible pool, in insertion order
    pub collectibles: Vec<Collectible>,
    pub collectible_size: f32,
    pub target_count: usize,
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Run seed for reproducibility
    pub seed: u64,
    settings: Settings,
    rng: Pcg32,
}

impl GameState {
    /// Create a game on a `width` x `height` canvas with a full collectible pool
    pub fn new(settings: &Settings, width: f32, height: f32, seed: u64) -> Self {
        let scale = Scale::for_canvas(settings, width, height);
        let center = Vec2::new(width / 2.0, height / 2.0);
        let mut state = Self {
            width,
            height,
            player: Player::new(center, &scale, settings),
            collectibles: Vec::with_capacity(scale.target_count),
            collectible_size: scale.entity_size,
            target_count: scale.target_count,
            score: 0,
            time_ticks: 0,
            seed,
            settings: settings.clone(),
            rng: Pcg32::seed_from_u64(seed),
        };
        state.fill_pool();
        state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn scale(&self) -> Scale {
        Scale::for_canvas(&self.settings, self.width, self.height)
    }

    /// Adopt new canvas dimensions
    ///
    /// Recomputes every size-derived quantity and regenerates the pool.
    /// Player position, rotation, color and score carry over.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;

        let scale = self.scale();
        self.player.size = scale.entity_size;
        self.player.speed = scale.player_speed;
        self.collectible_size = scale.entity_size;
        self.target_count = scale.target_count;

        self.collectibles.clear();
        self.fill_pool();

        log::info!(
            "Resized to {}x{}: entity size {:.1}, {} collectibles",
            width,
            height,
            scale.entity_size,
            scale.target_count
        );
    }

    /// Make a collectible at a uniform-random position with a random palette color
    pub fn random_collectible(&mut self) -> Collectible {
        let span_x = (self.width - self.collectible_size).max(0.0);
        let span_y = (self.height - self.collectible_size).max(0.0);
        let x = self.rng.random::<f32>() * span_x;
        let y = self.rng.random::<f32>() * span_y;
        let palette = &self.settings.palette;
        let color = if palette.is_empty() {
            self.settings.start_color
        } else {
            palette[self.rng.random_range(0..palette.len())]
        };
        Collectible {
            pos: Vec2::new(x, y),
            color,
        }
    }

    /// Top the pool up to the target count, returning how many were spawned
    pub fn fill_pool(&mut self) -> usize {
        let mut spawned = 0;
        while self.collectibles.len() < self.target_count {
            let collectible = self.random_collectible();
            self.collectibles.push(collectible);
            spawned += 1;
        }
        spawned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_state_is_populated() {
        let settings = Settings::default();
        let state = GameState::new(&settings, 800.0, 600.0, 42);

        assert_eq!(state.player.pos, Vec2::new(400.0, 300.0));
        assert_eq!(state.player.color, settings.start_color);
        assert!((state.player.size - 30.0).abs() < 1e-3);
        assert!((state.player.speed - 4.8).abs() < 1e-3);
        assert_eq!(state.target_count, 53);
        assert_eq!(state.collectibles.len(), state.target_count);
    }

    #[test]
    fn test_spawns_stay_on_canvas() {
        let state = GameState::new(&Settings::default(), 800.0, 600.0, 7);
        let size = state.collectible_size;
        for c in &state.collectibles {
            assert!(c.pos.x >= 0.0 && c.pos.x <= 800.0 - size);
            assert!(c.pos.y >= 0.0 && c.pos.y <= 600.0 - size);
            assert!(state.settings().palette.contains(&c.color));
        }
    }

    #[test]
    fn test_same_seed_same_pool() {
        let settings = Settings::default();
        let a = GameState::new(&settings, 640.0, 480.0, 1234);
        let b = GameState::new(&settings, 640.0, 480.0, 1234);
        assert_eq!(a.collectibles, b.collectibles);
    }

    #[test]
    fn test_zero_sized_canvas() {
        let state = GameState::new(&Settings::default(), 0.0, 0.0, 1);
        assert_eq!(state.target_count, 0);
        assert!(state.collectibles.is_empty());
    }

    #[test]
    fn test_target_count_is_bounded() {
        // Underflowing cell area would otherwise divide to infinity
        assert_eq!(target_count(800.0, 600.0, 1e-20, 10.0), 0);
        assert_eq!(target_count(800.0, 600.0, 0.01, 1.0), MAX_COLLECTIBLES);
        assert_eq!(target_count(f32::MAX, f32::MAX, 1.0, 1.0), 0);
    }

    #[test]
    fn test_resize_keeps_player_and_score() {
        let mut state = GameState::new(&Settings::default(), 800.0, 600.0, 3);
        state.player.pos = Vec2::new(120.0, 80.0);
        state.score = 9;

        state.resize(1920.0, 1080.0);

        assert_eq!(state.player.pos, Vec2::new(120.0, 80.0));
        assert_eq!(state.score, 9);
        assert!((state.player.size - 54.0).abs() < 1e-3);
        assert_eq!(state.collectible_size, state.player.size);
        assert_eq!(state.collectibles.len(), state.target_count);
    }

    #[test]
    fn test_rotation_scales_with_deflection() {
        let settings = Settings::default();
        let scale = Scale::for_canvas(&settings, 800.0, 600.0);
        let mut player = Player::new(Vec2::new(400.0, 300.0), &scale, &settings);

        player.steer(Vec2::new(0.5, 0.0));
        player.advance();
        assert!((player.rotation - 0.05).abs() < 1e-5);

        player.steer(Vec2::new(0.0, 1.0));
        player.advance();
        assert!((player.rotation - 0.15).abs() < 1e-5);
    }

    proptest! {
        #[test]
        fn prop_clamp_keeps_square_inside(
            x in -5000.0f32..5000.0,
            y in -5000.0f32..5000.0,
            w in 100.0f32..3000.0,
            h in 100.0f32..3000.0,
        ) {
            let settings = Settings::default();
            let scale = Scale::for_canvas(&settings, w, h);
            let mut player = Player::new(Vec2::new(x, y), &scale, &settings);
            player.clamp_to(w, h);

            let half = player.half_size();
            prop_assert!(player.pos.x >= half && player.pos.x <= w - half);
            prop_assert!(player.pos.y >= half && player.pos.y <= h - half);
        }

        #[test]
        fn prop_resize_round_trip_restores_target(
            w in 100.0f32..4000.0,
            h in 100.0f32..4000.0,
            w2 in 100.0f32..4000.0,
            h2 in 100.0f32..4000.0,
        ) {
            let mut state = GameState::new(&Settings::default(), w, h, 11);
            let original = state.target_count;
            state.resize(w2, h2);
            state.resize(w, h);
            prop_assert_eq!(state.target_count, original);
            prop_assert_eq!(state.collectibles.len(), original);
        }
    }
}
