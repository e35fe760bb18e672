//! Per-frame simulation tick
//!
//! One tick is: steer from input, integrate, clamp, pick up, respawn.

use glam::Vec2;

use super::collision::resolve_pickups;
use super::state::GameState;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Joystick deflection, inside the unit disk
    pub steer: Vec2,
}

/// What happened during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// Collectibles picked up (equals the score gained)
    pub collected: u32,
    /// Collectibles spawned to refill the pool
    pub spawned: usize,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) -> TickOutcome {
    state.time_ticks += 1;

    let player = &mut state.player;
    player.steer(input.steer);
    player.advance();
    player.clamp_to(state.width, state.height);

    let report = resolve_pickups(state);
    let spawned = state.fill_pool();

    TickOutcome {
        collected: report.collected,
        spawned,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::state::Collectible;
    use crate::Color;
    use proptest::prelude::*;

    #[test]
    fn test_pickup_scenario() {
        let mut state = GameState::new(&Settings::default(), 800.0, 600.0, 2024);
        let teal = Color::rgb(0x4E, 0xCD, 0xC4);
        state.player.pos = Vec2::new(400.0, 300.0);
        state.player.size = 40.0;
        state.collectible_size = 40.0;
        state.collectibles = vec![Collectible {
            pos: Vec2::new(390.0, 290.0),
            color: teal,
        }];

        let outcome = tick(&mut state, &TickInput::default());

        assert_eq!(outcome.collected, 1);
        assert_eq!(state.score, 1);
        assert_eq!(state.player.color, teal);
        assert_eq!(outcome.spawned, state.target_count);
        assert_eq!(state.collectibles.len(), state.target_count);
    }

    #[test]
    fn test_full_deflection_moves_at_player_speed() {
        let mut state = GameState::new(&Settings::default(), 800.0, 600.0, 1);
        state.collectibles.clear();
        state.target_count = 0;
        let start = state.player.pos;
        let speed = state.player.speed;

        let input = TickInput {
            steer: Vec2::new(1.0, 0.0),
        };
        tick(&mut state, &input);

        assert_eq!(state.player.vel, Vec2::new(speed, 0.0));
        assert!((state.player.pos.x - (start.x + speed)).abs() < 1e-4);
        assert_eq!(state.player.pos.y, start.y);
        assert!((state.player.rotation - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_idle_ticks_do_not_rotate() {
        let mut state = GameState::new(&Settings::default(), 800.0, 600.0, 8);
        state.player.rotation = 1.25;
        for _ in 0..120 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.player.rotation, 1.25);
        assert_eq!(state.time_ticks, 120);
    }

    #[test]
    fn test_player_stops_at_wall() {
        let mut state = GameState::new(&Settings::default(), 800.0, 600.0, 4);
        let input = TickInput {
            steer: Vec2::new(-1.0, -1.0).normalize(),
        };
        for _ in 0..500 {
            tick(&mut state, &input);
        }
        let half = state.player.half_size();
        assert!((state.player.pos.x - half).abs() < 1e-4);
        assert!((state.player.pos.y - half).abs() < 1e-4);
    }

    #[test]
    fn test_canvas_smaller_than_player() {
        let mut state = GameState::new(&Settings::default(), 10.0, 5.0, 6);
        state.player.size = 40.0;
        state.player.pos = Vec2::new(3.0, 2.0);
        let input = TickInput {
            steer: Vec2::new(1.0, 1.0).normalize(),
        };

        for _ in 0..3 {
            tick(&mut state, &input);
            assert_eq!(state.player.pos, Vec2::new(20.0, 20.0));
        }
    }

    #[test]
    fn test_determinism() {
        let settings = Settings::default();
        let mut state1 = GameState::new(&settings, 1024.0, 768.0, 99999);
        let mut state2 = GameState::new(&settings, 1024.0, 768.0, 99999);

        let inputs = [
            Vec2::new(1.0, 0.0),
            Vec2::new(0.6, 0.8),
            Vec2::ZERO,
            Vec2::new(-0.3, 0.4),
        ];
        for _ in 0..50 {
            for steer in inputs {
                let input = TickInput { steer };
                tick(&mut state1, &input);
                tick(&mut state2, &input);
            }
        }

        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.player.pos, state2.player.pos);
        assert_eq!(state1.collectibles, state2.collectibles);
    }

    fn steer_strategy() -> impl Strategy<Value = Vec2> {
        (0.0f32..std::f32::consts::TAU, 0.0f32..=1.0).prop_map(|(angle, mag)| {
            Vec2::new(angle.cos(), angle.sin()) * mag
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_pool_full_and_score_matches_pickups(
            seed in any::<u64>(),
            steers in proptest::collection::vec(steer_strategy(), 1..200),
        ) {
            let mut state = GameState::new(&Settings::default(), 800.0, 600.0, seed);

            for steer in steers {
                let score_before = state.score;
                let len_before = state.collectibles.len();

                let outcome = tick(&mut state, &TickInput { steer });

                prop_assert!(state.score >= score_before);
                prop_assert_eq!(state.score - score_before, u64::from(outcome.collected));
                prop_assert_eq!(
                    len_before - outcome.collected as usize + outcome.spawned,
                    state.collectibles.len()
                );
                prop_assert_eq!(state.collectibles.len(), state.target_count);

                let half = state.player.half_size();
                prop_assert!(state.player.pos.x >= half && state.player.pos.x <= 800.0 - half);
                prop_assert!(state.player.pos.y >= half && state.player.pos.y <= 600.0 - half);
            }
        }
    }
}
