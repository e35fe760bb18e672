//! A running game
//!
//! `Game` owns the simulation state and the joystick, and is handed its
//! render surface and score display when it is built. The host drives it by
//! calling [`Game::frame`] once per display refresh; tests call it directly to
//! single-step.

use crate::input::{DragEvent, DragPhase, Rect};
use crate::renderer::{self, ScoreSink, Surface};
use crate::settings::Settings;
use crate::sim::{GameState, Joystick, TickInput, TickOutcome, tick};

pub struct Game<S: Surface, K: ScoreSink> {
    state: GameState,
    joystick: Joystick,
    surface: S,
    score_sink: K,
}

impl<S: Surface, K: ScoreSink> Game<S, K> {
    /// Build a game on a `width` x `height` surface
    ///
    /// `Settings::seed` overrides `seed` when set.
    pub fn new(
        settings: &Settings,
        width: f32,
        height: f32,
        seed: u64,
        surface: S,
        mut score_sink: K,
    ) -> Self {
        let seed = settings.seed.unwrap_or(seed);
        let state = GameState::new(settings, width, height, seed);
        log::info!(
            "New game {}x{} with seed {} ({} collectibles)",
            width,
            height,
            seed,
            state.target_count
        );
        score_sink.show_score(state.score);
        Self {
            state,
            joystick: Joystick::new(settings.joystick_max_distance),
            surface,
            score_sink,
        }
    }

    /// Feed a drag event; `zone` is the joystick element's current client rect
    pub fn handle_drag(&mut self, event: &DragEvent, zone: Rect) {
        match (event.phase, event.point) {
            (DragPhase::Start, Some(point)) => self.joystick.drag_start(zone.center(), point),
            (DragPhase::Move, Some(point)) => {
                self.joystick.drag_move(point);
            }
            (DragPhase::End, _) => self.joystick.drag_end(),
            // Touch start/move with no active touch
            (_, None) => {}
        }
    }

    /// Adopt new surface dimensions and regenerate the pool
    pub fn resize(&mut self, width: f32, height: f32) {
        self.state.resize(width, height);
    }

    /// One display refresh: simulate, draw, then show each score increment
    pub fn frame(&mut self) -> TickOutcome {
        let input = TickInput {
            steer: self.joystick.deflection(),
        };
        let outcome = tick(&mut self.state, &input);
        renderer::draw(&self.state, &mut self.surface);

        let start = self.state.score - u64::from(outcome.collected);
        for score in start + 1..=self.state.score {
            self.score_sink.show_score(score);
        }
        outcome
    }

    /// Run `frames` frames back to back, returning the total picked up
    pub fn run_frames(&mut self, frames: u32) -> u64 {
        (0..frames)
            .map(|_| u64::from(self.frame().collected))
            .sum()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn joystick(&self) -> &Joystick {
        &self.joystick
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn score_sink(&self) -> &K {
        &self.score_sink
    }
}
