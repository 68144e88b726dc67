//! The session object shared by the update and render entry points

use super::ambience::Ambience;
use super::state::GameState;
use super::tick::{TickInput, tick};

/// Catcher session plus its animated backdrop
#[derive(Debug, Clone)]
pub struct World {
    pub game: GameState,
    pub ambience: Ambience,
}

impl World {
    pub fn new(seed: u64, snowflake_count: usize) -> Self {
        Self {
            game: GameState::new(seed),
            // Separate stream so backdrop animation never perturbs spawning
            ambience: Ambience::new(seed.wrapping_add(1), snowflake_count),
        }
    }

    /// Simulation callback
    pub fn tick_game(&mut self, input: &TickInput, dt: f32) {
        tick(&mut self.game, input, dt);
    }

    /// Ambient animation callback; keeps running while paused or over
    pub fn tick_ambience(&mut self) {
        self.ambience.advance(self.game.season());
    }
}
