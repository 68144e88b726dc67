//! Item spawning
//!
//! Items enter at the top of the field with a season-keyed look and a
//! velocity that grows with both level and in-level score.

use glam::Vec2;
use rand::Rng;

use super::season::{item_color, random_item_label};
use super::state::{GameState, Item};
use crate::consts::*;

/// Downward velocity for an item spawned now
pub fn item_velocity(state: &GameState) -> f32 {
    state.fall_speed() + state.score as f32 / 10.0
}

/// Spawn one item at a random column at the top of the field
pub fn spawn_item(state: &mut GameState) {
    let size = ITEM_SIZE;
    // Whole-unit columns in [0, FIELD_WIDTH - size)
    let columns = (FIELD_WIDTH - size) as u32;
    let x = state.rng.random_range(0..columns) as f32;
    let is_good = state.rng.random_bool(GOOD_ITEM_CHANCE);

    let season = state.season();
    let label = random_item_label(season, is_good, &mut state.rng);
    let item = Item {
        pos: Vec2::new(x, FIELD_HEIGHT),
        size,
        velocity: item_velocity(state),
        color: item_color(season, is_good),
        label,
        is_good,
    };
    log::debug!(
        "Spawned {} ({}) at x={} v={}",
        item.label,
        if is_good { "good" } else { "bad" },
        item.pos.x,
        item.velocity
    );
    state.items.push(item);
}

/// Accumulate `dt` and spawn when the interval is reached.
///
/// The timer resets to zero on spawn rather than carrying the excess over.
pub fn advance_spawner(state: &mut GameState, dt: f32) {
    state.spawn_timer += dt;
    if state.spawn_timer >= state.spawn_interval() {
        spawn_item(state);
        state.spawn_timer = 0.0;
    }
}
