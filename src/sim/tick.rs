//! Per-tick simulation update
//!
//! Advances the catcher session by one clock delta.

use super::spawn::advance_spawner;
use super::state::{Controls, GameEvent, GamePhase, GameState};
use crate::consts::*;

/// One-shot requests and modes for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pause toggle (restarts when the game is over)
    pub pause: bool,
    /// Jump to the next season (debug/testing)
    pub advance_season: bool,
    /// Force a level up (debug/testing)
    pub level_up: bool,
    /// Idle/demo mode - autopilot steers the basket
    pub idle_mode: bool,
}

/// Advance the game state by `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    // A stalled or backwards clock moves nothing
    let dt = if dt > 0.0 { dt } else { 0.0 };

    // Debug actions land before the pause toggle; only a reset is accepted
    // once the game is over
    if state.phase != GamePhase::GameOver {
        if input.advance_season {
            state.advance_season();
        }
        if input.level_up {
            state.level_up();
        }
    }

    if input.pause {
        match state.phase {
            GamePhase::GameOver => state.reset(),
            GamePhase::Playing => {
                state.phase = GamePhase::Paused;
                state.events.push(GameEvent::Paused);
                return;
            }
            GamePhase::Paused => {
                state.phase = GamePhase::Playing;
                state.events.push(GameEvent::Resumed);
            }
        }
    }

    if state.phase != GamePhase::Playing {
        return;
    }

    state.time_ticks += 1;

    if input.idle_mode {
        state.controls = autopilot(state);
    }

    if let Some(banner) = state.banner.as_mut() {
        if !banner.count_down(dt) {
            state.banner = None;
        }
    }

    // Left then right: right wins when both are held
    let step = BASKET_SPEED * dt;
    if state.controls.left {
        state.basket.shift(-step);
    }
    if state.controls.right {
        state.basket.shift(step);
    }

    advance_spawner(state, dt);
    update_items(state, dt);
}

/// Move, collide and prune items in one pass, compacting the list in place
fn update_items(state: &mut GameState, dt: f32) {
    let mut items = std::mem::take(&mut state.items);
    let basket = state.basket.rect();
    let mut kept = 0;

    for i in 0..items.len() {
        // Once the game ends the remaining items are left as they are
        if state.phase == GamePhase::Playing {
            let item = &mut items[i];
            item.pos.y -= item.velocity * dt;

            if item.rect().overlaps(&basket) {
                if item.is_good {
                    state.events.push(GameEvent::Caught { label: item.label });
                    state.add_catch_points();
                } else {
                    state.lose_life();
                }
                continue;
            }
            if item.is_below_field() {
                state.events.push(GameEvent::Missed);
                continue;
            }
        }
        items.swap(kept, i);
        kept += 1;
    }

    items.truncate(kept);
    // Level ups and resets never add items, so nothing is lost here
    items.append(&mut state.items);
    state.items = items;
}

/// Demo steering: chase the lowest good item, dodge a hazard about to land
fn autopilot(state: &GameState) -> Controls {
    let basket = &state.basket;
    let center = basket.center_x();
    let danger_height = basket.y + basket.height + 120.0;

    let threat = state
        .items
        .iter()
        .filter(|item| !item.is_good && item.pos.y < danger_height)
        .find(|item| {
            item.pos.x < basket.x + basket.width + 10.0 && item.pos.x + item.size > basket.x - 10.0
        });

    let target_x = if let Some(hazard) = threat {
        let hazard_center = hazard.pos.x + hazard.size / 2.0;
        // Step away from the hazard, toward the roomier side
        if hazard_center > center || hazard_center > FIELD_WIDTH - basket.width {
            hazard.pos.x - basket.width
        } else {
            hazard.pos.x + hazard.size + basket.width
        }
    } else if let Some(item) = state
        .items
        .iter()
        .filter(|item| item.is_good && item.pos.y > basket.y)
        .min_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
    {
        item.pos.x + item.size / 2.0
    } else {
        FIELD_WIDTH / 2.0
    };

    let dead_zone = 8.0;
    Controls {
        left: target_x < center - dead_zone,
        right: target_x > center + dead_zone,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::season::Season;
    use crate::sim::state::Item;
    use glam::Vec2;

    fn item_at(x: f32, y: f32, is_good: bool) -> Item {
        Item {
            pos: Vec2::new(x, y),
            size: ITEM_SIZE,
            velocity: 100.0,
            color: [1.0; 4],
            label: if is_good { "Apple" } else { "Trash" },
            is_good,
        }
    }

    #[test]
    fn test_good_item_falls_into_basket() {
        let mut state = GameState::new(1);
        // Directly above the basket (400..500, 20..80)
        state.items.push(item_at(430.0, 120.0, true));

        tick(&mut state, &TickInput::default(), 0.5);

        assert_eq!(state.score, 10);
        assert!(state.items.is_empty());
        assert!(state.events.contains(&GameEvent::Caught { label: "Apple" }));
    }

    #[test]
    fn test_bad_item_costs_a_life() {
        let mut state = GameState::new(1);
        state.items.push(item_at(430.0, 120.0, false));

        tick(&mut state, &TickInput::default(), 0.5);

        assert_eq!(state.lives, 2);
        assert_eq!(state.score, 0);
        assert!(state.items.is_empty());
    }

    #[test]
    fn test_missed_item_pruned_without_side_effects() {
        let mut state = GameState::new(1);
        state.items.push(item_at(10.0, -39.0, false));

        tick(&mut state, &TickInput::default(), 0.05);

        assert!(state.items.is_empty());
        assert_eq!(state.lives, 3);
        assert_eq!(state.score, 0);
        assert_eq!(state.drain_events(), vec![GameEvent::Missed]);
    }

    #[test]
    fn test_pruning_keeps_order_of_survivors() {
        let mut state = GameState::new(1);
        state.items.push(item_at(10.0, 500.0, true));
        state.items.push(item_at(430.0, 120.0, true)); // caught
        state.items.push(item_at(700.0, 400.0, false));
        state.items.push(item_at(10.0, -45.0, true)); // missed
        state.items.push(item_at(200.0, 300.0, true));

        tick(&mut state, &TickInput::default(), 0.5);

        let xs: Vec<f32> = state.items.iter().map(|i| i.pos.x).collect();
        assert_eq!(xs, vec![10.0, 700.0, 200.0]);
    }

    #[test]
    fn test_last_life_ends_game_and_freezes_rest() {
        let mut state = GameState::new(1);
        state.lives = 1;
        state.items.push(item_at(430.0, 120.0, false));
        state.items.push(item_at(440.0, 120.0, false));

        tick(&mut state, &TickInput::default(), 0.5);

        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.lives, 0);
        // Second hazard untouched
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].pos.y, 120.0);

        // Nothing moves while over
        let basket_x = state.basket.x;
        state.controls.left = true;
        tick(&mut state, &TickInput::default(), 1.0);
        assert_eq!(state.basket.x, basket_x);
        assert_eq!(state.items[0].pos.y, 120.0);
    }

    #[test]
    fn test_pause_toggle_freezes_simulation() {
        let mut state = GameState::new(1);
        state.items.push(item_at(10.0, 500.0, true));

        let pause = TickInput {
            pause: true,
            ..Default::default()
        };
        tick(&mut state, &pause, 0.1);
        assert_eq!(state.phase, GamePhase::Paused);

        tick(&mut state, &TickInput::default(), 1.0);
        assert_eq!(state.items[0].pos.y, 500.0);
        assert_eq!(state.spawn_timer, 0.0);

        tick(&mut state, &pause, 0.1);
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(state.items[0].pos.y < 500.0);
    }

    #[test]
    fn test_pause_key_restarts_after_game_over() {
        let mut state = GameState::new(1);
        state.phase = GamePhase::GameOver;
        state.lives = 0;
        state.level = 3;

        let pause = TickInput {
            pause: true,
            ..Default::default()
        };
        tick(&mut state, &pause, 0.0);

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.lives, 3);
        assert_eq!(state.level, 1);
    }

    #[test]
    fn test_debug_actions_ignored_when_over() {
        let mut state = GameState::new(1);
        state.phase = GamePhase::GameOver;
        let input = TickInput {
            advance_season: true,
            level_up: true,
            ..Default::default()
        };
        tick(&mut state, &input, 0.1);
        assert_eq!(state.level, 1);
        assert_eq!(state.season(), Season::Spring);
    }

    #[test]
    fn test_debug_actions_survive_same_tick_pause() {
        let mut state = GameState::new(1);
        let input = TickInput {
            pause: true,
            advance_season: true,
            level_up: true,
            ..Default::default()
        };
        tick(&mut state, &input, SIM_DT);

        assert_eq!(state.phase, GamePhase::Paused);
        assert_eq!(state.level, 2);
        assert!(state.banner.is_some());
    }

    #[test]
    fn test_debug_level_up() {
        let mut state = GameState::new(1);
        state.score = 70;
        let input = TickInput {
            level_up: true,
            ..Default::default()
        };
        tick(&mut state, &input, 0.0);
        assert_eq!(state.level, 2);
        assert_eq!(state.score, 0);
        assert!(state.banner.is_some());
    }

    #[test]
    fn test_right_wins_when_both_held() {
        let mut state = GameState::new(1);
        state.controls = Controls {
            left: true,
            right: true,
        };
        tick(&mut state, &TickInput::default(), 0.1);
        // Left then right cancel out away from the walls
        assert!((state.basket.x - 400.0).abs() < 1e-3);

        state.basket.x = 0.0;
        tick(&mut state, &TickInput::default(), 0.1);
        // Left is clamped at the wall first, so right gets the last word
        assert!((state.basket.x - 30.0).abs() < 1e-3);
    }

    #[test]
    fn test_banner_hides_after_three_seconds() {
        let mut state = GameState::new(1);
        state.level_up();
        for _ in 0..179 {
            tick(&mut state, &TickInput::default(), SIM_DT);
        }
        assert!(state.banner.is_some());
        for _ in 0..2 {
            tick(&mut state, &TickInput::default(), SIM_DT);
        }
        assert!(state.banner.is_none());
    }

    #[test]
    fn test_zero_dt_changes_no_physics() {
        let mut state = GameState::new(1);
        state.items.push(item_at(10.0, 300.0, true));
        state.controls.right = true;
        let before_x = state.basket.x;

        tick(&mut state, &TickInput::default(), 0.0);
        tick(&mut state, &TickInput::default(), -1.0);

        assert_eq!(state.basket.x, before_x);
        assert_eq!(state.items[0].pos.y, 300.0);
        assert_eq!(state.spawn_timer, 0.0);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = GameState::new(99999);
        let mut state2 = GameState::new(99999);
        let input = TickInput {
            idle_mode: true,
            ..Default::default()
        };

        for _ in 0..600 {
            tick(&mut state1, &input, SIM_DT);
            tick(&mut state2, &input, SIM_DT);
        }

        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.items, state2.items);
        assert_eq!(state1.basket, state2.basket);
    }

    #[test]
    fn test_autopilot_chases_good_item() {
        let mut state = GameState::new(1);
        state.items.push(item_at(800.0, 400.0, true));
        let controls = autopilot(&state);
        assert!(controls.right);
        assert!(!controls.left);
    }
}
