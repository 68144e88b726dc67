//! End-to-end play scenarios driven through the public API

use glam::Vec2;

use seasonal_catcher::consts::{ITEM_SIZE, SIM_DT};
use seasonal_catcher::renderer::{HudView, build_frame};
use seasonal_catcher::sim::{
    Flow, GameEvent, GamePhase, GameState, InputEvent, InputState, Item, Season, TickInput, World,
    tick,
};

fn drop_on_basket(state: &mut GameState, is_good: bool) {
    let x = state.basket.center_x() - ITEM_SIZE / 2.0;
    state.items.push(Item {
        pos: Vec2::new(x, 85.0),
        size: ITEM_SIZE,
        velocity: 100.0,
        color: [1.0; 4],
        label: if is_good { "Apple" } else { "Trash" },
        is_good,
    });
}

#[test]
fn full_year_levels_up_once() {
    let mut state = GameState::new(11);
    let mut seasons = vec![state.season()];

    for _ in 0..20 {
        drop_on_basket(&mut state, true);
        tick(&mut state, &TickInput::default(), 0.1);
        if seasons.last() != Some(&state.season()) {
            seasons.push(state.season());
        }
    }

    assert_eq!(
        seasons,
        vec![
            Season::Spring,
            Season::Summer,
            Season::Autumn,
            Season::Winter,
            Season::Spring
        ]
    );
    assert_eq!(state.level, 2);
    assert_eq!(state.score, 0);
    assert!(state.banner.is_some());
    assert!(!state.winter_completed);

    let level_ups = state
        .drain_events()
        .into_iter()
        .filter(|e| matches!(e, GameEvent::LevelUp { .. }))
        .count();
    assert_eq!(level_ups, 1);
}

#[test]
fn three_hazards_end_the_game_and_space_restarts() {
    let mut state = GameState::new(5);
    let mut input = InputState::new();

    for _ in 0..3 {
        drop_on_basket(&mut state, false);
        tick(&mut state, &input.take_tick_input(), 0.1);
    }
    assert_eq!(state.phase, GamePhase::GameOver);
    assert_eq!(state.lives, 0);

    // Frozen: more time changes nothing
    let basket = state.basket;
    input.handle(&mut state, InputEvent::LeftPressed);
    tick(&mut state, &input.take_tick_input(), 1.0);
    assert_eq!(state.basket, basket);

    assert_eq!(input.handle(&mut state, InputEvent::PauseToggle), Flow::Continue);
    tick(&mut state, &input.take_tick_input(), SIM_DT);
    assert_eq!(state.phase, GamePhase::Playing);
    assert_eq!(state.lives, 3);
    assert_eq!(state.level, 1);
    assert!(state.items.is_empty());
}

#[test]
fn pause_freezes_items_until_resumed() {
    let mut state = GameState::new(2);
    let mut input = InputState::new();
    drop_on_basket(&mut state, true);
    state.items[0].pos.y = 400.0;

    input.handle(&mut state, InputEvent::PauseToggle);
    tick(&mut state, &input.take_tick_input(), SIM_DT);
    assert!(state.is_paused());

    for _ in 0..60 {
        tick(&mut state, &input.take_tick_input(), SIM_DT);
    }
    assert_eq!(state.items[0].pos.y, 400.0);

    input.handle(&mut state, InputEvent::PauseToggle);
    tick(&mut state, &input.take_tick_input(), SIM_DT);
    assert!(!state.is_paused());
    assert!(state.items[0].pos.y < 400.0);

    let events = state.drain_events();
    assert_eq!(events, vec![GameEvent::Paused, GameEvent::Resumed]);
}

#[test]
fn debug_keys_cycle_seasons_and_levels() {
    let mut state = GameState::new(3);
    let mut input = InputState::new();

    for expected in [Season::Summer, Season::Autumn, Season::Winter, Season::Spring] {
        input.handle(&mut state, InputEvent::AdvanceSeason);
        tick(&mut state, &input.take_tick_input(), SIM_DT);
        assert_eq!(state.season(), expected);
    }
    assert_eq!(state.level, 1);

    input.handle(&mut state, InputEvent::ForceLevelUp);
    tick(&mut state, &input.take_tick_input(), SIM_DT);
    assert_eq!(state.level, 2);
    assert_eq!(state.fall_speed(), 200.0);
    assert_eq!(state.spawn_interval(), 0.75);
}

#[test]
fn debug_keys_pressed_with_pause_still_apply() {
    let mut state = GameState::new(3);
    let mut input = InputState::new();

    input.handle(&mut state, InputEvent::AdvanceSeason);
    input.handle(&mut state, InputEvent::ForceLevelUp);
    input.handle(&mut state, InputEvent::PauseToggle);
    tick(&mut state, &input.take_tick_input(), SIM_DT);

    assert!(state.is_paused());
    assert_eq!(state.level, 2);
    assert_eq!(state.season(), Season::Spring);

    // Nothing left queued for the next tick
    tick(&mut state, &input.take_tick_input(), SIM_DT);
    assert_eq!(state.level, 2);
}

#[test]
fn exit_event_asks_host_to_stop() {
    let mut state = GameState::new(3);
    let mut input = InputState::new();
    assert_eq!(input.handle(&mut state, InputEvent::Exit), Flow::Exit);
}

#[test]
fn demo_world_produces_drawable_frames() {
    let mut world = World::new(2024, 100);
    let input = TickInput {
        idle_mode: true,
        ..Default::default()
    };

    for _ in 0..600 {
        world.tick_game(&input, SIM_DT);
        world.tick_ambience();
    }

    assert!(world.game.time_ticks > 0);
    let frame = build_frame(&world, 16);
    assert_eq!(frame.len() % 3, 0);

    let hud = HudView::from_state(&world.game);
    assert_eq!(hud.score, format!("Score: {}", world.game.score));
    assert_eq!(hud.item_labels.len(), world.game.items.len());
}
