//! Frame assembly: turns a `World` into one triangle list
//!
//! Coordinates are field units with the origin bottom-left. Painter's
//! order: backdrop, basket, items, HUD, then overlays.

use glam::Vec2;
use std::f32::consts::PI;

use super::shapes::{circle, heart, rect, triangle};
use super::vertex::{Vertex, colors};
use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH, STARTING_LIVES};
use crate::sim::{Ambience, GamePhase, GameState, Season, World, sun_height};

const GROUND_HEIGHT: f32 = 120.0;
const SUN_RADIUS: f32 = 50.0;
const CLOUD_Y: [f32; 3] = [500.0, 550.0, 480.0];
const TREE_X: [f32; 3] = [600.0, 700.0, 800.0];
const FIRE_SPOTS: [(f32, f32); 5] = [
    (150.0, 250.0),
    (230.0, 252.0),
    (613.0, 250.0),
    (710.0, 245.0),
    (817.0, 253.0),
];

const HUD_ORIGIN: Vec2 = Vec2::new(5.0, FIELD_HEIGHT - 85.0);
const HUD_SIZE: Vec2 = Vec2::new(150.0, 80.0);
const HEART_START_X: f32 = 60.0;
const HEART_Y: f32 = FIELD_HEIGHT - 45.0;
const HEART_SPACING: f32 = 30.0;
const HEART_SCALE: f32 = 0.6;

/// Build the full frame
pub fn build_frame(world: &World, segments: u32) -> Vec<Vertex> {
    let mut out = Vec::with_capacity(8192);
    let game = &world.game;
    let season = game.season();

    backdrop(&mut out, season, &world.ambience, segments);

    out.extend(rect(
        Vec2::new(game.basket.x, game.basket.y),
        Vec2::new(game.basket.width, game.basket.height),
        colors::BASKET,
    ));
    for item in &game.items {
        out.extend(rect(item.pos, Vec2::splat(item.size), item.color));
    }

    hud(&mut out, game, segments);
    overlays(&mut out, game);

    out
}

fn backdrop(out: &mut Vec<Vertex>, season: Season, ambience: &Ambience, segments: u32) {
    let small = (segments / 2).max(8);

    let (sky, ground) = match season {
        Season::Spring | Season::Summer => (colors::SKY, colors::GRASS),
        Season::Autumn => (colors::SKY_AUTUMN, colors::GROUND_AUTUMN),
        Season::Winter => (colors::SKY_WINTER, colors::GROUND_WINTER),
    };
    out.extend(rect(
        Vec2::new(0.0, GROUND_HEIGHT),
        Vec2::new(FIELD_WIDTH, FIELD_HEIGHT - GROUND_HEIGHT),
        sky,
    ));
    sun(out, ambience.sun_x, segments);
    out.extend(rect(Vec2::ZERO, Vec2::new(FIELD_WIDTH, GROUND_HEIGHT), ground));

    for (x, y) in ambience.cloud_x.iter().zip(CLOUD_Y) {
        cloud(out, Vec2::new(*x, y), small);
    }

    house(out);

    let summer = season == Season::Summer;
    if summer {
        for (spot, offset) in FIRE_SPOTS.iter().zip(ambience.fire_offset).take(2) {
            fire(out, Vec2::new(spot.0, spot.1), offset);
        }
    }

    for x in TREE_X {
        tree(out, Vec2::new(x, GROUND_HEIGHT), season, segments, small);
    }

    if summer {
        for (spot, offset) in FIRE_SPOTS.iter().zip(ambience.fire_offset).skip(2) {
            fire(out, Vec2::new(spot.0, spot.1), offset);
        }
    }

    if season == Season::Winter {
        let flake_segments = (segments / 3).max(6);
        for flake in &ambience.snowflakes {
            out.extend(circle(
                Vec2::new(flake.x, flake.y),
                flake.size,
                colors::SNOW,
                flake_segments,
            ));
        }
    }
}

fn sun(out: &mut Vec<Vertex>, x: f32, segments: u32) {
    let center = Vec2::new(x, sun_height(x));
    out.extend(circle(center, SUN_RADIUS, colors::SUN, segments));

    for i in 0..12 {
        let angle = i as f32 * (2.0 * PI / 12.0);
        let ray = |a: f32, r: f32| center + Vec2::from_angle(a) * r;
        out.extend(triangle(
            ray(angle, 60.0),
            ray(angle + 0.2, 75.0),
            ray(angle - 0.2, 75.0),
            colors::SUN_RAY,
        ));
    }
}

fn cloud(out: &mut Vec<Vertex>, at: Vec2, segments: u32) {
    for (offset, r) in [
        (Vec2::ZERO, 30.0),
        (Vec2::new(25.0, 10.0), 25.0),
        (Vec2::new(-25.0, 10.0), 25.0),
        (Vec2::new(0.0, 15.0), 28.0),
    ] {
        out.extend(circle(at + offset, r, colors::CLOUD, segments));
    }
}

fn house(out: &mut Vec<Vertex>) {
    out.extend(rect(
        Vec2::new(120.0, 120.0),
        Vec2::new(150.0, 100.0),
        colors::HOUSE_WALL,
    ));
    out.extend(triangle(
        Vec2::new(100.0, 220.0),
        Vec2::new(290.0, 220.0),
        Vec2::new(195.0, 300.0),
        colors::HOUSE_ROOF,
    ));
    out.extend(rect(
        Vec2::new(180.0, 120.0),
        Vec2::new(40.0, 70.0),
        colors::HOUSE_DOOR,
    ));
}

fn fire(out: &mut Vec<Vertex>, at: Vec2, offset: f32) {
    let tongue = |half: f32, base: f32, tip: f32, color| {
        triangle(
            at + Vec2::new(-half, base),
            at + Vec2::new(half, base),
            at + Vec2::new(0.0, tip + offset),
            color,
        )
    };
    out.extend(tongue(20.0, 0.0, 40.0, colors::FIRE_OUTER));
    out.extend(tongue(15.0, 20.0, 55.0, colors::FIRE_MID));
    out.extend(tongue(10.0, 35.0, 65.0, colors::FIRE_INNER));
}

fn tree(out: &mut Vec<Vertex>, base: Vec2, season: Season, segments: u32, small: u32) {
    out.extend(rect(base, Vec2::new(35.0, 120.0), colors::TRUNK));

    let crown = base + Vec2::new(18.0, 110.0);
    let (main, side, top) = match season {
        Season::Winter => {
            out.extend(circle(crown, 55.0, colors::SNOW, segments));
            return;
        }
        Season::Autumn => (
            colors::LEAVES_AUTUMN,
            colors::LEAVES_AUTUMN,
            colors::LEAVES_AUTUMN_TOP,
        ),
        Season::Spring | Season::Summer => {
            (colors::LEAVES, colors::LEAVES_SIDE, colors::LEAVES_TOP)
        }
    };

    out.extend(circle(crown, 55.0, main, segments));
    out.extend(circle(crown + Vec2::new(-35.0, -10.0), 45.0, side, segments));
    out.extend(circle(crown + Vec2::new(35.0, -10.0), 45.0, side, segments));
    out.extend(circle(crown + Vec2::new(0.0, 30.0), 50.0, top, segments));

    if season == Season::Spring {
        for offset in [
            Vec2::new(5.0, 170.0),
            Vec2::new(40.0, 140.0),
            Vec2::new(10.0, 120.0),
        ] {
            flower(out, base + offset, small);
        }
    }
}

fn flower(out: &mut Vec<Vertex>, at: Vec2, segments: u32) {
    let r = 10.0;
    for offset in [
        Vec2::new(0.0, r),
        Vec2::new(0.0, -r),
        Vec2::new(r, 0.0),
        Vec2::new(-r, 0.0),
    ] {
        out.extend(circle(at + offset, r, colors::PETAL, segments));
    }
    out.extend(circle(at, r * 0.7, colors::FLOWER_HEART, segments));
}

fn hud(out: &mut Vec<Vertex>, game: &GameState, segments: u32) {
    out.extend(rect(HUD_ORIGIN, HUD_SIZE, colors::HUD_PANEL));

    for i in 0..STARTING_LIVES {
        let color = if i < game.lives {
            colors::HEART_FULL
        } else {
            colors::HEART_EMPTY
        };
        let center = Vec2::new(HEART_START_X + i as f32 * HEART_SPACING, HEART_Y);
        out.extend(heart(center, HEART_SCALE, color, segments * 2));
    }
}

fn overlays(out: &mut Vec<Vertex>, game: &GameState) {
    let center = Vec2::new(FIELD_WIDTH, FIELD_HEIGHT) / 2.0;
    let centered = |size: Vec2, color| rect(center - size / 2.0, size, color);

    if game.banner.is_some() {
        out.extend(centered(Vec2::new(404.0, 204.0), colors::BANNER_BORDER));
        out.extend(centered(Vec2::new(400.0, 200.0), colors::BANNER_PANEL));
    }

    match game.phase {
        GamePhase::Paused => out.extend(centered(Vec2::new(120.0, 30.0), colors::PAUSE_PANEL)),
        GamePhase::GameOver => {
            out.extend(centered(Vec2::new(200.0, 100.0), colors::GAME_OVER_PANEL))
        }
        GamePhase::Playing => {}
    }
}
