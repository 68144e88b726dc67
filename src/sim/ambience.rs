//! Background animation: sun, clouds, fire flicker and snow
//!
//! Advanced by its own callback, one fixed step per call, independent of
//! the game clock. Purely visual.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::season::Season;
use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};

pub const CLOUD_COUNT: usize = 3;
pub const FIRE_COUNT: usize = 5;
pub const DEFAULT_SNOWFLAKES: usize = 100;

/// Sun and clouds wrap back to here once they leave the right edge
const WRAP_START_X: f32 = -50.0;
const WRAP_MARGIN: f32 = 50.0;
const SUN_SPEED: f32 = 1.0;
const SNOW_FALL: f32 = 2.0;
/// Fire offsets are re-rolled in [0, FIRE_FLICKER)
const FIRE_FLICKER: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snowflake {
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

#[derive(Debug, Clone)]
pub struct Ambience {
    pub sun_x: f32,
    pub cloud_x: [f32; CLOUD_COUNT],
    pub fire_offset: [f32; FIRE_COUNT],
    pub snowflakes: Vec<Snowflake>,
    /// Freeze the fire flicker (reduced motion)
    pub flicker: bool,
    rng: Pcg32,
}

impl Ambience {
    pub fn new(seed: u64, snowflake_count: usize) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);

        let snowflakes = (0..snowflake_count)
            .map(|_| Snowflake {
                x: rng.random_range(0..FIELD_WIDTH as u32) as f32,
                y: rng.random_range(0..FIELD_HEIGHT as u32) as f32,
                size: rng.random_range(2..=4) as f32,
            })
            .collect();

        let mut cloud_x = [0.0; CLOUD_COUNT];
        for x in &mut cloud_x {
            *x = rng.random_range(0..FIELD_WIDTH as u32) as f32;
        }

        Self {
            sun_x: WRAP_START_X,
            cloud_x,
            fire_offset: [0.0; FIRE_COUNT],
            snowflakes,
            flicker: true,
            rng,
        }
    }

    /// One animation step
    pub fn advance(&mut self, season: Season) {
        self.sun_x += SUN_SPEED;
        if self.sun_x > FIELD_WIDTH + WRAP_MARGIN {
            self.sun_x = WRAP_START_X;
        }

        for (i, x) in self.cloud_x.iter_mut().enumerate() {
            *x += 0.5 + i as f32 * 0.2;
            if *x > FIELD_WIDTH + WRAP_MARGIN {
                *x = WRAP_START_X;
            }
        }

        if self.flicker {
            for offset in &mut self.fire_offset {
                *offset = self.rng.random_range(0..FIRE_FLICKER) as f32;
            }
        }

        if season == Season::Winter {
            for flake in &mut self.snowflakes {
                flake.y -= SNOW_FALL;
                if flake.y < 0.0 {
                    flake.y = FIELD_HEIGHT;
                }
            }
        }
    }
}

/// Height of the sun along its arc for a given x
pub fn sun_height(x: f32) -> f32 {
    let h = FIELD_WIDTH / 2.0;
    -0.0015 * (x - h) * (x - h) + 520.0
}
