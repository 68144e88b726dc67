//! Seasonal Catcher - a basket-catching arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (basket, items, seasons, levels)
//! - `renderer`: Frame geometry, HUD strings and the wgpu pipeline
//! - `settings`: Presentation and host preferences

pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{QualityPreset, Settings};
pub use sim::World;

/// Game configuration constants
pub mod consts {
    /// Play field dimensions (origin bottom-left, y up)
    pub const FIELD_WIDTH: f32 = 900.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Nominal callback cadence (~60 Hz) for both the game and ambience ticks
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Basket defaults
    pub const BASKET_WIDTH: f32 = 100.0;
    pub const BASKET_HEIGHT: f32 = 60.0;
    pub const BASKET_Y: f32 = 20.0;
    /// Horizontal basket speed (units/s)
    pub const BASKET_SPEED: f32 = 300.0;

    /// Item defaults
    pub const ITEM_SIZE: f32 = 40.0;
    /// Fall speed at level 1 (units/s), multiplied by the level
    pub const BASE_ITEM_FALL_SPEED: f32 = 100.0;
    /// Seconds between spawns at level 1, divided by the level
    pub const BASE_ITEM_SPAWN_INTERVAL: f32 = 1.5;
    /// Probability that a spawned item is good
    pub const GOOD_ITEM_CHANCE: f64 = 0.7;
    pub const POINTS_PER_CATCH: u32 = 10;

    pub const STARTING_LIVES: u8 = 3;

    /// How long the level-up banner stays up (seconds)
    pub const LEVEL_UP_BANNER_SECS: f32 = 3.0;
}
