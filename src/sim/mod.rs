//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only through the supplied clock delta
//! - Seeded RNG only
//! - Stable iteration order (item list position)
//! - No rendering or platform dependencies

pub mod ambience;
pub mod collision;
pub mod input;
pub mod season;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod world;

pub use ambience::{Ambience, Snowflake, sun_height};
pub use collision::Rect;
pub use input::{Flow, InputEvent, InputState};
pub use season::{Season, season_for_score};
pub use state::{Basket, Controls, GameEvent, GamePhase, GameState, Item, LevelBanner};
pub use tick::{TickInput, tick};
pub use world::World;
