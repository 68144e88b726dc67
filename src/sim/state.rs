//! Game state and core simulation types
//!
//! Everything the catcher session mutates lives in `GameState`.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::Rect;
use super::season::{LEVEL_UP_THRESHOLD, Season, season_for_score};
use crate::consts::*;

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Simulation frozen, rendering continues with an overlay
    Paused,
    /// Out of lives; only a reset is accepted
    GameOver,
}

/// Things that happened during a tick, drained by the host
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// A good item landed in the basket
    Caught { label: &'static str },
    /// A hazard landed in the basket
    Hit { lives_left: u8 },
    /// An item fell past the bottom of the field
    Missed,
    LevelUp { level: u32 },
    GameOver { score: u32, level: u32 },
    Paused,
    Resumed,
    Reset,
}

/// The player's basket (horizontal movement only)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Basket {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for Basket {
    fn default() -> Self {
        Self {
            x: FIELD_WIDTH / 2.0 - BASKET_WIDTH / 2.0,
            y: BASKET_Y,
            width: BASKET_WIDTH,
            height: BASKET_HEIGHT,
        }
    }
}

impl Basket {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Horizontal center of the basket
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Shift horizontally, clamped to `[0, FIELD_WIDTH - width]`
    pub fn shift(&mut self, dx: f32) {
        self.x = (self.x + dx).clamp(0.0, FIELD_WIDTH - self.width);
    }
}

/// A falling collectible or hazard
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    /// Bottom-left corner
    pub pos: Vec2,
    /// Edge length of the square
    pub size: f32,
    /// Downward speed (units/s)
    pub velocity: f32,
    pub color: [f32; 4],
    pub label: &'static str,
    /// Good items score, bad ones cost a life
    pub is_good: bool,
}

impl Item {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size, self.size)
    }

    /// True once the item has dropped fully below the field
    pub fn is_below_field(&self) -> bool {
        self.pos.y < -self.size
    }
}

/// Timed level-up announcement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelBanner {
    /// Seconds until the banner hides
    pub remaining: f32,
}

impl LevelBanner {
    pub fn new() -> Self {
        Self {
            remaining: LEVEL_UP_BANNER_SECS,
        }
    }

    /// Count down; returns false once the banner should hide
    pub fn count_down(&mut self, dt: f32) -> bool {
        self.remaining -= dt;
        self.remaining > 0.0
    }

    /// Whole seconds shown to the player ("disappears in N seconds")
    pub fn seconds_left(&self) -> u32 {
        (self.remaining.max(0.0) as u32) + 1
    }
}

impl Default for LevelBanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Held movement keys, sampled every tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    pub left: bool,
    pub right: bool,
}

/// Complete catcher session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Spawner RNG
    pub rng: Pcg32,
    pub basket: Basket,
    /// In-level score, reset on level up
    pub score: u32,
    pub lives: u8,
    pub level: u32,
    pub phase: GamePhase,
    /// Guard so a single crossing of the level-up threshold fires once
    pub winter_completed: bool,
    /// Level-up banner, if visible
    pub banner: Option<LevelBanner>,
    /// Live items (iteration order is position in the list)
    pub items: Vec<Item>,
    /// Seconds accumulated toward the next spawn
    pub spawn_timer: f32,
    pub controls: Controls,
    /// Simulation tick counter (Playing ticks only)
    pub time_ticks: u64,
    /// Pending events for the host
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new session with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            basket: Basket::default(),
            score: 0,
            lives: STARTING_LIVES,
            level: 1,
            phase: GamePhase::Playing,
            winter_completed: false,
            banner: None,
            items: Vec::new(),
            spawn_timer: 0.0,
            controls: Controls::default(),
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    /// Current season, derived from the score
    pub fn season(&self) -> Season {
        season_for_score(self.score)
    }

    pub fn is_paused(&self) -> bool {
        self.phase == GamePhase::Paused
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Item fall speed for the current level
    pub fn fall_speed(&self) -> f32 {
        BASE_ITEM_FALL_SPEED * self.level as f32
    }

    /// Seconds between spawns for the current level
    pub fn spawn_interval(&self) -> f32 {
        BASE_ITEM_SPAWN_INTERVAL / self.level as f32
    }

    /// Restore initial values (keeps the RNG stream running)
    pub fn reset(&mut self) {
        self.basket = Basket::default();
        self.score = 0;
        self.lives = STARTING_LIVES;
        self.level = 1;
        self.phase = GamePhase::Playing;
        self.winter_completed = false;
        self.banner = None;
        self.items.clear();
        self.spawn_timer = 0.0;
        self.controls = Controls::default();
        self.events.push(GameEvent::Reset);
        log::info!("Game reset");
    }

    /// Award a good catch and re-evaluate the season/level machine
    pub fn add_catch_points(&mut self) {
        let previous = self.season();
        self.score += POINTS_PER_CATCH;
        self.evaluate_progression(previous);
    }

    /// Season/level state machine, run after every score change.
    ///
    /// A level up fires when play was in Winter and the score has reached
    /// the threshold, unless the guard is already set. The guard is cleared
    /// again once the season reads Spring.
    pub fn evaluate_progression(&mut self, previous: Season) {
        if previous == Season::Winter && self.score >= LEVEL_UP_THRESHOLD && !self.winter_completed {
            self.winter_completed = true;
            self.level_up();
        }

        if self.season() == Season::Spring && self.winter_completed {
            self.winter_completed = false;
        }
    }

    /// Advance to the next level and show the banner
    pub fn level_up(&mut self) {
        self.level += 1;
        self.score = 0;
        self.banner = Some(LevelBanner::new());
        self.events.push(GameEvent::LevelUp { level: self.level });

        log::info!("LEVEL UP! Now at level {}!", self.level);
        log::info!("Items are now {}% faster!", self.level * 100);
    }

    /// Debug: jump the score to the next season's threshold.
    ///
    /// Winter wraps to Spring by dropping the score to zero, without a level up.
    pub fn advance_season(&mut self) {
        let next = self.season().next();
        self.score = next.threshold();
        if next == Season::Spring {
            self.winter_completed = false;
        }
        log::debug!("Season forced to {}", next.name());
    }

    /// Take a hit from a hazard; enters GameOver at zero lives
    pub fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
        self.events.push(GameEvent::Hit {
            lives_left: self.lives,
        });
        if self.lives == 0 {
            self.phase = GamePhase::GameOver;
            self.events.push(GameEvent::GameOver {
                score: self.score,
                level: self.level,
            });
            log::info!("GAME OVER at level {} with score {}", self.level, self.score);
        }
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
