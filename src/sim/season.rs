//! Seasons and their item palettes
//!
//! The season is never stored: it is always derived from the in-level score.

use rand::Rng;

/// Score at which each season starts
pub const SPRING_THRESHOLD: u32 = 0;
pub const SUMMER_THRESHOLD: u32 = 50;
pub const AUTUMN_THRESHOLD: u32 = 100;
pub const WINTER_THRESHOLD: u32 = 150;
/// Score that completes Winter and triggers a level up
pub const LEVEL_UP_THRESHOLD: u32 = 200;

/// Neutral gray used by every hazard regardless of season
pub const HAZARD_COLOR: [f32; 4] = [0.3, 0.3, 0.3, 1.0];
/// Labels for hazards
pub const HAZARD_LABELS: [&str; 3] = ["Trash", "Rotten", "Broken"];

/// One of the four gameplay phases, cycling with score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    pub const ALL: [Season; 4] = [
        Season::Spring,
        Season::Summer,
        Season::Autumn,
        Season::Winter,
    ];

    /// Display name shown on the HUD
    pub fn name(&self) -> &'static str {
        match self {
            Season::Spring => "SPRING",
            Season::Summer => "SUMMER",
            Season::Autumn => "AUTUMN",
            Season::Winter => "WINTER",
        }
    }

    /// Score at which this season begins
    pub fn threshold(&self) -> u32 {
        match self {
            Season::Spring => SPRING_THRESHOLD,
            Season::Summer => SUMMER_THRESHOLD,
            Season::Autumn => AUTUMN_THRESHOLD,
            Season::Winter => WINTER_THRESHOLD,
        }
    }

    /// The following season, wrapping Winter back to Spring
    pub fn next(&self) -> Season {
        match self {
            Season::Spring => Season::Summer,
            Season::Summer => Season::Autumn,
            Season::Autumn => Season::Winter,
            Season::Winter => Season::Spring,
        }
    }

    /// Color of a good item caught in this season
    pub fn good_item_color(&self) -> [f32; 4] {
        match self {
            Season::Spring => [1.0, 0.7, 0.8, 1.0], // cherry blossom pink
            Season::Summer => [1.0, 0.9, 0.0, 1.0], // bright yellow fruit
            Season::Autumn => [1.0, 0.5, 0.0, 1.0], // orange leaves
            Season::Winter => [0.9, 0.9, 1.0, 1.0], // snow white
        }
    }

    /// Candidate labels for good items in this season
    pub fn good_item_labels(&self) -> &'static [&'static str] {
        match self {
            Season::Spring => &["Cherry Blossom", "Flower", "Honey", "Apple"],
            Season::Summer => &["Lemon", "Sunflower", "IceCream", "Sun"],
            Season::Autumn => &["Maple Leaf", "Pumpkin", "Corn", "Apple"],
            Season::Winter => &["Snowflake", "Cocoa", "Cookie", "Scarf"],
        }
    }
}

/// Season dictated by the in-level score.
///
/// Scores at or past the level-up threshold stay in Winter; the level-up
/// trigger is what moves play back to Spring.
pub fn season_for_score(score: u32) -> Season {
    if score < SUMMER_THRESHOLD {
        Season::Spring
    } else if score < AUTUMN_THRESHOLD {
        Season::Summer
    } else if score < WINTER_THRESHOLD {
        Season::Autumn
    } else {
        Season::Winter
    }
}

/// Color for an item of the given goodness in the given season
pub fn item_color(season: Season, is_good: bool) -> [f32; 4] {
    if is_good {
        season.good_item_color()
    } else {
        HAZARD_COLOR
    }
}

/// Pick a display label for a new item
pub fn random_item_label(season: Season, is_good: bool, rng: &mut impl Rng) -> &'static str {
    let labels: &[&'static str] = if is_good {
        season.good_item_labels()
    } else {
        &HAZARD_LABELS
    };
    labels[rng.random_range(0..labels.len())]
}
