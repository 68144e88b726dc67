//! HUD text and overlay flags for one frame
//!
//! Text is handed to whatever draws fonts; this module only decides what
//! the strings say and where they go.

use glam::Vec2;

use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH, STARTING_LIVES};
use crate::sim::GameState;

/// A line of text anchored at its left baseline
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub pos: Vec2,
    pub color: [f32; 4],
    /// Banner headline size rather than body size
    pub large: bool,
}

impl TextLine {
    fn body(text: impl Into<String>, x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            text: text.into(),
            pos: Vec2::new(x, y),
            color,
            large: false,
        }
    }

    fn large(text: impl Into<String>, x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            large: true,
            ..Self::body(text, x, y, color)
        }
    }
}

/// Start-up help printed by the host
pub const CONTROLS_HELP: &[&str] = &[
    "=== SEASONAL CATCHER ===",
    "Arrow Keys or A/D: Move basket",
    "SPACE: Pause/Resume (or Restart after game over)",
    "N: Switch season manually",
    "L: Level up manually (for testing)",
    "ESC: Exit game",
    "Catch good items (+10 points)",
    "Avoid bad items (-1 life)",
    "Seasons progression:",
    "  Spring (0-49): Catch pink cherry blossoms",
    "  Summer (50-99): Catch bright yellow fruits",
    "  Autumn (100-149): Catch orange/red leaves",
    "  Winter (150-199): Catch white snowflakes",
    "  Complete all seasons (reach 200) to level up!",
    "  Each level: faster items!",
];

const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
const YELLOW: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

/// Everything textual a renderer needs for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct HudView {
    pub score: String,
    pub level: String,
    pub season: String,
    pub lives: u8,
    pub max_lives: u8,
    pub paused: bool,
    pub game_over: bool,
    pub banner_visible: bool,
    /// Whole seconds left on the banner, 0 when hidden
    pub banner_seconds: u32,
    /// Item labels centred over their squares
    pub item_labels: Vec<TextLine>,
    /// Top-left status panel
    pub status_lines: Vec<TextLine>,
    /// Centre overlays (banner, paused, game over), drawn last
    pub overlay_lines: Vec<TextLine>,
}

impl HudView {
    pub fn from_state(state: &GameState) -> Self {
        let score = format!("Score: {}", state.score);
        let level = format!("Level: {}", state.level);
        let season = format!("Season: {}", state.season().name());

        let top = FIELD_HEIGHT;
        let status_lines = vec![
            TextLine::body(score.clone(), 10.0, top - 70.0, WHITE),
            TextLine::body(level.clone(), 10.0, top - 55.0, WHITE),
            TextLine::body("Heart:", 10.0, top - 45.0, WHITE),
            TextLine::body(season.clone(), 10.0, top - 30.0, WHITE),
        ];

        let item_labels = state
            .items
            .iter()
            .map(|item| {
                // Roughly 6 units per glyph at body size
                let width = item.label.len() as f32 * 6.0;
                TextLine::body(
                    item.label,
                    item.pos.x + item.size / 2.0 - width / 2.0,
                    item.pos.y + item.size + 4.0,
                    WHITE,
                )
            })
            .collect();

        let cx = FIELD_WIDTH / 2.0;
        let cy = FIELD_HEIGHT / 2.0;
        let mut overlay_lines = Vec::new();

        let banner_seconds = state.banner.map(|b| b.seconds_left()).unwrap_or(0);
        if state.banner.is_some() {
            overlay_lines.push(TextLine::large("LEVEL UP!", cx - 70.0, cy + 40.0, YELLOW));
            overlay_lines.push(TextLine::large(
                format!("Now at Level {}", state.level),
                cx - 90.0,
                cy,
                WHITE,
            ));
            overlay_lines.push(TextLine::body(
                format!("Items are now {}% faster!", state.level * 100),
                cx - 120.0,
                cy - 30.0,
                [0.8, 0.8, 1.0, 1.0],
            ));
            overlay_lines.push(TextLine::body(
                format!("Message disappears in {} seconds...", banner_seconds),
                cx - 140.0,
                cy - 60.0,
                [1.0, 0.5, 0.5, 1.0],
            ));
        }

        let paused = state.is_paused();
        let game_over = state.is_game_over();
        if paused {
            overlay_lines.push(TextLine::body("PAUSED", cx - 30.0, cy - 5.0, YELLOW));
        }
        if game_over {
            overlay_lines.push(TextLine::body("GAME OVER", cx - 45.0, cy - 30.0, RED));
            overlay_lines.push(TextLine::body(score.clone(), cx - 40.0, cy, WHITE));
            overlay_lines.push(TextLine::body(level.clone(), cx - 40.0, cy + 15.0, WHITE));
            overlay_lines.push(TextLine::body(
                "Press SPACE to restart",
                cx - 80.0,
                cy + 35.0,
                YELLOW,
            ));
        }

        Self {
            score,
            level,
            season,
            lives: state.lives,
            max_lives: STARTING_LIVES,
            paused,
            game_over,
            banner_visible: state.banner.is_some(),
            banner_seconds,
            item_labels,
            status_lines,
            overlay_lines,
        }
    }

    /// Flat list of every line, in draw order
    pub fn all_lines(&self) -> impl Iterator<Item = &TextLine> {
        self.item_labels
            .iter()
            .chain(self.status_lines.iter())
            .chain(self.overlay_lines.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GamePhase, LevelBanner};

    #[test]
    fn test_status_strings() {
        let mut state = GameState::new(1);
        state.score = 120;
        state.level = 2;
        let hud = HudView::from_state(&state);
        assert_eq!(hud.score, "Score: 120");
        assert_eq!(hud.level, "Level: 2");
        assert_eq!(hud.season, "Season: AUTUMN");
        assert_eq!(hud.lives, 3);
        assert!(!hud.paused && !hud.game_over && !hud.banner_visible);
        assert!(hud.overlay_lines.is_empty());
    }

    #[test]
    fn test_banner_lines() {
        let mut state = GameState::new(1);
        state.level = 3;
        state.banner = Some(LevelBanner { remaining: 2.4 });
        let hud = HudView::from_state(&state);
        assert!(hud.banner_visible);
        assert_eq!(hud.banner_seconds, 3);
        let texts: Vec<&str> = hud.overlay_lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "LEVEL UP!",
                "Now at Level 3",
                "Items are now 300% faster!",
                "Message disappears in 3 seconds...",
            ]
        );
    }

    #[test]
    fn test_game_over_overlay_hides_pause() {
        let mut state = GameState::new(1);
        state.phase = GamePhase::GameOver;
        let hud = HudView::from_state(&state);
        assert!(hud.game_over);
        assert!(!hud.paused);
        assert!(hud.overlay_lines.iter().any(|l| l.text == "GAME OVER"));
        assert!(hud.overlay_lines.iter().all(|l| l.text != "PAUSED"));
    }

    #[test]
    fn test_item_labels_follow_items() {
        let mut state = GameState::new(1);
        crate::sim::spawn::spawn_item(&mut state);
        let hud = HudView::from_state(&state);
        assert_eq!(hud.item_labels.len(), 1);
        assert_eq!(hud.item_labels[0].text, state.items[0].label);
    }
}
