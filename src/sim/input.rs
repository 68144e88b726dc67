//! Input events from the host
//!
//! Key presses and releases arrive as discrete events. Held movement keys
//! are written straight into the state's controls; one-shot actions are
//! queued and handed to the next tick.

use super::state::GameState;
use super::tick::TickInput;

/// Discrete, edge-triggered input from the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    LeftPressed,
    LeftReleased,
    RightPressed,
    RightReleased,
    /// Pause/resume, or restart after game over
    PauseToggle,
    /// Debug: switch to the next season
    AdvanceSeason,
    /// Debug: level up immediately
    ForceLevelUp,
    /// Quit without confirmation
    Exit,
}

/// What the host should do after handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// Terminate immediately, no state flush
    Exit,
}

/// Accumulates one-shot requests between ticks
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pending: TickInput,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep the autopilot engaged on every produced tick input
    pub fn set_idle_mode(&mut self, idle: bool) {
        self.pending.idle_mode = idle;
    }

    /// Apply one event
    pub fn handle(&mut self, state: &mut GameState, event: InputEvent) -> Flow {
        match event {
            InputEvent::LeftPressed => state.controls.left = true,
            InputEvent::LeftReleased => state.controls.left = false,
            InputEvent::RightPressed => state.controls.right = true,
            InputEvent::RightReleased => state.controls.right = false,
            // Two presses before a tick cancel out
            InputEvent::PauseToggle => self.pending.pause = !self.pending.pause,
            InputEvent::AdvanceSeason => self.pending.advance_season = true,
            InputEvent::ForceLevelUp => self.pending.level_up = true,
            InputEvent::Exit => return Flow::Exit,
        }
        Flow::Continue
    }

    /// Input for the next tick; one-shot requests are cleared
    pub fn take_tick_input(&mut self) -> TickInput {
        let input = self.pending.clone();
        self.pending = TickInput {
            idle_mode: input.idle_mode,
            ..Default::default()
        };
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_held_keys_update_controls() {
        let mut state = GameState::new(1);
        let mut input = InputState::new();

        input.handle(&mut state, InputEvent::LeftPressed);
        assert!(state.controls.left);
        input.handle(&mut state, InputEvent::RightPressed);
        input.handle(&mut state, InputEvent::LeftReleased);
        assert!(!state.controls.left);
        assert!(state.controls.right);
    }

    #[test]
    fn test_one_shots_consumed_once() {
        let mut state = GameState::new(1);
        let mut input = InputState::new();

        input.handle(&mut state, InputEvent::PauseToggle);
        input.handle(&mut state, InputEvent::ForceLevelUp);
        let first = input.take_tick_input();
        assert!(first.pause);
        assert!(first.level_up);

        let second = input.take_tick_input();
        assert!(!second.pause);
        assert!(!second.level_up);
    }

    #[test]
    fn test_idle_mode_persists() {
        let mut input = InputState::new();
        input.set_idle_mode(true);
        assert!(input.take_tick_input().idle_mode);
        assert!(input.take_tick_input().idle_mode);
    }

    #[test]
    fn test_exit_requested() {
        let mut state = GameState::new(1);
        let mut input = InputState::new();
        assert_eq!(input.handle(&mut state, InputEvent::Exit), Flow::Exit);
        assert_eq!(
            input.handle(&mut state, InputEvent::AdvanceSeason),
            Flow::Continue
        );
    }
}
