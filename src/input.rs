//! Input controller
//!
//! Translates discrete named commands from the platform layer into the
//! intent flags the simulation consumes. Movement commands toggle held
//! flags; fire is a rate-limited one-shot; pause/resume/restart drive
//! the phase machine. Everything except restart is ignored once the
//! run is over.

use crate::consts::FIRE_COOLDOWN;
use crate::sim::{GamePhase, GameState, TickInput};

/// Discrete inbound commands, no payload beyond the kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeftDown,
    MoveLeftUp,
    MoveRightDown,
    MoveRightUp,
    Fire,
    PauseToggle,
    Resume,
    Restart,
}

/// Holds intent flags between frames and enforces the fire cooldown.
#[derive(Debug, Default)]
pub struct InputController {
    move_left: bool,
    move_right: bool,
    fire_pending: bool,
    /// `now` of the last accepted fire request
    last_fire: Option<f64>,
    restart_requested: bool,
}

impl InputController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one command. `now` is wall-clock seconds from the driver;
    /// it feeds the fire cooldown and the play clock is synced by the
    /// driver from the resulting phase.
    pub fn handle(&mut self, command: Command, now: f64, state: &mut GameState) {
        if state.phase == GamePhase::GameOver && command != Command::Restart {
            return;
        }
        match command {
            Command::MoveLeftDown => self.move_left = true,
            Command::MoveLeftUp => self.move_left = false,
            Command::MoveRightDown => self.move_right = true,
            Command::MoveRightUp => self.move_right = false,
            Command::Fire => {
                // Requests inside the cooldown window are dropped, not queued
                let ready = self
                    .last_fire
                    .is_none_or(|last| now - last >= FIRE_COOLDOWN);
                if ready {
                    self.fire_pending = true;
                    self.last_fire = Some(now);
                }
            }
            Command::PauseToggle => match state.phase {
                GamePhase::Playing => state.phase = GamePhase::Paused,
                GamePhase::Paused => state.phase = GamePhase::Playing,
                _ => {}
            },
            Command::Resume => {
                if state.phase == GamePhase::Story {
                    state.phase = GamePhase::Playing;
                }
            }
            Command::Restart => self.restart_requested = true,
        }
    }

    /// Build the intent set for the next tick, consuming the fire
    /// one-shot.
    pub fn take_tick_input(&mut self) -> TickInput {
        let fire = self.fire_pending;
        self.fire_pending = false;
        TickInput {
            move_left: self.move_left,
            move_right: self.move_right,
            fire,
        }
    }

    /// True once per restart command; clears the request.
    pub fn take_restart(&mut self) -> bool {
        std::mem::take(&mut self.restart_requested)
    }

    /// Drop all held state (on restart)
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing_state() -> GameState {
        let mut state = GameState::new(1);
        state.phase = GamePhase::Playing;
        state
    }

    #[test]
    fn test_move_flags_follow_key_state() {
        let mut state = playing_state();
        let mut ctrl = InputController::new();

        ctrl.handle(Command::MoveLeftDown, 0.0, &mut state);
        assert!(ctrl.take_tick_input().move_left);
        // Held until key-up: still set on the next tick
        assert!(ctrl.take_tick_input().move_left);

        ctrl.handle(Command::MoveLeftUp, 0.1, &mut state);
        assert!(!ctrl.take_tick_input().move_left);
    }

    #[test]
    fn test_fire_is_one_shot() {
        let mut state = playing_state();
        let mut ctrl = InputController::new();

        ctrl.handle(Command::Fire, 0.0, &mut state);
        assert!(ctrl.take_tick_input().fire);
        assert!(!ctrl.take_tick_input().fire);
    }

    #[test]
    fn test_fire_cooldown_drops_requests() {
        let mut state = playing_state();
        let mut ctrl = InputController::new();

        ctrl.handle(Command::Fire, 0.0, &mut state);
        assert!(ctrl.take_tick_input().fire);

        // Inside the window: dropped, not queued
        ctrl.handle(Command::Fire, FIRE_COOLDOWN / 2.0, &mut state);
        assert!(!ctrl.take_tick_input().fire);

        // The dropped request did not extend the window
        ctrl.handle(Command::Fire, FIRE_COOLDOWN, &mut state);
        assert!(ctrl.take_tick_input().fire);
    }

    #[test]
    fn test_pause_toggle_flips_running_and_paused() {
        let mut state = playing_state();
        let mut ctrl = InputController::new();

        ctrl.handle(Command::PauseToggle, 0.0, &mut state);
        assert_eq!(state.phase, GamePhase::Paused);
        ctrl.handle(Command::PauseToggle, 1.0, &mut state);
        assert_eq!(state.phase, GamePhase::Playing);

        // Toggle does not leave the story phase; resume does
        state.phase = GamePhase::Story;
        ctrl.handle(Command::PauseToggle, 2.0, &mut state);
        assert_eq!(state.phase, GamePhase::Story);
        ctrl.handle(Command::Resume, 3.0, &mut state);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_game_over_ignores_all_but_restart() {
        let mut state = playing_state();
        state.phase = GamePhase::GameOver;
        let mut ctrl = InputController::new();

        ctrl.handle(Command::MoveRightDown, 0.0, &mut state);
        ctrl.handle(Command::Fire, 0.0, &mut state);
        ctrl.handle(Command::PauseToggle, 0.0, &mut state);
        ctrl.handle(Command::Resume, 0.0, &mut state);

        let input = ctrl.take_tick_input();
        assert!(!input.move_right && !input.fire);
        assert_eq!(state.phase, GamePhase::GameOver);

        ctrl.handle(Command::Restart, 0.0, &mut state);
        assert!(ctrl.take_restart());
        assert!(!ctrl.take_restart());
    }
}
