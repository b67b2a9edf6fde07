//! Fixed-timestep loop driver
//!
//! Called once per display frame with the current wall-clock time; runs
//! whole simulation ticks out of an accumulator (no sub-stepping or
//! interpolation inside a tick), invokes the independent enemy-fire
//! scheduler, keeps the play clock in step with the phase, and drains
//! outbound events to the sink.

use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::input::{Command, InputController};
use crate::sim::spawn;
use crate::sim::{self, EntityKind, GameEvent, GamePhase, GameState, Stat};

/// Receives outbound events, fire-and-forget. Implementors are the
/// render/audio/HUD adapters.
pub trait EventSink {
    fn handle(&mut self, event: &GameEvent);
}

/// Collecting sink, handy for tests and buffering consumers
impl EventSink for Vec<GameEvent> {
    fn handle(&mut self, event: &GameEvent) {
        self.push(event.clone());
    }
}

/// Owns the game state and drives it at frame cadence.
pub struct Runner {
    pub state: GameState,
    input: InputController,
    accumulator: f32,
    last_time: Option<f64>,
    events: Vec<GameEvent>,
    last_elapsed: String,
}

impl Runner {
    pub fn new(seed: u64) -> Self {
        let mut runner = Self {
            state: GameState::new(seed),
            input: InputController::new(),
            accumulator: 0.0,
            last_time: None,
            events: Vec::new(),
            last_elapsed: String::new(),
        };
        runner.announce_run();
        runner
    }

    /// Feed one inbound command (from keyboard/buttons).
    pub fn command(&mut self, command: Command, now: f64) {
        self.input.handle(command, now, &mut self.state);
    }

    /// Advance by one display frame. `now` is wall-clock seconds.
    pub fn frame(&mut self, now: f64, sink: &mut impl EventSink) {
        let dt = match self.last_time {
            Some(last) => ((now - last) as f32).min(0.1),
            None => SIM_DT,
        };
        self.last_time = Some(now);

        if self.input.take_restart() {
            self.restart(now.to_bits());
        }

        // The clock accrues exactly while the simulation runs
        if self.state.phase == GamePhase::Playing {
            self.state.clock.resume(now);
        } else {
            self.state.clock.pause(now);
        }

        self.accumulator += dt;
        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let tick_input = self.input.take_tick_input();
            sim::tick(&mut self.state, &tick_input, &mut self.events);
            sim::enemy_fire_tick(&mut self.state, &mut self.events);
            self.accumulator -= SIM_DT;
            substeps += 1;
        }

        let elapsed = self.state.clock.format_elapsed(now);
        if elapsed != self.last_elapsed {
            self.last_elapsed = elapsed.clone();
            self.events
                .push(GameEvent::StatChanged(Stat::Elapsed(elapsed)));
        }

        for event in self.events.drain(..) {
            sink.handle(&event);
        }
    }

    /// Tear down the current run and begin a fresh one at level 1.
    pub fn restart(&mut self, seed: u64) {
        log::info!("Restarting run with seed {}", seed);
        let mut removals: Vec<u32> = vec![self.state.ship.id];
        removals.extend(self.state.aliens.iter().map(|a| a.id));
        removals.extend(self.state.walls.iter().map(|w| w.id));
        removals.extend(self.state.player_bullets.iter().map(|b| b.id));
        removals.extend(self.state.enemy_bullets.iter().map(|b| b.id));
        for id in removals {
            self.events.push(GameEvent::EntityRemoved { id });
        }

        self.state = GameState::new(seed);
        self.input.reset();
        self.accumulator = 0.0;
        self.last_elapsed.clear();
        self.announce_run();
    }

    /// Announce the fresh run: ship, zeroed stats, the level-1 board
    /// and its story card.
    fn announce_run(&mut self) {
        let ship = &self.state.ship;
        self.events.push(GameEvent::EntityCreated {
            id: ship.id,
            kind: EntityKind::Ship,
            x: ship.pos.x,
            y: ship.pos.y,
            width: ship.size.x,
            height: ship.size.y,
        });
        self.events
            .push(GameEvent::StatChanged(Stat::Score(self.state.score)));
        self.events
            .push(GameEvent::StatChanged(Stat::Health(self.state.ship.health)));
        spawn::start_level(&mut self.state, &mut self.events);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    fn drive(runner: &mut Runner, sink: &mut Vec<GameEvent>, from: f64, frames: u32) -> f64 {
        let mut now = from;
        for _ in 0..frames {
            now += SIM_DT as f64;
            runner.frame(now, sink);
        }
        now
    }

    #[test]
    fn test_first_frame_announces_board() {
        let mut runner = Runner::new(5);
        let mut sink: Vec<GameEvent> = Vec::new();
        runner.frame(0.0, &mut sink);

        let created_aliens = sink
            .iter()
            .filter(|e| matches!(e, GameEvent::EntityCreated { kind: EntityKind::Alien, .. }))
            .count();
        assert_eq!(
            created_aliens,
            (ALIEN_START_COLUMNS * ALIEN_START_ROWS) as usize
        );
        assert!(sink.iter().any(|e| matches!(
            e,
            GameEvent::EntityCreated { kind: EntityKind::Ship, .. }
        )));
        assert!(sink.iter().any(|e| matches!(
            e,
            GameEvent::LevelStory { level: 1, .. }
        )));
        // Runs open on the story card; nothing simulated yet
        assert_eq!(runner.state.phase, GamePhase::Story);
        assert_eq!(runner.state.time_ticks, 0);
    }

    #[test]
    fn test_frames_drive_ticks_at_cadence() {
        let mut runner = Runner::new(5);
        let mut sink: Vec<GameEvent> = Vec::new();
        runner.frame(0.0, &mut sink);
        runner.command(Command::Resume, 0.0);

        // One tick per frame-period of wall time, give or take float
        // rounding at the accumulator boundary
        drive(&mut runner, &mut sink, 0.0, 60);
        assert!((59..=61).contains(&runner.state.time_ticks));
    }

    #[test]
    fn test_long_frame_capped_at_max_substeps() {
        let mut runner = Runner::new(5);
        let mut sink: Vec<GameEvent> = Vec::new();
        runner.frame(0.0, &mut sink);
        runner.command(Command::Resume, 0.0);
        runner.frame(SIM_DT as f64, &mut sink);
        let before = runner.state.time_ticks;

        // A one-second stall must not run 60 ticks at once
        runner.frame(1.0 + SIM_DT as f64, &mut sink);
        let ran = runner.state.time_ticks - before;
        assert!(ran >= 1);
        assert!(ran <= MAX_SUBSTEPS as u64);
    }

    #[test]
    fn test_pause_freezes_sim_and_clock() {
        let mut runner = Runner::new(5);
        let mut sink: Vec<GameEvent> = Vec::new();
        runner.frame(0.0, &mut sink);
        runner.command(Command::Resume, 0.0);
        let now = drive(&mut runner, &mut sink, 0.0, 60);

        runner.command(Command::PauseToggle, now);
        runner.frame(now + SIM_DT as f64, &mut sink);
        let ticks = runner.state.time_ticks;
        let elapsed = runner.state.clock.elapsed(now + SIM_DT as f64);

        // A long paused stretch passes on the wall clock
        let later = drive(&mut runner, &mut sink, now + 30.0, 30);
        assert_eq!(runner.state.time_ticks, ticks);
        let elapsed_after = runner.state.clock.elapsed(later);
        assert!((elapsed_after - elapsed).abs() < SIM_DT as f64 + 1e-6);

        // Resume continues where it left off
        runner.command(Command::PauseToggle, later);
        drive(&mut runner, &mut sink, later, 5);
        assert!(runner.state.time_ticks > ticks);
    }

    #[test]
    fn test_elapsed_stat_emitted_as_clock_runs() {
        let mut runner = Runner::new(5);
        let mut sink: Vec<GameEvent> = Vec::new();
        runner.frame(0.0, &mut sink);
        runner.command(Command::Resume, 0.0);
        drive(&mut runner, &mut sink, 0.0, 70); // a bit over one second

        assert!(sink.iter().any(|e| matches!(
            e,
            GameEvent::StatChanged(Stat::Elapsed(t)) if t == "0:01"
        )));
    }

    #[test]
    fn test_restart_resets_to_level_one() {
        let mut runner = Runner::new(5);
        let mut sink: Vec<GameEvent> = Vec::new();
        runner.frame(0.0, &mut sink);
        runner.command(Command::Resume, 0.0);
        drive(&mut runner, &mut sink, 0.0, 30);

        // Simulate a finished run
        runner.state.score = 1200;
        runner.state.phase = GamePhase::GameOver;
        let old_ship_id = runner.state.ship.id;

        sink.clear();
        runner.command(Command::Restart, 1.0);
        runner.frame(1.0 + SIM_DT as f64, &mut sink);

        assert_eq!(runner.state.level, 1);
        assert_eq!(runner.state.score, 0);
        assert_eq!(runner.state.phase, GamePhase::Story);
        assert_eq!(runner.state.clock.elapsed(100.0), 0.0);
        // Presentation was told to drop the old entities
        assert!(sink.contains(&GameEvent::EntityRemoved { id: old_ship_id }));
        assert!(sink.iter().any(|e| matches!(
            e,
            GameEvent::LevelStory { level: 1, .. }
        )));
    }
}
