//! Voidfall entry point
//!
//! Headless demo: drives the simulation with a scripted patrol-and-fire
//! input sequence on a synthetic 60 Hz clock, logs the outbound event
//! stream, and prints a JSON run summary. A real frontend would replace
//! the sink with its render/audio adapters.

use serde::Serialize;

use voidfall::consts::SIM_DT;
use voidfall::input::Command;
use voidfall::runner::{EventSink, Runner};
use voidfall::sim::{GameEvent, GamePhase};

/// Logs notable events and counts the rest
#[derive(Default)]
struct LogSink {
    events: u64,
}

impl EventSink for LogSink {
    fn handle(&mut self, event: &GameEvent) {
        self.events += 1;
        match event {
            GameEvent::LevelStory { level, title, text } => {
                log::info!("[sector {}] {} - {}", level, title, text);
            }
            GameEvent::StatChanged(stat) => log::debug!("stat: {:?}", stat),
            GameEvent::GameOver { final_score } => {
                log::info!("game over, final score {}", final_score);
            }
            _ => log::trace!("{:?}", event),
        }
    }
}

#[derive(Serialize)]
struct RunSummary {
    seed: u64,
    ticks: u64,
    level: u32,
    score: u64,
    ship_health: u32,
    phase: String,
    events_delivered: u64,
}

fn main() {
    env_logger::init();

    let seed = 0xC0FFEE;
    log::info!("Voidfall headless demo starting with seed {:#x}", seed);

    let mut runner = Runner::new(seed);
    let mut sink = LogSink::default();
    let mut now = 0.0_f64;

    runner.frame(now, &mut sink);
    runner.command(Command::Resume, now);

    // Patrol left and right across the board, firing on cooldown, for
    // up to two minutes of simulated play.
    for frame in 0u32..(120 * 60) {
        now += SIM_DT as f64;
        match frame % 120 {
            0 => {
                runner.command(Command::MoveLeftUp, now);
                runner.command(Command::MoveRightDown, now);
            }
            60 => {
                runner.command(Command::MoveRightUp, now);
                runner.command(Command::MoveLeftDown, now);
            }
            _ => {}
        }
        if frame % 20 == 0 {
            runner.command(Command::Fire, now);
        }
        runner.frame(now, &mut sink);

        match runner.state.phase {
            GamePhase::GameOver => break,
            // Skip straight through story cards
            GamePhase::Story => runner.command(Command::Resume, now),
            _ => {}
        }
    }

    let summary = RunSummary {
        seed,
        ticks: runner.state.time_ticks,
        level: runner.state.level,
        score: runner.state.score,
        ship_health: runner.state.ship.health,
        phase: format!("{:?}", runner.state.phase),
        events_delivered: sink.events,
    };
    println!(
        "{}",
        serde_json::to_string_pretty(&summary).expect("summary serializes")
    );
}
