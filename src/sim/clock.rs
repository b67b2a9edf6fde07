//! Pause-aware play clock
//!
//! Elapsed time is derived from wall-clock `now` values supplied by the
//! loop driver, so the clock itself stays pure and testable. Pausing
//! captures the elapsed-so-far; resuming rebases the running reference
//! so elapsed time continues without a jump.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameClock {
    /// Seconds accrued across completed running spans
    accumulated: f64,
    /// `now` at which the current running span began, if running
    run_start: Option<f64>,
}

impl GameClock {
    /// Fresh, stopped clock with zero elapsed
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.run_start.is_some()
    }

    /// Begin accruing time. No-op if already running.
    pub fn resume(&mut self, now: f64) {
        if self.run_start.is_none() {
            self.run_start = Some(now);
        }
    }

    /// Stop accruing time, capturing elapsed-so-far. No-op if stopped.
    pub fn pause(&mut self, now: f64) {
        if let Some(start) = self.run_start.take() {
            self.accumulated += now - start;
        }
    }

    /// Zero the clock and stop it (restart path)
    pub fn reset(&mut self) {
        self.accumulated = 0.0;
        self.run_start = None;
    }

    /// Total elapsed play time in seconds
    pub fn elapsed(&self, now: f64) -> f64 {
        match self.run_start {
            Some(start) => self.accumulated + (now - start),
            None => self.accumulated,
        }
    }

    /// Elapsed time as "m:ss", floor-truncated
    pub fn format_elapsed(&self, now: f64) -> String {
        let total = self.elapsed(now).max(0.0) as u64;
        format!("{}:{:02}", total / 60, total % 60)
    }
}
