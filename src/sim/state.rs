//! Game state and core simulation types
//!
//! All entity sets and counters live in one owned `GameState`; nothing
//! is ambient or static. Presentation collaborators only ever see
//! events and read-only borrows of this state.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::clock::GameClock;
use super::collision::Aabb;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Inter-level story card shown; time accrual suspended until resumed
    Story,
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
    /// Run ended; terminal until restart
    GameOver,
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub id: u32,
    pub pos: Vec2,
    pub size: Vec2,
    pub health: u32,
}

impl Ship {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            pos: Vec2::new(BOARD_WIDTH / 2.0 - SHIP_WIDTH / 2.0, SHIP_START_Y),
            size: Vec2::new(SHIP_WIDTH, SHIP_HEIGHT),
            health: SHIP_START_HEALTH,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// One alien in the formation. Dead aliens stay in the set but take no
/// physics step and are not collidable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alien {
    pub id: u32,
    pub pos: Vec2,
    pub size: Vec2,
    pub alive: bool,
}

impl Alien {
    pub fn aabb(&self) -> Aabb {
        Aabb {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// A destructible cover wall. Removed from the active set at health 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wall {
    pub id: u32,
    pub pos: Vec2,
    pub size: Vec2,
    pub health: u32,
}

impl Wall {
    pub fn aabb(&self) -> Aabb {
        Aabb {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// A projectile. Player and enemy bullets live in separate sets and are
/// distinguished by the sign of `velocity_y` and their collision targets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub id: u32,
    pub pos: Vec2,
    pub size: Vec2,
    pub velocity_y: f32,
    /// Marks the bullet for removal on its next evaluation
    pub used: bool,
}

impl Bullet {
    pub fn aabb(&self) -> Aabb {
        Aabb {
            pos: self.pos,
            size: self.size,
        }
    }
}

fn default_rng() -> Pcg32 {
    Pcg32::seed_from_u64(0)
}

/// Complete game state (deterministic given seed and input sequence)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    #[serde(skip, default = "default_rng")]
    pub rng: Pcg32,
    pub phase: GamePhase,
    /// Level number, 1-based
    pub level: u32,
    /// Monotonically non-decreasing
    pub score: u64,
    /// Formation size for the current level
    pub alien_columns: u32,
    pub alien_rows: u32,
    /// Shared horizontal velocity of the formation (sign = direction)
    pub alien_velocity_x: f32,
    pub ship: Ship,
    pub aliens: Vec<Alien>,
    pub walls: Vec<Wall>,
    pub player_bullets: Vec<Bullet>,
    pub enemy_bullets: Vec<Bullet>,
    /// Pause-aware play clock
    pub clock: GameClock,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Ticks until the enemy-fire scheduler's next shot attempt
    pub enemy_fire_due: u32,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a fresh run at level 1. Entity sets start empty; the
    /// caller spawns the first formation (see `spawn::start_level`).
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Story,
            level: 1,
            score: 0,
            alien_columns: ALIEN_START_COLUMNS,
            alien_rows: ALIEN_START_ROWS,
            alien_velocity_x: ALIEN_START_VELOCITY_X,
            ship: Ship::new(0),
            aliens: Vec::new(),
            walls: Vec::new(),
            player_bullets: Vec::new(),
            enemy_bullets: Vec::new(),
            clock: GameClock::new(),
            time_ticks: 0,
            enemy_fire_due: 0,
            next_id: 1,
        };
        state.ship = Ship::new(state.next_entity_id());
        state.rearm_enemy_fire();
        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Draw the next inter-shot delay for the enemy-fire scheduler
    pub fn rearm_enemy_fire(&mut self) {
        use rand::Rng;
        self.enemy_fire_due = self
            .rng
            .random_range(ENEMY_FIRE_MIN_TICKS..=ENEMY_FIRE_MAX_TICKS);
    }

    pub fn alive_alien_count(&self) -> usize {
        self.aliens.iter().filter(|a| a.alive).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_run_defaults() {
        let state = GameState::new(7);
        assert_eq!(state.phase, GamePhase::Story);
        assert_eq!(state.level, 1);
        assert_eq!(state.score, 0);
        assert_eq!(state.ship.health, SHIP_START_HEALTH);
        assert_eq!(state.alien_columns, ALIEN_START_COLUMNS);
        assert_eq!(state.alien_rows, ALIEN_START_ROWS);
        assert!(state.aliens.is_empty());
        // Ship starts centered on the bottom rows
        assert_eq!(state.ship.pos.x, BOARD_WIDTH / 2.0 - SHIP_WIDTH / 2.0);
        assert_eq!(state.ship.pos.y, SHIP_START_Y);
        // Fire scheduler is armed within the configured window
        assert!(state.enemy_fire_due >= ENEMY_FIRE_MIN_TICKS);
        assert!(state.enemy_fire_due <= ENEMY_FIRE_MAX_TICKS);
    }

    #[test]
    fn test_entity_ids_monotonic() {
        let mut state = GameState::new(7);
        assert_eq!(state.ship.id, 1);
        let a = state.next_entity_id();
        let b = state.next_entity_id();
        assert_eq!(a, 2);
        assert_eq!(b, 3);
    }
}
