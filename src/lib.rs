//! Voidfall - a tile-grid space shooter simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, game state)
//! - `input`: Command-to-intent translation with fire rate limiting
//! - `runner`: Fixed-timestep loop driver and event delivery
//!
//! Rendering, audio and page layout are external collaborators: they
//! consume `GameEvent`s and read entity state, and never appear inside
//! the simulation.

pub mod input;
pub mod runner;
pub mod sim;

pub use input::InputController;
pub use runner::{EventSink, Runner};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (one tick per display refresh, ~60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Board dimensions - a fixed logical grid of square cells.
    /// `TILE_SIZE` is the single size knob; everything else derives.
    pub const TILE_SIZE: f32 = 30.0;
    pub const BOARD_COLUMNS: u32 = 20;
    pub const BOARD_ROWS: u32 = 20;
    pub const BOARD_WIDTH: f32 = TILE_SIZE * BOARD_COLUMNS as f32;
    pub const BOARD_HEIGHT: f32 = TILE_SIZE * BOARD_ROWS as f32;

    /// Ship defaults
    pub const SHIP_WIDTH: f32 = TILE_SIZE * 2.0;
    pub const SHIP_HEIGHT: f32 = TILE_SIZE;
    pub const SHIP_START_Y: f32 = BOARD_HEIGHT - TILE_SIZE * 2.0;
    pub const SHIP_START_HEALTH: u32 = 3;
    /// Horizontal step per tick while a move intent is held
    pub const SHIP_VELOCITY_X: f32 = 5.0;

    /// Alien formation defaults
    pub const ALIEN_WIDTH: f32 = TILE_SIZE * 2.0;
    pub const ALIEN_HEIGHT: f32 = TILE_SIZE;
    /// Top-left anchor of the spawn grid
    pub const ALIEN_ORIGIN_X: f32 = TILE_SIZE;
    pub const ALIEN_ORIGIN_Y: f32 = TILE_SIZE;
    pub const ALIEN_START_COLUMNS: u32 = 3;
    pub const ALIEN_START_ROWS: u32 = 2;
    /// Formation grows by one column and one row per level, up to these caps
    pub const ALIEN_MAX_COLUMNS: u32 = BOARD_COLUMNS / 2 - 2;
    pub const ALIEN_MAX_ROWS: u32 = BOARD_ROWS - 4;
    pub const ALIEN_START_VELOCITY_X: f32 = 1.0;
    /// Horizontal speed gained per level (magnitude, sign preserved)
    pub const ALIEN_VELOCITY_STEP: f32 = 0.2;

    /// Bullet defaults
    pub const BULLET_WIDTH: f32 = TILE_SIZE / 8.0;
    pub const BULLET_HEIGHT: f32 = TILE_SIZE / 2.0;
    /// Player bullets travel up (negative y)
    pub const PLAYER_BULLET_VELOCITY_Y: f32 = -10.0;
    /// Enemy bullets travel down
    pub const ENEMY_BULLET_VELOCITY_Y: f32 = 8.0;

    /// Wall defaults
    pub const WALL_WIDTH: f32 = TILE_SIZE * 2.0;
    pub const WALL_HEIGHT: f32 = TILE_SIZE / 2.0;
    pub const WALL_MAX_HEALTH: u32 = 4;
    pub const WALL_COUNT: u32 = 4;
    /// Walls sit two tiles above the ship row
    pub const WALL_Y: f32 = SHIP_START_Y - TILE_SIZE * 2.0;

    /// Score per alien killed; the level-clear bonus is columns * rows * this
    pub const KILL_SCORE: u64 = 100;

    /// Minimum spacing between accepted fire commands (seconds)
    pub const FIRE_COOLDOWN: f64 = 0.3;

    /// Enemy fire scheduler: inter-shot delay drawn uniformly from this
    /// range (ticks)
    pub const ENEMY_FIRE_MIN_TICKS: u32 = 45;
    pub const ENEMY_FIRE_MAX_TICKS: u32 = 120;
}
