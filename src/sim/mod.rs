//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod clock;
pub mod collision;
pub mod events;
pub mod spawn;
pub mod state;
pub mod tick;

pub use clock::GameClock;
pub use collision::{Aabb, intersects};
pub use events::{EntityKind, GameEvent, SoundCue, Stat};
pub use spawn::{spawn_aliens, spawn_walls};
pub use state::{Alien, Bullet, GamePhase, GameState, Ship, Wall};
pub use tick::{TickInput, enemy_fire_tick, tick};
