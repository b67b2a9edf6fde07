//! Formation spawner
//!
//! Builds the alien grid and the wall row for a level. Deterministic in
//! its integer parameters - no randomness - so levels are reproducible.
//! Spawning replaces the active set and emits removal events for any
//! prior entities still tracked by the presentation layer.

use glam::Vec2;

use super::events::{EntityKind, GameEvent};
use super::state::{Alien, GameState, Wall};
use crate::consts::*;

/// Replace the active alien set with a fresh `columns x rows` grid
/// anchored at the top-left spawn origin, all alive.
pub fn spawn_aliens(state: &mut GameState, columns: u32, rows: u32, events: &mut Vec<GameEvent>) {
    for alien in state.aliens.drain(..) {
        events.push(GameEvent::EntityRemoved { id: alien.id });
    }

    for c in 0..columns {
        for r in 0..rows {
            let id = state.next_entity_id();
            let alien = Alien {
                id,
                pos: Vec2::new(
                    ALIEN_ORIGIN_X + c as f32 * ALIEN_WIDTH,
                    ALIEN_ORIGIN_Y + r as f32 * ALIEN_HEIGHT,
                ),
                size: Vec2::new(ALIEN_WIDTH, ALIEN_HEIGHT),
                alive: true,
            };
            events.push(GameEvent::EntityCreated {
                id,
                kind: EntityKind::Alien,
                x: alien.pos.x,
                y: alien.pos.y,
                width: alien.size.x,
                height: alien.size.y,
            });
            state.aliens.push(alien);
        }
    }

    log::info!(
        "Level {}: spawned {}x{} alien formation",
        state.level,
        columns,
        rows
    );
}

/// Replace the active wall set with `count` full-health walls in one
/// evenly spaced row above the ship.
pub fn spawn_walls(state: &mut GameState, count: u32, events: &mut Vec<GameEvent>) {
    for wall in state.walls.drain(..) {
        events.push(GameEvent::EntityRemoved { id: wall.id });
    }

    if count == 0 {
        return;
    }

    let gap = (BOARD_WIDTH - count as f32 * WALL_WIDTH) / (count + 1) as f32;
    for i in 0..count {
        let id = state.next_entity_id();
        let wall = Wall {
            id,
            pos: Vec2::new(gap + i as f32 * (WALL_WIDTH + gap), WALL_Y),
            size: Vec2::new(WALL_WIDTH, WALL_HEIGHT),
            health: WALL_MAX_HEALTH,
        };
        events.push(GameEvent::EntityCreated {
            id,
            kind: EntityKind::Wall,
            x: wall.pos.x,
            y: wall.pos.y,
            width: wall.size.x,
            height: wall.size.y,
        });
        state.walls.push(wall);
    }
}

/// Spawn the current level's formation and walls and announce the
/// story card. Called on run start and after each level clear.
pub fn start_level(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let columns = state.alien_columns;
    let rows = state.alien_rows;
    spawn_aliens(state, columns, rows, events);
    spawn_walls(state, WALL_COUNT, events);

    let (title, text) = story_card(state.level);
    events.push(GameEvent::StatChanged(super::events::Stat::Level(
        state.level,
    )));
    events.push(GameEvent::LevelStory {
        level: state.level,
        title,
        text,
    });
}

/// Flavor text shown on the inter-level story card
fn story_card(level: u32) -> (String, String) {
    const LINES: [&str; 4] = [
        "The first wave drops out of the static. Hold the line.",
        "They learned from the last assault. Faster now.",
        "Cover is thinning. Make every shot count.",
        "The swarm keeps coming. So do you.",
    ];
    let text = LINES[((level - 1) % LINES.len() as u32) as usize].to_string();
    (format!("Sector {}", level), text)
}
