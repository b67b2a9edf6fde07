//! Fixed timestep simulation tick
//!
//! One call advances the whole board by a single discrete step. The
//! phase order is fixed and matters for gameplay feel: ship motion,
//! alien advance and edge handling, loss check, player bullets, enemy
//! bullets, level-clear check.

use rand::Rng;

use super::collision::intersects;
use super::events::{EntityKind, GameEvent, SoundCue, Stat};
use super::spawn;
use super::state::{Bullet, GamePhase, GameState};
use crate::consts::*;
use glam::Vec2;

/// Input intents for a single tick.
///
/// `move_left`/`move_right` are held flags; `fire` is a one-shot that
/// has already passed the input controller's rate limit.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    pub fire: bool,
}

/// Advance the game state by one tick. No-op unless `Playing`.
pub fn tick(state: &mut GameState, input: &TickInput, events: &mut Vec<GameEvent>) {
    if state.phase != GamePhase::Playing {
        return;
    }
    state.time_ticks += 1;

    step_ship(state, input, events);
    let edge_reached = step_aliens(state, events);
    if edge_reached {
        descend_aliens(state, events);
    }
    check_aliens_reached_ship(state, events);
    step_player_bullets(state, events);
    step_enemy_bullets(state, events);
    check_level_clear(state, events);
}

/// Ship motion and player fire.
///
/// Both direction branches gate on the pre-tick x, so simultaneous
/// opposite intents cancel instead of compounding sequentially.
fn step_ship(state: &mut GameState, input: &TickInput, events: &mut Vec<GameEvent>) {
    let pre_x = state.ship.pos.x;
    let mut x = pre_x;
    if input.move_left && pre_x - SHIP_VELOCITY_X >= 0.0 {
        x -= SHIP_VELOCITY_X;
    }
    if input.move_right && pre_x + SHIP_VELOCITY_X + state.ship.size.x <= BOARD_WIDTH {
        x += SHIP_VELOCITY_X;
    }
    if x != pre_x {
        state.ship.pos.x = x;
        events.push(GameEvent::EntityMoved {
            id: state.ship.id,
            x: state.ship.pos.x,
            y: state.ship.pos.y,
        });
    }

    if input.fire {
        let id = state.next_entity_id();
        let bullet = Bullet {
            id,
            pos: Vec2::new(
                state.ship.pos.x + state.ship.size.x / 2.0 - BULLET_WIDTH / 2.0,
                state.ship.pos.y,
            ),
            size: Vec2::new(BULLET_WIDTH, BULLET_HEIGHT),
            velocity_y: PLAYER_BULLET_VELOCITY_Y,
            used: false,
        };
        events.push(GameEvent::EntityCreated {
            id,
            kind: EntityKind::PlayerBullet,
            x: bullet.pos.x,
            y: bullet.pos.y,
            width: bullet.size.x,
            height: bullet.size.y,
        });
        events.push(GameEvent::SoundCue(SoundCue::Shoot));
        state.player_bullets.push(bullet);
    }
}

/// Move every alive alien horizontally. Returns whether any alive
/// alien's updated position touches a board edge (checked per alien
/// after all have moved).
fn step_aliens(state: &mut GameState, events: &mut Vec<GameEvent>) -> bool {
    let velocity = state.alien_velocity_x;
    let mut edge_reached = false;
    for alien in state.aliens.iter_mut().filter(|a| a.alive) {
        alien.pos.x += velocity;
        events.push(GameEvent::EntityMoved {
            id: alien.id,
            x: alien.pos.x,
            y: alien.pos.y,
        });
        if alien.pos.x <= 0.0 || alien.pos.x >= BOARD_WIDTH - alien.size.x {
            edge_reached = true;
        }
    }
    edge_reached
}

/// Edge response: flip the shared velocity and step the formation down.
fn descend_aliens(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.alien_velocity_x = -state.alien_velocity_x;
    for alien in state.aliens.iter_mut().filter(|a| a.alive) {
        alien.pos.y += ALIEN_HEIGHT;
        events.push(GameEvent::EntityMoved {
            id: alien.id,
            x: alien.pos.x,
            y: alien.pos.y,
        });
    }
}

/// Loss condition: an alive alien's bottom edge reached the ship row.
fn check_aliens_reached_ship(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let ship_y = state.ship.pos.y;
    if state
        .aliens
        .iter()
        .any(|a| a.alive && a.pos.y + a.size.y >= ship_y)
    {
        set_game_over(state, events);
    }
}

/// Advance player bullets, resolve wall hits (first-hit-wins) and alien
/// hits (no early exit: a bullet may score several aliens in one tick
/// before its removal is observed).
fn step_player_bullets(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let mut bullets = std::mem::take(&mut state.player_bullets);
    bullets.retain_mut(|bullet| {
        bullet.pos.y += bullet.velocity_y;
        if bullet.used || bullet.pos.y < 0.0 {
            events.push(GameEvent::EntityRemoved { id: bullet.id });
            return false;
        }
        events.push(GameEvent::EntityMoved {
            id: bullet.id,
            x: bullet.pos.x,
            y: bullet.pos.y,
        });

        for wall in state.walls.iter_mut() {
            if wall.health > 0 && intersects(&bullet.aabb(), &wall.aabb()) {
                bullet.used = true;
                wall.health -= 1;
                break;
            }
        }

        for alien in state.aliens.iter_mut() {
            if alien.alive && intersects(&bullet.aabb(), &alien.aabb()) {
                bullet.used = true;
                alien.alive = false;
                events.push(GameEvent::EntityRemoved { id: alien.id });
                state.score += KILL_SCORE;
                events.push(GameEvent::StatChanged(Stat::Score(state.score)));
            }
        }
        true
    });
    state.player_bullets = bullets;
    remove_destroyed_walls(state, events);
}

/// Advance enemy bullets, resolve wall hits (first-hit-wins) and ship
/// hits. A ship hit consumes the bullet; scanning continues with the
/// remaining bullets.
fn step_enemy_bullets(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let mut bullets = std::mem::take(&mut state.enemy_bullets);
    bullets.retain_mut(|bullet| {
        bullet.pos.y += bullet.velocity_y;
        if bullet.used || bullet.pos.y > BOARD_HEIGHT {
            events.push(GameEvent::EntityRemoved { id: bullet.id });
            return false;
        }
        events.push(GameEvent::EntityMoved {
            id: bullet.id,
            x: bullet.pos.x,
            y: bullet.pos.y,
        });

        for wall in state.walls.iter_mut() {
            if wall.health > 0 && intersects(&bullet.aabb(), &wall.aabb()) {
                bullet.used = true;
                wall.health -= 1;
                break;
            }
        }

        if !bullet.used && intersects(&bullet.aabb(), &state.ship.aabb()) {
            bullet.used = true;
            state.ship.health = state.ship.health.saturating_sub(1);
            events.push(GameEvent::StatChanged(Stat::Health(state.ship.health)));
            if state.ship.health == 0 {
                set_game_over(state, events);
            }
        }
        true
    });
    state.enemy_bullets = bullets;
    remove_destroyed_walls(state, events);
}

fn remove_destroyed_walls(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.walls.retain(|wall| {
        if wall.health == 0 {
            events.push(GameEvent::EntityRemoved { id: wall.id });
            false
        } else {
            true
        }
    });
}

/// Level clear: award the formation bonus, grow the formation up to the
/// caps, speed the aliens up (sign preserved), clear all bullets, and
/// respawn into the inter-level story phase.
fn check_level_clear(state: &mut GameState, events: &mut Vec<GameEvent>) {
    if state.phase == GamePhase::GameOver || state.alive_alien_count() > 0 {
        return;
    }

    state.score += (state.alien_columns * state.alien_rows) as u64 * KILL_SCORE;
    events.push(GameEvent::StatChanged(Stat::Score(state.score)));

    state.alien_columns = (state.alien_columns + 1).min(ALIEN_MAX_COLUMNS);
    state.alien_rows = (state.alien_rows + 1).min(ALIEN_MAX_ROWS);
    state.alien_velocity_x += if state.alien_velocity_x > 0.0 {
        ALIEN_VELOCITY_STEP
    } else {
        -ALIEN_VELOCITY_STEP
    };
    state.level += 1;

    for bullet in state
        .player_bullets
        .drain(..)
        .chain(state.enemy_bullets.drain(..))
    {
        events.push(GameEvent::EntityRemoved { id: bullet.id });
    }

    log::info!(
        "Level {} cleared, advancing to level {} (score {})",
        state.level - 1,
        state.level,
        state.score
    );
    spawn::start_level(state, events);
    state.phase = GamePhase::Story;
}

fn set_game_over(state: &mut GameState, events: &mut Vec<GameEvent>) {
    if state.phase == GamePhase::GameOver {
        return;
    }
    state.phase = GamePhase::GameOver;
    events.push(GameEvent::GameOver {
        final_score: state.score,
    });
    log::info!("Game over with final score {}", state.score);
}

/// The independent enemy-fire scheduler, invoked once per frame by the
/// loop driver. Re-armed only while `Playing`; the inter-shot delay is
/// drawn uniformly from the configured tick range.
///
/// The firing alien is picked uniformly among *all* aliens; a dead pick
/// silently produces no shot. That quirk is part of the observed
/// behavior and kept on purpose.
pub fn enemy_fire_tick(state: &mut GameState, events: &mut Vec<GameEvent>) {
    if state.phase != GamePhase::Playing {
        return;
    }
    if state.enemy_fire_due > 0 {
        state.enemy_fire_due -= 1;
        return;
    }

    if !state.aliens.is_empty() {
        let idx = state.rng.random_range(0..state.aliens.len());
        let (alive, x, y) = {
            let alien = &state.aliens[idx];
            (
                alien.alive,
                alien.pos.x + alien.size.x / 2.0 - BULLET_WIDTH / 2.0,
                alien.pos.y + alien.size.y,
            )
        };
        if alive {
            let id = state.next_entity_id();
            let bullet = Bullet {
                id,
                pos: Vec2::new(x, y),
                size: Vec2::new(BULLET_WIDTH, BULLET_HEIGHT),
                velocity_y: ENEMY_BULLET_VELOCITY_Y,
                used: false,
            };
            events.push(GameEvent::EntityCreated {
                id,
                kind: EntityKind::EnemyBullet,
                x: bullet.pos.x,
                y: bullet.pos.y,
                width: bullet.size.x,
                height: bullet.size.y,
            });
            state.enemy_bullets.push(bullet);
        }
    }
    state.rearm_enemy_fire();
}
