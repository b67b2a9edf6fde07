//! Outbound events for presentation and audio collaborators
//!
//! The simulation pushes these into a buffer each tick; the loop driver
//! drains them to an `EventSink`. Fire-and-forget: nothing flows back.

use serde::{Deserialize, Serialize};

/// What kind of visual element an entity maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Ship,
    Alien,
    Wall,
    PlayerBullet,
    EnemyBullet,
}

/// Display stats a collaborator may show as text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Stat {
    Score(u64),
    Level(u32),
    Health(u32),
    /// Elapsed play time, floor-truncated "m:ss"
    Elapsed(String),
}

/// One-shot sound cues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundCue {
    Shoot,
}

/// A single outbound event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    EntityCreated {
        id: u32,
        kind: EntityKind,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    EntityMoved {
        id: u32,
        x: f32,
        y: f32,
    },
    EntityRemoved {
        id: u32,
    },
    StatChanged(Stat),
    SoundCue(SoundCue),
    GameOver {
        final_score: u64,
    },
    LevelStory {
        level: u32,
        title: String,
        text: String,
    },
}
