//! Events emitted by the simulation for audio and UI feedback.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::EntityId;

/// Things that happened during one frame, in the order they happened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A new session began (start or restart).
    SessionStarted { home: Vec2 },
    /// Spawner placed an enemy.
    EnemySpawned {
        id: EntityId,
        kind: EnemyKind,
        position: Vec2,
    },
    /// Player fired.
    BulletFired { id: EntityId, direction: Vec2 },
    /// An enemy crossed to zero health.
    EnemyKilled { id: EntityId, kind: EnemyKind },
    /// Kill quota met.
    WaveAdvanced {
        wave: u32,
        quota: u32,
        spawn_interval_secs: f64,
    },
    /// Dwell damage landed.
    PlayerDamaged { amount: u8, health: i32 },
    /// A health pack was consumed.
    HealthRestored { health: i32 },
    /// Player touched Home.
    HomeReached,
    /// Player health reached zero.
    PlayerDefeated,
}
