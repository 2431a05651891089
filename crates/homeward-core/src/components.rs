//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::geometry::Rect;

/// Marker for the single player entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player;

/// Hit points. The player's are bounded to `[0, max]`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

/// Post-hit invincibility window.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Invincibility {
    pub active: bool,
    /// Session time of the last hit that landed.
    pub since_secs: f64,
}

/// Sustained enemy contact tracking for dwell damage.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ContactTimer {
    /// Whether the player overlapped a live enemy last frame.
    pub touching: bool,
    /// Session time the current contact started (or last dealt damage).
    pub since_secs: f64,
}

/// Walk cycle state.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Animation {
    pub facing: Facing,
    /// Fractional frame index; the drawn frame is the integer part.
    pub frame: f32,
}

/// Gun aim. Always a unit vector.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Aim {
    pub direction: Vec2,
}

/// Shooting cooldown state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Weapon {
    pub ready: bool,
    pub last_shot_secs: f64,
}

/// Enemy data: variant and the contact damage it deals.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub damage: u8,
    pub state: EnemyState,
    /// Fractional animation frame. Frozen while dying.
    pub frame: f32,
}

/// Projectile data.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bullet {
    pub spawned_secs: f64,
    pub lifetime_secs: f64,
}

/// Current movement: unit direction (or zero) and speed in px/s.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Motion {
    pub direction: Vec2,
    pub speed: f32,
}

/// Full sprite bounds. Drawn rectangle and mask anchor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Body {
    pub rect: Rect,
}

/// Movement hitbox, shrunk from the sprite bounds. The sprite stays
/// centered on it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hitbox {
    pub rect: Rect,
}

/// Health pickup marker.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HealthPack;

/// Goal marker.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Home;

/// Static collision rectangle. Invisible for map borders.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Obstacle {
    pub visible: bool,
}
