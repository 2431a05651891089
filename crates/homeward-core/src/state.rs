//! Game state snapshot, the complete visible state handed to the
//! presentation layer after each frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::geometry::Rect;
use crate::map::MapTile;
use crate::types::{EntityId, SimTime};

/// Complete game state produced by each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    /// World position of the screen's top-left corner. The camera keeps
    /// the player centered.
    pub camera: Vec2,
    pub player: Option<PlayerView>,
    /// Sorted by id.
    pub enemies: Vec<EnemyView>,
    /// Sorted by id.
    pub bullets: Vec<BulletView>,
    /// Sorted by id.
    pub health_packs: Vec<HealthPackView>,
    pub home: Option<HomeView>,
    pub hud: HudView,
    pub events: Vec<GameEvent>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerView {
    /// Sprite center.
    pub position: Vec2,
    pub sprite: Rect,
    pub hitbox: Rect,
    pub facing: Facing,
    /// Walk cycle frame within the current facing.
    pub frame: u32,
    pub health: i32,
    pub max_health: i32,
    pub invincible: bool,
    pub gun: GunView,
}

/// Gun placement and render rotation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GunView {
    pub center: Vec2,
    /// Unit aim vector.
    pub aim: Vec2,
    /// Counter-clockwise rotation applied to the right-facing gun art.
    pub angle_deg: f32,
    /// Art is mirrored vertically when aiming left so it stays upright.
    pub flip_vertical: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: EntityId,
    pub kind: EnemyKind,
    pub position: Vec2,
    pub sprite: Rect,
    pub hitbox: Rect,
    pub health: i32,
    /// Render as a silhouette.
    pub dying: bool,
    pub frame: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulletView {
    pub id: EntityId,
    pub position: Vec2,
    pub direction: Vec2,
    pub sprite: Rect,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthPackView {
    pub id: EntityId,
    pub rect: Rect,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeView {
    pub rect: Rect,
}

/// On-screen counters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HudView {
    pub health: i32,
    pub max_health: i32,
    pub wave: u32,
    pub kills: u32,
    pub quota: u32,
}

/// Static, render-only world content. Does not change within a session
/// except for which candidate became Home.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneryView {
    pub tiles: Vec<MapTile>,
    /// Visible obstacles. Invisible map borders are left out.
    pub obstacles: Vec<Rect>,
}
