//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only; it never modifies the world.

use glam::Vec2;
use hecs::World;

use homeward_core::components::*;
use homeward_core::config::GameConfig;
use homeward_core::enums::*;
use homeward_core::events::GameEvent;
use homeward_core::geometry::Rect;
use homeward_core::map::SessionLayout;
use homeward_core::state::*;
use homeward_core::types::{EntityId, SimTime};

use crate::controller::{gun_center, gun_orientation};
use crate::wave::WaveState;

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    wave: &WaveState,
    config: &GameConfig,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    let player = build_player(world, config);
    let screen = Vec2::new(config.screen_width, config.screen_height);
    let camera = player
        .as_ref()
        .map(|p| p.position - screen / 2.0)
        .unwrap_or_default();
    let hud = HudView {
        health: player.as_ref().map(|p| p.health).unwrap_or_default(),
        max_health: player
            .as_ref()
            .map(|p| p.max_health)
            .unwrap_or(i32::from(config.player.max_health)),
        wave: wave.wave,
        kills: wave.kills,
        quota: wave.quota,
    };

    GameStateSnapshot {
        time: *time,
        phase,
        camera,
        player,
        enemies: build_enemies(world),
        bullets: build_bullets(world),
        health_packs: build_health_packs(world),
        home: world
            .query::<(&Home, &Body)>()
            .iter()
            .next()
            .map(|(_, (_, body))| HomeView { rect: body.rect }),
        hud,
        events,
    }
}

fn build_player(world: &World, config: &GameConfig) -> Option<PlayerView> {
    let mut query = world.query::<(&Player, &Body, &Hitbox, &Animation, &Health, &Invincibility, &Aim)>();
    let (_, (_, body, hitbox, animation, health, invincibility, aim)) = query.iter().next()?;

    let position = body.rect.center();
    let (angle_deg, flip_vertical) = gun_orientation(aim.direction);
    Some(PlayerView {
        position,
        sprite: body.rect,
        hitbox: hitbox.rect,
        facing: animation.facing,
        frame: animation.frame as u32,
        health: health.current,
        max_health: health.max,
        invincible: invincibility.active,
        gun: GunView {
            center: gun_center(position, aim.direction, config.weapon.gun_distance),
            aim: aim.direction,
            angle_deg,
            flip_vertical,
        },
    })
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Enemy, &EntityId, &Body, &Hitbox, &Health)>()
        .iter()
        .map(|(_, (enemy, id, body, hitbox, health))| EnemyView {
            id: *id,
            kind: enemy.kind,
            position: body.rect.center(),
            sprite: body.rect,
            hitbox: hitbox.rect,
            health: health.current,
            dying: matches!(enemy.state, EnemyState::Dying { .. }),
            frame: enemy.frame as u32,
        })
        .collect();
    enemies.sort_by_key(|e| e.id);
    enemies
}

fn build_bullets(world: &World) -> Vec<BulletView> {
    let mut bullets: Vec<BulletView> = world
        .query::<(&Bullet, &EntityId, &Body, &Motion)>()
        .iter()
        .map(|(_, (_, id, body, motion))| BulletView {
            id: *id,
            position: body.rect.center(),
            direction: motion.direction,
            sprite: body.rect,
        })
        .collect();
    bullets.sort_by_key(|b| b.id);
    bullets
}

fn build_health_packs(world: &World) -> Vec<HealthPackView> {
    let mut packs: Vec<HealthPackView> = world
        .query::<(&HealthPack, &EntityId, &Body)>()
        .iter()
        .map(|(_, (_, id, body))| HealthPackView { id: *id, rect: body.rect })
        .collect();
    packs.sort_by_key(|p| p.id);
    packs
}

/// Render-only scenery: ground tiles and visible obstacles.
pub fn build_scenery(world: &World, layout: &SessionLayout) -> SceneryView {
    let obstacles: Vec<Rect> = world
        .query::<(&Obstacle, &Body)>()
        .iter()
        .filter(|(_, (obstacle, _))| obstacle.visible)
        .map(|(_, (_, body))| body.rect)
        .collect();
    SceneryView {
        tiles: layout.tiles.clone(),
        obstacles,
    }
}
