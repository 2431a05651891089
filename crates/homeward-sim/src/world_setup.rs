//! Entity spawn factories for setting up the simulation world.
//!
//! Creates the player, Home, obstacles, health packs, enemies and bullets
//! with their component bundles.

use glam::Vec2;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use homeward_core::components::*;
use homeward_core::config::GameConfig;
use homeward_core::enums::*;
use homeward_core::geometry::Rect;
use homeward_core::map::SessionLayout;
use homeward_core::types::EntityId;
use homeward_enemy_ai::profiles::get_profile;

/// What session setup produced besides entities.
pub struct SessionSetup {
    /// Collision rectangles in map order: objects, then borders.
    pub obstacles: Vec<Rect>,
    /// Center of the chosen Home.
    pub home: Vec2,
}

/// Hand out the next per-session id.
pub fn next_id(counter: &mut u32) -> EntityId {
    let id = EntityId(*counter);
    *counter += 1;
    id
}

/// Empty the world and populate a fresh session from the layout. Home is
/// picked at random from the candidates.
pub fn setup_session(
    world: &mut World,
    layout: &SessionLayout,
    config: &GameConfig,
    rng: &mut ChaCha8Rng,
    next_entity_id: &mut u32,
) -> SessionSetup {
    world.clear();

    let mut obstacles = Vec::with_capacity(layout.objects.len() + layout.borders.len());
    for rect in &layout.objects {
        world.spawn((Obstacle { visible: true }, Body { rect: *rect }));
        obstacles.push(*rect);
    }
    for rect in &layout.borders {
        world.spawn((Obstacle { visible: false }, Body { rect: *rect }));
        obstacles.push(*rect);
    }

    for top_left in &layout.health_packs {
        spawn_health_pack(world, *top_left, config, next_id(next_entity_id));
    }

    // Layout validation guarantees at least one candidate.
    let home = layout.home_candidates[rng.gen_range(0..layout.home_candidates.len())];
    spawn_home(world, home, config);

    spawn_player(world, layout.player_start, config);

    SessionSetup { obstacles, home }
}

/// Spawn the player centered on `start` with full health.
pub fn spawn_player(world: &mut World, start: Vec2, config: &GameConfig) -> Entity {
    let p = &config.player;
    let body = Body {
        rect: Rect::from_center(start, Vec2::new(p.sprite_width, p.sprite_height)),
    };
    let hitbox = Hitbox {
        rect: body.rect.inflate(p.hitbox_inflate_x, p.hitbox_inflate_y),
    };
    let max = i32::from(p.max_health);

    world.spawn((
        Player,
        body,
        hitbox,
        Health { current: max, max },
        Invincibility::default(),
        ContactTimer::default(),
        Animation::default(),
        Aim {
            direction: Vec2::new(0.0, 1.0),
        },
        Weapon {
            ready: true,
            last_shot_secs: 0.0,
        },
        Motion {
            direction: Vec2::ZERO,
            speed: p.speed,
        },
    ))
}

/// Spawn the Home sprite centered on `center`.
pub fn spawn_home(world: &mut World, center: Vec2, config: &GameConfig) -> Entity {
    let size = Vec2::splat(config.home_size);
    world.spawn((
        Home,
        Body {
            rect: Rect::from_center(center, size),
        },
    ))
}

/// Spawn a health pack with its top-left corner at `top_left`.
pub fn spawn_health_pack(world: &mut World, top_left: Vec2, config: &GameConfig, id: EntityId) -> Entity {
    let size = Vec2::splat(config.health_pack_size);
    world.spawn((
        HealthPack,
        id,
        Body {
            rect: Rect::from_top_left(top_left, size),
        },
    ))
}

/// Spawn a live enemy of `kind` centered on `center`.
pub fn spawn_enemy(world: &mut World, kind: EnemyKind, center: Vec2, config: &GameConfig, id: EntityId) -> Entity {
    let e = &config.enemy;
    let profile = get_profile(kind, e);
    let body = Body {
        rect: Rect::from_center(center, Vec2::new(e.sprite_width, e.sprite_height)),
    };
    let hitbox = Hitbox {
        rect: body.rect.inflate(e.hitbox_inflate_x, e.hitbox_inflate_y),
    };

    world.spawn((
        Enemy {
            kind,
            damage: profile.damage,
            state: EnemyState::Alive,
            frame: 0.0,
        },
        id,
        body,
        hitbox,
        Health {
            current: profile.health,
            max: profile.health,
        },
        Motion {
            direction: Vec2::ZERO,
            speed: profile.speed,
        },
    ))
}

/// Spawn a bullet centered on `center` flying along `direction`.
pub fn spawn_bullet(
    world: &mut World,
    center: Vec2,
    direction: Vec2,
    config: &GameConfig,
    now: f64,
    id: EntityId,
) -> Entity {
    let w = &config.weapon;
    world.spawn((
        Bullet {
            spawned_secs: now,
            lifetime_secs: w.bullet_lifetime_secs,
        },
        id,
        Body {
            rect: Rect::from_center(center, Vec2::splat(w.bullet_size)),
        },
        Motion {
            direction,
            speed: w.bullet_speed,
        },
    ))
}
