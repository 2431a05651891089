//! Motion integration.
//!
//! The player and live enemies move with obstacle resolution; bullets fly
//! straight and ignore obstacles here (the combat pass removes them on
//! contact). Dying enemies stay put.

use glam::Vec2;
use hecs::World;

use homeward_core::components::*;
use homeward_core::config::GameConfig;
use homeward_core::enums::EnemyState;
use homeward_core::geometry::Rect;
use homeward_enemy_ai::fsm::{animate, chase_direction};

use crate::controller;

pub fn run(world: &mut World, obstacles: &[Rect], config: &GameConfig, dt: f32) {
    let mut player_center = None;
    for (_entity, (_player, body, hitbox, animation, motion)) in
        world.query_mut::<(&Player, &mut Body, &mut Hitbox, &mut Animation, &Motion)>()
    {
        controller::advance(body, hitbox, animation, motion, dt, obstacles, &config.player);
        player_center = Some(body.rect.center());
    }

    for (_entity, (_bullet, body, motion)) in world.query_mut::<(&Bullet, &mut Body, &Motion)>() {
        body.rect = body.rect.translated(motion.direction * motion.speed * dt);
    }

    move_enemies(world, player_center, obstacles, config, dt);
}

/// Chase the player. Without a player, enemies hold still but keep
/// animating.
fn move_enemies(world: &mut World, target: Option<Vec2>, obstacles: &[Rect], config: &GameConfig, dt: f32) {
    let tuning = &config.enemy;
    for (_entity, (enemy, body, hitbox, motion)) in
        world.query_mut::<(&mut Enemy, &mut Body, &mut Hitbox, &mut Motion)>()
    {
        if enemy.state != EnemyState::Alive {
            continue;
        }
        motion.direction = match target {
            Some(target) => chase_direction(body.rect.center(), target),
            None => Vec2::ZERO,
        };
        controller::slide_body(body, hitbox, motion, dt, obstacles);
        enemy.frame = animate(enemy.frame, dt, tuning.animation_fps, tuning.animation_frames);
    }
}
