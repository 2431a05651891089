//! Input system: applies the frame's input to the player (movement
//! direction, aim, trigger).

use glam::Vec2;
use hecs::World;
use log::debug;

use homeward_core::commands::FrameInput;
use homeward_core::components::{Aim, Body, Motion, Player, Weapon};
use homeward_core::config::GameConfig;
use homeward_core::events::GameEvent;

use crate::controller::{aim_from_pointer, gun_center, set_move_direction};
use crate::world_setup::{next_id, spawn_bullet};

pub fn run(
    world: &mut World,
    input: &FrameInput,
    config: &GameConfig,
    now: f64,
    next_entity_id: &mut u32,
    events: &mut Vec<GameEvent>,
) {
    let screen_center = Vec2::new(config.screen_width, config.screen_height) / 2.0;
    let mut shot = None;

    for (_entity, (_player, body, motion, aim, weapon)) in
        world.query_mut::<(&Player, &Body, &mut Motion, &mut Aim, &mut Weapon)>()
    {
        set_move_direction(motion, input.key_vector());
        aim.direction = aim_from_pointer(input.pointer, screen_center, aim.direction);

        if input.fire && weapon.ready {
            weapon.ready = false;
            weapon.last_shot_secs = now;
            let muzzle = gun_center(body.rect.center(), aim.direction, config.weapon.gun_distance)
                + aim.direction * config.weapon.bullet_offset;
            shot = Some((muzzle, aim.direction));
        }
    }

    if let Some((muzzle, direction)) = shot {
        let id = next_id(next_entity_id);
        spawn_bullet(world, muzzle, direction, config, now, id);
        debug!("bullet {} fired toward ({:.2}, {:.2})", id.0, direction.x, direction.y);
        events.push(GameEvent::BulletFired { id, direction });
    }
}
