//! Cleanup system: removes expired bullets and enemies whose death
//! animation has finished.

use hecs::{Entity, World};

use homeward_core::components::{Bullet, Enemy};
use homeward_core::config::GameConfig;
use homeward_enemy_ai::fsm::{evaluate, Lifecycle};

/// Uses a pre-allocated buffer to avoid per-frame allocation.
pub fn run(world: &mut World, config: &GameConfig, now: f64, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, bullet) in world.query_mut::<&Bullet>() {
        if now - bullet.spawned_secs >= bullet.lifetime_secs {
            despawn_buffer.push(entity);
        }
    }

    for (entity, enemy) in world.query_mut::<&Enemy>() {
        if evaluate(enemy.state, now, config.enemy.death_secs) == Lifecycle::Remove {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
