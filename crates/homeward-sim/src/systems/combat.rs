//! Bullet collision pass.
//!
//! Each bullet is tested against live enemies with per-pixel masks first.
//! A bullet that hits one or more enemies destroys them and is removed.
//! Only a bullet that hit no enemy is then tested against obstacles, by
//! bounding box.

use hecs::{Entity, World};
use log::{debug, info};

use homeward_core::components::{Body, Bullet, Enemy, Health};
use homeward_core::config::GameConfig;
use homeward_core::enums::EnemyState;
use homeward_core::events::GameEvent;
use homeward_core::geometry::Rect;
use homeward_core::mask::SpriteMasks;
use homeward_core::types::EntityId;
use homeward_enemy_ai::fsm::apply_hit;

use crate::wave::WaveState;

#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    obstacles: &[Rect],
    masks: &SpriteMasks,
    wave: &mut WaveState,
    config: &GameConfig,
    now: f64,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<GameEvent>,
) {
    despawn_buffer.clear();

    let mut bullets: Vec<(Entity, EntityId, Rect)> = world
        .query::<(&Bullet, &EntityId, &Body)>()
        .iter()
        .map(|(entity, (_bullet, id, body))| (entity, *id, body.rect))
        .collect();
    bullets.sort_by_key(|(_, id, _)| *id);

    let mut enemies: Vec<(Entity, EntityId, Rect)> = world
        .query::<(&Enemy, &EntityId, &Body)>()
        .iter()
        .map(|(entity, (_enemy, id, body))| (entity, *id, body.rect))
        .collect();
    enemies.sort_by_key(|(_, id, _)| *id);

    for (bullet_entity, _bullet_id, bullet_rect) in bullets {
        let mut hit_enemy = false;

        for &(enemy_entity, enemy_id, enemy_rect) in &enemies {
            let Ok((enemy, health)) = world.query_one_mut::<(&mut Enemy, &mut Health)>(enemy_entity) else {
                continue;
            };
            // Dying enemies no longer collide.
            if enemy.state != EnemyState::Alive {
                continue;
            }
            let touching = masks.bullet.overlaps_at(
                bullet_rect.top_left(),
                masks.enemy(enemy.kind),
                enemy_rect.top_left(),
            );
            if !touching {
                continue;
            }

            hit_enemy = true;
            let outcome = apply_hit(health.current, enemy.state, now);
            health.current = outcome.health;
            enemy.state = outcome.state;

            if outcome.killed {
                let kind = enemy.kind;
                debug!("enemy {} ({kind:?}) killed", enemy_id.0);
                events.push(GameEvent::EnemyKilled { id: enemy_id, kind });
                if wave.register_kill(&config.waves, now) {
                    info!(
                        "wave {} begins: quota {}, spawn interval {:.2}s",
                        wave.wave, wave.quota, wave.spawn_interval_secs
                    );
                    events.push(GameEvent::WaveAdvanced {
                        wave: wave.wave,
                        quota: wave.quota,
                        spawn_interval_secs: wave.spawn_interval_secs,
                    });
                }
            }
        }

        let hit_obstacle = !hit_enemy && obstacles.iter().any(|o| o.intersects(&bullet_rect));
        if hit_enemy || hit_obstacle {
            despawn_buffer.push(bullet_entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
