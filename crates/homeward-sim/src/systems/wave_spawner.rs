//! Wave spawning system: places one enemy whenever the spawn timer is due.

use glam::Vec2;
use hecs::World;
use log::debug;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use homeward_core::config::GameConfig;
use homeward_core::events::GameEvent;
use homeward_enemy_ai::profiles::choose_kind;

use crate::wave::WaveState;
use crate::world_setup::{next_id, spawn_enemy};

/// Spawn a random enemy at a random spawn point if the timer is due, then
/// rearm it. At most one enemy per frame.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    wave: &mut WaveState,
    spawn_points: &[Vec2],
    config: &GameConfig,
    now: f64,
    next_entity_id: &mut u32,
    events: &mut Vec<GameEvent>,
) {
    if !wave.spawn_due(now) || spawn_points.is_empty() {
        return;
    }

    let kind = choose_kind(rng);
    let position = spawn_points[rng.gen_range(0..spawn_points.len())];
    let id = next_id(next_entity_id);
    spawn_enemy(world, kind, position, config, id);
    wave.rearm(now);

    debug!("spawned {kind:?} enemy {} at ({:.0}, {:.0})", id.0, position.x, position.y);
    events.push(GameEvent::EnemySpawned { id, kind, position });
}
