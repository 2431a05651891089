//! Player vs enemy contact: dwell damage and the loss condition.

use hecs::World;
use log::{debug, info};

use homeward_core::components::*;
use homeward_core::config::GameConfig;
use homeward_core::enums::{EnemyState, GamePhase};
use homeward_core::events::GameEvent;
use homeward_core::mask::SpriteMasks;
use homeward_core::types::EntityId;

use crate::controller::take_damage;

/// Returns `Some(GamePhase::Lost)` when this frame's damage took the
/// player's health to zero.
pub fn run(
    world: &mut World,
    masks: &SpriteMasks,
    config: &GameConfig,
    now: f64,
    events: &mut Vec<GameEvent>,
) -> Option<GamePhase> {
    let player_rect = world
        .query::<(&Player, &Body)>()
        .iter()
        .next()
        .map(|(_, (_, body))| body.rect)?;

    // Damage comes from the lowest-id live enemy in contact.
    let attacker = world
        .query::<(&Enemy, &EntityId, &Body)>()
        .iter()
        .filter(|(_, (enemy, _, _))| enemy.state == EnemyState::Alive)
        .filter(|(_, (enemy, _, body))| {
            masks
                .player
                .overlaps_at(player_rect.top_left(), masks.enemy(enemy.kind), body.rect.top_left())
        })
        .map(|(_, (enemy, id, _))| (*id, enemy.damage))
        .min_by_key(|(id, _)| *id);

    let mut outcome = None;
    for (_entity, (_player, health, invincibility, contact)) in
        world.query_mut::<(&Player, &mut Health, &mut Invincibility, &mut ContactTimer)>()
    {
        let Some((enemy_id, damage)) = attacker else {
            contact.touching = false;
            continue;
        };

        if !contact.touching {
            contact.touching = true;
            contact.since_secs = now;
        }

        if now - contact.since_secs < config.player.contact_delay_secs {
            continue;
        }
        if !take_damage(health, invincibility, damage, now) {
            continue;
        }
        contact.since_secs = now;

        debug!("enemy {} hit player for {damage}, health {}", enemy_id.0, health.current);
        events.push(GameEvent::PlayerDamaged {
            amount: damage,
            health: health.current,
        });

        if health.current <= 0 {
            info!("player defeated at {now:.2}s");
            events.push(GameEvent::PlayerDefeated);
            outcome = Some(GamePhase::Lost);
        }
    }
    outcome
}
