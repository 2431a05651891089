//! Player vs Home and player vs health packs.

use hecs::{Entity, World};
use log::{debug, info};

use homeward_core::components::*;
use homeward_core::enums::GamePhase;
use homeward_core::events::GameEvent;
use homeward_core::geometry::Rect;

/// Pickups test the full sprite rect, not the movement hitbox.
fn player_sprite(world: &World) -> Option<Rect> {
    world
        .query::<(&Player, &Body)>()
        .iter()
        .next()
        .map(|(_, (_, body))| body.rect)
}

/// `Some(GamePhase::Won)` when the player touches Home, whatever the
/// player's health or the wave.
pub fn run_home(world: &World, events: &mut Vec<GameEvent>) -> Option<GamePhase> {
    let sprite = player_sprite(world)?;
    let reached = world
        .query::<(&Home, &Body)>()
        .iter()
        .any(|(_, (_, body))| body.rect.intersects(&sprite));
    if !reached {
        return None;
    }
    info!("player reached home");
    events.push(GameEvent::HomeReached);
    Some(GamePhase::Won)
}

/// Consume touched health packs while the player is hurt. A pack touched at
/// full health stays in the world.
pub fn run_health_packs(world: &mut World, despawn_buffer: &mut Vec<Entity>, events: &mut Vec<GameEvent>) {
    despawn_buffer.clear();
    let Some(sprite) = player_sprite(world) else {
        return;
    };

    let touched: Vec<Entity> = world
        .query::<(&HealthPack, &Body)>()
        .iter()
        .filter(|(_, (_, body))| body.rect.intersects(&sprite))
        .map(|(entity, _)| entity)
        .collect();

    for pack in touched {
        for (_entity, (_player, health)) in world.query_mut::<(&Player, &mut Health)>() {
            if health.current < health.max {
                health.current += 1;
                despawn_buffer.push(pack);
                debug!("health pack used, health {}", health.current);
                events.push(GameEvent::HealthRestored {
                    health: health.current,
                });
            }
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
