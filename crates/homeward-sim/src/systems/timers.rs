//! Timer system: gun cooldown and invincibility expiry.

use hecs::World;

use homeward_core::components::{Invincibility, Player, Weapon};
use homeward_core::config::GameConfig;

use crate::controller::update_invincibility;

pub fn run(world: &mut World, config: &GameConfig, now: f64) {
    for (_entity, (_player, weapon, invincibility)) in
        world.query_mut::<(&Player, &mut Weapon, &mut Invincibility)>()
    {
        if !weapon.ready && now - weapon.last_shot_secs >= config.weapon.cooldown_secs {
            weapon.ready = true;
        }
        update_invincibility(invincibility, now, config.player.invincibility_secs);
    }
}
