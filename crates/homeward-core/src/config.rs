//! Runtime tuning.
//!
//! Every field defaults to the matching value in [`crate::constants`], and
//! every struct is `#[serde(default)]`, so a JSON config only needs the
//! values it overrides.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::SetupError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub screen_width: f32,
    pub screen_height: f32,
    pub tile_size: f32,
    pub player: PlayerTuning,
    pub weapon: WeaponTuning,
    pub enemy: EnemyTuning,
    pub waves: WaveTuning,
    pub home_size: f32,
    pub health_pack_size: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    pub speed: f32,
    pub max_health: u8,
    pub sprite_width: f32,
    pub sprite_height: f32,
    pub hitbox_inflate_x: f32,
    pub hitbox_inflate_y: f32,
    pub invincibility_secs: f64,
    pub contact_delay_secs: f64,
    pub animation_fps: f32,
    pub frames_per_facing: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeaponTuning {
    pub cooldown_secs: f64,
    pub gun_distance: f32,
    pub bullet_offset: f32,
    pub bullet_size: f32,
    pub bullet_speed: f32,
    pub bullet_lifetime_secs: f64,
}

/// Speed and contact damage for one enemy variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyStats {
    pub speed: f32,
    pub damage: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyTuning {
    pub sprite_width: f32,
    pub sprite_height: f32,
    pub hitbox_inflate_x: f32,
    pub hitbox_inflate_y: f32,
    pub health: i32,
    pub death_secs: f64,
    pub animation_fps: f32,
    pub animation_frames: u32,
    pub normal: EnemyStats,
    pub fast: EnemyStats,
    pub tank: EnemyStats,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveTuning {
    pub initial_quota: u32,
    pub quota_increment: u32,
    pub initial_spawn_interval_secs: f64,
    pub spawn_interval_step_secs: f64,
    pub min_spawn_interval_secs: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            tile_size: TILE_SIZE,
            player: PlayerTuning::default(),
            weapon: WeaponTuning::default(),
            enemy: EnemyTuning::default(),
            waves: WaveTuning::default(),
            home_size: HOME_SIZE,
            health_pack_size: HEALTH_PACK_SIZE,
        }
    }
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            speed: PLAYER_SPEED,
            max_health: PLAYER_MAX_HEALTH,
            sprite_width: PLAYER_SPRITE_WIDTH,
            sprite_height: PLAYER_SPRITE_HEIGHT,
            hitbox_inflate_x: PLAYER_HITBOX_INFLATE_X,
            hitbox_inflate_y: PLAYER_HITBOX_INFLATE_Y,
            invincibility_secs: PLAYER_INVINCIBILITY_SECS,
            contact_delay_secs: CONTACT_DAMAGE_DELAY_SECS,
            animation_fps: PLAYER_ANIMATION_FPS,
            frames_per_facing: PLAYER_FRAMES_PER_FACING,
        }
    }
}

impl Default for WeaponTuning {
    fn default() -> Self {
        Self {
            cooldown_secs: GUN_COOLDOWN_SECS,
            gun_distance: GUN_DISTANCE,
            bullet_offset: BULLET_OFFSET,
            bullet_size: BULLET_SIZE,
            bullet_speed: BULLET_SPEED,
            bullet_lifetime_secs: BULLET_LIFETIME_SECS,
        }
    }
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            sprite_width: ENEMY_SPRITE_WIDTH,
            sprite_height: ENEMY_SPRITE_HEIGHT,
            hitbox_inflate_x: ENEMY_HITBOX_INFLATE_X,
            hitbox_inflate_y: ENEMY_HITBOX_INFLATE_Y,
            health: ENEMY_HEALTH,
            death_secs: ENEMY_DEATH_SECS,
            animation_fps: ENEMY_ANIMATION_FPS,
            animation_frames: ENEMY_ANIMATION_FRAMES,
            normal: EnemyStats {
                speed: NORMAL_ENEMY_SPEED,
                damage: NORMAL_ENEMY_DAMAGE,
            },
            fast: EnemyStats {
                speed: FAST_ENEMY_SPEED,
                damage: FAST_ENEMY_DAMAGE,
            },
            tank: EnemyStats {
                speed: TANK_ENEMY_SPEED,
                damage: TANK_ENEMY_DAMAGE,
            },
        }
    }
}

impl Default for WaveTuning {
    fn default() -> Self {
        Self {
            initial_quota: INITIAL_ENEMIES_PER_WAVE,
            quota_increment: ENEMIES_INCREMENT_PER_WAVE,
            initial_spawn_interval_secs: INITIAL_SPAWN_INTERVAL_SECS,
            spawn_interval_step_secs: SPAWN_INTERVAL_DECREASE_SECS,
            min_spawn_interval_secs: MIN_SPAWN_INTERVAL_SECS,
        }
    }
}

fn positive_f32(field: &'static str, value: f32) -> Result<(), SetupError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SetupError::InvalidConfig {
            field,
            reason: format!("must be positive, got {value}"),
        })
    }
}

fn positive_f64(field: &'static str, value: f64) -> Result<(), SetupError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SetupError::InvalidConfig {
            field,
            reason: format!("must be positive, got {value}"),
        })
    }
}

fn non_negative_f64(field: &'static str, value: f64) -> Result<(), SetupError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SetupError::InvalidConfig {
            field,
            reason: format!("must not be negative, got {value}"),
        })
    }
}

impl GameConfig {
    /// Reject tuning the simulation cannot run with.
    pub fn validate(&self) -> Result<(), SetupError> {
        positive_f32("screen_width", self.screen_width)?;
        positive_f32("screen_height", self.screen_height)?;
        positive_f32("tile_size", self.tile_size)?;
        positive_f32("home_size", self.home_size)?;
        positive_f32("health_pack_size", self.health_pack_size)?;

        let p = &self.player;
        positive_f32("player.speed", p.speed)?;
        if p.max_health == 0 {
            return Err(SetupError::InvalidConfig {
                field: "player.max_health",
                reason: "must be at least 1".into(),
            });
        }
        positive_f32("player.sprite_width", p.sprite_width)?;
        positive_f32("player.sprite_height", p.sprite_height)?;
        positive_f32("player.hitbox_width", p.sprite_width + p.hitbox_inflate_x)?;
        positive_f32("player.hitbox_height", p.sprite_height + p.hitbox_inflate_y)?;
        non_negative_f64("player.invincibility_secs", p.invincibility_secs)?;
        non_negative_f64("player.contact_delay_secs", p.contact_delay_secs)?;
        positive_f32("player.animation_fps", p.animation_fps)?;
        if p.frames_per_facing == 0 {
            return Err(SetupError::InvalidConfig {
                field: "player.frames_per_facing",
                reason: "must be at least 1".into(),
            });
        }

        let w = &self.weapon;
        non_negative_f64("weapon.cooldown_secs", w.cooldown_secs)?;
        positive_f32("weapon.bullet_size", w.bullet_size)?;
        positive_f32("weapon.bullet_speed", w.bullet_speed)?;
        positive_f64("weapon.bullet_lifetime_secs", w.bullet_lifetime_secs)?;

        let e = &self.enemy;
        positive_f32("enemy.sprite_width", e.sprite_width)?;
        positive_f32("enemy.sprite_height", e.sprite_height)?;
        positive_f32("enemy.hitbox_width", e.sprite_width + e.hitbox_inflate_x)?;
        positive_f32("enemy.hitbox_height", e.sprite_height + e.hitbox_inflate_y)?;
        if e.health < 1 {
            return Err(SetupError::InvalidConfig {
                field: "enemy.health",
                reason: format!("must be at least 1, got {}", e.health),
            });
        }
        non_negative_f64("enemy.death_secs", e.death_secs)?;
        positive_f32("enemy.animation_fps", e.animation_fps)?;
        if e.animation_frames == 0 {
            return Err(SetupError::InvalidConfig {
                field: "enemy.animation_frames",
                reason: "must be at least 1".into(),
            });
        }
        positive_f32("enemy.normal.speed", e.normal.speed)?;
        positive_f32("enemy.fast.speed", e.fast.speed)?;
        positive_f32("enemy.tank.speed", e.tank.speed)?;

        let v = &self.waves;
        if v.initial_quota == 0 {
            return Err(SetupError::InvalidConfig {
                field: "waves.initial_quota",
                reason: "must be at least 1".into(),
            });
        }
        positive_f64("waves.initial_spawn_interval_secs", v.initial_spawn_interval_secs)?;
        non_negative_f64("waves.spawn_interval_step_secs", v.spawn_interval_step_secs)?;
        positive_f64("waves.min_spawn_interval_secs", v.min_spawn_interval_secs)?;
        if v.min_spawn_interval_secs > v.initial_spawn_interval_secs {
            return Err(SetupError::InvalidConfig {
                field: "waves.min_spawn_interval_secs",
                reason: format!(
                    "floor {} is above the initial interval {}",
                    v.min_spawn_interval_secs, v.initial_spawn_interval_secs
                ),
            });
        }
        Ok(())
    }
}
