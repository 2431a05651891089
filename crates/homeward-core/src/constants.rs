//! Simulation constants and tuning defaults.
//!
//! `GameConfig::default()` is built from these values.

// --- Display ---

/// Window width in pixels. The camera is centered on the player.
pub const SCREEN_WIDTH: f32 = 1280.0;

/// Window height in pixels.
pub const SCREEN_HEIGHT: f32 = 720.0;

/// Map tile edge length in pixels.
pub const TILE_SIZE: f32 = 64.0;

// --- Player ---

/// Player movement speed (px/s).
pub const PLAYER_SPEED: f32 = 500.0;

/// Player starting and maximum health (hearts).
pub const PLAYER_MAX_HEALTH: u8 = 5;

/// Player sprite bounds (px).
pub const PLAYER_SPRITE_WIDTH: f32 = 96.0;
pub const PLAYER_SPRITE_HEIGHT: f32 = 128.0;

/// Amount the sprite rect is inflated by to get the movement hitbox.
/// Negative values shrink.
pub const PLAYER_HITBOX_INFLATE_X: f32 = -60.0;
pub const PLAYER_HITBOX_INFLATE_Y: f32 = -90.0;

/// Invincibility window after taking damage (seconds).
pub const PLAYER_INVINCIBILITY_SECS: f64 = 1.0;

/// Continuous enemy contact required before damage lands (seconds).
pub const CONTACT_DAMAGE_DELAY_SECS: f64 = 0.5;

/// Walk cycle rate (frames per second of motion).
pub const PLAYER_ANIMATION_FPS: f32 = 5.0;

/// Frames per facing direction in the walk cycle.
pub const PLAYER_FRAMES_PER_FACING: u32 = 4;

// --- Weapon ---

/// Minimum time between shots (seconds).
pub const GUN_COOLDOWN_SECS: f64 = 0.2;

/// Distance from the player center to the gun center (px).
pub const GUN_DISTANCE: f32 = 140.0;

/// Distance from the gun center to the bullet spawn point (px).
pub const BULLET_OFFSET: f32 = 50.0;

/// Bullet sprite edge length (px).
pub const BULLET_SIZE: f32 = 50.0;

/// Bullet speed (px/s).
pub const BULLET_SPEED: f32 = 1200.0;

/// Bullet time-to-live (seconds).
pub const BULLET_LIFETIME_SECS: f64 = 1.0;

// --- Enemies ---

/// Enemy sprite bounds (px).
pub const ENEMY_SPRITE_WIDTH: f32 = 128.0;
pub const ENEMY_SPRITE_HEIGHT: f32 = 128.0;

/// Enemy hitbox inflate amounts (negative shrinks).
pub const ENEMY_HITBOX_INFLATE_X: f32 = -90.0;
pub const ENEMY_HITBOX_INFLATE_Y: f32 = -90.0;

/// How long a killed enemy lingers as a silhouette (seconds).
pub const ENEMY_DEATH_SECS: f64 = 0.4;

/// Enemy animation rate (frames per second).
pub const ENEMY_ANIMATION_FPS: f32 = 6.0;

/// Frames in an enemy animation cycle.
pub const ENEMY_ANIMATION_FRAMES: u32 = 4;

/// Normal enemy: baseline speed (px/s) and contact damage.
pub const NORMAL_ENEMY_SPEED: f32 = 200.0;
pub const NORMAL_ENEMY_DAMAGE: u8 = 1;

/// Fast enemy: quicker, same damage.
pub const FAST_ENEMY_SPEED: f32 = 350.0;
pub const FAST_ENEMY_DAMAGE: u8 = 1;

/// Tank enemy: slow but hits harder.
pub const TANK_ENEMY_SPEED: f32 = 100.0;
pub const TANK_ENEMY_DAMAGE: u8 = 2;

/// Hit points for every enemy type.
pub const ENEMY_HEALTH: i32 = 1;

// --- Waves ---

/// Kills required to clear wave 1.
pub const INITIAL_ENEMIES_PER_WAVE: u32 = 5;

/// Quota growth per cleared wave.
pub const ENEMIES_INCREMENT_PER_WAVE: u32 = 3;

/// Spawn interval during wave 1 (seconds).
pub const INITIAL_SPAWN_INTERVAL_SECS: f64 = 2.0;

/// Spawn interval reduction per cleared wave (seconds).
pub const SPAWN_INTERVAL_DECREASE_SECS: f64 = 0.2;

/// Spawn interval floor (seconds).
pub const MIN_SPAWN_INTERVAL_SECS: f64 = 0.5;

// --- Static objects ---

/// Home sprite bounds (px), centered on the chosen candidate.
pub const HOME_SIZE: f32 = 384.0;

/// Health pack bounds (px), top-left anchored at the map position.
pub const HEALTH_PACK_SIZE: f32 = 64.0;

// --- Collision masks ---

/// Alpha value above which a pixel counts as solid.
pub const MASK_ALPHA_THRESHOLD: u8 = 127;
