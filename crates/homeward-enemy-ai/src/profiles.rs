//! Variant-specific enemy parameters.

use homeward_core::config::EnemyTuning;
use homeward_core::enums::EnemyKind;
use rand::Rng;

/// Behavioral profile for one enemy variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyProfile {
    /// Chase speed (px/s).
    pub speed: f32,
    /// Contact damage per hit.
    pub damage: u8,
    /// Starting hit points.
    pub health: i32,
}

/// Get the profile for a variant under the given tuning.
pub fn get_profile(kind: EnemyKind, tuning: &EnemyTuning) -> EnemyProfile {
    let stats = match kind {
        EnemyKind::Normal => tuning.normal,
        EnemyKind::Fast => tuning.fast,
        EnemyKind::Tank => tuning.tank,
    };
    EnemyProfile {
        speed: stats.speed,
        damage: stats.damage,
        health: tuning.health,
    }
}

/// Pick a variant uniformly at random.
pub fn choose_kind<R: Rng + ?Sized>(rng: &mut R) -> EnemyKind {
    EnemyKind::ALL[rng.gen_range(0..EnemyKind::ALL.len())]
}
