//! Enemy lifecycle state machine.
//!
//! Pure functions over plain data: `Alive -> Dying -> removed`. No ECS
//! dependency; the simulation feeds in component values and writes the
//! results back.

use glam::Vec2;
use homeward_core::enums::EnemyState;
use homeward_core::geometry::normalize_or_zero;

/// Unit vector from `from` toward `to`, or zero when they coincide.
pub fn chase_direction(from: Vec2, to: Vec2) -> Vec2 {
    normalize_or_zero(to - from)
}

/// Result of one bullet hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitOutcome {
    pub health: i32,
    pub state: EnemyState,
    /// True only for the hit that took health across zero.
    pub killed: bool,
}

/// Apply one hit at session time `now`.
///
/// A dying enemy ignores further hits, so a kill is reported exactly once.
pub fn apply_hit(health: i32, state: EnemyState, now: f64) -> HitOutcome {
    match state {
        EnemyState::Dying { .. } => HitOutcome {
            health,
            state,
            killed: false,
        },
        EnemyState::Alive => {
            let health = health - 1;
            if health <= 0 {
                HitOutcome {
                    health,
                    state: EnemyState::Dying { since_secs: now },
                    killed: true,
                }
            } else {
                HitOutcome {
                    health,
                    state,
                    killed: false,
                }
            }
        }
    }
}

/// What the simulation should do with an enemy this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Chase, animate, collide.
    Active,
    /// Stay in place as a silhouette.
    Lingering,
    /// Death duration is over; despawn.
    Remove,
}

pub fn evaluate(state: EnemyState, now: f64, death_secs: f64) -> Lifecycle {
    match state {
        EnemyState::Alive => Lifecycle::Active,
        EnemyState::Dying { since_secs } if now - since_secs >= death_secs => Lifecycle::Remove,
        EnemyState::Dying { .. } => Lifecycle::Lingering,
    }
}

/// Advance a looping animation frame. `frames` must be non-zero.
pub fn animate(frame: f32, dt: f32, fps: f32, frames: u32) -> f32 {
    (frame + fps * dt) % frames.max(1) as f32
}
