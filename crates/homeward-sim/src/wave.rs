//! Wave progression: kill quota, wave number, and the spawn timer.

use serde::{Deserialize, Serialize};

use homeward_core::config::WaveTuning;

/// Difficulty tier for the current session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaveState {
    /// Starts at 1. Only goes up until the next restart.
    pub wave: u32,
    /// Kills in the current wave.
    pub kills: u32,
    /// Kills needed to clear the current wave.
    pub quota: u32,
    pub spawn_interval_secs: f64,
    /// Session time the next enemy is due.
    pub next_spawn_due_secs: f64,
}

/// Spawn interval for a wave: shrinks by a fixed step per cleared wave,
/// never below the floor.
pub fn spawn_interval_for(tuning: &WaveTuning, wave: u32) -> f64 {
    let cleared = f64::from(wave.saturating_sub(1));
    (tuning.initial_spawn_interval_secs - cleared * tuning.spawn_interval_step_secs)
        .max(tuning.min_spawn_interval_secs)
}

impl WaveState {
    /// Wave 1 state for a session starting at `now`. The first enemy is
    /// due one interval later.
    pub fn new(tuning: &WaveTuning, now: f64) -> Self {
        let spawn_interval_secs = spawn_interval_for(tuning, 1);
        Self {
            wave: 1,
            kills: 0,
            quota: tuning.initial_quota,
            spawn_interval_secs,
            next_spawn_due_secs: now + spawn_interval_secs,
        }
    }

    pub fn spawn_due(&self, now: f64) -> bool {
        now >= self.next_spawn_due_secs
    }

    /// Schedule the next spawn one interval after `now`.
    pub fn rearm(&mut self, now: f64) {
        self.next_spawn_due_secs = now + self.spawn_interval_secs;
    }

    /// Count one confirmed kill. Returns true when the kill cleared the
    /// wave, in which case the next wave has begun and the spawn timer was
    /// rearmed with its interval.
    pub fn register_kill(&mut self, tuning: &WaveTuning, now: f64) -> bool {
        self.kills += 1;
        if self.kills < self.quota {
            return false;
        }
        self.wave += 1;
        self.kills = 0;
        self.quota += tuning.quota_increment;
        self.spawn_interval_secs = spawn_interval_for(tuning, self.wave);
        self.rearm(now);
        true
    }
}
