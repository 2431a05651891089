//! Fundamental simulation types.

use serde::{Deserialize, Serialize};

/// Session clock. Starts at zero on every session start or restart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Frames simulated in the current session.
    pub frame: u64,
    /// Elapsed session time in seconds (sum of frame deltas).
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one frame of `dt` seconds. Negative deltas are ignored so
    /// the clock stays monotonic.
    pub fn advance(&mut self, dt: f32) {
        self.frame += 1;
        self.elapsed_secs += f64::from(dt.max(0.0));
    }

    /// True once `duration` seconds have passed since `since`.
    pub fn has_elapsed(&self, since: f64, duration: f64) -> bool {
        self.elapsed_secs - since >= duration
    }
}

/// Stable per-session identifier handed to the presentation layer.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct EntityId(pub u32);
