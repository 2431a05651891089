//! Seams between the game loop and the presentation layer.
//!
//! The loop never knows how input is read or frames are drawn; it talks to
//! these traits. The headless runner plugs in the autopilot, a log
//! renderer, and one of the clocks below.

use std::time::{Duration, Instant};

use homeward_core::commands::FrameInput;
use homeward_core::enums::{ScreenAction, ScreenKind};
use homeward_core::state::{GameStateSnapshot, SceneryView};

/// One frame of raw input plus the window-close request.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PolledInput {
    pub frame: FrameInput,
    pub quit: bool,
}

/// Feeds raw input into the loop once per frame.
pub trait InputSource {
    /// Sample input for the next frame. `last` is the most recent
    /// snapshot, which is what the player is looking at.
    fn poll(&mut self, last: &GameStateSnapshot) -> PolledInput;
}

/// Draws completed frames. Never mutates simulation state.
pub trait Renderer {
    fn render(&mut self, snapshot: &GameStateSnapshot, scenery: &SceneryView);
}

/// Start, win, and game-over screens. Blocks until the player picks.
pub trait MenuScreen {
    fn choose(&mut self, screen: ScreenKind, last: &GameStateSnapshot) -> ScreenAction;
}

/// Source of per-frame delta time.
pub trait FrameClock {
    /// Seconds to simulate for the next frame.
    fn next_dt(&mut self) -> f32;
}

/// Constant delta, no waiting. Runs as fast as the host allows.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    pub dt: f32,
}

impl FrameClock for FixedClock {
    fn next_dt(&mut self) -> f32 {
        self.dt
    }
}

/// Paces frames to a target rate and reports the measured delta.
#[derive(Debug)]
pub struct RealtimeClock {
    frame: Duration,
    next_frame: Instant,
    last: Instant,
}

impl RealtimeClock {
    pub fn new(fps: u32) -> Self {
        let now = Instant::now();
        Self {
            frame: Duration::from_nanos(1_000_000_000 / u64::from(fps.max(1))),
            next_frame: now,
            last: now,
        }
    }
}

impl FrameClock for RealtimeClock {
    fn next_dt(&mut self) -> f32 {
        self.next_frame += self.frame;
        let now = Instant::now();
        if self.next_frame > now {
            std::thread::sleep(self.next_frame - now);
        } else if now - self.next_frame > self.frame * 2 {
            // Too far behind; reset to avoid a catch-up spiral.
            self.next_frame = now;
        }

        let now = Instant::now();
        let dt = now - self.last;
        self.last = now;
        dt.as_secs_f32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        let mut clock = FixedClock { dt: 0.125 };
        assert_eq!(clock.next_dt(), 0.125);
        assert_eq!(clock.next_dt(), 0.125);
    }

    #[test]
    fn test_realtime_clock_paces_frames() {
        let mut clock = RealtimeClock::new(200);
        let start = Instant::now();
        let mut total = 0.0;
        for _ in 0..4 {
            total += clock.next_dt();
        }
        assert!(start.elapsed() >= Duration::from_millis(15));
        assert!(total > 0.0);
    }
}
