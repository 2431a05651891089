//! Renderer for headless runs: writes frames to the log instead of a
//! window.

use log::{debug, info};

use homeward_core::enums::GamePhase;
use homeward_core::state::{GameStateSnapshot, SceneryView};

use crate::adapter::Renderer;

#[derive(Debug)]
pub struct LogRenderer {
    /// A status line is logged every this many playing frames.
    every: u64,
    frames: u64,
    lines: u64,
}

impl LogRenderer {
    pub fn new(every: u64) -> Self {
        Self {
            every: every.max(1),
            frames: 0,
            lines: 0,
        }
    }

    /// Status lines written so far.
    pub fn lines(&self) -> u64 {
        self.lines
    }
}

impl Renderer for LogRenderer {
    fn render(&mut self, snapshot: &GameStateSnapshot, scenery: &SceneryView) {
        for event in &snapshot.events {
            debug!("frame {}: {:?}", snapshot.time.frame, event);
        }
        if snapshot.phase != GamePhase::Playing {
            return;
        }

        self.frames += 1;
        if self.frames % self.every != 0 {
            return;
        }
        self.lines += 1;
        let hud = &snapshot.hud;
        match &snapshot.player {
            Some(player) => info!(
                "t={:.2}s hp {}/{} wave {} kills {}/{} player ({:.0}, {:.0}) enemies {} bullets {} tiles {}",
                snapshot.time.elapsed_secs,
                hud.health,
                hud.max_health,
                hud.wave,
                hud.kills,
                hud.quota,
                player.position.x,
                player.position.y,
                snapshot.enemies.len(),
                snapshot.bullets.len(),
                scenery.tiles.len()
            ),
            None => info!("t={:.2}s no player", snapshot.time.elapsed_secs),
        }
    }
}
