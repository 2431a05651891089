//! Player commands and per-frame input sent from the frontend to the
//! simulation.
//!
//! Commands are queued and processed at the next frame boundary. Held
//! input (movement keys, trigger, pointer) is sampled once per frame and
//! passed to the tick directly.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Session-level player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Leave the start screen and begin playing.
    StartGame,
    /// Play again from a Won or Lost screen.
    Restart,
    /// Exit from any phase.
    Quit,
}

/// Input snapshot for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Trigger held.
    pub fire: bool,
    /// Pointer position in screen pixels.
    pub pointer: Vec2,
}

impl FrameInput {
    /// Raw key direction: each axis is -1, 0 or 1. Opposing keys cancel.
    pub fn key_vector(&self) -> Vec2 {
        let axis = |neg: bool, pos: bool| f32::from(u8::from(pos)) - f32::from(u8::from(neg));
        Vec2::new(axis(self.left, self.right), axis(self.up, self.down))
    }
}
