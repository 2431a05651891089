//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Enemy variant. Speed and damage come from the profile table; all
/// variants share the same health.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    #[default]
    Normal,
    Fast,
    Tank,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 3] = [EnemyKind::Normal, EnemyKind::Fast, EnemyKind::Tank];
}

/// Cardinal facing for the player walk cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facing {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

/// Enemy lifecycle. Removal is not a state; the entity is despawned.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EnemyState {
    Alive,
    /// Killed; lingers as a silhouette until the death duration passes.
    Dying { since_secs: f64 },
}

/// Session phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Start screen, waiting for the start action.
    #[default]
    Start,
    /// Frame pipeline running.
    Playing,
    /// Player reached Home. Waits for restart or quit.
    Won,
    /// Player health hit zero. Waits for restart or quit.
    Lost,
    /// Quit requested. The loop stops.
    Exited,
}

impl GamePhase {
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::Won | GamePhase::Lost)
    }
}

/// Action picked on a menu screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScreenAction {
    StartGame,
    PlayAgain,
    Quit,
}

/// Which menu screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScreenKind {
    Start,
    Win,
    GameOver,
}
