use std::fmt;

/// Fatal setup problems. Raised before a session starts, never mid-game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    MissingPlayerStart,
    DuplicatePlayerStart { count: usize },
    NoSpawnPoints,
    NoHomeCandidates,
    DegenerateRect { layer: &'static str, index: usize },
    InvalidConfig { field: &'static str, reason: String },
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::MissingPlayerStart => write!(f, "map has no player start"),
            SetupError::DuplicatePlayerStart { count } => {
                write!(f, "map has {count} player starts, expected exactly one")
            }
            SetupError::NoSpawnPoints => write!(f, "map has no enemy spawn points"),
            SetupError::NoHomeCandidates => write!(f, "map has no home candidates"),
            SetupError::DegenerateRect { layer, index } => {
                write!(f, "{layer} rectangle #{index} has a non-positive or non-finite size")
            }
            SetupError::InvalidConfig { field, reason } => {
                write!(f, "invalid config `{field}`: {reason}")
            }
        }
    }
}

impl std::error::Error for SetupError {}
