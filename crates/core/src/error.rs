//! Configuration errors.
//!
//! Gameplay never fails: illegal moves are rejected and spawn collisions end
//! the game. The only error path is refusing to start with an inconsistent
//! setup.

use std::fmt;

use crate::types::{PieceKind, MAX_DIMENSION, MIN_HEIGHT, MIN_WIDTH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Board width or height outside the accepted range.
    InvalidDimensions { width: u8, height: u8 },
    /// Automatic descent interval of zero.
    ZeroDropInterval,
    /// A catalog entry is not a square 2..=4 matrix with four filled cells.
    CorruptShape(PieceKind),
    /// A text board row has the wrong length or an unknown cell letter.
    InvalidBoardRow(usize),
    /// An environment variable could not be parsed.
    InvalidEnv { var: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidDimensions { width, height } => write!(
                f,
                "board dimensions {}x{} out of range (width {}..={}, height {}..={})",
                width, height, MIN_WIDTH, MAX_DIMENSION, MIN_HEIGHT, MAX_DIMENSION
            ),
            ConfigError::ZeroDropInterval => write!(f, "drop interval must be positive"),
            ConfigError::CorruptShape(kind) => {
                write!(f, "shape data for piece {} is corrupt", kind.letter())
            }
            ConfigError::InvalidBoardRow(y) => write!(f, "board row {} is malformed", y),
            ConfigError::InvalidEnv { var, value } => {
                write!(f, "cannot parse {}={:?}", var, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
