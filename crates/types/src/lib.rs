//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental types used throughout the workspace.
//! All types are plain data with no game logic, so they can be shared by the
//! simulation core, the cadence engine and the input binding alike.
//!
//! # Board Dimensions
//!
//! Standard playfield dimensions:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn anchor**: `(width / 2 - 1, 0)`
//!
//! Other dimensions are allowed through configuration as long as they stay in
//! `MIN_WIDTH..=MAX_DIMENSION` columns and `MIN_HEIGHT..=MAX_DIMENSION` rows.
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_DROP_MS` | 1000 | Automatic descent interval |
//!
//! # Scoring
//!
//! | Lines | Points |
//! |-------|--------|
//! | 0 | 0 |
//! | 1 | 100 |
//! | 2 | 300 |
//! | 3 | 500 |
//! | 4 | 800 |
//!
//! A hard drop additionally awards `HARD_DROP_POINTS_PER_ROW` per row fallen.
//!
//! # Examples
//!
//! ```
//! use tetris_sim_types::{Command, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let parsed = PieceKind::from_str("t").unwrap();
//! assert_eq!(parsed, PieceKind::T);
//!
//! let command = Command::from_str("hardDrop").unwrap();
//! assert_eq!(command, Command::HardDrop);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use serde::{Deserialize, Serialize};

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Smallest accepted board width.
///
/// The horizontal I spans columns `width / 2 - 1 ..= width / 2 + 2` at spawn,
/// which only fits from five columns up.
pub const MIN_WIDTH: u8 = 5;

/// Smallest accepted board height (fits the tallest shape)
pub const MIN_HEIGHT: u8 = 4;

/// Largest accepted board dimension (coordinates stay in `i8`)
pub const MAX_DIMENSION: u8 = 64;

/// Automatic descent interval (1000ms = 1 row per second)
pub const DEFAULT_DROP_MS: u64 = 1000;

/// Line clear points indexed by rows cleared in one lock
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Hard drop bonus per row fallen
pub const HARD_DROP_POINTS_PER_ROW: u32 = 2;

/// The seven tetromino piece kinds
///
/// Each piece has a distinct shape and color:
/// - **I**: Cyan, horizontal bar
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
/// - **O**: Yellow, 2x2 square
/// - **S**: Green, S-shaped
/// - **T**: Magenta, T-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_sim_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Uppercase letter used in text dumps
    pub fn letter(&self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::J => 'J',
            PieceKind::L => 'L',
            PieceKind::O => 'O',
            PieceKind::S => 'S',
            PieceKind::T => 'T',
            PieceKind::Z => 'Z',
        }
    }

    /// Fixed display color of this kind
    pub fn color(&self) -> Rgb {
        match self {
            PieceKind::I => Rgb::new(80, 220, 220),
            PieceKind::J => Rgb::new(80, 120, 220),
            PieceKind::L => Rgb::new(255, 165, 0),
            PieceKind::O => Rgb::new(240, 220, 80),
            PieceKind::S => Rgb::new(100, 220, 120),
            PieceKind::T => Rgb::new(200, 120, 220),
            PieceKind::Z => Rgb::new(220, 80, 80),
        }
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb` form
    ///
    /// ```
    /// use tetris_sim_types::Rgb;
    ///
    /// assert_eq!(Rgb::new(255, 165, 0).to_hex(), "#ffa500");
    /// ```
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Discrete player commands accepted by the game loop
///
/// Every command is safe to issue in any state: outside `Running` the
/// movement commands are no-ops rather than errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Command {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one row down, locking it if it cannot descend
    SoftDrop,
    /// Rotate piece 90° clockwise (no wall kicks)
    Rotate,
    /// Instantly drop piece to lowest valid position and lock it
    HardDrop,
    /// Toggle between running and paused
    TogglePause,
    /// Start a fresh game from any state
    Reset,
}

impl Command {
    /// Parse command from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_sim_types::Command;
    ///
    /// assert_eq!(Command::from_str("moveLeft"), Some(Command::MoveLeft));
    /// assert_eq!(Command::from_str("TOGGLEPAUSE"), Some(Command::TogglePause));
    /// assert_eq!(Command::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "softdrop" | "movedown" => Some(Command::SoftDrop),
            "rotate" => Some(Command::Rotate),
            "harddrop" => Some(Command::HardDrop),
            "togglepause" | "pause" => Some(Command::TogglePause),
            "reset" | "restart" => Some(Command::Reset),
            _ => None,
        }
    }

    /// Convert to camelCase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::SoftDrop => "softDrop",
            Command::Rotate => "rotate",
            Command::HardDrop => "hardDrop",
            Command::TogglePause => "togglePause",
            Command::Reset => "reset",
        }
    }

    /// Whether the command moves the active piece (and is therefore ignored
    /// unless the game is running)
    pub fn is_movement(&self) -> bool {
        matches!(
            self,
            Command::MoveLeft
                | Command::MoveRight
                | Command::SoftDrop
                | Command::Rotate
                | Command::HardDrop
        )
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled by a locked piece of that kind
pub type Cell = Option<PieceKind>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_score_table() {
        assert_eq!(LINE_SCORES, [0, 100, 300, 500, 800]);
        assert_eq!(HARD_DROP_POINTS_PER_ROW, 2);
    }

    #[test]
    fn command_names_roundtrip() {
        for cmd in [
            Command::MoveLeft,
            Command::MoveRight,
            Command::SoftDrop,
            Command::Rotate,
            Command::HardDrop,
            Command::TogglePause,
            Command::Reset,
        ] {
            assert_eq!(Command::from_str(cmd.as_str()), Some(cmd));
        }
    }

    #[test]
    fn command_serializes_camel_case() {
        let json = serde_json::to_string(&Command::TogglePause).unwrap();
        assert_eq!(json, "\"togglePause\"");
        let back: Command = serde_json::from_str("\"hardDrop\"").unwrap();
        assert_eq!(back, Command::HardDrop);
    }

    #[test]
    fn only_piece_commands_are_movement() {
        assert!(Command::Rotate.is_movement());
        assert!(Command::HardDrop.is_movement());
        assert!(!Command::TogglePause.is_movement());
        assert!(!Command::Reset.is_movement());
    }

    #[test]
    fn every_kind_has_distinct_color() {
        let colors: Vec<Rgb> = PieceKind::ALL.iter().map(|k| k.color()).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
