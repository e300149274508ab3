//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the rules and state of the falling-block game. It has
//! no dependency on terminals, timers or I/O:
//!
//! - **Deterministic**: same seed (or piece sequence) produces the same game
//! - **Testable**: every rule is a plain method on owned values
//! - **Portable**: any driver (async actor, fixed loop, test) can run it
//!
//! # Module Structure
//!
//! - [`shapes`]: the seven piece matrices and 90° rotation
//! - [`board`]: fixed-size grid with collision queries, merge and row clearing
//! - [`piece`]: the falling piece, spawning and collision checks
//! - [`scoring`]: line clear table and hard drop bonus
//! - [`rng`]: uniform piece selection behind the [`PieceSource`] trait
//! - [`game_state`]: the `Running`/`Paused`/`GameOver` state machine
//! - [`snapshot`]: immutable render view
//! - [`config`] / [`error`]: validated startup configuration
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: each piece is drawn independently; repeats happen
//! - **Naive rotation**: clockwise matrix rotation, rejected if it collides
//! - **Immediate lock**: a piece locks as soon as a downward step is blocked
//! - **One-piece lookahead**
//! - **Scoring**: 100/300/500/800 for 1-4 rows, +2 per row of hard drop
//!
//! # Example
//!
//! ```
//! use tetris_sim_core::{GameConfig, GameState, Status};
//! use tetris_sim_types::Command;
//!
//! let mut game = GameState::new(&GameConfig::seeded(12345)).unwrap();
//!
//! game.apply(Command::MoveRight);
//! game.apply(Command::Rotate);
//! game.apply(Command::HardDrop);
//!
//! assert_eq!(game.status(), Status::Running);
//! assert!(game.score() > 0); // Hard drop awards points
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod game_state;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod shapes;
pub mod snapshot;

pub use tetris_sim_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::GameConfig;
pub use error::ConfigError;
pub use game_state::{GameState, LockEvent, Status};
pub use piece::{collides, ActivePiece};
pub use rng::{FixedSequence, PieceSource, UniformPieces};
pub use scoring::{calculate_lock_score, hard_drop_bonus, line_clear_points, ScoreResult};
pub use shapes::{shape_of, Shape};
pub use snapshot::{ActiveSnapshot, NextSnapshot, RenderSnapshot};
