//! Game loop engine - automatic descent and serialized command handling.
//!
//! `tetris-sim-core` only knows transitions. This crate supplies the cadence:
//!
//! - [`DescentTimer`]: fixed-interval drop timer that is suspended while the
//!   game is paused or over, and restarts a full interval on resume
//! - [`session`]: a tokio actor that owns the game state, applies commands in
//!   arrival order, fires descent ticks and publishes render snapshots
//!
//! # Example
//!
//! ```no_run
//! use tetris_sim_core::{GameConfig, GameState};
//! use tetris_sim_engine::{spawn_session, SessionConfig};
//! use tetris_sim_types::Command;
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let config = GameConfig::default();
//! let state = GameState::new(&config)?;
//! let session = spawn_session(state, SessionConfig::from_game(&config));
//!
//! session.send(Command::MoveLeft).await?;
//! println!("{}", session.latest());
//!
//! let final_state = session.shutdown().await?;
//! println!("score {}", final_state.score());
//! # Ok(())
//! # }
//! ```

pub mod session;
pub mod timer;

pub use tetris_sim_core as core;
pub use tetris_sim_types as types;

pub use session::{spawn as spawn_session, CommandSender, SessionConfig, SessionHandle};
pub use timer::DescentTimer;
