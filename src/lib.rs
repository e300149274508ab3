//! Tetris simulator (workspace facade crate).
//!
//! Re-exports the member crates under `crates/` as
//! `tetris_sim::{core,engine,input,types}`.

pub use tetris_sim_core as core;
pub use tetris_sim_engine as engine;
pub use tetris_sim_input as input;
pub use tetris_sim_types as types;
