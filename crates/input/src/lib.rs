//! Terminal input binding.
//!
//! Maps `crossterm` key events into [`crate::types::Command`]s. Device
//! handling (raw mode, polling) stays in the binary; this crate is the pure
//! key-to-command contract.

pub mod map;

pub use tetris_sim_types as types;

pub use map::{map_key, should_quit};
