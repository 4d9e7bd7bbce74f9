//! Whack-a-mole runtime glue.
//!
//! This crate wires the engine to the outside world: a game loop thread
//! that ticks the engine at the fixed interval, applies driver commands
//! between ticks, and broadcasts snapshots over an outbound channel.

pub mod game_loop;
pub mod state;

pub use whack_core as core;
