//! Core types and definitions for the whack-a-mole game.
//!
//! This crate defines the vocabulary shared across the other crates:
//! commands, events, the state snapshot, and constants. It has no
//! dependency on the engine or any runtime.

pub mod commands;
pub mod constants;
pub mod events;
pub mod state;
