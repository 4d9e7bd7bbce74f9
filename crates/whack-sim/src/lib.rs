//! Game engine for whack-a-mole.
//!
//! Owns all round state, advances it one tick at a time, and produces
//! `GameSnapshot`s for the driver. Completely headless (no threads, no
//! wall-clock time), enabling deterministic testing.

pub mod engine;
pub mod systems;

pub use engine::{EngineConfig, GameEngine};
pub use whack_core as core;
