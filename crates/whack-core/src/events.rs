//! Events emitted by the engine for driver/frontend feedback.

use serde::{Deserialize, Serialize};

/// Notifications pushed to observers with each snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// One simulation step completed; state has changed, re-render.
    Tick,
    /// The round timer expired and the round was resolved.
    ///
    /// Values are captured at resolution time, before the follow-up
    /// reset: `level` is the level that was just played and `overall`
    /// already includes this round's `score`.
    RoundResult {
        win: bool,
        score: u32,
        limit: u32,
        level: u32,
        overall: u32,
    },
}
