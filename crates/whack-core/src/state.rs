//! Game state snapshot — the complete visible state broadcast to the
//! driver/frontend after each tick.

use serde::{Deserialize, Serialize};

use crate::constants::{GRID_SIZE, ROUND_SECONDS};
use crate::events::GameEvent;

/// Complete game state as observed after a tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Whether the tick loop is active.
    pub running: bool,
    /// Points accumulated in the current round.
    pub score: u32,
    /// Current difficulty level (starts at 1).
    pub level: u32,
    /// Seconds remaining in the current round.
    pub timer: u32,
    /// Visibility of each cell, row-major over the 3×3 grid.
    pub moles: [bool; GRID_SIZE],
    /// Cumulative score across consecutive won rounds. Survives soft
    /// resets, cleared only by a hard reset.
    pub overall: u32,
    /// Events emitted during the tick that produced this snapshot,
    /// in emission order.
    pub events: Vec<GameEvent>,
}

impl Default for GameSnapshot {
    /// The hard-reset state: stopped, level 1, full timer, empty grid.
    fn default() -> Self {
        Self {
            running: false,
            score: 0,
            level: 1,
            timer: ROUND_SECONDS,
            moles: [false; GRID_SIZE],
            overall: 0,
            events: Vec::new(),
        }
    }
}

impl GameSnapshot {
    /// Number of currently visible moles.
    pub fn visible_moles(&self) -> usize {
        self.moles.iter().filter(|&&m| m).count()
    }
}
