//! Player commands sent from the driver/frontend to the engine.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Begin (or resume after a loss) a round.
    Start,
    /// End the session: cancels the loop and hard-resets all progress.
    Stop,
    /// Whack the mole in the given cell (row-major index 0..8).
    /// Out-of-range or hidden cells are silently ignored.
    Hit { cell: usize },
}
