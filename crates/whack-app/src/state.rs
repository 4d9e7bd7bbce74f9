//! Commands shared between the driver and the game loop thread.

use whack_core::commands::PlayerCommand;

/// Commands sent from the driver to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the engine.
    Player(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}
