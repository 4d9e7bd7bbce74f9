//! Game loop thread — ticks the engine once per second and broadcasts
//! snapshots.
//!
//! The engine is owned by this thread; commands arrive via `mpsc` and are
//! applied between ticks. A tick is only scheduled while the engine is
//! running, so `Stop` (or a lost round) cancels the pending tick
//! structurally — no stale tick can fire into a reset session.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use log::debug;

use whack_core::constants::TICK_INTERVAL_MS;
use whack_core::state::GameSnapshot;
use whack_sim::engine::{EngineConfig, GameEngine};

use crate::state::GameLoopCommand;

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_millis(TICK_INTERVAL_MS);

/// Spawns the game loop in a new thread.
///
/// Tick snapshots are sent on `snapshot_tx` and stored in
/// `latest_snapshot` for synchronous polling. Returns the command sender
/// for the driver to use.
pub fn spawn_game_loop(
    config: EngineConfig,
    snapshot_tx: mpsc::Sender<GameSnapshot>,
    latest_snapshot: Arc<Mutex<Option<GameSnapshot>>>,
) -> mpsc::Sender<GameLoopCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    std::thread::Builder::new()
        .name("whack-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, snapshot_tx, &latest_snapshot);
        })
        .expect("Failed to spawn game loop thread");

    cmd_tx
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: EngineConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    snapshot_tx: mpsc::Sender<GameSnapshot>,
    latest_snapshot: &Mutex<Option<GameSnapshot>>,
) {
    let mut engine = GameEngine::new(config);
    let mut next_tick_time = Instant::now() + TICK_DURATION;

    loop {
        // Idle: nothing is scheduled, block until a command arrives.
        if !engine.running() {
            match cmd_rx.recv() {
                Ok(GameLoopCommand::Player(cmd)) => {
                    debug!("idle command: {:?}", cmd);
                    engine.handle_command(cmd);
                    store_latest(engine.snapshot(), latest_snapshot);
                    if engine.running() {
                        // Arm the first tick.
                        next_tick_time = Instant::now() + TICK_DURATION;
                    }
                }
                Ok(GameLoopCommand::Shutdown) | Err(mpsc::RecvError) => return,
            }
            continue;
        }

        // Running: apply commands as they arrive until the tick deadline.
        let now = Instant::now();
        if now < next_tick_time {
            match cmd_rx.recv_timeout(next_tick_time - now) {
                Ok(GameLoopCommand::Player(cmd)) => {
                    debug!("command: {:?}", cmd);
                    engine.handle_command(cmd);
                    store_latest(engine.snapshot(), latest_snapshot);
                }
                Ok(GameLoopCommand::Shutdown) => return,
                Err(mpsc::RecvTimeoutError::Timeout) => {}
                Err(mpsc::RecvTimeoutError::Disconnected) => return,
            }
            // Re-check: a Stop may have cancelled the pending tick, or
            // there may be time left before the deadline.
            continue;
        }

        // Deadline reached: advance one tick and broadcast.
        let snapshot = engine.tick();
        store_latest(snapshot.clone(), latest_snapshot);
        // Observer may have hung up; polling still works via the mutex.
        let _ = snapshot_tx.send(snapshot);

        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if now > next_tick_time && now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind — reset to avoid a catch-up spiral.
            next_tick_time = now + TICK_DURATION;
        }
    }
}

fn store_latest(snapshot: GameSnapshot, latest_snapshot: &Mutex<Option<GameSnapshot>>) {
    if let Ok(mut lock) = latest_snapshot.lock() {
        *lock = Some(snapshot);
    }
}
