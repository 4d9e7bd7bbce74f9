//! Headless demo driver: runs the game loop with a trivial bot that
//! whacks the first visible mole after every tick, and logs round
//! results until the first loss.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use log::info;

use whack_app::game_loop::spawn_game_loop;
use whack_app::state::GameLoopCommand;
use whack_core::commands::PlayerCommand;
use whack_core::events::GameEvent;
use whack_sim::engine::EngineConfig;

fn main() {
    env_logger::init();

    let (snapshot_tx, snapshot_rx) = mpsc::channel();
    let latest_snapshot = Arc::new(Mutex::new(None));
    let cmd_tx = spawn_game_loop(
        EngineConfig {
            seed: rand::random(),
        },
        snapshot_tx,
        latest_snapshot,
    );

    cmd_tx
        .send(GameLoopCommand::Player(PlayerCommand::Start))
        .expect("game loop exited before start");

    for snapshot in snapshot_rx {
        for event in &snapshot.events {
            match event {
                GameEvent::Tick => {
                    info!(
                        "level {} | {:2}s left | score {:3} | {} mole(s) up",
                        snapshot.level,
                        snapshot.timer,
                        snapshot.score,
                        snapshot.visible_moles()
                    );
                }
                GameEvent::RoundResult {
                    win,
                    score,
                    limit,
                    level,
                    overall,
                } => {
                    if *win {
                        info!("WIN! Got {score} points in level {level}, continuing");
                    } else {
                        info!("LOSE! Got {score} of {limit} points in level {level}, overall {overall}");
                        let _ = cmd_tx.send(GameLoopCommand::Shutdown);
                        return;
                    }
                }
            }
        }

        if let Some(cell) = snapshot.moles.iter().position(|&m| m) {
            let _ = cmd_tx.send(GameLoopCommand::Player(PlayerCommand::Hit { cell }));
        }
    }
}
