//! Game engine — the core of the game.
//!
//! `GameEngine` owns the round state, processes player commands, runs the
//! mole visibility system, and produces `GameSnapshot`s. The engine never
//! schedules itself: the driver calls `tick()` once per `TICK_INTERVAL_MS`
//! while `running()` is true, so stopping the engine structurally cancels
//! any future tick.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use whack_core::commands::PlayerCommand;
use whack_core::constants::{score_limit, GRID_SIZE, POINTS_PER_HIT, ROUND_SECONDS};
use whack_core::events::GameEvent;
use whack_core::state::GameSnapshot;

use crate::systems;

/// Configuration for a new engine.
pub struct EngineConfig {
    /// RNG seed for determinism. Same seed = same mole behavior.
    pub seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The game engine. Owns all round state.
pub struct GameEngine {
    running: bool,
    score: u32,
    level: u32,
    timer: u32,
    moles: [bool; GRID_SIZE],
    overall: u32,
    rng: ChaCha8Rng,
    events: Vec<GameEvent>,
}

impl GameEngine {
    /// Create a new engine in the hard-reset state.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            running: false,
            score: 0,
            level: 1,
            timer: ROUND_SECONDS,
            moles: [false; GRID_SIZE],
            overall: 0,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            events: Vec::new(),
        }
    }

    /// Whether the tick loop should be active.
    pub fn running(&self) -> bool {
        self.running
    }

    /// Points accumulated in the current round.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Current difficulty level.
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Seconds remaining in the current round.
    pub fn timer(&self) -> u32 {
        self.timer
    }

    /// Visibility of each cell, row-major over the 3×3 grid.
    pub fn moles(&self) -> &[bool; GRID_SIZE] {
        &self.moles
    }

    /// Cumulative score across consecutive won rounds.
    pub fn overall(&self) -> u32 {
        self.overall
    }

    /// Handle a single player command.
    pub fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Start => self.start(),
            PlayerCommand::Stop => self.stop(),
            PlayerCommand::Hit { cell } => self.hit(cell),
        }
    }

    /// Begin a round. Idempotent while already running.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// End the session: hard reset, cancelling all progress.
    pub fn stop(&mut self) {
        self.reset(true);
    }

    /// Whack the mole in `cell`. Scores and hides it if visible;
    /// silently a no-op for hidden cells and out-of-range indices.
    pub fn hit(&mut self, cell: usize) {
        if let Some(mole) = self.moles.get_mut(cell) {
            if *mole {
                *mole = false;
                self.score += POINTS_PER_HIT;
            }
        }
    }

    /// Advance the game by one tick and return the resulting snapshot.
    ///
    /// Does nothing while stopped. While running: decrements the timer,
    /// runs the mole visibility system, emits `Tick`, and resolves the
    /// round when the timer reaches zero.
    pub fn tick(&mut self) -> GameSnapshot {
        if self.running {
            self.timer = self.timer.saturating_sub(1);
            systems::moles::run(&mut self.moles, &mut self.rng);
            self.events.push(GameEvent::Tick);

            if self.timer == 0 {
                self.resolve_round();
            }
        }

        let events = std::mem::take(&mut self.events);
        self.build_snapshot(events)
    }

    /// Non-draining read-only view of the current state, for synchronous
    /// polling between ticks. Pending events stay queued for `tick()`.
    pub fn snapshot(&self) -> GameSnapshot {
        self.build_snapshot(self.events.clone())
    }

    /// Reset the round state. A hard reset additionally clears the
    /// cumulative overall score. Pending events are left untouched.
    fn reset(&mut self, hard: bool) {
        self.running = false;
        self.score = 0;
        self.level = 1;
        self.timer = ROUND_SECONDS;
        self.moles = [false; GRID_SIZE];

        if hard {
            self.overall = 0;
        }
    }

    /// Resolve the round at timer expiry.
    ///
    /// The result event carries the pre-reset values; the played level
    /// is captured before the reset so a win can continue at level + 1
    /// without external `start()`. A loss hard-resets and stays stopped.
    fn resolve_round(&mut self) {
        let limit = score_limit(self.level);
        let win = self.score >= limit;
        let level = self.level;

        self.overall += self.score;
        self.events.push(GameEvent::RoundResult {
            win,
            score: self.score,
            limit,
            level,
            overall: self.overall,
        });

        self.reset(!win);

        if win {
            self.level = level + 1;
            self.running = true;
        }
    }

    fn build_snapshot(&self, events: Vec<GameEvent>) -> GameSnapshot {
        GameSnapshot {
            running: self.running,
            score: self.score,
            level: self.level,
            timer: self.timer,
            moles: self.moles,
            overall: self.overall,
            events,
        }
    }

    /// Force a cell's visibility (for tests).
    #[cfg(test)]
    pub fn set_mole(&mut self, cell: usize, visible: bool) {
        self.moles[cell] = visible;
    }

    /// Force the round score (for tests).
    #[cfg(test)]
    pub fn set_score(&mut self, score: u32) {
        self.score = score;
    }

    /// Force the remaining time (for tests needing immediate resolution).
    #[cfg(test)]
    pub fn set_timer(&mut self, timer: u32) {
        self.timer = timer;
    }
}
