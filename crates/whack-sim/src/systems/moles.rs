//! Mole visibility system — randomized relaxation of the grid, run once
//! per tick.
//!
//! Nine passes over random cells: a visible mole may duck back down (fair
//! coin, only while more than one is up), a hidden mole may pop up (1-in-3,
//! only while fewer than three are up). The same cell can be drawn several
//! times in one tick, or never; there is no convergence guarantee within a
//! tick. The post-tick visible count always ends up in [0, 3].

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use whack_core::constants::{GRID_SIZE, MAX_VISIBLE_MOLES};

/// Run one visibility pass over the grid.
pub fn run(moles: &mut [bool; GRID_SIZE], rng: &mut ChaCha8Rng) {
    let mut visible = moles.iter().filter(|&&m| m).count();

    for _ in 0..GRID_SIZE {
        let cell = rng.gen_range(0..GRID_SIZE);

        // Mole is up: check if it wants to hide.
        if moles[cell] && visible > 1 && rng.gen_bool(0.5) {
            moles[cell] = false;
            visible -= 1;
        }
        // Mole is down: check if it wants to show.
        else if !moles[cell] && visible < MAX_VISIBLE_MOLES && rng.gen_ratio(1, 3) {
            moles[cell] = true;
            visible += 1;
        }
    }
}
