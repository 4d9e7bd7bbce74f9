//! Game constants and tuning parameters.

/// Length of a round in seconds (one tick per second).
pub const ROUND_SECONDS: u32 = 30;

/// Wall-clock interval between ticks in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 1000;

/// Points awarded for hitting a visible mole.
pub const POINTS_PER_HIT: u32 = 10;

/// Number of cells in the grid (3×3, row-major, indices 0..8).
pub const GRID_SIZE: usize = 9;

/// Upper bound on simultaneously visible moles enforced by the
/// visibility algorithm.
pub const MAX_VISIBLE_MOLES: usize = 3;

/// Hit count factor in the win threshold: level `L` requires
/// `(L + 1) * LIMIT_HITS_PER_LEVEL` successful hits.
pub const LIMIT_HITS_PER_LEVEL: u32 = 5;

/// Score threshold required to win a round at the given level.
pub fn score_limit(level: u32) -> u32 {
    (level + 1) * LIMIT_HITS_PER_LEVEL * POINTS_PER_HIT
}
