//! Match configuration.

use serde::{Deserialize, Serialize};

/// Settings for [`Match`](super::Match).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Seed for the random policies built by `Match::random`.
    /// Same seed produces the same game.
    pub seed: u64,

    /// Maximum half-moves before the match is stopped (0 = unlimited).
    pub max_plies: u32,

    /// End the match as soon as a side reaches its goal row.
    /// When false, play continues until a side has no moves or the ply
    /// limit is hit.
    pub stop_on_win: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            max_plies: 500,
            stop_on_win: true,
        }
    }
}

impl MatchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_max_plies(mut self, max: u32) -> Self {
        self.max_plies = max;
        self
    }

    pub fn with_stop_on_win(mut self, stop: bool) -> Self {
        self.stop_on_win = stop;
        self
    }

    /// Whether `plies` half-moves exhaust the limit.
    pub fn ply_limit_reached(&self, plies: u32) -> bool {
        self.max_plies > 0 && plies >= self.max_plies
    }
}
