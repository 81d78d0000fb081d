//! Move-selection policies.
//!
//! A policy is handed the legal moves and a read-only view of the board and
//! returns one of the moves. It never mutates the board; the caller applies
//! the chosen move. Any search algorithm can be plugged in behind
//! `MovePolicy` without touching the rules.

use crate::core::{Board, GameRng, Move};
use crate::rules::LegalMoves;

/// Chooses a move from the legal set.
pub trait MovePolicy {
    /// Pick one of `legal`, or `None` if it is empty.
    fn select_move(&mut self, legal: &LegalMoves, board: &Board) -> Option<Move>;
}

/// Uniform random choice over the legal moves.
#[derive(Clone, Debug)]
pub struct RandomPolicy {
    rng: GameRng,
}

impl RandomPolicy {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl MovePolicy for RandomPolicy {
    fn select_move(&mut self, legal: &LegalMoves, _board: &Board) -> Option<Move> {
        self.rng.choose(legal.moves()).copied()
    }
}

/// Always plays the lowest-ordered legal move.
///
/// Fully deterministic; useful for scripted games and tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstMovePolicy;

impl MovePolicy for FirstMovePolicy {
    fn select_move(&mut self, legal: &LegalMoves, _board: &Board) -> Option<Move> {
        legal.moves().first().copied()
    }
}

impl<P: MovePolicy + ?Sized> MovePolicy for Box<P> {
    fn select_move(&mut self, legal: &LegalMoves, board: &Board) -> Option<Move> {
        (**self).select_move(legal, board)
    }
}
