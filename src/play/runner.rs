//! Drives a full game between two policies.

use log::debug;

use crate::core::{Board, GameRng, MoveKind, MoveRecord, Result, Side, SideMap};
use crate::policy::{MovePolicy, RandomPolicy};

use super::config::MatchConfig;

/// Why a match stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchEnd {
    /// A side reached its goal row.
    Win(Side),
    /// The side to move had no legal moves.
    NoLegalMoves(Side),
    /// The side's policy declined to move while legal moves existed.
    Resigned(Side),
    /// The configured ply limit was hit.
    PlyLimit,
}

/// Result of a finished match.
#[derive(Clone, Debug)]
pub struct MatchSummary {
    pub end: MatchEnd,

    /// Half-moves played.
    pub plies: u32,

    /// Every move in order.
    pub moves: Vec<MoveRecord>,

    /// Side on its goal row in the final position, if any.
    pub winner: Option<Side>,

    /// Position when play stopped.
    pub final_board: Board,
}

impl MatchSummary {
    /// Number of captures made by `side`.
    #[must_use]
    pub fn captures_by(&self, side: Side) -> usize {
        self.moves
            .iter()
            .filter(|record| record.side == side && record.capture)
            .count()
    }
}

/// A game between two policies on its own board.
pub struct Match {
    config: MatchConfig,
    board: Board,
    policies: SideMap<Box<dyn MovePolicy>>,
}

impl Match {
    pub fn new(
        config: MatchConfig,
        player1: impl MovePolicy + 'static,
        player2: impl MovePolicy + 'static,
    ) -> Self {
        let policies = SideMap::from_pair(
            Box::new(player1) as Box<dyn MovePolicy>,
            Box::new(player2) as Box<dyn MovePolicy>,
        );
        Self {
            config,
            board: Board::new(),
            policies,
        }
    }

    /// Start from `board` instead of the initial position.
    #[must_use]
    pub fn with_board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }

    /// Two random policies, each on its own fork of `config.seed`.
    pub fn random(config: MatchConfig) -> Self {
        let mut rng = GameRng::new(config.seed);
        let player1 = RandomPolicy::from_rng(rng.fork());
        let player2 = RandomPolicy::from_rng(rng.fork());
        Self::new(config, player1, player2)
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Play from the current position until the match ends.
    ///
    /// Fails only if a policy returns a move the board rejects; the board
    /// is left at the position before that move.
    pub fn play(&mut self) -> Result<MatchSummary> {
        let mut moves = Vec::new();
        let mut plies = 0u32;

        let end = loop {
            if self.config.stop_on_win {
                if let Some(side) = self.board.winner() {
                    break MatchEnd::Win(side);
                }
            }
            if self.config.ply_limit_reached(plies) {
                break MatchEnd::PlyLimit;
            }

            let side = self.board.side_to_move();
            let legal = self.board.legal_moves();
            if legal.is_empty() {
                break MatchEnd::NoLegalMoves(side);
            }
            let Some(mv) = self.policies[side].select_move(&legal, &self.board) else {
                break MatchEnd::Resigned(side);
            };

            let kind = self.board.apply_move(side, mv)?;
            plies += 1;
            moves.push(MoveRecord::new(side, mv, kind == MoveKind::Capture, plies));
        };

        debug!("match ended after {plies} plies: {end:?}");

        Ok(MatchSummary {
            end,
            plies,
            moves,
            winner: self.board.winner(),
            final_board: self.board.clone(),
        })
    }
}
