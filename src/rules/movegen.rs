//! Legal move generation with the mandatory-capture rule.
//!
//! For the side to move, every piece contributes its jump captures and its
//! simple steps. If any capture exists anywhere on the board, only captures
//! are legal; otherwise the simple steps are. Any available capture may be
//! chosen.

use log::trace;
use smallvec::SmallVec;

use crate::core::{Board, Cell, Move, Side, Square};

/// Diagonal jump vectors.
pub const CAPTURE_VECTORS: [(i8, i8); 4] = [(2, 2), (2, -2), (-2, 2), (-2, -2)];

/// Step directions for `side`: forward, right, left. Never backward.
#[must_use]
pub const fn step_directions(side: Side) -> [(i8, i8); 3] {
    [(side.forward(), 0), (0, 1), (0, -1)]
}

/// The legal moves for one position.
///
/// Moves are kept sorted, so two sets for the same position compare equal
/// and iterate in the same order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LegalMoves {
    moves: Vec<Move>,
    forced_capture: bool,
}

impl LegalMoves {
    fn new(mut moves: Vec<Move>, forced_capture: bool) -> Self {
        moves.sort_unstable();
        moves.dedup();
        Self {
            moves,
            forced_capture,
        }
    }

    /// The moves, in ascending order.
    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// True when captures were available, so the set holds only captures.
    #[must_use]
    pub fn forced_capture(&self) -> bool {
        self.forced_capture
    }

    #[must_use]
    pub fn contains(&self, mv: &Move) -> bool {
        self.moves.binary_search(mv).is_ok()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter()
    }

    /// Legal moves starting on `from`, for highlighting a selected piece.
    pub fn from_square(&self, from: Square) -> impl Iterator<Item = &Move> {
        self.moves.iter().filter(move |mv| mv.from == from)
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Move> {
        self.moves
    }
}

impl<'a> IntoIterator for &'a LegalMoves {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

/// Captures available to the piece of `side` on `from`.
#[must_use]
pub fn captures_from(board: &Board, side: Side, from: Square) -> SmallVec<[Move; 4]> {
    let opponent = Cell::Piece(side.opponent());

    CAPTURE_VECTORS
        .iter()
        .filter_map(|&(dr, dc)| {
            let landing = from.offset(dr, dc)?;
            let jumped = from.offset(dr / 2, dc / 2)?;
            (board.cell_at(jumped) == opponent && board.cell_at(landing).is_empty())
                .then(|| Move::new(from, landing))
        })
        .collect()
}

/// Simple steps available to the piece of `side` on `from`.
#[must_use]
pub fn steps_from(board: &Board, side: Side, from: Square) -> SmallVec<[Move; 3]> {
    step_directions(side)
        .iter()
        .filter_map(|&(dr, dc)| from.offset(dr, dc))
        .filter(|&to| board.cell_at(to).is_empty())
        .map(|to| Move::new(from, to))
        .collect()
}

/// Compute the legal moves for the side to move.
#[must_use]
pub fn legal_moves(board: &Board) -> LegalMoves {
    let side = board.side_to_move();
    let mut captures = Vec::new();
    let mut steps = Vec::new();

    for &from in board.pieces_of(side).iter() {
        captures.extend(captures_from(board, side, from));
        steps.extend(steps_from(board, side, from));
    }

    trace!(
        "{side}: {} captures, {} steps",
        captures.len(),
        steps.len()
    );

    if captures.is_empty() {
        LegalMoves::new(steps, false)
    } else {
        LegalMoves::new(captures, true)
    }
}
