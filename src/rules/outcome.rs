//! Win detection.
//!
//! A side wins the moment one of its pieces stands on its goal row (the
//! opponent's home row). This is a read-only check; move generation does not
//! consult it, so callers decide when a won position ends play.

use crate::core::{Board, Side};

/// Whether `side` has a piece on its goal row.
#[must_use]
pub fn has_reached_goal(board: &Board, side: Side) -> bool {
    let goal = side.goal_row();
    board.pieces_of(side).iter().any(|sq| sq.row() == goal)
}

/// The winning side, if any.
///
/// Player1 is checked first; both sides standing on their goal rows can
/// only arise from a hand-built position.
#[must_use]
pub fn winner(board: &Board) -> Option<Side> {
    Side::ALL
        .into_iter()
        .find(|&side| has_reached_goal(board, side))
}
