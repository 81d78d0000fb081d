//! Error type for rejected board operations.
//!
//! Every variant is recoverable: the operation that returned it left the
//! board exactly as it was.

use thiserror::Error;

use super::coord::Square;
use super::moves::Move;
use super::side::Side;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, FiancoError>;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FiancoError {
    /// The move is not in the legal set for the current position.
    #[error("illegal move {mv} for {side}")]
    IllegalMove { side: Side, mv: Move },

    /// A move was submitted on behalf of the side not to move.
    #[error("not {got}'s turn, {expected} is to move")]
    NotYourTurn { expected: Side, got: Side },

    /// Undo was requested with no snapshot retained.
    #[error("no move to undo")]
    NoHistory,

    /// A coordinate outside the 9x9 board.
    #[error("square ({row}, {col}) is off the board")]
    OutOfBounds { row: i16, col: i16 },

    /// A custom position put two pieces on one square.
    #[error("square {0} is occupied twice")]
    Occupied(Square),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(FiancoError::NoHistory.to_string(), "no move to undo");
        assert_eq!(
            FiancoError::OutOfBounds { row: -1, col: 3 }.to_string(),
            "square (-1, 3) is off the board"
        );

        let err = FiancoError::NotYourTurn {
            expected: Side::Player1,
            got: Side::Player2,
        };
        assert_eq!(err.to_string(), "not Player 2's turn, Player 1 is to move");

        let sq = Square::new(0, 4).unwrap();
        let to = Square::new(2, 4).unwrap();
        let err = FiancoError::IllegalMove {
            side: Side::Player1,
            mv: Move::new(sq, to),
        };
        assert_eq!(err.to_string(), "illegal move E1-E3 for Player 1");
    }
}
