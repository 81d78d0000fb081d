//! Move representation.
//!
//! A move is a (from, to) pair of squares. Whether it is a simple step or a
//! jump capture follows from its geometry; whether it is *legal* is decided
//! only by the move generator.

use serde::{Deserialize, Serialize};

use super::coord::Square;
use super::error::Result;
use super::side::Side;

/// Shape of a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// One orthogonal step.
    Simple,
    /// Two-by-two diagonal jump over the midpoint square.
    Capture,
}

/// A relocation of one piece.
///
/// ## Example
///
/// ```
/// use fianco::core::{Move, MoveKind};
///
/// let step = Move::from_coords(3, 3, 4, 3).unwrap();
/// assert_eq!(step.kind(), Some(MoveKind::Simple));
///
/// let jump = Move::from_coords(3, 3, 5, 5).unwrap();
/// assert_eq!(jump.kind(), Some(MoveKind::Capture));
/// assert_eq!(jump.midpoint().map(|sq| (sq.row(), sq.col())), Some((4, 4)));
///
/// assert!(Move::from_coords(0, 0, 9, 0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }

    /// Build a move from raw coordinates, rejecting any off the board.
    pub fn from_coords(from_row: u8, from_col: u8, to_row: u8, to_col: u8) -> Result<Self> {
        Ok(Self {
            from: Square::new(from_row, from_col)?,
            to: Square::new(to_row, to_col)?,
        })
    }

    /// Row and column deltas.
    #[must_use]
    pub fn delta(&self) -> (i8, i8) {
        (
            self.to.row() as i8 - self.from.row() as i8,
            self.to.col() as i8 - self.from.col() as i8,
        )
    }

    /// Geometric shape, or `None` if it matches neither pattern.
    #[must_use]
    pub fn kind(&self) -> Option<MoveKind> {
        match self.delta() {
            (dr, dc) if dr.abs() + dc.abs() == 1 => Some(MoveKind::Simple),
            (dr, dc) if dr.abs() == 2 && dc.abs() == 2 => Some(MoveKind::Capture),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_capture(&self) -> bool {
        self.kind() == Some(MoveKind::Capture)
    }

    /// The jumped square of a capture-shaped move.
    #[must_use]
    pub fn midpoint(&self) -> Option<Square> {
        if !self.is_capture() {
            return None;
        }
        let (dr, dc) = self.delta();
        self.from.offset(dr / 2, dc / 2)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sep = if self.is_capture() { 'x' } else { '-' };
        write!(f, "{}{}{}", self.from, sep, self.to)
    }
}

/// A move as it was played, for match logs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The side that moved.
    pub side: Side,

    /// The move played.
    pub mv: Move,

    /// Whether a piece was captured.
    pub capture: bool,

    /// Half-move number, starting at 1.
    pub ply: u32,
}

impl MoveRecord {
    #[must_use]
    pub fn new(side: Side, mv: Move, capture: bool, ply: u32) -> Self {
        Self {
            side,
            mv,
            capture,
            ply,
        }
    }
}
