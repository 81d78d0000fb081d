//! Board coordinates.
//!
//! A `Square` can only be built through checked constructors, so every
//! square that reaches the grid is already known to be on the board.

use serde::{Deserialize, Serialize};

use super::error::{FiancoError, Result};

/// Number of rows and columns.
pub const BOARD_SIZE: u8 = 9;

/// Column letters used by `Display`, left to right.
const FILES: &[u8; 9] = b"ABCDEFGHI";

/// A (row, col) position, both in `0..BOARD_SIZE`.
///
/// Ordering is row-major, which gives move lists a stable order.
/// Serialized as a `(row, col)` pair; deserializing re-checks bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(u8, u8)", into = "(u8, u8)")]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Create a square, rejecting coordinates off the board.
    pub fn new(row: u8, col: u8) -> Result<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Ok(Self { row, col })
        } else {
            Err(FiancoError::OutOfBounds {
                row: i16::from(row),
                col: i16::from(col),
            })
        }
    }

    /// Create a square from signed coordinates, as produced by direction math.
    pub fn from_signed(row: i16, col: i16) -> Result<Self> {
        let size = i16::from(BOARD_SIZE);
        if (0..size).contains(&row) && (0..size).contains(&col) {
            Ok(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(FiancoError::OutOfBounds { row, col })
        }
    }

    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Row-major index into an 81-cell grid.
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * BOARD_SIZE as usize + self.col as usize
    }

    /// The square `(dr, dc)` away, or `None` if that leaves the board.
    #[must_use]
    pub fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        Square::from_signed(
            i16::from(self.row) + i16::from(dr),
            i16::from(self.col) + i16::from(dc),
        )
        .ok()
    }

    /// Iterate over all 81 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square { row, col }))
    }
}

impl TryFrom<(u8, u8)> for Square {
    type Error = FiancoError;

    fn try_from((row, col): (u8, u8)) -> Result<Self> {
        Square::new(row, col)
    }
}

impl From<Square> for (u8, u8) {
    fn from(sq: Square) -> Self {
        (sq.row, sq.col)
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", FILES[self.col as usize] as char, self.row + 1)
    }
}
