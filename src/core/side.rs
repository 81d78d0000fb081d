//! Side identification and per-side data storage.
//!
//! ## Side
//!
//! The two Fianco players. Player1 starts on row 0 and advances toward
//! row 8; Player2 mirrors it from row 8 toward row 0.
//!
//! ## SideMap
//!
//! Fixed two-slot storage indexed by `Side`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::coord::BOARD_SIZE;

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Side {
    Player1,
    Player2,
}

impl Side {
    /// Both sides, Player1 first.
    pub const ALL: [Side; 2] = [Side::Player1, Side::Player2];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::Player1 => Side::Player2,
            Side::Player2 => Side::Player1,
        }
    }

    /// Slot index (0 for Player1, 1 for Player2).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::Player1 => 0,
            Side::Player2 => 1,
        }
    }

    /// Row delta of a forward step.
    #[must_use]
    pub const fn forward(self) -> i8 {
        match self {
            Side::Player1 => 1,
            Side::Player2 => -1,
        }
    }

    /// This side's starting back row.
    #[must_use]
    pub const fn home_row(self) -> u8 {
        match self {
            Side::Player1 => 0,
            Side::Player2 => BOARD_SIZE - 1,
        }
    }

    /// The row this side must reach to win (the opponent's home row).
    #[must_use]
    pub const fn goal_row(self) -> u8 {
        self.opponent().home_row()
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player1 => write!(f, "Player 1"),
            Side::Player2 => write!(f, "Player 2"),
        }
    }
}

/// Per-side data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use fianco::core::{Side, SideMap};
///
/// let mut counts: SideMap<u32> = SideMap::with_value(15);
/// counts[Side::Player2] -= 1;
///
/// assert_eq!(counts[Side::Player1], 15);
/// assert_eq!(counts[Side::Player2], 14);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a new SideMap with values from a factory function.
    pub fn new(factory: impl Fn(Side) -> T) -> Self {
        Self {
            data: [factory(Side::Player1), factory(Side::Player2)],
        }
    }

    /// Create a SideMap from the Player1 and Player2 values.
    pub fn from_pair(player1: T, player2: T) -> Self {
        Self {
            data: [player1, player2],
        }
    }

    /// Create a new SideMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: [value.clone(), value],
        }
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Iterate over (Side, &T) pairs, Player1 first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}
