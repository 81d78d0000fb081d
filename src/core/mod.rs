//! Core engine types: sides, squares, moves, the board, RNG, errors.
//!
//! `Board` is the only mutable game object; everything else here is a small
//! `Copy` value type.

pub mod side;
pub mod coord;
pub mod moves;
pub mod state;
pub mod rng;
pub mod error;

pub use side::{Side, SideMap};
pub use coord::{Square, BOARD_SIZE};
pub use moves::{Move, MoveKind, MoveRecord};
pub use state::{Board, Cell, PieceSet, CELL_COUNT, PIECES_PER_SIDE};
pub use rng::GameRng;
pub use error::{FiancoError, Result};
