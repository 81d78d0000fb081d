//! # fianco
//!
//! Rules engine for Fianco: a 9×9 board, two sides, orthogonal
//! non-capturing steps, mandatory diagonal jump captures, and a win on
//! reaching the opponent's home row.
//!
//! ## Design Principles
//!
//! 1. **One mutation path**: `Board::apply_move`, `Board::undo` and
//!    `Board::reset` are the only ways to change a position. Rejected calls
//!    return an error and leave the board untouched.
//!
//! 2. **Legality is a pure function**: `rules::legal_moves` recomputes the
//!    legal set, including the forced-capture flag, on every call. Nothing
//!    is cached on the board.
//!
//! 3. **Policies are pluggable**: anything implementing `MovePolicy` can
//!    drive a side, from uniform random choice to a full search.
//!
//! ## Example
//!
//! ```
//! use fianco::{Board, FirstMovePolicy, MovePolicy};
//!
//! let mut board = Board::new();
//! let legal = board.legal_moves();
//! let mv = FirstMovePolicy.select_move(&legal, &board).unwrap();
//!
//! let side = board.side_to_move();
//! board.apply_move(side, mv).unwrap();
//! assert_eq!(board.side_to_move(), side.opponent());
//!
//! board.undo().unwrap();
//! assert_eq!(board, Board::new());
//! ```
//!
//! ## Modules
//!
//! - `core`: sides, squares, moves, the board, RNG, errors
//! - `rules`: legal move generation, win detection, perft
//! - `policy`: move-selection policies
//! - `play`: running complete matches between two policies

pub mod core;
pub mod rules;
pub mod policy;
pub mod play;

// Re-export commonly used types
pub use crate::core::{
    Board, Cell, FiancoError, GameRng, Move, MoveKind, MoveRecord, PieceSet, Result, Side,
    SideMap, Square, BOARD_SIZE,
};

pub use crate::rules::{legal_moves, perft, winner, LegalMoves};

pub use crate::policy::{FirstMovePolicy, MovePolicy, RandomPolicy};

pub use crate::play::{Match, MatchConfig, MatchEnd, MatchSummary};
