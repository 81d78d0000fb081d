//! Fianco rules: legal move generation, win detection, perft.
//!
//! The generator is a pure function of the board. [`Board::apply_move`]
//! consults it to validate every submitted move, so it is the single source
//! of truth for legality.
//!
//! [`Board::apply_move`]: crate::core::Board::apply_move

pub mod movegen;
pub mod outcome;
pub mod perft;

pub use movegen::{
    captures_from, legal_moves, step_directions, steps_from, LegalMoves, CAPTURE_VECTORS,
};
pub use outcome::{has_reached_goal, winner};
pub use perft::perft;
