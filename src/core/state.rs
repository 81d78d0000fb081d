//! Board state: grid, per-side piece indexes, side to move, undo snapshot.
//!
//! ## Board
//!
//! The single owned aggregate for a Fianco position. The grid and the two
//! piece indexes always agree: a square is in `pieces_of(side)` exactly when
//! `cell_at(square) == Cell::Piece(side)`.
//!
//! All mutation goes through [`Board::apply_move`], [`Board::undo`] and
//! [`Board::reset`]. A rejected call returns an error and leaves the board
//! untouched.
//!
//! ## Undo
//!
//! One snapshot slot. It is filled by the first successful move after
//! construction, reset, or an undo, and emptied by `undo`. After an unbroken
//! run of several moves, `undo` returns to the position at the start of that
//! run, not just one ply back.
//!
//! Piece indexes use `im` persistent sets so that cloning the board (for a
//! snapshot or an analysis copy) shares structure instead of copying it.

use std::hash::BuildHasherDefault;

use im::HashSet as ImHashSet;
use log::debug;
use rustc_hash::FxHasher;

use super::coord::{Square, BOARD_SIZE};
use super::error::{FiancoError, Result};
use super::moves::{Move, MoveKind};
use super::side::{Side, SideMap};
use crate::rules::{legal_moves, winner, LegalMoves};

/// Number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE as usize * BOARD_SIZE as usize;

/// Pieces each side starts with.
pub const PIECES_PER_SIDE: usize = 15;

/// Player1 pieces off the home row at the start; Player2's mirror them.
const OUTPOSTS: [(u8, u8); 6] = [(1, 1), (1, 7), (2, 2), (2, 6), (3, 3), (3, 5)];

/// Set of occupied squares for one side.
///
/// `FxHasher` keeps iteration order identical from run to run.
pub type PieceSet = ImHashSet<Square, BuildHasherDefault<FxHasher>>;

/// Contents of one square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Piece(Side),
}

impl Cell {
    /// The side occupying this cell, if any.
    #[must_use]
    pub const fn owner(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Piece(side) => Some(side),
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

#[derive(Clone, Debug)]
struct Snapshot {
    grid: [Cell; CELL_COUNT],
    pieces: SideMap<PieceSet>,
    side_to_move: Side,
}

/// A Fianco position plus its single undo slot.
#[derive(Clone, Debug)]
pub struct Board {
    grid: [Cell; CELL_COUNT],
    pieces: SideMap<PieceSet>,
    side_to_move: Side,
    snapshot: Option<Snapshot>,
}

impl Board {
    /// The standard starting position, Player1 to move.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Self::empty(Side::Player1);

        for col in 0..BOARD_SIZE {
            board.place_start_piece(Side::Player1, 0, col);
            board.place_start_piece(Side::Player2, BOARD_SIZE - 1, col);
        }
        for (row, col) in OUTPOSTS {
            board.place_start_piece(Side::Player1, row, col);
            board.place_start_piece(Side::Player2, BOARD_SIZE - 1 - row, col);
        }

        debug_assert!(board.is_consistent());
        board
    }

    /// Build an arbitrary position with no undo history.
    ///
    /// Fails with [`FiancoError::Occupied`] if a square is listed twice,
    /// for either side.
    pub fn from_pieces(side_to_move: Side, player1: &[Square], player2: &[Square]) -> Result<Self> {
        let mut board = Self::empty(side_to_move);

        for (side, squares) in [(Side::Player1, player1), (Side::Player2, player2)] {
            for &sq in squares {
                if !board.cell_at(sq).is_empty() {
                    return Err(FiancoError::Occupied(sq));
                }
                board.place_piece(side, sq);
            }
        }

        Ok(board)
    }

    /// Return to the starting position, discarding history.
    pub fn reset(&mut self) {
        *self = Self::new();
        debug!("board reset to starting position");
    }

    fn empty(side_to_move: Side) -> Self {
        Self {
            grid: [Cell::Empty; CELL_COUNT],
            pieces: SideMap::default(),
            side_to_move,
            snapshot: None,
        }
    }

    fn place_start_piece(&mut self, side: Side, row: u8, col: u8) {
        if let Ok(sq) = Square::new(row, col) {
            self.place_piece(side, sq);
        }
    }

    // === Queries ===

    #[must_use]
    pub fn cell_at(&self, sq: Square) -> Cell {
        self.grid[sq.index()]
    }

    /// Squares occupied by `side`.
    #[must_use]
    pub fn pieces_of(&self, side: Side) -> &PieceSet {
        &self.pieces[side]
    }

    #[must_use]
    pub fn piece_count(&self, side: Side) -> usize {
        self.pieces[side].len()
    }

    #[must_use]
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    /// Whether an undo snapshot is held.
    #[must_use]
    pub fn has_history(&self) -> bool {
        self.snapshot.is_some()
    }

    /// Legal moves for the side to move. Recomputed on every call.
    #[must_use]
    pub fn legal_moves(&self) -> LegalMoves {
        legal_moves(self)
    }

    /// The side that has reached its goal row, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        winner(self)
    }

    /// Check grid/index agreement.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let indexed = self.pieces.iter().all(|(side, set)| {
            set.iter().all(|&sq| self.cell_at(sq) == Cell::Piece(side))
        });
        let occupied = Square::all().all(|sq| match self.cell_at(sq) {
            Cell::Empty => Side::ALL.iter().all(|&s| !self.pieces[s].contains(&sq)),
            Cell::Piece(side) => {
                self.pieces[side].contains(&sq) && !self.pieces[side.opponent()].contains(&sq)
            }
        });
        indexed && occupied
    }

    // === Mutation ===

    /// Play `mv` for `side`.
    ///
    /// The move must belong to [`Board::legal_moves`] for the current
    /// position; whether it captures is taken from that set. On success the
    /// jumped piece (if any) is removed, the mover relocated and the turn
    /// passed. Returns the kind of move applied.
    pub fn apply_move(&mut self, side: Side, mv: Move) -> Result<MoveKind> {
        if side != self.side_to_move {
            debug!("rejected {mv}: {side} moved out of turn");
            return Err(FiancoError::NotYourTurn {
                expected: self.side_to_move,
                got: side,
            });
        }

        let legal = self.legal_moves();
        if !legal.contains(&mv) {
            debug!("rejected {mv} for {side}: not in legal set");
            return Err(FiancoError::IllegalMove { side, mv });
        }

        let captured = if legal.forced_capture() {
            Some(mv.midpoint().ok_or(FiancoError::IllegalMove { side, mv })?)
        } else {
            None
        };

        if self.snapshot.is_none() {
            self.snapshot = Some(Snapshot {
                grid: self.grid,
                pieces: self.pieces.clone(),
                side_to_move: self.side_to_move,
            });
        }

        if let Some(mid) = captured {
            self.remove_piece(side.opponent(), mid);
        }
        self.remove_piece(side, mv.from);
        self.place_piece(side, mv.to);
        self.side_to_move = side.opponent();

        debug_assert!(self.is_consistent());

        let kind = if captured.is_some() {
            MoveKind::Capture
        } else {
            MoveKind::Simple
        };
        debug!("{side} played {mv} ({kind:?})");
        Ok(kind)
    }

    /// Restore the retained snapshot and drop it.
    pub fn undo(&mut self) -> Result<()> {
        let snapshot = self.snapshot.take().ok_or(FiancoError::NoHistory)?;

        self.grid = snapshot.grid;
        self.pieces = snapshot.pieces;
        self.side_to_move = snapshot.side_to_move;

        debug!("undo restored position, {} to move", self.side_to_move);
        Ok(())
    }

    fn place_piece(&mut self, side: Side, sq: Square) {
        self.grid[sq.index()] = Cell::Piece(side);
        self.pieces[side].insert(sq);
    }

    fn remove_piece(&mut self, side: Side, sq: Square) {
        self.grid[sq.index()] = Cell::Empty;
        self.pieces[side].remove(&sq);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Positions are equal when grid and side to move match; undo history is
/// not part of the position.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.side_to_move == other.side_to_move && self.grid == other.grid
    }
}

impl Eq for Board {}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "   A B C D E F G H I")?;
        for row in 0..BOARD_SIZE {
            write!(f, "{:>2}", row + 1)?;
            for col in 0..BOARD_SIZE {
                let cell = Square::new(row, col).map(|sq| self.cell_at(sq));
                let glyph = match cell {
                    Ok(Cell::Piece(Side::Player1)) => '1',
                    Ok(Cell::Piece(Side::Player2)) => '2',
                    _ => '.',
                };
                write!(f, " {glyph}")?;
            }
            writeln!(f)?;
        }
        write!(f, "{} to move", self.side_to_move)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    fn mv(fr: u8, fc: u8, tr: u8, tc: u8) -> Move {
        Move::from_coords(fr, fc, tr, tc).unwrap()
    }

    #[test]
    fn test_initial_position() {
        let board = Board::new();

        assert_eq!(board.side_to_move(), Side::Player1);
        assert_eq!(board.piece_count(Side::Player1), PIECES_PER_SIDE);
        assert_eq!(board.piece_count(Side::Player2), PIECES_PER_SIDE);
        assert!(!board.has_history());
        assert!(board.is_consistent());

        for col in 0..9 {
            assert_eq!(board.cell_at(sq(0, col)), Cell::Piece(Side::Player1));
            assert_eq!(board.cell_at(sq(8, col)), Cell::Piece(Side::Player2));
        }
        for (row, col) in OUTPOSTS {
            assert_eq!(board.cell_at(sq(row, col)), Cell::Piece(Side::Player1));
            assert_eq!(board.cell_at(sq(8 - row, col)), Cell::Piece(Side::Player2));
        }
        assert_eq!(board.cell_at(sq(4, 4)), Cell::Empty);
    }

    #[test]
    fn test_from_pieces_rejects_overlap() {
        let err = Board::from_pieces(Side::Player1, &[sq(4, 4)], &[sq(4, 4)]).unwrap_err();
        assert_eq!(err, FiancoError::Occupied(sq(4, 4)));

        let err = Board::from_pieces(Side::Player1, &[sq(1, 1), sq(1, 1)], &[]).unwrap_err();
        assert_eq!(err, FiancoError::Occupied(sq(1, 1)));
    }

    #[test]
    fn test_simple_move_relocates() {
        let mut board = Board::new();
        let kind = board.apply_move(Side::Player1, mv(3, 3, 4, 3)).unwrap();

        assert_eq!(kind, MoveKind::Simple);
        assert_eq!(board.cell_at(sq(3, 3)), Cell::Empty);
        assert_eq!(board.cell_at(sq(4, 3)), Cell::Piece(Side::Player1));
        assert!(board.pieces_of(Side::Player1).contains(&sq(4, 3)));
        assert!(!board.pieces_of(Side::Player1).contains(&sq(3, 3)));
        assert_eq!(board.side_to_move(), Side::Player2);
        assert!(board.has_history());
        assert!(board.is_consistent());
    }

    #[test]
    fn test_capture_removes_jumped_piece() {
        let mut board =
            Board::from_pieces(Side::Player1, &[sq(2, 2)], &[sq(3, 3), sq(8, 8)]).unwrap();

        let kind = board.apply_move(Side::Player1, mv(2, 2, 4, 4)).unwrap();

        assert_eq!(kind, MoveKind::Capture);
        assert_eq!(board.cell_at(sq(3, 3)), Cell::Empty);
        assert_eq!(board.cell_at(sq(4, 4)), Cell::Piece(Side::Player1));
        assert_eq!(board.piece_count(Side::Player2), 1);
        assert_eq!(board.piece_count(Side::Player1), 1);
        assert!(board.is_consistent());
    }

    #[test]
    fn test_wrong_side_rejected() {
        let mut board = Board::new();
        let before = board.clone();

        let err = board.apply_move(Side::Player2, mv(5, 3, 4, 3)).unwrap_err();

        assert_eq!(
            err,
            FiancoError::NotYourTurn {
                expected: Side::Player1,
                got: Side::Player2
            }
        );
        assert_eq!(board, before);
        assert!(!board.has_history());
    }

    #[test]
    fn test_illegal_move_leaves_no_snapshot() {
        let mut board = Board::new();
        let err = board.apply_move(Side::Player1, mv(3, 3, 5, 3)).unwrap_err();

        assert!(matches!(err, FiancoError::IllegalMove { .. }));
        assert_eq!(board, Board::new());
        assert!(!board.has_history());
    }

    #[test]
    fn test_undo_single_move() {
        let mut board = Board::new();
        board.apply_move(Side::Player1, mv(3, 5, 4, 5)).unwrap();
        board.undo().unwrap();

        assert_eq!(board, Board::new());
        assert_eq!(board.pieces_of(Side::Player1), Board::new().pieces_of(Side::Player1));
        assert!(!board.has_history());
        assert_eq!(board.undo(), Err(FiancoError::NoHistory));
    }

    #[test]
    fn test_undo_after_run_returns_to_run_start() {
        let mut board = Board::new();
        board.apply_move(Side::Player1, mv(3, 3, 4, 3)).unwrap();
        board.apply_move(Side::Player2, mv(5, 5, 4, 5)).unwrap();
        board.undo().unwrap();

        assert_eq!(board, Board::new());
        assert_eq!(board.side_to_move(), Side::Player1);
    }

    #[test]
    fn test_snapshot_retaken_after_undo() {
        let mut board = Board::new();
        board.apply_move(Side::Player1, mv(3, 3, 4, 3)).unwrap();
        board.undo().unwrap();

        board.apply_move(Side::Player1, mv(3, 5, 4, 5)).unwrap();
        let after_first = board.clone();
        board.apply_move(Side::Player2, mv(5, 3, 5, 4)).unwrap();
        board.undo().unwrap();

        assert_ne!(board, after_first);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_reset_clears_history() {
        let mut board = Board::new();
        board.apply_move(Side::Player1, mv(3, 3, 4, 3)).unwrap();
        board.reset();

        assert_eq!(board, Board::new());
        assert!(!board.has_history());
    }

    #[test]
    fn test_equality_ignores_history() {
        let mut a = Board::new();
        a.apply_move(Side::Player1, mv(3, 3, 4, 3)).unwrap();
        let b = Board::from_pieces(
            Side::Player2,
            &a.pieces_of(Side::Player1).iter().copied().collect::<Vec<_>>(),
            &a.pieces_of(Side::Player2).iter().copied().collect::<Vec<_>>(),
        )
        .unwrap();

        assert!(a.has_history());
        assert!(!b.has_history());
        assert_eq!(a, b);
    }

    #[test]
    fn test_display() {
        let text = Board::new().to_string();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "   A B C D E F G H I");
        assert_eq!(lines[1], " 1 1 1 1 1 1 1 1 1 1");
        assert_eq!(lines[5], " 5 . . . . . . . . .");
        assert_eq!(lines[9], " 9 2 2 2 2 2 2 2 2 2");
        assert_eq!(lines[10], "Player 1 to move");
    }
}
