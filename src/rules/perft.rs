//! Move-path enumeration for regression testing and benchmarking.
//!
//! The board keeps a single undo slot, so the walk recurses on clones;
//! the persistent piece sets make each clone cheap.

use crate::core::{Board, Result};

/// Count the leaf positions `depth` plies below `board`.
///
/// A position with no legal moves counts as one leaf at any depth. Won
/// positions are expanded like any other, matching move generation.
///
/// Fails if the board rejects a move its own generator produced.
pub fn perft(board: &Board, depth: u32) -> Result<u64> {
    if depth == 0 {
        return Ok(1);
    }

    let legal = board.legal_moves();
    if legal.is_empty() {
        return Ok(1);
    }
    if depth == 1 {
        return Ok(legal.len() as u64);
    }

    let side = board.side_to_move();
    let mut nodes = 0;
    for &mv in &legal {
        let mut child = board.clone();
        child.apply_move(side, mv)?;
        nodes += perft(&child, depth - 1)?;
    }
    Ok(nodes)
}
