//! Elephant move rules
//!
//! ## Elephant Movement Rules
//!
//! - Moves exactly two points diagonally
//! - Never crosses the river (Black stays on rows 0..=4, Red on rows 5..=9)
//! - The diagonal midpoint (the "elephant eye") must be empty; an occupied eye
//!   blocks the move even when the destination is free

use crate::board::Board;
use crate::types::*;

const JUMPS: [(i8, i8); 4] = [(-2, -2), (-2, 2), (2, -2), (2, 2)];

/// Check an Elephant move against the river and the blocking eye
///
/// # Arguments
///
/// * `board` - Current board, consulted for the eye point only
/// * `from` - Origin of the Elephant
/// * `to` - Candidate destination
/// * `color` - Color of the Elephant
pub fn is_valid_elephant_move(board: &Board, from: Position, to: Position, color: Color) -> bool {
    if !color.owns_row(to.row()) {
        return false;
    }
    let d_row = to.row() - from.row();
    let d_col = to.col() - from.col();
    if d_row.abs() != 2 || d_col.abs() != 2 {
        return false;
    }
    from.offset(d_row / 2, d_col / 2).is_some_and(|eye| board.is_empty_at(eye))
}

pub fn generate_elephant_moves(board: &Board, from: Position, moves: &mut Vec<Move>) {
    for (d_row, d_col) in JUMPS {
        if let Some(to) = from.offset(d_row, d_col) {
            super::push_if_valid(board, from, to, moves);
        }
    }
}
