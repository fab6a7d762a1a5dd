//! Advisor move rules: one diagonal step, confined to the palace.

use crate::board::Board;
use crate::types::*;

const STEPS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub fn is_valid_advisor_move(from: Position, to: Position, color: Color) -> bool {
    let d_row = (to.row() - from.row()).abs();
    let d_col = (to.col() - from.col()).abs();
    to.in_palace(color) && d_row == 1 && d_col == 1
}

pub fn generate_advisor_moves(board: &Board, from: Position, moves: &mut Vec<Move>) {
    for (d_row, d_col) in STEPS {
        if let Some(to) = from.offset(d_row, d_col) {
            super::push_if_valid(board, from, to, moves);
        }
    }
}
