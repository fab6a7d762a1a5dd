//! Chariot move rules: any distance along a rank or file over a clear path.

use super::lines::{line_targets, pieces_between};
use crate::board::Board;
use crate::types::*;

pub fn is_valid_chariot_move(board: &Board, from: Position, to: Position) -> bool {
    pieces_between(board, from, to) == Some(0)
}

pub fn generate_chariot_moves(board: &Board, from: Position, moves: &mut Vec<Move>) {
    for to in line_targets(from) {
        super::push_if_valid(board, from, to, moves);
    }
}
