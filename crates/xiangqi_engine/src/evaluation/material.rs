//! Material evaluation
//!
//! Evaluates the material balance of a position by counting piece values.

use crate::board::Board;

/// Material balance, Black pieces added and Red pieces subtracted
pub fn evaluate_material(board: &Board) -> i32 {
    board
        .pieces()
        .map(|(_, piece)| piece.color.sign() * piece.value())
        .sum()
}
