//! General safety

use super::EvalWeights;
use crate::board::Board;
use crate::move_gen::{general_position, is_in_check};
use crate::types::*;

/// Guards around `color`'s General and a penalty for standing in check
///
/// Counts friendly pieces in the 3x3 block centered on the General, the General
/// included. A missing General scores a large fixed penalty.
pub fn king_safety(board: &Board, color: Color, weights: &EvalWeights) -> i32 {
    let Some(general) = general_position(board, color) else {
        return -weights.missing_general_penalty;
    };

    let mut guards = 0;
    for d_row in -1..=1 {
        for d_col in -1..=1 {
            let friendly = general
                .offset(d_row, d_col)
                .and_then(|pos| board.get(pos))
                .is_some_and(|piece| piece.color == color);
            if friendly {
                guards += 1;
            }
        }
    }

    let mut score = guards * weights.king_guard_bonus;
    if is_in_check(board, color) {
        score -= weights.king_in_check_penalty;
    }
    score
}
