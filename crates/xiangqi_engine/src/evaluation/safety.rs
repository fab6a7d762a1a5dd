//! Per-piece safety
//!
//! Weighs the enemy pieces attacking a piece against the friendly pieces that
//! could recapture on its square.

use super::EvalWeights;
use crate::board::Board;
use crate::move_gen::{covers, is_valid_move};
use crate::types::*;

/// Safety of the `piece` standing on `pos`, from its owner's perspective
pub fn piece_safety(board: &Board, pos: Position, piece: Piece, weights: &EvalWeights) -> i32 {
    let mut attackers = 0;
    let mut defenders = 0;
    let mut cheapest_attacker = i32::MAX;

    for (from, other) in board.pieces() {
        if from == pos {
            continue;
        }
        if other.color == piece.color {
            if covers(board, from, pos) {
                defenders += 1;
            }
        } else if is_valid_move(board, from, pos) {
            attackers += 1;
            cheapest_attacker = cheapest_attacker.min(other.value());
        }
    }

    let mut score = defenders * weights.defender_bonus;
    if attackers > 0 {
        if cheapest_attacker < piece.value() {
            score -= weights.cheap_attacker_penalty;
        }
        if defenders == 0 {
            score -= weights.undefended_penalty;
        }
    }
    if defenders > attackers {
        score += weights.overdefended_bonus;
    }
    score
}
