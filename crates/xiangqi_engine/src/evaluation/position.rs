//! Piece activity and pawn advancement
//!
//! Both terms are returned from the owner's perspective (non-negative); the
//! caller applies the color sign.

use super::EvalWeights;
use crate::types::*;

/// Files c..=g
const CENTRAL_FILES: std::ops::RangeInclusive<i8> = 2..=6;

/// Bonus for a Chariot, Horse or Cannon on a central file or across the river
pub fn positional_bonus(piece: Piece, pos: Position, weights: &EvalWeights) -> i32 {
    if !piece.kind.is_major() {
        return 0;
    }
    let mut bonus = 0;
    if CENTRAL_FILES.contains(&pos.col()) {
        bonus += weights.central_file_bonus;
    }
    if !piece.color.owns_row(pos.row()) {
        bonus += weights.penetration_bonus;
    }
    bonus
}

/// Pawn bonus growing with the rows it has advanced
pub fn pawn_advancement(piece: Piece, pos: Position, weights: &EvalWeights) -> i32 {
    if piece.kind != PieceKind::Pawn {
        return 0;
    }
    let advanced = piece.color.advancement(pos.row()) as i32;
    if piece.color.owns_row(pos.row()) {
        advanced * weights.pawn_home_step
    } else {
        // Rows counted from the last row of the pawn's own half
        weights.pawn_crossed_base + (advanced - 4) * weights.pawn_crossed_step
    }
}
