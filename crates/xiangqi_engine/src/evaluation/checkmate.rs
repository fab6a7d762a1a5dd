//! Checkmate potential
//!
//! Rewards pieces gathered near the enemy General, a General with few escape
//! squares, and an enemy standing in check.

use super::EvalWeights;
use crate::board::Board;
use crate::move_gen::general::general_steps;
use crate::move_gen::{general_position, is_in_check, is_valid_move, leaves_in_check};
use crate::types::*;

/// Points the `color` General can step to without landing in check
pub fn escape_squares(board: &Board, color: Color) -> usize {
    let Some(general) = general_position(board, color) else {
        return 0;
    };
    let mut scratch = board.clone();
    general_steps(general)
        .filter(|&to| is_valid_move(board, general, to))
        .filter(|&to| !leaves_in_check(&mut scratch, Move::new(general, to), color))
        .count()
}

/// Mating pressure `color` exerts on the opposing General
pub fn checkmate_potential(board: &Board, color: Color, weights: &EvalWeights) -> i32 {
    let enemy = color.opponent();
    let Some(general) = general_position(board, enemy) else {
        return 0;
    };

    let mut score = 0;
    for d_row in -2..=2 {
        for d_col in -2..=2 {
            let Some(piece) = general.offset(d_row, d_col).and_then(|pos| board.get(pos)) else {
                continue;
            };
            if piece.color != color {
                continue;
            }
            score += weights.attacker_presence;
            score += if piece.kind.is_major() {
                weights.major_attacker_bonus
            } else {
                weights.minor_attacker_bonus
            };
        }
    }

    let escapes = escape_squares(board, enemy) as i32;
    score += (weights.max_escape_squares - escapes) * weights.escape_square_weight;

    if is_in_check(board, enemy) {
        score += weights.enemy_in_check_bonus;
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_escape_squares() {
        let board = Board::initial();
        // Only the step forward to e8 / e1 is open
        assert_eq!(escape_squares(&board, Color::Red), 1);
        assert_eq!(escape_squares(&board, Color::Black), 1);
    }

    #[test]
    fn test_mated_general_has_no_escape() {
        let board = Board::from_fen("3k5/9/9/9/9/9/9/9/r8/4K3r").unwrap();
        assert_eq!(escape_squares(&board, Color::Red), 0);
    }

    #[test]
    fn test_pressure_grows_with_nearby_attackers() {
        let w = EvalWeights::default();
        let far = Board::from_fen("3k5/9/9/9/9/9/9/R8/9/5K3").unwrap();
        let near = Board::from_fen("3k5/9/2R6/9/9/9/9/9/9/5K3").unwrap();
        assert!(
            checkmate_potential(&near, Color::Red, &w) > checkmate_potential(&far, Color::Red, &w)
        );
    }

    #[test]
    fn test_opening_pressure() {
        let w = EvalWeights::default();
        // No red piece near the black general, eight missing escapes
        assert_eq!(checkmate_potential(&Board::initial(), Color::Red, &w), 8 * 50);
    }

    #[test]
    fn test_missing_enemy_general_scores_zero() {
        let board = Board::from_fen("9/9/9/9/9/9/9/9/9/4K4").unwrap();
        assert_eq!(checkmate_potential(&board, Color::Red, &EvalWeights::default()), 0);
    }
}
