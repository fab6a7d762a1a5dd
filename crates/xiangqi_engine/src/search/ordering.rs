//! Move ordering for alpha-beta pruning
//!
//! Root moves are ranked by the full heuristic: mates first, then checks (more
//! so when the enemy General is boxed in), then captures by victim value, then
//! development toward the center and across the river. Interior nodes use the
//! cheap part of that heuristic and skip the check probes.

use super::make_unmake::{make_move, unmake_move};
use crate::board::Board;
use crate::move_gen::general::general_steps;
use crate::move_gen::{general_position, has_any_legal_move, is_in_check, is_valid_move};
use crate::types::*;
use std::cmp::Reverse;

const MATE_BONUS: i32 = 10_000;
const CHECK_BONUS: i32 = 1_000;
const BOXED_GENERAL_WEIGHT: i32 = 100;
const MAX_ESCAPES: i32 = 9;
const CAPTURE_WEIGHT: i32 = 10;
const CENTRAL_LANDING_BONUS: i32 = 30;
const CROSSING_BONUS: i32 = 40;

/// Captures and development, no board probing
fn quiet_score(board: &Board, mv: Move) -> i32 {
    let Some(piece) = board.get(mv.from) else {
        return 0;
    };
    let mut score = board
        .get(mv.to)
        .map_or(0, |victim| victim.value() * CAPTURE_WEIGHT);

    if piece.kind.is_major() {
        if (2..=6).contains(&mv.to.col()) {
            score += CENTRAL_LANDING_BONUS;
        }
        if !piece.color.owns_row(mv.to.row()) {
            score += CROSSING_BONUS;
        }
    }
    score
}

/// One-step palace points open to the General, ignoring attacks
fn geometric_escapes(board: &Board, color: Color) -> i32 {
    let Some(general) = general_position(board, color) else {
        return 0;
    };
    general_steps(general)
        .filter(|&to| is_valid_move(board, general, to))
        .count() as i32
}

/// Full ordering score of a root move for `color`; the board is restored
pub(crate) fn score_root_move(board: &mut Board, mv: Move, color: Color) -> i32 {
    let mut score = quiet_score(board, mv);
    let enemy = color.opponent();

    let undo = make_move(board, mv);
    if is_in_check(board, enemy) {
        if !has_any_legal_move(board, enemy) {
            score += MATE_BONUS;
        } else {
            score += CHECK_BONUS
                + BOXED_GENERAL_WEIGHT * (MAX_ESCAPES - geometric_escapes(board, enemy));
        }
    }
    unmake_move(board, mv, undo);

    score
}

/// Sort root moves best-first; ties keep generation order
pub(crate) fn order_root_moves(board: &mut Board, color: Color, moves: &mut [Move]) {
    let mut scored: Vec<(i32, Move)> = moves
        .iter()
        .map(|&mv| (score_root_move(board, mv, color), mv))
        .collect();
    scored.sort_by_key(|&(score, _)| Reverse(score));
    for (slot, (_, mv)) in moves.iter_mut().zip(scored) {
        *slot = mv;
    }
}

/// Sort interior-node moves best-first by captures and development
pub(crate) fn order_moves(board: &Board, moves: &mut [Move]) {
    moves.sort_by_cached_key(|&mv| Reverse(quiet_score(board, mv)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_gen::generate_legal_moves;

    fn board(fen: &str) -> Board {
        Board::from_fen(fen).unwrap()
    }

    fn mv(from: (i8, i8), to: (i8, i8)) -> Move {
        Move::new(Position::new(from.0, from.1), Position::new(to.0, to.1))
    }

    #[test]
    fn test_order_moves_prioritizes_captures() {
        // Red chariot on a5 can take the black horse on a2 or the pawn on e5
        let board = board("3k5/9/n8/9/9/R3p4/9/9/9/5K3");
        let mut moves = vec![mv((5, 0), (6, 0)), mv((5, 0), (5, 4)), mv((5, 0), (2, 0))];
        order_moves(&board, &mut moves);
        assert_eq!(moves[0], mv((5, 0), (2, 0)));
        assert_eq!(moves[1], mv((5, 0), (5, 4)));
    }

    #[test]
    fn test_order_moves_prefers_central_development() {
        let board = Board::initial();
        // Cannon to the center file against a cannon step to the a-file
        let mut moves = vec![mv((7, 1), (7, 0)), mv((7, 1), (7, 4))];
        order_moves(&board, &mut moves);
        assert_eq!(moves[0], mv((7, 1), (7, 4)));
    }

    #[test]
    fn test_crossing_bonus_goes_to_major_pieces_in_enemy_half() {
        // Red chariot already across on a3, red pawn about to cross from a5
        let board = board("3k5/9/9/R8/9/P8/9/9/9/5K3");
        assert_eq!(quiet_score(&board, mv((3, 0), (2, 0))), CROSSING_BONUS);
        assert_eq!(quiet_score(&board, mv((3, 0), (4, 0))), CROSSING_BONUS);
        assert_eq!(quiet_score(&board, mv((3, 0), (3, 1))), CROSSING_BONUS);
        assert_eq!(quiet_score(&board, mv((5, 0), (4, 0))), 0);
    }

    #[test]
    fn test_root_ordering_puts_mate_first() {
        // The a1 chariot holds row 1; h8 to h0 then mates along the back rank
        let mut board = board("4k4/R8/9/9/9/9/9/9/7R1/3K5");
        let mut moves = generate_legal_moves(&board, Color::Red);
        let before = board.clone();
        order_root_moves(&mut board, Color::Red, &mut moves);
        assert_eq!(board, before);
        assert_eq!(moves[0], mv((8, 7), (0, 7)));
        assert!(score_root_move(&mut board, moves[0], Color::Red) >= MATE_BONUS);
    }

    #[test]
    fn test_root_ordering_keeps_every_move() {
        let mut board = Board::initial();
        let mut moves = generate_legal_moves(&board, Color::Black);
        let mut expected = moves.clone();
        order_root_moves(&mut board, Color::Black, &mut moves);
        expected.sort_by_key(|m| (m.from, m.to));
        moves.sort_by_key(|m| (m.from, m.to));
        assert_eq!(moves, expected);
    }
}
