//! Cannon move rules
//!
//! ## Cannon Movement Rules
//!
//! - Moves along a rank or file like the Chariot
//! - A quiet move (empty destination) needs a completely clear path
//! - A capture needs **exactly one** piece of either color between origin and target;
//!   that piece is the screen the Cannon jumps over

use super::lines::{line_targets, pieces_between};
use crate::board::Board;
use crate::types::*;

pub fn is_valid_cannon_move(board: &Board, from: Position, to: Position) -> bool {
    let Some(between) = pieces_between(board, from, to) else {
        return false;
    };
    if board.is_empty_at(to) {
        between == 0
    } else {
        between == 1
    }
}

pub fn generate_cannon_moves(board: &Board, from: Position, moves: &mut Vec<Move>) {
    for to in line_targets(from) {
        super::push_if_valid(board, from, to, moves);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn black(kind: PieceKind) -> Option<Piece> {
        Some(Piece::new(kind, Color::Black))
    }

    #[test]
    fn test_cannon_capture_needs_exactly_one_screen() {
        let mut board = Board::empty();
        let from = Position::new(7, 1);
        let target = Position::new(0, 1);
        board.set(target, black(PieceKind::Horse));

        // No screen
        assert!(!is_valid_cannon_move(&board, from, target));

        board.set(Position::new(3, 1), black(PieceKind::Pawn));
        assert!(is_valid_cannon_move(&board, from, target));

        // Two screens
        board.set(Position::new(2, 1), Some(Piece::new(PieceKind::Cannon, Color::Red)));
        assert!(!is_valid_cannon_move(&board, from, target));
    }

    #[test]
    fn test_cannon_quiet_move_needs_clear_path() {
        let mut board = Board::empty();
        let from = Position::new(7, 1);
        assert!(is_valid_cannon_move(&board, from, Position::new(4, 1)));

        board.set(Position::new(5, 1), black(PieceKind::Pawn));
        assert!(!is_valid_cannon_move(&board, from, Position::new(4, 1)));
        assert!(is_valid_cannon_move(&board, from, Position::new(6, 1)));
    }
}
