//! General move rules
//!
//! The General steps one point orthogonally and never leaves its palace.
//! Facing-generals is a check condition and is handled in [`super::attack`].

use crate::board::Board;
use crate::types::*;

const STEPS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Geometry of a General move (destination color is checked by the caller)
pub fn is_valid_general_move(from: Position, to: Position, color: Color) -> bool {
    let d_row = (to.row() - from.row()).abs();
    let d_col = (to.col() - from.col()).abs();
    to.in_palace(color) && d_row + d_col == 1
}

/// Generate General moves from `from`
pub fn generate_general_moves(board: &Board, from: Position, moves: &mut Vec<Move>) {
    for (d_row, d_col) in STEPS {
        if let Some(to) = from.offset(d_row, d_col) {
            super::push_if_valid(board, from, to, moves);
        }
    }
}

/// One-step neighbourhood used for escape-square counting
pub(crate) fn general_steps(from: Position) -> impl Iterator<Item = Position> {
    STEPS
        .into_iter()
        .filter_map(move |(d_row, d_col)| from.offset(d_row, d_col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_general_steps_orthogonally_inside_palace() {
        let center = Position::new(8, 4);
        assert!(is_valid_general_move(center, Position::new(7, 4), Color::Red));
        assert!(is_valid_general_move(center, Position::new(8, 3), Color::Red));
        assert!(!is_valid_general_move(center, Position::new(7, 3), Color::Red));
        assert!(!is_valid_general_move(center, Position::new(6, 4), Color::Red));
    }

    #[test]
    fn test_general_cannot_leave_palace() {
        let edge = Position::new(7, 3);
        assert!(!is_valid_general_move(edge, Position::new(6, 3), Color::Red));
        assert!(!is_valid_general_move(edge, Position::new(7, 2), Color::Red));
        assert!(!is_valid_general_move(Position::new(2, 5), Position::new(3, 5), Color::Black));
    }
}
