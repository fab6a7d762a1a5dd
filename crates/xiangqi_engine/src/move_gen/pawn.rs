//! Pawn move rules
//!
//! ## Pawn Movement Rules
//!
//! - **Before the river**: one step straight forward only (Red toward row 0,
//!   Black toward row 9)
//! - **After the river**: one step forward or one step sideways
//! - Never backward, never diagonal; captures use the same steps

use crate::board::Board;
use crate::types::*;

/// Check a Pawn step
///
/// The origin row decides whether sideways steps are allowed, so a Pawn standing
/// on the river edge of the enemy half may already step sideways.
pub fn is_valid_pawn_move(from: Position, to: Position, color: Color) -> bool {
    let d_row = to.row() - from.row();
    let d_col = to.col() - from.col();
    if d_row == color.forward() && d_col == 0 {
        return true;
    }
    let crossed = !color.owns_row(from.row());
    crossed && d_row == 0 && d_col.abs() == 1
}

pub fn generate_pawn_moves(board: &Board, from: Position, color: Color, moves: &mut Vec<Move>) {
    for (d_row, d_col) in [(color.forward(), 0), (0, -1), (0, 1)] {
        if let Some(to) = from.offset(d_row, d_col) {
            super::push_if_valid(board, from, to, moves);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pawn_before_river_only_forward() {
        let from = Position::new(6, 4);
        assert!(is_valid_pawn_move(from, Position::new(5, 4), Color::Red));
        assert!(!is_valid_pawn_move(from, Position::new(6, 3), Color::Red));
        assert!(!is_valid_pawn_move(from, Position::new(7, 4), Color::Red));

        let from = Position::new(3, 4);
        assert!(is_valid_pawn_move(from, Position::new(4, 4), Color::Black));
        assert!(!is_valid_pawn_move(from, Position::new(3, 5), Color::Black));
    }

    #[test]
    fn test_pawn_after_river_steps_sideways() {
        let from = Position::new(4, 4);
        assert!(is_valid_pawn_move(from, Position::new(3, 4), Color::Red));
        assert!(is_valid_pawn_move(from, Position::new(4, 3), Color::Red));
        assert!(is_valid_pawn_move(from, Position::new(4, 5), Color::Red));
        assert!(!is_valid_pawn_move(from, Position::new(5, 4), Color::Red));
        assert!(!is_valid_pawn_move(from, Position::new(3, 5), Color::Red));

        let from = Position::new(5, 0);
        assert!(is_valid_pawn_move(from, Position::new(5, 1), Color::Black));
        assert!(!is_valid_pawn_move(from, Position::new(4, 0), Color::Black));
    }
}
