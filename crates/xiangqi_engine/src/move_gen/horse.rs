//! Horse move rules
//!
//! The Horse moves one point orthogonally and then one point diagonally outward,
//! i.e. an L of (2, 1) or (1, 2). Unlike the chess knight it can be "hobbled": the
//! orthogonal point next to the origin in the direction of the long leg must be empty.

use crate::board::Board;
use crate::types::*;

const JUMPS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (2, -1),
    (2, 1),
    (-1, -2),
    (1, -2),
    (-1, 2),
    (1, 2),
];

/// Check the L-shape and the blocking leg
///
/// # Examples
///
/// ```rust,ignore
/// // Red horse on b9 jumping to c7 needs b8 empty
/// let ok = is_valid_horse_move(&board, Position::new(9, 1), Position::new(7, 2));
/// ```
pub fn is_valid_horse_move(board: &Board, from: Position, to: Position) -> bool {
    let d_row = to.row() - from.row();
    let d_col = to.col() - from.col();
    let leg = match (d_row.abs(), d_col.abs()) {
        (2, 1) => from.offset(d_row.signum(), 0),
        (1, 2) => from.offset(0, d_col.signum()),
        _ => return false,
    };
    leg.is_some_and(|leg| board.is_empty_at(leg))
}

pub fn generate_horse_moves(board: &Board, from: Position, moves: &mut Vec<Move>) {
    for (d_row, d_col) in JUMPS {
        if let Some(to) = from.offset(d_row, d_col) {
            super::push_if_valid(board, from, to, moves);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horse_l_shape() {
        let board = Board::empty();
        let from = Position::new(5, 4);
        assert!(is_valid_horse_move(&board, from, Position::new(3, 3)));
        assert!(is_valid_horse_move(&board, from, Position::new(6, 6)));
        assert!(!is_valid_horse_move(&board, from, Position::new(3, 2)));
        assert!(!is_valid_horse_move(&board, from, Position::new(4, 4)));
    }

    #[test]
    fn test_horse_leg_blocks_jump() {
        let mut board = Board::empty();
        let from = Position::new(5, 4);
        let to = Position::new(3, 5);
        let leg = Position::new(4, 4);

        board.set(leg, Some(Piece::new(PieceKind::Pawn, Color::Red)));
        assert!(!is_valid_horse_move(&board, from, to));
        // The same blocker does not hobble the sideways jump
        assert!(is_valid_horse_move(&board, from, Position::new(4, 6)));

        board.set(leg, None);
        assert!(is_valid_horse_move(&board, from, to));
    }
}
