//! Straight-line helpers shared by the Chariot and the Cannon
//!
//! Both pieces move along a rank or file; they differ only in how many pieces
//! may stand strictly between origin and destination.

use crate::board::Board;
use crate::constants::*;
use crate::types::Position;

/// Count of pieces strictly between `from` and `to`
///
/// Returns `None` when the two points are identical or do not share a rank or file.
pub(crate) fn pieces_between(board: &Board, from: Position, to: Position) -> Option<usize> {
    if from == to {
        return None;
    }
    if from.row() == to.row() {
        let (lo, hi) = ordered(from.col(), to.col());
        Some(
            (lo + 1..hi)
                .filter(|&col| !board.is_empty_at(Position::new(from.row(), col)))
                .count(),
        )
    } else if from.col() == to.col() {
        let (lo, hi) = ordered(from.row(), to.row());
        Some(
            (lo + 1..hi)
                .filter(|&row| !board.is_empty_at(Position::new(row, from.col())))
                .count(),
        )
    } else {
        None
    }
}

/// Every other point on the same rank and file as `from`
pub(crate) fn line_targets(from: Position) -> impl Iterator<Item = Position> {
    let rank = (0..COLS)
        .filter(move |&col| col != from.col())
        .map(move |col| Position::new(from.row(), col));
    let file = (0..ROWS)
        .filter(move |&row| row != from.row())
        .map(move |row| Position::new(row, from.col()));
    rank.chain(file)
}

#[inline]
fn ordered(a: i8, b: i8) -> (i8, i8) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Color, Piece, PieceKind};

    #[test]
    fn test_pieces_between_counts_both_axes() {
        let mut board = Board::empty();
        let pawn = Some(Piece::new(PieceKind::Pawn, Color::Red));
        board.set(Position::new(4, 2), pawn);
        board.set(Position::new(4, 5), pawn);

        assert_eq!(pieces_between(&board, Position::new(4, 0), Position::new(4, 8)), Some(2));
        assert_eq!(pieces_between(&board, Position::new(4, 8), Position::new(4, 3)), Some(1));
        assert_eq!(pieces_between(&board, Position::new(0, 2), Position::new(9, 2)), Some(1));
        assert_eq!(pieces_between(&board, Position::new(0, 0), Position::new(1, 1)), None);
        assert_eq!(pieces_between(&board, Position::new(0, 0), Position::new(0, 0)), None);
    }

    #[test]
    fn test_line_targets_cover_rank_and_file() {
        let targets: Vec<_> = line_targets(Position::new(5, 5)).collect();
        assert_eq!(targets.len(), (COLS - 1 + ROWS - 1) as usize);
        assert!(!targets.contains(&Position::new(5, 5)));
    }
}
