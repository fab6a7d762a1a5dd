//! Attack detection, check and checkmate
//!
//! A square is attacked when any piece of the attacking color has a valid move
//! (per [`super::is_valid_move`]) landing on it. A General is additionally in check
//! whenever the two Generals face each other on an open file; that condition puts
//! *both* sides in check at once.
//!
//! ## Performance
//!
//! Attack detection scans every piece of the attacking color, O(pieces × legality).
//! Checkmate detection tries every pseudo-legal move of the defender with
//! apply/check/undo, which dominates the per-move cost outside the search.

use super::lines::pieces_between;
use super::{has_any_legal_move, is_valid_move};
use crate::board::Board;
use crate::types::*;

/// Locate both Generals as `(red, black)`
pub fn find_generals(board: &Board) -> (Option<Position>, Option<Position>) {
    let mut red = None;
    let mut black = None;
    for (pos, piece) in board.pieces() {
        if piece.kind == PieceKind::General {
            match piece.color {
                Color::Red => red = Some(pos),
                Color::Black => black = Some(pos),
            }
        }
    }
    (red, black)
}

/// Position of `color`'s General, if it is on the board
pub fn general_position(board: &Board, color: Color) -> Option<Position> {
    let (red, black) = find_generals(board);
    match color {
        Color::Red => red,
        Color::Black => black,
    }
}

/// Check if a square is under attack by pieces of the specified color
///
/// # Arguments
///
/// * `board` - The current board
/// * `pos` - Target point
/// * `by_color` - Color of pieces that might attack
///
/// # Examples
///
/// ```rust,ignore
/// // Is the red general attacked by any black piece?
/// let attacked = is_square_attacked(&board, Position::new(9, 4), Color::Black);
/// ```
pub fn is_square_attacked(board: &Board, pos: Position, by_color: Color) -> bool {
    board
        .pieces_of(by_color)
        .any(|(from, _)| is_valid_move(board, from, pos))
}

/// Both Generals on one file with nothing between them
pub fn are_generals_facing(board: &Board) -> bool {
    match find_generals(board) {
        (Some(red), Some(black)) => {
            red.col() == black.col() && pieces_between(board, red, black) == Some(0)
        }
        _ => false,
    }
}

/// Whether `color`'s General is in check
///
/// A board missing either General reports no check; such a board only arises from
/// hand-built positions.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    let (red, black) = find_generals(board);
    let (Some(red), Some(black)) = (red, black) else {
        return false;
    };
    if red.col() == black.col() && pieces_between(board, red, black) == Some(0) {
        return true;
    }
    let own = match color {
        Color::Red => red,
        Color::Black => black,
    };
    is_square_attacked(board, own, color.opponent())
}

/// In check with no legal move that escapes it
pub fn is_checkmate(board: &Board, color: Color) -> bool {
    is_in_check(board, color) && !has_any_legal_move(board, color)
}
