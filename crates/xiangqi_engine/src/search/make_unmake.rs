//! Move making and unmaking for search
//!
//! Provides functions to make and unmake moves during search, with undo
//! information to restore the board state. Every `make_move` must be paired with
//! an `unmake_move` on the same board before control returns to the caller.

use crate::board::Board;
use crate::types::*;

/// Information needed to undo a move
#[derive(Copy, Clone, Debug)]
pub(crate) struct UndoInfo {
    pub captured: Option<Piece>,
    pub moved: Option<Piece>,
}

/// Make a move on the board (returns undo information)
#[inline]
pub(crate) fn make_move(board: &mut Board, mv: Move) -> UndoInfo {
    let undo = UndoInfo {
        captured: board.get(mv.to),
        moved: board.get(mv.from),
    };

    board.set(mv.to, undo.moved);
    board.set(mv.from, None);

    undo
}

/// Unmake a move on the board
#[inline]
pub(crate) fn unmake_move(board: &mut Board, mv: Move, undo: UndoInfo) {
    board.set(mv.from, undo.moved);
    board.set(mv.to, undo.captured);
}
