//! Move execution and validation
//!
//! Functions for executing moves and checking move legality.

use crate::error::{ChessEngineError, ChessEngineResult, Rejection};
use crate::move_gen::{
    self, captures_general, find_generals, has_any_legal_move, is_valid_move, leaves_in_check,
};
use crate::types::*;
use std::collections::BTreeSet;
use tracing::trace;

/// Validate and commit a move for the side to move
///
/// Checks run in a fixed order: the game must be in progress, `from` must hold a
/// piece of the side to move, the move must obey piece geometry and may not capture
/// a General, and it must not leave the mover in check. On success the move is
/// applied, the turn passes, and the opponent's check/checkmate state is reported.
///
/// # Errors
///
/// Returns the first [`Rejection`] that applies. The state is unchanged on error.
///
/// # Examples
///
/// ```
/// use xiangqi_engine::{attempt_move, new_game};
///
/// let mut state = new_game();
/// // Central cannon: b7 to e7
/// let outcome = attempt_move(&mut state, "b7".parse().unwrap(), "e7".parse().unwrap()).unwrap();
/// assert!(outcome.captured.is_none());
/// ```
pub fn attempt_move(
    state: &mut GameState,
    from: Position,
    to: Position,
) -> Result<MoveOutcome, Rejection> {
    let mv = Move::new(from, to);
    let result = validate(state, mv);
    if let Err(rejection) = &result {
        trace!(%mv, %rejection, "move rejected");
    }
    let piece = result?;

    let mover = state.turn;
    let opponent = mover.opponent();
    let captured = state.board.get(to);
    state.board.set(to, Some(piece));
    state.board.set(from, None);
    debug_assert!(
        matches!(find_generals(&state.board), (Some(_), Some(_))),
        "a General left the board"
    );
    state.turn = opponent;

    let check = move_gen::is_in_check(&state.board, opponent);
    let can_move = has_any_legal_move(&state.board, opponent);
    let status = match (can_move, check) {
        (true, _) => GameStatus::InProgress,
        (false, true) => GameStatus::Checkmate { winner: mover },
        (false, false) => GameStatus::Stalemate { winner: mover },
    };
    if status != GameStatus::InProgress {
        state.in_progress = false;
    }

    Ok(MoveOutcome {
        mv,
        piece,
        captured,
        check,
        checkmate: check && !can_move,
        status,
    })
}

fn validate(state: &GameState, mv: Move) -> Result<Piece, Rejection> {
    if !state.in_progress {
        return Err(ChessEngineError::GameOver);
    }
    let piece = state
        .board
        .get(mv.from)
        .ok_or(ChessEngineError::NoPieceAtSquare { square: mv.from })?;
    if piece.color != state.turn {
        return Err(ChessEngineError::WrongTurn {
            expected: state.turn,
            found: piece.color,
        });
    }
    if !is_valid_move(&state.board, mv.from, mv.to) || captures_general(&state.board, mv) {
        return Err(ChessEngineError::IllegalMove {
            from: mv.from,
            to: mv.to,
        });
    }
    if leaves_in_check(&mut state.board.clone(), mv, piece.color) {
        return Err(ChessEngineError::SelfCheck {
            from: mv.from,
            to: mv.to,
        });
    }
    Ok(piece)
}

/// Legal destinations of the piece on `from`, for highlighting
///
/// Any piece may be queried, whichever side is to move. An empty point yields an
/// empty set.
pub fn legal_destinations(state: &GameState, from: Position) -> BTreeSet<Position> {
    move_gen::legal_destinations(&state.board, from)
}

/// All legal moves of the side to move
///
/// # Errors
///
/// [`ChessEngineError::NoLegalMoves`] when the side to move is mated or stalemated.
pub fn legal_moves(state: &GameState) -> ChessEngineResult<Vec<Move>> {
    let moves = move_gen::generate_legal_moves(&state.board, state.turn);
    if moves.is_empty() {
        return Err(ChessEngineError::NoLegalMoves { color: state.turn });
    }
    Ok(moves)
}
