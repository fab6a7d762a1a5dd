//! Error types for the Xiangqi engine
//!
//! Move rejections, FEN and notation parsing failures, and the "no legal moves"
//! signal used by end-of-game detection. None of these are fatal; callers decide
//! how to surface them.

use crate::types::{Color, Position};
use thiserror::Error;

/// Errors that can occur in the engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessEngineError {
    /// The move breaks the piece's movement geometry or the board's occupancy
    #[error("Illegal move: from {from} to {to}")]
    IllegalMove { from: Position, to: Position },

    /// The move would leave the mover's own General attacked
    #[error("Move from {from} to {to} leaves the general in check")]
    SelfCheck { from: Position, to: Position },

    /// A piece of the non-active color was moved
    #[error("Not {found}'s turn: {expected} to move")]
    WrongTurn { expected: Color, found: Color },

    /// The side has no legal move at all
    #[error("No legal moves for {color}")]
    NoLegalMoves { color: Color },

    /// No piece at source square
    #[error("No piece at square {square}")]
    NoPieceAtSquare { square: Position },

    /// The game already ended
    #[error("Game is over")]
    GameOver,

    /// Square notation could not be parsed
    #[error("Invalid square: {input:?}")]
    InvalidSquare { input: String },

    /// FEN board string could not be parsed
    #[error("Invalid FEN: {reason}")]
    InvalidFen { reason: String },
}

/// Why `attempt_move` refused a move
pub type Rejection = ChessEngineError;

/// Result type alias for engine operations
pub type ChessEngineResult<T> = Result<T, ChessEngineError>;
