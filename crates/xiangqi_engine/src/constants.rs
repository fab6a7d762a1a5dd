//! # Engine Constants - Board Geometry, Piece Values & Search Limits
//!
//! ## Board Geometry
//!
//! The board is a grid of 10 rows × 9 columns of intersections. Row 0 is Black's
//! back rank (top of the board as rendered), row 9 is Red's back rank. Red moves
//! first and advances toward row 0.
//!
//! - **Palace**: columns 3..=5, rows 0..=2 for Black and rows 7..=9 for Red.
//! - **River**: between rows 4 and 5. Black's own half is rows 0..=4, Red's is 5..=9.
//!
//! ## Material Values
//!
//! Values follow the classic amateur Xiangqi scale (Chariot ≈ 9 pawns). The General is
//! valued at 0: it is never traded, and losing it is handled by mate scoring instead.
//!
//! ## Mate Scores
//!
//! `MATE_SCORE` dwarfs every heuristic term the evaluator can produce, so any score with
//! an absolute value above `MATE_THRESHOLD` means a forced result was found. Mates are
//! scored `MATE_SCORE - ply` so that shorter mates are preferred.

use crate::types::PieceKind;

/// Number of rows (ranks) on the board
pub const ROWS: i8 = 10;

/// Number of columns (files) on the board
pub const COLS: i8 = 9;

/// Total number of intersections
pub const SQUARES: usize = (ROWS as usize) * (COLS as usize);

/// Palace files (shared by both sides)
pub const PALACE_COLS: std::ops::RangeInclusive<i8> = 3..=5;

/// Black palace rows
pub const BLACK_PALACE_ROWS: std::ops::RangeInclusive<i8> = 0..=2;

/// Red palace rows
pub const RED_PALACE_ROWS: std::ops::RangeInclusive<i8> = 7..=9;

/// Last row on Black's side of the river
pub const BLACK_RIVER_EDGE: i8 = 4;

/// First row on Red's side of the river
pub const RED_RIVER_EDGE: i8 = 5;

/// Material values
pub const GENERAL_VALUE: i32 = 0;
pub const ADVISOR_VALUE: i32 = 200;
pub const ELEPHANT_VALUE: i32 = 200;
pub const HORSE_VALUE: i32 = 400;
pub const CHARIOT_VALUE: i32 = 900;
pub const CANNON_VALUE: i32 = 500;
pub const PAWN_VALUE: i32 = 100;

/// Material value of a piece kind
#[inline]
pub const fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::General => GENERAL_VALUE,
        PieceKind::Advisor => ADVISOR_VALUE,
        PieceKind::Elephant => ELEPHANT_VALUE,
        PieceKind::Horse => HORSE_VALUE,
        PieceKind::Chariot => CHARIOT_VALUE,
        PieceKind::Cannon => CANNON_VALUE,
        PieceKind::Pawn => PAWN_VALUE,
    }
}

/// Score of a mate delivered at the root
pub const MATE_SCORE: i32 = 1_000_000;

/// Scores beyond this magnitude are forced results
pub const MATE_THRESHOLD: i32 = MATE_SCORE / 2;

/// Alpha-beta window bound
pub const AB_INF: i32 = 2 * MATE_SCORE;

/// Shallowest iterative-deepening pass; always runs to completion
pub const MIN_DEPTH: u32 = 2;

/// Default deepest iterative-deepening pass
pub const MAX_DEPTH: u32 = 4;

/// Extra plies granted when the opponent is already in check
pub const CHECK_EXTENSION: u32 = 1;

/// Default thinking time per move in seconds
pub const DEFAULT_THINK_SECS: f32 = 5.0;

/// FEN of the standard starting position (Black on top, rows 0..=9)
pub const START_FEN: &str = "rnbakabnr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/9/RNBAKABNR";
