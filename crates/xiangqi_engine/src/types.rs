//! # Engine Core Types
//!
//! ## Pieces
//!
//! A [`Piece`] is a plain product of [`PieceKind`] and [`Color`]. Two pieces with the same
//! kind and color are interchangeable; the board never tracks piece identity.
//!
//! ## Positions
//!
//! A [`Position`] is an intersection `(row, col)` with `row ∈ [0, 10)` and `col ∈ [0, 9)`.
//! Constructing an out-of-bounds position with [`Position::new`] is a caller bug and panics;
//! untrusted input goes through [`Position::try_new`] or `str::parse`.
//!
//! Text notation is the column letter followed by the row digit, so `e9` is Red's General
//! in the starting position and `e0` is Black's.
//!
//! ## Game State
//!
//! [`GameState`] bundles the board, the side to move and whether the game is still being
//! played. Only the `api` functions mutate it.

use crate::board::Board;
use crate::constants::*;
use crate::error::ChessEngineError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Side color. Red moves first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::Red, Color::Black];

    #[inline]
    pub fn opponent(self) -> Color {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }

    /// Sign applied to Black-positive static scores to get this side's perspective
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Color::Red => -1,
            Color::Black => 1,
        }
    }

    /// Row delta of a forward step
    #[inline]
    pub fn forward(self) -> i8 {
        match self {
            Color::Red => -1,
            Color::Black => 1,
        }
    }

    /// Whether `row` lies on this side's half of the river
    #[inline]
    pub fn owns_row(self, row: i8) -> bool {
        match self {
            Color::Red => row >= RED_RIVER_EDGE,
            Color::Black => row <= BLACK_RIVER_EDGE,
        }
    }

    /// Rows advanced from this side's back rank
    #[inline]
    pub fn advancement(self, row: i8) -> i8 {
        match self {
            Color::Red => ROWS - 1 - row,
            Color::Black => row,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => write!(f, "red"),
            Color::Black => write!(f, "black"),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    General,
    Advisor,
    Elephant,
    Horse,
    Chariot,
    Cannon,
    Pawn,
}

impl PieceKind {
    #[inline]
    pub fn value(self) -> i32 {
        piece_value(self)
    }

    /// Chariot, Horse and Cannon: the pieces rewarded for activity
    #[inline]
    pub fn is_major(self) -> bool {
        matches!(self, PieceKind::Chariot | PieceKind::Horse | PieceKind::Cannon)
    }

    /// Lowercase FEN letter (WXF convention)
    pub fn fen_char(self) -> char {
        match self {
            PieceKind::General => 'k',
            PieceKind::Advisor => 'a',
            PieceKind::Elephant => 'b',
            PieceKind::Horse => 'n',
            PieceKind::Chariot => 'r',
            PieceKind::Cannon => 'c',
            PieceKind::Pawn => 'p',
        }
    }

    pub fn from_fen_char(c: char) -> Option<PieceKind> {
        let kind = match c.to_ascii_lowercase() {
            'k' => PieceKind::General,
            'a' => PieceKind::Advisor,
            'b' | 'e' => PieceKind::Elephant,
            'n' | 'h' => PieceKind::Horse,
            'r' => PieceKind::Chariot,
            'c' => PieceKind::Cannon,
            'p' => PieceKind::Pawn,
            _ => return None,
        };
        Some(kind)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    #[inline]
    pub fn value(self) -> i32 {
        self.kind.value()
    }

    /// FEN letter: uppercase for Red, lowercase for Black
    pub fn fen_char(self) -> char {
        let c = self.kind.fen_char();
        match self.color {
            Color::Red => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    pub fn from_fen_char(c: char) -> Option<Piece> {
        let kind = PieceKind::from_fen_char(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::Red
        } else {
            Color::Black
        };
        Some(Piece::new(kind, color))
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fen_char())
    }
}

/// A board intersection
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    row: i8,
    col: i8,
}

impl Position {
    /// Builds a position, panicking when out of bounds
    #[inline]
    pub fn new(row: i8, col: i8) -> Self {
        assert!(
            Self::in_bounds(row, col),
            "position ({row}, {col}) is off the board"
        );
        Self { row, col }
    }

    #[inline]
    pub fn try_new(row: i32, col: i32) -> Option<Self> {
        if row < 0 || col < 0 || row >= ROWS as i32 || col >= COLS as i32 {
            return None;
        }
        Some(Self {
            row: row as i8,
            col: col as i8,
        })
    }

    #[inline]
    pub fn in_bounds(row: i8, col: i8) -> bool {
        (0..ROWS).contains(&row) && (0..COLS).contains(&col)
    }

    #[inline]
    pub fn from_index(index: usize) -> Self {
        assert!(index < SQUARES, "square index {index} is off the board");
        Self {
            row: (index / COLS as usize) as i8,
            col: (index % COLS as usize) as i8,
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        self.row as usize * COLS as usize + self.col as usize
    }

    #[inline]
    pub fn row(self) -> i8 {
        self.row
    }

    #[inline]
    pub fn col(self) -> i8 {
        self.col
    }

    /// Shifted position, or `None` when it leaves the board
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        Self::try_new((self.row + d_row) as i32, (self.col + d_col) as i32)
    }

    /// Every intersection, row-major from Black's back rank
    pub fn all() -> impl Iterator<Item = Position> {
        (0..SQUARES).map(Position::from_index)
    }

    /// Whether this point lies inside `color`'s palace
    #[inline]
    pub fn in_palace(self, color: Color) -> bool {
        let rows = match color {
            Color::Red => RED_PALACE_ROWS,
            Color::Black => BLACK_PALACE_ROWS,
        };
        rows.contains(&self.row) && PALACE_COLS.contains(&self.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col as u8) as char, self.row)
    }
}

impl FromStr for Position {
    type Err = ChessEngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ChessEngineError::InvalidSquare {
            input: s.to_owned(),
        };
        let mut chars = s.trim().chars();
        let file = chars.next().ok_or_else(invalid)?.to_ascii_lowercase();
        let rank = chars.next().ok_or_else(invalid)?;
        if chars.next().is_some() || !file.is_ascii_lowercase() {
            return Err(invalid());
        }
        let col = file as i32 - 'a' as i32;
        let row = rank.to_digit(10).ok_or_else(invalid)? as i32;
        Position::try_new(row, col).ok_or_else(invalid)
    }
}

/// A candidate or committed move. Captures are implicit in the destination.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Position,
    pub to: Position,
}

impl Move {
    #[inline]
    pub fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// Result of a finished or ongoing game
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    /// The loser is in check and has no move out of it
    Checkmate { winner: Color },
    /// The side to move has no legal move without being in check; it loses
    Stalemate { winner: Color },
}

impl GameStatus {
    pub fn winner(self) -> Option<Color> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Checkmate { winner } | GameStatus::Stalemate { winner } => Some(winner),
        }
    }
}

/// What a committed move did
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub mv: Move,
    pub piece: Piece,
    pub captured: Option<Piece>,
    /// The opponent is now in check
    pub check: bool,
    /// The opponent is now checkmated
    pub checkmate: bool,
    pub status: GameStatus,
}

/// Complete game state owned by the engine
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) turn: Color,
    pub(crate) in_progress: bool,
}

impl GameState {
    /// Starts from an arbitrary position with `turn` to move
    pub fn from_board(board: Board, turn: Color) -> Self {
        Self {
            board,
            turn,
            in_progress: true,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn in_progress(&self) -> bool {
        self.in_progress
    }

    /// Owned copy of the board for history or off-thread search
    pub fn snapshot(&self) -> Board {
        self.board.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_index_roundtrip() {
        for index in 0..SQUARES {
            assert_eq!(Position::from_index(index).index(), index);
        }
    }

    #[test]
    fn test_position_offset_stays_on_board() {
        let corner = Position::new(0, 0);
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(0, -1), None);
        assert_eq!(corner.offset(1, 1), Some(Position::new(1, 1)));
        assert_eq!(Position::new(9, 8).offset(1, 0), None);
    }

    #[test]
    #[should_panic]
    fn test_out_of_bounds_position_panics() {
        Position::new(10, 0);
    }

    #[test]
    fn test_position_notation() {
        let pos: Position = "e9".parse().unwrap();
        assert_eq!(pos, Position::new(9, 4));
        assert_eq!(pos.to_string(), "e9");
        assert!("j0".parse::<Position>().is_err());
        assert!("a".parse::<Position>().is_err());
        assert!("a10".parse::<Position>().is_err());
    }

    #[test]
    fn test_palace_membership() {
        assert!(Position::new(0, 4).in_palace(Color::Black));
        assert!(!Position::new(0, 4).in_palace(Color::Red));
        assert!(Position::new(7, 3).in_palace(Color::Red));
        assert!(!Position::new(7, 2).in_palace(Color::Red));
        assert!(!Position::new(3, 4).in_palace(Color::Black));
    }

    #[test]
    fn test_color_geometry() {
        assert_eq!(Color::Red.forward(), -1);
        assert_eq!(Color::Black.forward(), 1);
        assert!(Color::Red.owns_row(5));
        assert!(!Color::Red.owns_row(4));
        assert!(Color::Black.owns_row(4));
        assert_eq!(Color::Red.advancement(9), 0);
        assert_eq!(Color::Black.advancement(9), 9);
    }

    #[test]
    fn test_fen_chars() {
        let horse = Piece::new(PieceKind::Horse, Color::Red);
        assert_eq!(horse.fen_char(), 'N');
        assert_eq!(Piece::from_fen_char('N'), Some(horse));
        assert_eq!(
            Piece::from_fen_char('b'),
            Some(Piece::new(PieceKind::Elephant, Color::Black))
        );
        assert_eq!(Piece::from_fen_char('x'), None);
    }
}
