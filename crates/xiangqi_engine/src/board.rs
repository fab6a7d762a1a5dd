//! Board container
//!
//! A dumb 90-slot grid of optional pieces. No rule is enforced here; legality lives
//! in [`crate::move_gen`]. Boards are small `Clone` values, so callers that need an
//! isolated copy (history snapshots, off-thread search) simply clone.

use crate::constants::*;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::types::*;
use std::fmt;

/// Back rank from column 0 to 8, identical for both sides
const BACK_RANK: [PieceKind; COLS as usize] = [
    PieceKind::Chariot,
    PieceKind::Horse,
    PieceKind::Elephant,
    PieceKind::Advisor,
    PieceKind::General,
    PieceKind::Advisor,
    PieceKind::Elephant,
    PieceKind::Horse,
    PieceKind::Chariot,
];

const CANNON_COLS: [i8; 2] = [1, 7];
const PAWN_COLS: [i8; 5] = [0, 2, 4, 6, 8];

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Piece>; SQUARES],
}

impl Board {
    /// Board with no pieces
    pub fn empty() -> Self {
        Self {
            squares: [None; SQUARES],
        }
    }

    /// Traditional starting position
    pub fn initial() -> Self {
        let mut board = Self::empty();
        for (color, back, cannons, pawns) in [
            (Color::Black, 0, 2, 3),
            (Color::Red, ROWS - 1, ROWS - 3, ROWS - 4),
        ] {
            for (col, &kind) in BACK_RANK.iter().enumerate() {
                board.set(Position::new(back, col as i8), Some(Piece::new(kind, color)));
            }
            for col in CANNON_COLS {
                board.set(
                    Position::new(cannons, col),
                    Some(Piece::new(PieceKind::Cannon, color)),
                );
            }
            for col in PAWN_COLS {
                board.set(
                    Position::new(pawns, col),
                    Some(Piece::new(PieceKind::Pawn, color)),
                );
            }
        }
        board
    }

    #[inline]
    pub fn get(&self, pos: Position) -> Option<Piece> {
        self.squares[pos.index()]
    }

    #[inline]
    pub fn set(&mut self, pos: Position, piece: Option<Piece>) {
        self.squares[pos.index()] = piece;
    }

    #[inline]
    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.squares[pos.index()].is_none()
    }

    /// Independent copy of the current contents
    pub fn snapshot(&self) -> Board {
        self.clone()
    }

    /// Occupied squares in row-major order
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(index, piece)| piece.map(|p| (Position::from_index(index), p)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    pub fn piece_count(&self) -> usize {
        self.squares.iter().flatten().count()
    }

    /// Parses the board field of a Xiangqi FEN, starting at row 0 (Black's back rank)
    pub fn from_fen(fen: &str) -> ChessEngineResult<Self> {
        let invalid = |reason: String| ChessEngineError::InvalidFen { reason };
        let placement = fen.split_whitespace().next().unwrap_or_default();
        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != ROWS as usize {
            return Err(invalid(format!("expected {ROWS} rows, found {}", rows.len())));
        }

        let mut board = Self::empty();
        for (row, text) in rows.iter().enumerate() {
            let mut col = 0i8;
            for c in text.chars() {
                if let Some(skip) = c.to_digit(10) {
                    if skip as i8 > COLS - col {
                        return Err(invalid(format!("row {row} is too long")));
                    }
                    col += skip as i8;
                    continue;
                }
                let piece =
                    Piece::from_fen_char(c).ok_or_else(|| invalid(format!("unknown piece {c:?}")))?;
                if col >= COLS {
                    return Err(invalid(format!("row {row} is too long")));
                }
                board.set(Position::new(row as i8, col), Some(piece));
                col += 1;
            }
            if col != COLS {
                return Err(invalid(format!("row {row} has {col} columns")));
            }
        }
        Ok(board)
    }

    /// Board field of a Xiangqi FEN
    pub fn fen(&self) -> String {
        let mut fen = String::new();
        for row in 0..ROWS {
            if row > 0 {
                fen.push('/');
            }
            let mut empty = 0;
            for col in 0..COLS {
                match self.get(Position::new(row, col)) {
                    Some(piece) => {
                        if empty > 0 {
                            fen.push_str(&empty.to_string());
                            empty = 0;
                        }
                        fen.push(piece.fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                fen.push_str(&empty.to_string());
            }
        }
        fen
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.fen())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..ROWS {
            write!(f, "{row} ")?;
            for col in 0..COLS {
                match self.get(Position::new(row, col)) {
                    Some(piece) => write!(f, " {piece}")?,
                    None => write!(f, " .")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "  ")?;
        for c in 'a'..='i' {
            write!(f, " {c}")?;
        }
        writeln!(f)
    }
}
