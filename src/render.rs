//! Terminal board rendering

use std::collections::BTreeSet;
use std::fmt::Write;
use xiangqi_engine::constants::{BLACK_RIVER_EDGE, COLS, ROWS};
use xiangqi_engine::{Board, Color, Move, Piece, PieceKind, Position};

const RED: &str = "\x1b[31m";
const HIGHLIGHT: &str = "\x1b[7m";
const RESET: &str = "\x1b[0m";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RenderStyle {
    pub chinese: bool,
    pub colored: bool,
}

impl RenderStyle {
    /// FEN letters, no escape codes
    pub fn plain() -> Self {
        Self {
            chinese: false,
            colored: false,
        }
    }
}

pub fn chinese_char(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::Red, PieceKind::General) => '帥',
        (Color::Red, PieceKind::Advisor) => '仕',
        (Color::Red, PieceKind::Elephant) => '相',
        (Color::Red, PieceKind::Horse) => '傌',
        (Color::Red, PieceKind::Chariot) => '俥',
        (Color::Red, PieceKind::Cannon) => '炮',
        (Color::Red, PieceKind::Pawn) => '兵',
        (Color::Black, PieceKind::General) => '將',
        (Color::Black, PieceKind::Advisor) => '士',
        (Color::Black, PieceKind::Elephant) => '象',
        (Color::Black, PieceKind::Horse) => '馬',
        (Color::Black, PieceKind::Chariot) => '車',
        (Color::Black, PieceKind::Cannon) => '砲',
        (Color::Black, PieceKind::Pawn) => '卒',
    }
}

/// Two-column cell for a piece
pub fn piece_cell(piece: Piece, style: RenderStyle) -> String {
    let text = if style.chinese {
        chinese_char(piece).to_string()
    } else {
        format!("{} ", piece.fen_char())
    };
    if style.colored && piece.color == Color::Red {
        format!("{RED}{text}{RESET}")
    } else {
        text
    }
}

/// Board with row/column labels and a river line
///
/// Empty `marked` points are drawn as `*` and the origin of `last` as `o`. With
/// color enabled, marked pieces and the destination of `last` are inverted.
pub fn render_board(
    board: &Board,
    style: RenderStyle,
    marked: &BTreeSet<Position>,
    last: Option<Move>,
) -> String {
    let mut out = String::new();
    let header: String = ('a'..='i').map(|c| format!("{c} ")).collect();
    let _ = writeln!(out, "   {header}");

    for row in 0..ROWS {
        let _ = write!(out, "{row}  ");
        for col in 0..COLS {
            let pos = Position::new(row, col);
            let piece = board.get(pos);
            let cell = match piece {
                Some(piece) => piece_cell(piece, style),
                None if marked.contains(&pos) => "* ".to_string(),
                None if last.is_some_and(|mv| mv.from == pos) => "o ".to_string(),
                None => ". ".to_string(),
            };
            let emphasize = piece.is_some()
                && (marked.contains(&pos) || last.is_some_and(|mv| mv.to == pos));
            if style.colored && emphasize {
                let _ = write!(out, "{HIGHLIGHT}{cell}{RESET}");
            } else {
                out.push_str(&cell);
            }
        }
        let _ = writeln!(out, " {row}");
        if row == BLACK_RIVER_EDGE {
            let _ = writeln!(out, "   ~~~~~~~ river ~~~~~~~");
        }
    }
    let _ = writeln!(out, "   {header}");
    out
}
