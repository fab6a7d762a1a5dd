//! Move legality and move generation
//!
//! [`is_valid_move`] is the single source of truth for piece geometry and occupancy.
//! It dispatches on [`PieceKind`] to one rule per kind. Generators enumerate a
//! small candidate set per piece and keep the candidates `is_valid_move` accepts,
//! so generated moves and validated moves can never disagree.
//!
//! Legal moves additionally must not leave the mover's General in check (including
//! facing generals) and never capture a General.
//!
//! ## Module Organization
//!
//! - `general`, `advisor`, `elephant`, `horse`, `chariot`, `cannon`, `pawn` - per-kind rules
//! - `lines` - rank/file scanning shared by Chariot and Cannon
//! - `attack` - attack, check and checkmate detection

mod advisor;
pub mod attack;
mod cannon;
mod chariot;
mod elephant;
pub(crate) mod general;
mod horse;
mod lines;
mod pawn;

pub use advisor::is_valid_advisor_move;
pub use attack::{
    are_generals_facing, find_generals, general_position, is_checkmate, is_in_check,
    is_square_attacked,
};
pub use cannon::is_valid_cannon_move;
pub use chariot::is_valid_chariot_move;
pub use elephant::is_valid_elephant_move;
pub use general::is_valid_general_move;
pub use horse::is_valid_horse_move;
pub use pawn::is_valid_pawn_move;

use crate::board::Board;
use crate::search::make_unmake::{make_move, unmake_move};
use crate::types::*;
use std::collections::BTreeSet;

/// Whether the piece on `from` may move to `to`
///
/// Checks geometry and occupancy only; self-check is not considered. Returns `false`
/// when `from` is empty or when `to` holds a piece of the mover's color.
pub fn is_valid_move(board: &Board, from: Position, to: Position) -> bool {
    let Some(piece) = board.get(from) else {
        return false;
    };
    if board.get(to).is_some_and(|target| target.color == piece.color) {
        return false;
    }
    reaches(board, piece, from, to)
}

/// Whether the piece on `from` bears on `to` regardless of who stands there
///
/// Used to count defenders: a friendly piece "covers" a square when it could
/// recapture there after an enemy lands on it.
pub fn covers(board: &Board, from: Position, to: Position) -> bool {
    match board.get(from) {
        Some(piece) => reaches(board, piece, from, to),
        None => false,
    }
}

fn reaches(board: &Board, piece: Piece, from: Position, to: Position) -> bool {
    if from == to {
        return false;
    }
    match piece.kind {
        PieceKind::General => is_valid_general_move(from, to, piece.color),
        PieceKind::Advisor => is_valid_advisor_move(from, to, piece.color),
        PieceKind::Elephant => is_valid_elephant_move(board, from, to, piece.color),
        PieceKind::Horse => is_valid_horse_move(board, from, to),
        PieceKind::Chariot => is_valid_chariot_move(board, from, to),
        PieceKind::Cannon => is_valid_cannon_move(board, from, to),
        PieceKind::Pawn => is_valid_pawn_move(from, to, piece.color),
    }
}

#[inline]
fn push_if_valid(board: &Board, from: Position, to: Position, moves: &mut Vec<Move>) {
    if is_valid_move(board, from, to) {
        moves.push(Move::new(from, to));
    }
}

/// Moves of one piece that pass [`is_valid_move`]
pub fn generate_piece_moves(board: &Board, from: Position, moves: &mut Vec<Move>) {
    let Some(piece) = board.get(from) else {
        return;
    };
    match piece.kind {
        PieceKind::General => general::generate_general_moves(board, from, moves),
        PieceKind::Advisor => advisor::generate_advisor_moves(board, from, moves),
        PieceKind::Elephant => elephant::generate_elephant_moves(board, from, moves),
        PieceKind::Horse => horse::generate_horse_moves(board, from, moves),
        PieceKind::Chariot => chariot::generate_chariot_moves(board, from, moves),
        PieceKind::Cannon => cannon::generate_cannon_moves(board, from, moves),
        PieceKind::Pawn => pawn::generate_pawn_moves(board, from, piece.color, moves),
    }
}

/// All moves for `color` that obey geometry and occupancy, self-check ignored
pub fn generate_pseudo_legal_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut moves = Vec::with_capacity(64);
    for (from, _) in board.pieces_of(color) {
        generate_piece_moves(board, from, &mut moves);
    }
    moves
}

/// Whether applying `mv` leaves `color` in check; the board is restored before returning
pub(crate) fn leaves_in_check(board: &mut Board, mv: Move, color: Color) -> bool {
    let undo = make_move(board, mv);
    let in_check = is_in_check(board, color);
    unmake_move(board, mv, undo);
    in_check
}

#[inline]
pub(crate) fn captures_general(board: &Board, mv: Move) -> bool {
    board
        .get(mv.to)
        .is_some_and(|target| target.kind == PieceKind::General)
}

/// Full legality of `mv` for `color` on a board the caller owns exclusively
pub fn is_legal_move(board: &mut Board, mv: Move, color: Color) -> bool {
    board.get(mv.from).is_some_and(|piece| piece.color == color)
        && is_valid_move(board, mv.from, mv.to)
        && !captures_general(board, mv)
        && !leaves_in_check(board, mv, color)
}

/// All legal moves for `color`
pub fn generate_legal_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut scratch = board.clone();
    generate_pseudo_legal_moves(board, color)
        .into_iter()
        .filter(|&mv| !captures_general(board, mv) && !leaves_in_check(&mut scratch, mv, color))
        .collect()
}

/// Whether `color` has at least one legal move
pub fn has_any_legal_move(board: &Board, color: Color) -> bool {
    let mut scratch = board.clone();
    generate_pseudo_legal_moves(board, color)
        .into_iter()
        .any(|mv| !captures_general(board, mv) && !leaves_in_check(&mut scratch, mv, color))
}

/// Legal destinations of the piece on `from`; empty when `from` is empty
pub fn legal_destinations(board: &Board, from: Position) -> BTreeSet<Position> {
    let Some(piece) = board.get(from) else {
        return BTreeSet::new();
    };
    let mut candidates = Vec::new();
    generate_piece_moves(board, from, &mut candidates);

    let mut scratch = board.clone();
    candidates
        .into_iter()
        .filter(|&mv| {
            !captures_general(board, mv) && !leaves_in_check(&mut scratch, mv, piece.color)
        })
        .map(|mv| mv.to)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::START_FEN;

    fn board(fen: &str) -> Board {
        Board::from_fen(fen).unwrap()
    }

    /// Reference generator: every (piece, destination) pair accepted by `is_valid_move`
    fn brute_force_moves(board: &Board, color: Color) -> Vec<Move> {
        let mut moves = Vec::new();
        for (from, _) in board.pieces_of(color) {
            for to in Position::all() {
                if is_valid_move(board, from, to) {
                    moves.push(Move::new(from, to));
                }
            }
        }
        moves
    }

    fn assert_same_moves(mut a: Vec<Move>, mut b: Vec<Move>) {
        let key = |m: &Move| (m.from, m.to);
        a.sort_by_key(key);
        b.sort_by_key(key);
        assert_eq!(a, b);
    }

    #[test]
    fn test_opening_move_count() {
        let board = Board::initial();
        // 44 is the well-known opening move count for each side
        assert_eq!(generate_legal_moves(&board, Color::Red).len(), 44);
        assert_eq!(generate_legal_moves(&board, Color::Black).len(), 44);
    }

    #[test]
    fn test_generator_matches_brute_force_scan() {
        let fens = [
            START_FEN,
            "r1bakab1r/9/1cn4c1/p1p1p3p/6p2/2P6/P3P1P1P/1C2C1N2/9/RNBAKAB1R",
            "3k5/4a4/4ba3/4N4/2b6/9/4c4/4B4/3KA4/2C6",
        ];
        for fen in fens {
            let board = board(fen);
            for color in Color::ALL {
                assert_same_moves(
                    generate_pseudo_legal_moves(&board, color),
                    brute_force_moves(&board, color),
                );
            }
        }
    }

    #[test]
    fn test_never_captures_own_piece() {
        let board = Board::initial();
        for color in Color::ALL {
            for (from, _) in board.pieces_of(color) {
                for (to, _) in board.pieces_of(color) {
                    assert!(!is_valid_move(&board, from, to), "{from} -> {to}");
                }
            }
        }
    }

    #[test]
    fn test_empty_origin_is_never_valid() {
        let board = Board::initial();
        assert!(!is_valid_move(&board, Position::new(4, 4), Position::new(5, 4)));
        assert!(legal_destinations(&board, Position::new(4, 4)).is_empty());
    }

    #[test]
    fn test_legal_destinations_of_opening_cannon() {
        let board = Board::initial();
        let destinations = legal_destinations(&board, Position::new(7, 1));
        // Five up the file, the jump onto the horse, six along the rank, one down
        assert!(destinations.contains(&Position::new(0, 1)));
        assert!(destinations.contains(&Position::new(7, 4)));
        assert!(destinations.contains(&Position::new(8, 1)));
        assert!(!destinations.contains(&Position::new(9, 1)));
        assert_eq!(destinations.len(), 12);
    }

    #[test]
    fn test_legal_destinations_are_idempotent() {
        let board = Board::initial();
        let from = Position::new(9, 1);
        assert_eq!(legal_destinations(&board, from), legal_destinations(&board, from));
    }

    #[test]
    fn test_pinned_piece_cannot_expose_general() {
        // Red chariot on e5 shields the red general from the black chariot on e0
        let board = board("4r4/3k5/9/9/9/4R4/9/9/9/4K4");
        let destinations = legal_destinations(&board, Position::new(5, 4));
        assert!(destinations.iter().all(|to| to.col() == 4));
        assert!(destinations.contains(&Position::new(0, 4)));
    }

    #[test]
    fn test_moving_into_facing_generals_is_illegal() {
        // The red general may not step onto the open e-file facing the black general
        let mut board = board("4k4/9/9/9/9/9/9/9/9/3K5");
        let onto_file = Move::new(Position::new(9, 3), Position::new(9, 4));
        assert!(is_valid_move(&board, onto_file.from, onto_file.to));
        assert!(!is_legal_move(&mut board, onto_file, Color::Red));

        let up = Move::new(Position::new(9, 3), Position::new(8, 3));
        assert!(is_legal_move(&mut board, up, Color::Red));
    }

    #[test]
    fn test_is_legal_move_restores_board() {
        let mut board = Board::initial();
        let before = board.clone();
        let mv = Move::new(Position::new(7, 1), Position::new(7, 4));
        assert!(is_legal_move(&mut board, mv, Color::Red));
        assert_eq!(board, before);
    }

    #[test]
    fn test_wrong_color_is_not_legal() {
        let mut board = Board::initial();
        let mv = Move::new(Position::new(3, 0), Position::new(4, 0));
        assert!(!is_legal_move(&mut board, mv, Color::Red));
        assert!(is_legal_move(&mut board, mv, Color::Black));
    }

    #[test]
    fn test_covers_counts_protected_friend() {
        let board = Board::initial();
        // The a9 chariot protects the b9 horse along the back rank
        assert!(covers(&board, Position::new(9, 0), Position::new(9, 1)));
        assert!(!is_valid_move(&board, Position::new(9, 0), Position::new(9, 1)));
    }
}
