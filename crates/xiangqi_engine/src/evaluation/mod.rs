//! Static position evaluation
//!
//! Produces a signed score of a position; positive favors Black (the side the
//! computer plays by default). Callers searching for Red negate it.
//!
//! The score is the sum of:
//! - Material (piece values from [`crate::constants`])
//! - Positional bonuses for active Chariots, Horses and Cannons
//! - Pawn advancement
//! - Per-piece safety (attackers against defenders)
//! - General safety (guards around the General, check penalty)
//! - Checkmate potential (pressure on the enemy General), weighted
//!
//! Every heuristic weight lives in [`EvalWeights`]. The function is total and
//! deterministic.
//!
//! ## Module Organization
//!
//! - `material` - Material balance
//! - `position` - Piece activity and pawn advancement
//! - `safety` - Attackers/defenders per piece
//! - `king_safety` - Guards and check around each General
//! - `checkmate` - Mating pressure and escape squares

mod checkmate;
mod king_safety;
mod material;
mod position;
mod safety;

pub use checkmate::{checkmate_potential, escape_squares};
pub use king_safety::king_safety;
pub use material::evaluate_material;
pub use position::{pawn_advancement, positional_bonus};
pub use safety::piece_safety;

use crate::board::Board;
use crate::types::Color;
use serde::{Deserialize, Serialize};

/// Tunable evaluation weights
///
/// Defaults reproduce the tuning the engine was calibrated with.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalWeights {
    /// Chariot/Horse/Cannon on files c..=g
    pub central_file_bonus: i32,
    /// Chariot/Horse/Cannon across the river
    pub penetration_bonus: i32,
    /// Pawn across the river
    pub pawn_crossed_base: i32,
    /// Per row a crossed pawn has advanced beyond the river edge
    pub pawn_crossed_step: i32,
    /// Per row a pawn still on its own half has advanced
    pub pawn_home_step: i32,

    pub defender_bonus: i32,
    /// Cheapest attacker is worth less than the attacked piece
    pub cheap_attacker_penalty: i32,
    /// Attacked with no defender
    pub undefended_penalty: i32,
    /// More defenders than attackers
    pub overdefended_bonus: i32,

    /// Per friendly piece around the General
    pub king_guard_bonus: i32,
    pub king_in_check_penalty: i32,
    pub missing_general_penalty: i32,

    /// Per own piece within two points of the enemy General
    pub attacker_presence: i32,
    pub major_attacker_bonus: i32,
    pub minor_attacker_bonus: i32,
    /// Per escape square the enemy General lacks
    pub escape_square_weight: i32,
    pub max_escape_squares: i32,
    pub enemy_in_check_bonus: i32,
    /// Multiplier on the checkmate-potential difference
    pub checkmate_potential_weight: i32,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            central_file_bonus: 20,
            penetration_bonus: 50,
            pawn_crossed_base: 50,
            pawn_crossed_step: 20,
            pawn_home_step: 10,

            defender_bonus: 20,
            cheap_attacker_penalty: 50,
            undefended_penalty: 200,
            overdefended_bonus: 100,

            king_guard_bonus: 30,
            king_in_check_penalty: 200,
            missing_general_penalty: 9999,

            attacker_presence: 30,
            major_attacker_bonus: 50,
            minor_attacker_bonus: 20,
            escape_square_weight: 50,
            max_escape_squares: 9,
            enemy_in_check_bonus: 200,
            checkmate_potential_weight: 2,
        }
    }
}

/// Full evaluation of `board`, positive favoring Black
pub fn evaluate(board: &Board, weights: &EvalWeights) -> i32 {
    let mut score = evaluate_material(board);

    for (pos, piece) in board.pieces() {
        let term = positional_bonus(piece, pos, weights)
            + pawn_advancement(piece, pos, weights)
            + piece_safety(board, pos, piece, weights);
        score += piece.color.sign() * term;
    }

    let pressure = checkmate_potential(board, Color::Black, weights)
        - checkmate_potential(board, Color::Red, weights);
    score += weights.checkmate_potential_weight * pressure;

    score += king_safety(board, Color::Black, weights) - king_safety(board, Color::Red, weights);

    score
}

/// [`evaluate`] with default weights
pub fn evaluate_position(board: &Board) -> i32 {
    evaluate(board, &EvalWeights::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Piece, Position};

    /// Flip the board top-to-bottom and swap colors
    fn mirror(board: &Board) -> Board {
        let mut mirrored = Board::empty();
        for (pos, piece) in board.pieces() {
            let to = Position::new(9 - pos.row(), pos.col());
            mirrored.set(to, Some(Piece::new(piece.kind, piece.color.opponent())));
        }
        mirrored
    }

    #[test]
    fn test_starting_position_is_balanced() {
        assert_eq!(evaluate_position(&Board::initial()), 0);
    }

    #[test]
    fn test_evaluation_is_color_symmetric() {
        let fens = [
            "r1bakab1r/9/1cn4c1/p1p1p3p/6p2/2P6/P3P1P1P/1C2C1N2/9/RNBAKAB1R",
            "3k5/4a4/4ba3/4N4/2b6/9/4c4/4B4/3KA4/2C6",
            "3k5/9/9/9/9/R3r4/9/9/9/3BKB3",
        ];
        for fen in fens {
            let board = Board::from_fen(fen).unwrap();
            assert_eq!(evaluate_position(&board), -evaluate_position(&mirror(&board)), "{fen}");
        }
    }

    #[test]
    fn test_evaluation_is_deterministic() {
        let board =
            Board::from_fen("r1bakab1r/9/1cn4c1/p1p1p3p/6p2/2P6/P3P1P1P/1C2C1N2/9/RNBAKAB1R")
                .unwrap();
        assert_eq!(evaluate_position(&board), evaluate_position(&board));
    }

    #[test]
    fn test_extra_chariot_favors_its_owner() {
        let mut board = Board::initial();
        board.set(Position::new(9, 0), None);
        assert!(evaluate_position(&board) > 0, "black is up a chariot");

        let mut board = Board::initial();
        board.set(Position::new(0, 8), None);
        assert!(evaluate_position(&board) < 0, "red is up a chariot");
    }

    #[test]
    fn test_weights_roundtrip_through_json() {
        let weights = EvalWeights {
            checkmate_potential_weight: 3,
            ..EvalWeights::default()
        };
        let json = serde_json::to_string(&weights).unwrap();
        let parsed: EvalWeights = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, weights);

        let partial: EvalWeights = serde_json::from_str(r#"{"defender_bonus": 5}"#).unwrap();
        assert_eq!(partial.defender_bonus, 5);
        assert_eq!(partial.undefended_penalty, 200);
    }
}
