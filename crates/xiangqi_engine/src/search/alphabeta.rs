//! Alpha-beta search with negamax
//!
//! Recursive fail-soft negamax over an owned board. Moves are applied in place
//! and undone right after the child returns, before any bound update or cutoff,
//! so every exit path leaves the board as it was found.

use super::make_unmake::{make_move, unmake_move};
use super::ordering::order_moves;
use super::SearchStats;
use crate::board::Board;
use crate::constants::*;
use crate::evaluation::{evaluate, EvalWeights};
use crate::move_gen::{captures_general, generate_pseudo_legal_moves, is_in_check};
use crate::types::*;

/// Exclusive search state: the board being mutated plus counters
pub(crate) struct SearchContext<'w> {
    pub board: Board,
    pub stats: SearchStats,
    weights: &'w EvalWeights,
}

impl<'w> SearchContext<'w> {
    pub fn new(board: Board, weights: &'w EvalWeights) -> Self {
        Self {
            board,
            stats: SearchStats::default(),
            weights,
        }
    }

    /// Static score from `color`'s perspective
    #[inline]
    fn static_score(&self, color: Color) -> i32 {
        color.sign() * evaluate(&self.board, self.weights)
    }

    /// Negamax alpha-beta to `depth` plies for `color` to move
    ///
    /// Self-check and General-capturing moves are skipped as they are met. A side
    /// with no legal move is mated (Xiangqi has no stalemate draw) and scores
    /// `-(MATE_SCORE - ply)`.
    pub fn alphabeta(
        &mut self,
        depth: u32,
        ply: u32,
        mut alpha: i32,
        beta: i32,
        color: Color,
    ) -> i32 {
        self.stats.nodes += 1;

        if depth == 0 {
            return self.static_score(color);
        }

        let mut moves = generate_pseudo_legal_moves(&self.board, color);
        order_moves(&self.board, &mut moves);

        let mut best = -AB_INF;
        let mut any_legal = false;

        for mv in moves {
            if captures_general(&self.board, mv) {
                continue;
            }
            let undo = make_move(&mut self.board, mv);
            if is_in_check(&self.board, color) {
                unmake_move(&mut self.board, mv, undo);
                continue;
            }
            any_legal = true;

            let score = -self.alphabeta(depth - 1, ply + 1, -beta, -alpha, color.opponent());
            unmake_move(&mut self.board, mv, undo);

            best = best.max(score);
            alpha = alpha.max(score);
            if alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }

        if !any_legal {
            return -(MATE_SCORE - ply as i32);
        }
        best
    }

    /// Score the root move `mv` to `depth` plies inside the window `(alpha, beta)`
    pub fn search_root_move(
        &mut self,
        mv: Move,
        depth: u32,
        alpha: i32,
        beta: i32,
        color: Color,
    ) -> i32 {
        let undo = make_move(&mut self.board, mv);
        let score = -self.alphabeta(depth.saturating_sub(1), 1, -beta, -alpha, color.opponent());
        unmake_move(&mut self.board, mv, undo);
        score
    }
}
