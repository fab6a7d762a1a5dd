//! Iterative deepening search
//!
//! Runs full-width passes at increasing depth and keeps the best move of the
//! deepest pass that finished. The minimum-depth pass always runs to completion;
//! deeper passes check the time budget before each root move and are thrown away
//! when it runs out.

use super::alphabeta::SearchContext;
use super::ordering::order_root_moves;
use super::{SearchConfig, SearchResult};
use crate::board::Board;
use crate::constants::*;
use crate::evaluation::EvalWeights;
use crate::move_gen::{generate_legal_moves, is_in_check};
use crate::types::*;
use instant::Instant;
use std::time::Duration;
use tracing::{debug, warn};

/// Best move and score of one finished pass
struct Pass {
    mv: Move,
    score: i32,
    depth: u32,
}

/// One full pass over `moves`; `None` when the budget expired first
fn search_pass(
    ctx: &mut SearchContext<'_>,
    moves: &[Move],
    depth: u32,
    color: Color,
    budget: Option<(Instant, Duration)>,
) -> Option<Pass> {
    let mut best: Option<Pass> = None;
    for &mv in moves {
        if let Some((start, limit)) = budget {
            if start.elapsed() >= limit {
                return None;
            }
        }
        let alpha = best.as_ref().map_or(-AB_INF, |pass| pass.score);
        let score = ctx.search_root_move(mv, depth, alpha, AB_INF, color);
        if best.as_ref().map_or(true, |pass| score > pass.score) {
            best = Some(Pass { mv, score, depth });
        }
    }
    best
}

/// Iterative deepening search
///
/// Returns `None` only when `color` has no legal move. The caller's board is
/// never touched; the search runs on its own copy.
pub fn iterative_deepening(
    board: &Board,
    color: Color,
    config: &SearchConfig,
    weights: &EvalWeights,
) -> Option<SearchResult> {
    let start = Instant::now();

    let mut moves = generate_legal_moves(board, color);
    if moves.is_empty() {
        debug!(%color, "no legal moves to search");
        return None;
    }

    let mut ctx = SearchContext::new(board.clone(), weights);
    order_root_moves(&mut ctx.board, color, &mut moves);

    let max_depth = if is_in_check(board, color.opponent()) {
        config.max_depth + config.check_extension
    } else {
        config.max_depth
    }
    .max(1);
    let min_depth = config.min_depth.clamp(1, max_depth);

    let mut completed: Option<Pass> = None;
    for depth in min_depth..=max_depth {
        let budget = (depth > min_depth).then_some((start, config.think_time));
        let Some(pass) = search_pass(&mut ctx, &moves, depth, color, budget) else {
            warn!(
                depth,
                elapsed = ?start.elapsed(),
                "time budget ran out, discarding partial pass"
            );
            break;
        };

        debug!(
            depth,
            score = pass.score,
            best = %pass.mv,
            nodes = ctx.stats.nodes,
            cutoffs = ctx.stats.cutoffs,
            "completed pass"
        );

        // Search the previous best first on the next pass
        if let Some(index) = moves.iter().position(|&mv| mv == pass.mv) {
            moves[..=index].rotate_right(1);
        }

        let forced = pass.score.abs() >= MATE_THRESHOLD;
        completed = Some(pass);
        if forced {
            break;
        }
        if start.elapsed() >= config.think_time {
            break;
        }
    }

    debug_assert_eq!(ctx.board, *board, "search must restore the board");

    let pass = completed?;
    let mut stats = ctx.stats;
    stats.elapsed = start.elapsed();
    Some(SearchResult {
        mv: pass.mv,
        score: pass.score,
        depth_reached: pass.depth,
        stats,
    })
}

/// Choose a move for `color` within `time_budget` using default settings
pub fn choose_move(board: &Board, color: Color, time_budget: Duration) -> Option<Move> {
    let config = SearchConfig {
        think_time: time_budget,
        ..SearchConfig::default()
    };
    iterative_deepening(board, color, &config, &EvalWeights::default()).map(|result| result.mv)
}

/// Exactly one pass at `depth`, ignoring time
pub fn search_fixed_depth(
    board: &Board,
    color: Color,
    depth: u32,
    weights: &EvalWeights,
) -> Option<SearchResult> {
    let config = SearchConfig {
        think_time: Duration::MAX,
        min_depth: depth,
        max_depth: depth,
        check_extension: 0,
    };
    iterative_deepening(board, color, &config, weights)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_gen::is_legal_move;

    fn board(fen: &str) -> Board {
        Board::from_fen(fen).unwrap()
    }

    #[test]
    fn test_finds_mate_in_one() {
        let board = board("4k4/R8/9/9/9/9/9/9/7R1/3K5");
        let result = search_fixed_depth(&board, Color::Red, 2, &EvalWeights::default()).unwrap();
        assert_eq!(result.mv, Move::new(Position::new(8, 7), Position::new(0, 7)));
        assert!(result.score >= MATE_THRESHOLD);
    }

    #[test]
    fn test_no_legal_move_returns_none() {
        let board = board("3k5/9/9/9/9/9/9/9/r8/4K3r");
        assert!(choose_move(&board, Color::Red, Duration::from_millis(10)).is_none());
    }

    #[test]
    fn test_tiny_budget_still_completes_minimum_depth() {
        let board = board("3k5/9/9/9/9/R3r4/9/9/9/3BKB3");
        let config = SearchConfig {
            think_time: Duration::ZERO,
            ..SearchConfig::default()
        };
        let result = iterative_deepening(&board, Color::Red, &config, &EvalWeights::default())
            .unwrap();
        assert_eq!(result.depth_reached, 2);
        assert!(is_legal_move(&mut board.clone(), result.mv, Color::Red));
    }

    #[test]
    fn test_capture_escape_is_found() {
        // Red's only legal reply to the chariot check is a5xe5
        let board = board("3k5/9/9/9/9/R3r4/9/9/9/3BKB3");
        let mv = choose_move(&board, Color::Red, Duration::ZERO).unwrap();
        assert_eq!(mv, Move::new(Position::new(5, 0), Position::new(5, 4)));
    }

    #[test]
    fn test_stats_are_recorded() {
        let board = board("3k5/9/9/9/9/R3r4/9/9/9/3BKB3");
        let result = search_fixed_depth(&board, Color::Black, 2, &EvalWeights::default()).unwrap();
        assert!(result.stats.nodes > 0);
        assert_eq!(result.depth_reached, 2);
    }

    fn unlimited(min_depth: u32, max_depth: u32, check_extension: u32) -> SearchConfig {
        SearchConfig {
            think_time: Duration::MAX,
            min_depth,
            max_depth,
            check_extension,
        }
    }

    #[test]
    fn test_check_extension_deepens_when_opponent_in_check() {
        // The red chariot on e5 checks the black general on e0
        let board = board("4k4/9/9/9/9/4R4/9/9/9/3K5");
        assert!(is_in_check(&board, Color::Black));
        let config = unlimited(2, 2, 1);
        let result =
            iterative_deepening(&board, Color::Red, &config, &EvalWeights::default()).unwrap();
        assert_eq!(result.depth_reached, 3);
    }

    #[test]
    fn test_no_extension_without_check() {
        let board = board("4k4/9/9/9/9/3R5/9/9/9/3K5");
        assert!(!is_in_check(&board, Color::Black));
        let config = unlimited(2, 2, 1);
        let result =
            iterative_deepening(&board, Color::Red, &config, &EvalWeights::default()).unwrap();
        assert_eq!(result.depth_reached, 2);
    }

    #[test]
    fn test_expired_budget_discards_pass() {
        let board = Board::initial();
        let weights = EvalWeights::default();
        let moves = generate_legal_moves(&board, Color::Red);
        let mut ctx = SearchContext::new(board.clone(), &weights);

        let expired = Some((Instant::now(), Duration::ZERO));
        assert!(search_pass(&mut ctx, &moves, 3, Color::Red, expired).is_none());
        assert!(search_pass(&mut ctx, &moves, 1, Color::Red, None).is_some());
        assert_eq!(ctx.board, board);
    }

    #[test]
    fn test_short_budget_keeps_minimum_depth_result() {
        let board = Board::initial();
        let config = SearchConfig {
            think_time: Duration::from_micros(5),
            min_depth: 2,
            max_depth: 4,
            check_extension: 1,
        };
        let result = iterative_deepening(&board, Color::Red, &config, &EvalWeights::default())
            .unwrap();
        assert_eq!(result.depth_reached, 2);
        assert!(is_legal_move(&mut board.clone(), result.mv, Color::Red));
    }
}
