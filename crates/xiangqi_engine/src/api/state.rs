//! Game state queries and AI move generation
//!
//! Functions for querying game state and generating AI moves. None of them
//! mutate the state they are given.

use crate::evaluation::EvalWeights;
use crate::move_gen::{self, has_any_legal_move};
use crate::search::{iterative_deepening, SearchConfig, SearchResult};
use crate::types::*;
use std::time::Duration;
use tracing::info;

/// Whether `color`'s General is attacked or faces the other General
pub fn is_in_check(state: &GameState, color: Color) -> bool {
    move_gen::is_in_check(&state.board, color)
}

/// Whether `color` is in check with no way out
pub fn is_checkmate(state: &GameState, color: Color) -> bool {
    move_gen::is_checkmate(&state.board, color)
}

/// Current game state for the side to move (playing, checkmate, stalemate)
pub fn game_status(state: &GameState) -> GameStatus {
    let color = state.turn;
    if has_any_legal_move(&state.board, color) {
        return GameStatus::InProgress;
    }
    let winner = color.opponent();
    if move_gen::is_in_check(&state.board, color) {
        GameStatus::Checkmate { winner }
    } else {
        GameStatus::Stalemate { winner }
    }
}

/// Get AI's response to the current position within `time_budget`
///
/// Searches a copy of the board for the side to move; apply the result with
/// [`attempt_move`](super::attempt_move).
pub fn ai_select_move(state: &GameState, time_budget: Duration) -> Option<Move> {
    let config = SearchConfig {
        think_time: time_budget,
        ..SearchConfig::default()
    };
    ai_search(state, &config).map(|result| result.mv)
}

/// Full search report for the side to move
pub fn ai_search(state: &GameState, config: &SearchConfig) -> Option<SearchResult> {
    let result = iterative_deepening(&state.board, state.turn, config, &EvalWeights::default())?;
    info!(
        color = %state.turn,
        mv = %result.mv,
        score = result.score,
        depth = result.depth_reached,
        nodes = result.stats.nodes,
        elapsed = ?result.stats.elapsed,
        "AI selected move"
    );
    Some(result)
}
