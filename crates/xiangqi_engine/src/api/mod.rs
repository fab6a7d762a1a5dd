//! Public API for the Xiangqi engine
//!
//! Provides high-level functions for game management, move validation and AI move
//! selection over a [`GameState`](crate::types::GameState).
//!
//! ## Module Organization
//!
//! - `game` - Game lifecycle (new_game, reset_game)
//! - `moves` - Move execution and validation (attempt_move, legal_destinations)
//! - `state` - Game state queries and AI (is_in_check, game_status, ai_select_move)

mod game;
mod moves;
mod state;

pub use game::{new_game, reset_game};
pub use moves::{attempt_move, legal_destinations, legal_moves};
pub use state::{ai_search, ai_select_move, game_status, is_checkmate, is_in_check};
