//! Xiangqi (Chinese Chess) rules and search engine
//!
//! The board, per-piece legality, check and checkmate detection, a static
//! evaluator, and an alpha-beta computer opponent. Presentation layers drive it
//! through the functions in [`api`].
//!
//! ```
//! use xiangqi_engine::{ai_select_move, attempt_move, new_game};
//! use std::time::Duration;
//!
//! let mut state = new_game();
//! attempt_move(&mut state, "h7".parse().unwrap(), "e7".parse().unwrap()).unwrap();
//! let reply = ai_select_move(&state, Duration::ZERO).unwrap();
//! attempt_move(&mut state, reply.from, reply.to).unwrap();
//! ```

pub mod api;
pub mod board;
pub mod constants;
pub mod error;
pub mod evaluation;
pub mod move_gen;
pub mod search;
pub mod types;

pub use api::*;
pub use board::Board;
pub use error::{ChessEngineError, ChessEngineResult, Rejection};
pub use evaluation::{evaluate, evaluate_position, EvalWeights};
pub use search::{SearchConfig, SearchResult, SearchStats};
pub use types::*;
