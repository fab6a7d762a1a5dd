//! Alpha-beta search with iterative deepening
//!
//! This module implements the computer opponent using:
//! - Negamax alpha-beta pruning over an owned board with make/unmake
//! - Iterative deepening under a wall-clock budget
//! - Move ordering for better pruning
//!
//! ## Module Organization
//!
//! - `alphabeta` - Core alpha-beta search algorithm
//! - `ordering` - Move ordering heuristics
//! - `make_unmake` - Move making/unmaking utilities
//! - `iterative` - Iterative deepening wrapper

mod alphabeta;
mod iterative;
pub(crate) mod make_unmake;
mod ordering;

pub use iterative::{choose_move, iterative_deepening, search_fixed_depth};

use crate::constants::{CHECK_EXTENSION, DEFAULT_THINK_SECS, MAX_DEPTH, MIN_DEPTH};
use crate::types::Move;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Search limits
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Wall-clock budget for passes beyond the minimum depth
    pub think_time: Duration,
    /// First pass depth; always completes
    pub min_depth: u32,
    pub max_depth: u32,
    /// Extra plies allowed when the opponent is in check
    pub check_extension: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            think_time: Duration::from_secs_f32(DEFAULT_THINK_SECS),
            min_depth: MIN_DEPTH,
            max_depth: MAX_DEPTH,
            check_extension: CHECK_EXTENSION,
        }
    }
}

/// Search counters
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited below the root
    pub nodes: u64,
    /// Beta cutoffs
    pub cutoffs: u64,
    pub elapsed: Duration,
}

/// Outcome of a search that found a move
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub mv: Move,
    /// Score from the searching side's perspective
    pub score: i32,
    /// Depth of the deepest completed pass
    pub depth_reached: u32,
    pub stats: SearchStats,
}
