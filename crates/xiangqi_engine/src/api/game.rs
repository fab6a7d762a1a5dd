//! Game lifecycle management
//!
//! Functions for creating and resetting games.

use crate::board::Board;
use crate::types::*;

/// Create a new game at the starting position, Red to move
pub fn new_game() -> GameState {
    GameState::from_board(Board::initial(), Color::Red)
}

/// Reset the game to the starting position
pub fn reset_game(state: &mut GameState) {
    state.board = Board::initial();
    state.turn = Color::Red;
    state.in_progress = true;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_starts_with_red() {
        let state = new_game();
        assert_eq!(state.turn(), Color::Red);
        assert!(state.in_progress());
        assert_eq!(*state.board(), Board::initial());
    }

    #[test]
    fn test_reset_game_restores_start() {
        let mut state = GameState::from_board(Board::empty(), Color::Black);
        state.in_progress = false;
        reset_game(&mut state);
        assert_eq!(state, new_game());
    }
}
