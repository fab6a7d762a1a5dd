//! Move history and replay
//!
//! Every committed move is recorded together with a snapshot of the board it
//! produced, so replay never re-applies moves. Finished games are kept in an
//! [`Archive`] for the rest of the session.

use xiangqi_engine::{Board, Color, GameStatus, Move, MoveOutcome, Piece};

/// One committed move
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveRecord {
    pub mv: Move,
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub check: bool,
    /// Board after the move
    pub board: Board,
}

/// Moves of one game, from its starting position
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveHistory {
    initial: Board,
    first_turn: Color,
    records: Vec<MoveRecord>,
}

impl MoveHistory {
    pub fn new(initial: Board, first_turn: Color) -> Self {
        Self {
            initial,
            first_turn,
            records: Vec::new(),
        }
    }

    pub fn push(&mut self, outcome: &MoveOutcome, board: Board) {
        self.records.push(MoveRecord {
            mv: outcome.mv,
            piece: outcome.piece,
            captured: outcome.captured,
            check: outcome.check,
            board,
        });
    }

    pub fn pop(&mut self) -> Option<MoveRecord> {
        self.records.pop()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[MoveRecord] {
        &self.records
    }

    pub fn last(&self) -> Option<&MoveRecord> {
        self.records.last()
    }

    /// Board after `ply` moves; ply 0 is the starting position
    pub fn board_at(&self, ply: usize) -> &Board {
        match ply.min(self.records.len()) {
            0 => &self.initial,
            n => &self.records[n - 1].board,
        }
    }

    /// Board after the last recorded move
    pub fn current_board(&self) -> &Board {
        self.board_at(self.records.len())
    }

    /// Side to move after the recorded moves
    pub fn turn(&self) -> Color {
        if self.records.len() % 2 == 0 {
            self.first_turn
        } else {
            self.first_turn.opponent()
        }
    }

    pub fn replay(&self) -> Replay<'_> {
        Replay {
            history: self,
            ply: 0,
        }
    }
}

/// Cursor stepping through a history's snapshots
#[derive(Clone, Debug)]
pub struct Replay<'a> {
    history: &'a MoveHistory,
    ply: usize,
}

impl<'a> Replay<'a> {
    pub fn ply(&self) -> usize {
        self.ply
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn board(&self) -> &'a Board {
        self.history.board_at(self.ply)
    }

    /// Move that produced the current board
    pub fn last_move(&self) -> Option<&'a MoveRecord> {
        self.ply.checked_sub(1).map(|i| &self.history.records[i])
    }

    /// Step forward; `false` at the end
    pub fn forward(&mut self) -> bool {
        if self.ply < self.history.len() {
            self.ply += 1;
            true
        } else {
            false
        }
    }

    /// Step backward; `false` at the start
    pub fn backward(&mut self) -> bool {
        if self.ply > 0 {
            self.ply -= 1;
            true
        } else {
            false
        }
    }
}

/// A game that was restarted or finished
#[derive(Clone, Debug)]
pub struct ArchivedGame {
    pub history: MoveHistory,
    pub status: GameStatus,
}

/// Games played earlier in the session
#[derive(Clone, Debug, Default)]
pub struct Archive {
    games: Vec<ArchivedGame>,
}

impl Archive {
    pub fn push(&mut self, history: MoveHistory, status: GameStatus) {
        self.games.push(ArchivedGame { history, status });
    }

    pub fn get(&self, index: usize) -> Option<&ArchivedGame> {
        self.games.get(index)
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ArchivedGame> {
        self.games.iter()
    }
}
