//! Interactive terminal session
//!
//! Reads commands line by line, applies human moves through the engine and lets
//! the computer answer. Searches run on a worker thread that receives an owned
//! copy of the board, so the live game state is never shared with the search.

use crate::history::{Archive, MoveHistory};
use crate::render::{piece_cell, render_board, RenderStyle};
use crate::settings::Settings;
use anyhow::{anyhow, Context};
use crossbeam_channel::{Receiver, Sender};
use std::collections::BTreeSet;
use std::io::{BufRead, Write};
use std::thread::{self, JoinHandle};
use thiserror::Error;
use tracing::debug;
use xiangqi_engine::{
    ai_search, attempt_move, game_status, legal_destinations, new_game, reset_game, Board,
    ChessEngineError, Color, GameState, GameStatus, MoveOutcome, Position, SearchConfig,
    SearchResult,
};

const HELP: &str = "\
commands:
  <from> <to>     move a piece, e.g. `h7 e7` or `h7e7`
  moves <square>  highlight the legal destinations of a piece
  hint            ask the computer for a move
  undo            take back your last move
  restart         archive this game and start a new one
  games           list archived games
  replay [n]      step through archived game n, or the current game
  board           redraw the board
  quit            leave";

/// Why a line of input could not be understood
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("empty input")]
    Empty,

    #[error("unknown command {0:?}, type `help` for a list")]
    UnknownCommand(String),

    #[error("`{command}` expects {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error(transparent)]
    Square(#[from] ChessEngineError),

    #[error("invalid game number {0:?}")]
    BadGameNumber(String),
}

/// A parsed line of input
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Move(Position, Position),
    Moves(Position),
    Hint,
    Undo,
    Restart,
    Games,
    /// Archived game number (1-based), or the current game
    Replay(Option<usize>),
    Board,
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some((&head, rest)) = words.split_first() else {
        return Err(InputError::Empty);
    };

    let command = match (head.to_ascii_lowercase().as_str(), rest) {
        ("quit" | "exit" | "q", []) => Command::Quit,
        ("help" | "?", []) => Command::Help,
        ("board", []) => Command::Board,
        ("hint", []) => Command::Hint,
        ("undo", []) => Command::Undo,
        ("restart", []) => Command::Restart,
        ("games", []) => Command::Games,
        ("replay", []) => Command::Replay(None),
        ("replay", [n]) => {
            let index = n
                .parse::<usize>()
                .ok()
                .filter(|&i| i > 0)
                .ok_or_else(|| InputError::BadGameNumber(n.to_string()))?;
            Command::Replay(Some(index))
        }
        ("moves", [square]) => Command::Moves(square.parse()?),
        ("moves", _) => {
            return Err(InputError::MissingArgument {
                command: "moves",
                expected: "one square",
            })
        }
        ("move", [from, to]) => Command::Move(from.parse()?, to.parse()?),
        ("move", _) => {
            return Err(InputError::MissingArgument {
                command: "move",
                expected: "two squares",
            })
        }
        (_, [to]) if head.len() == 2 => Command::Move(head.parse()?, to.parse()?),
        (_, []) if head.len() == 4 && head.is_ascii() => {
            Command::Move(head[..2].parse()?, head[2..].parse()?)
        }
        _ => return Err(InputError::UnknownCommand(head.to_string())),
    };
    Ok(command)
}

struct SearchRequest {
    board: Board,
    turn: Color,
    config: SearchConfig,
}

/// Background thread running searches on board copies
pub struct AiWorker {
    requests: Option<Sender<SearchRequest>>,
    results: Receiver<Option<SearchResult>>,
    handle: Option<JoinHandle<()>>,
}

impl AiWorker {
    pub fn spawn() -> anyhow::Result<Self> {
        let (request_sender, request_receiver) = crossbeam_channel::unbounded::<SearchRequest>();
        let (result_sender, result_receiver) = crossbeam_channel::bounded(1);

        let handle = thread::Builder::new()
            .name("xiangqi-ai".to_string())
            .spawn(move || {
                for request in request_receiver {
                    let state = GameState::from_board(request.board, request.turn);
                    let result = ai_search(&state, &request.config);
                    if result_sender.send(result).is_err() {
                        break;
                    }
                }
                debug!("AI worker stopped");
            })
            .context("spawning AI worker")?;

        Ok(Self {
            requests: Some(request_sender),
            results: result_receiver,
            handle: Some(handle),
        })
    }

    /// Search for the side to move in `state` and wait for the answer
    pub fn search(
        &self,
        state: &GameState,
        config: &SearchConfig,
    ) -> anyhow::Result<Option<SearchResult>> {
        let requests = self
            .requests
            .as_ref()
            .ok_or_else(|| anyhow!("AI worker is not running"))?;
        requests
            .send(SearchRequest {
                board: state.snapshot(),
                turn: state.turn(),
                config: config.clone(),
            })
            .map_err(|_| anyhow!("AI worker exited"))?;
        self.results.recv().context("AI worker exited")
    }
}

impl Drop for AiWorker {
    fn drop(&mut self) {
        // Closing the request channel ends the worker loop
        self.requests.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

/// One player's terminal session, possibly spanning several games
pub struct Session<R, W> {
    state: GameState,
    history: MoveHistory,
    archive: Archive,
    settings: Settings,
    marked: BTreeSet<Position>,
    ai: AiWorker,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(settings: Settings, input: R, output: W) -> anyhow::Result<Self> {
        Self::from_state(settings, new_game(), input, output)
    }

    /// Session continuing from an arbitrary position
    pub fn from_state(
        settings: Settings,
        state: GameState,
        input: R,
        output: W,
    ) -> anyhow::Result<Self> {
        Ok(Self {
            history: MoveHistory::new(state.snapshot(), state.turn()),
            state,
            archive: Archive::default(),
            settings,
            marked: BTreeSet::new(),
            ai: AiWorker::spawn()?,
            input,
            output,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn archive(&self) -> &Archive {
        &self.archive
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    fn style(&self) -> RenderStyle {
        RenderStyle {
            chinese: self.settings.chinese,
            colored: self.settings.colored,
        }
    }

    fn ai_to_move(&self) -> bool {
        self.state.in_progress() && self.settings.ai_color == Some(self.state.turn())
    }

    /// Run until `quit` or end of input
    pub fn run(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "type `help` for commands")?;
        self.show_board()?;

        loop {
            if self.ai_to_move() {
                if !self.play_ai_move()? {
                    writeln!(self.output, "the computer has no legal move")?;
                    return Ok(());
                }
                self.show_board()?;
                continue;
            }

            write!(self.output, "{} > ", self.state.turn())?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return Ok(());
            }

            match parse_command(&line) {
                Err(InputError::Empty) => {}
                Err(e) => writeln!(self.output, "{e}")?,
                Ok(Command::Quit) => return Ok(()),
                Ok(command) => self.execute(command)?,
            }
        }
    }

    fn execute(&mut self, command: Command) -> anyhow::Result<()> {
        match command {
            Command::Move(from, to) => self.play_human_move(from, to)?,
            Command::Moves(from) => {
                self.marked = legal_destinations(&self.state, from);
                if self.marked.is_empty() {
                    writeln!(self.output, "no legal moves from {from}")?;
                } else {
                    self.show_board()?;
                }
            }
            Command::Hint => {
                if !self.state.in_progress() {
                    writeln!(self.output, "the game is over")?;
                } else if let Some(result) = self.ai.search(&self.state, &self.settings.search)? {
                    writeln!(self.output, "hint: {}", result.mv)?;
                }
            }
            Command::Undo => self.undo()?,
            Command::Restart => self.restart()?,
            Command::Games => self.list_games()?,
            Command::Replay(index) => self.replay(index)?,
            Command::Board => self.show_board()?,
            Command::Help => writeln!(self.output, "{HELP}")?,
            Command::Quit => {}
        }
        Ok(())
    }

    fn play_human_move(&mut self, from: Position, to: Position) -> anyhow::Result<()> {
        match attempt_move(&mut self.state, from, to) {
            Ok(outcome) => {
                self.commit(&outcome)?;
                self.show_board()?;
            }
            Err(rejection) => writeln!(self.output, "{rejection}")?,
        }
        Ok(())
    }

    /// Let the computer move; `false` if it had no legal move
    fn play_ai_move(&mut self) -> anyhow::Result<bool> {
        writeln!(self.output, "{} is thinking...", self.state.turn())?;
        self.output.flush()?;
        let Some(result) = self.ai.search(&self.state, &self.settings.search)? else {
            return Ok(false);
        };
        let outcome = attempt_move(&mut self.state, result.mv.from, result.mv.to)
            .context("computer chose a rejected move")?;
        self.commit(&outcome)?;
        Ok(true)
    }

    fn commit(&mut self, outcome: &MoveOutcome) -> anyhow::Result<()> {
        self.marked.clear();
        self.history.push(outcome, self.state.snapshot());

        let mover = outcome.piece.color;
        write!(self.output, "{mover} plays {}", outcome.mv)?;
        if let Some(captured) = outcome.captured {
            let glyph = piece_cell(captured, self.style());
            write!(self.output, ", taking {}", glyph.trim_end())?;
        }
        writeln!(self.output)?;

        match outcome.status {
            GameStatus::Checkmate { winner } => writeln!(self.output, "checkmate, {winner} wins")?,
            GameStatus::Stalemate { winner } => writeln!(
                self.output,
                "{} has no legal move, {winner} wins",
                winner.opponent()
            )?,
            GameStatus::InProgress if outcome.check => writeln!(self.output, "check")?,
            GameStatus::InProgress => {}
        }
        Ok(())
    }

    fn undo(&mut self) -> anyhow::Result<()> {
        if self.history.pop().is_none() {
            writeln!(self.output, "nothing to undo")?;
            return Ok(());
        }
        // Also take back the computer's reply so the human is to move again
        while self.settings.ai_color == Some(self.history.turn()) && !self.history.is_empty() {
            self.history.pop();
        }
        self.state =
            GameState::from_board(self.history.current_board().clone(), self.history.turn());
        self.marked.clear();
        self.show_board()
    }

    fn restart(&mut self) -> anyhow::Result<()> {
        let finished = std::mem::replace(
            &mut self.history,
            MoveHistory::new(Board::initial(), Color::Red),
        );
        if !finished.is_empty() {
            self.archive.push(finished, game_status(&self.state));
            writeln!(self.output, "archived as game {}", self.archive.len())?;
        }
        reset_game(&mut self.state);
        self.marked.clear();
        self.show_board()
    }

    fn list_games(&mut self) -> anyhow::Result<()> {
        if self.archive.is_empty() {
            writeln!(self.output, "no archived games")?;
        }
        for (i, game) in self.archive.iter().enumerate() {
            let result = match game.status {
                GameStatus::InProgress => "unfinished".to_string(),
                GameStatus::Checkmate { winner } => format!("{winner} won by checkmate"),
                GameStatus::Stalemate { winner } => format!("{winner} won by stalemate"),
            };
            writeln!(self.output, "{}: {} moves, {result}", i + 1, game.history.len())?;
        }
        Ok(())
    }

    fn replay(&mut self, index: Option<usize>) -> anyhow::Result<()> {
        let history = match index {
            None => &self.history,
            Some(n) => match self.archive.get(n - 1) {
                Some(game) => &game.history,
                None => {
                    writeln!(self.output, "no archived game {n}")?;
                    return Ok(());
                }
            },
        };
        let style = RenderStyle {
            chinese: self.settings.chinese,
            colored: self.settings.colored,
        };
        replay_game(history, style, &mut self.input, &mut self.output)?;
        self.show_board()
    }

    fn show_board(&mut self) -> anyhow::Result<()> {
        let last = self.history.last().map(|record| record.mv);
        let text = render_board(self.state.board(), self.style(), &self.marked, last);
        write!(self.output, "{text}")?;
        Ok(())
    }
}

/// Step through `history` with `n`ext, `p`revious and `q`uit
fn replay_game<R: BufRead, W: Write>(
    history: &MoveHistory,
    style: RenderStyle,
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<()> {
    let mut replay = history.replay();
    loop {
        let last = replay.last_move().map(|record| record.mv);
        write!(output, "{}", render_board(replay.board(), style, &BTreeSet::new(), last))?;
        write!(output, "replay {}/{} [n/p/q] > ", replay.ply(), replay.len())?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }
        let moved = match line.trim() {
            "" | "n" => replay.forward(),
            "p" => replay.backward(),
            "q" => return Ok(()),
            other => {
                writeln!(output, "unknown replay command {other:?}")?;
                true
            }
        };
        if !moved {
            writeln!(output, "no more moves that way")?;
        }
    }
}
