//! Game sessions and turn sequencing
//!
//! [`Game`] is the only surface a presentation layer needs: it starts games,
//! accepts human clicks as cell coordinates and exposes the resulting state.
//! A human move, the win/draw checks, the computer's reply and its checks
//! all complete inside a single [`Game::submit_human_move`] call.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::board::{Board, Mark, Pos};
use crate::engine::{AIEngine, MoveResult};
use crate::error::GameError;
use crate::rules::{find_winning_line, has_win, is_draw};

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    /// Human plays PlayerA, the computer plays PlayerB
    #[default]
    HumanVsComputer,
    /// Two humans alternate on the same board (hotseat)
    HumanVsHuman,
}

/// Game result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Draw,
    PlayerAWin,
    PlayerBWin,
}

impl Outcome {
    fn win_for(mark: Mark) -> Self {
        match mark {
            Mark::PlayerA => Outcome::PlayerAWin,
            Mark::PlayerB => Outcome::PlayerBWin,
            Mark::Empty => unreachable!("empty cells cannot win"),
        }
    }

    /// Winning mark, if the game ended with a win
    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::PlayerAWin => Some(Mark::PlayerA),
            Outcome::PlayerBWin => Some(Mark::PlayerB),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    pub fn is_over(self) -> bool {
        self != Outcome::InProgress
    }
}

/// One game from "start new game" until it is replaced
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    mode: GameMode,
    outcome: Outcome,
    current_turn: Mark,
    last_move: Option<Pos>,
    last_computer_move: Option<MoveResult>,
    winning_line: Option<Vec<Pos>>,
}

impl GameSession {
    pub fn new(mode: GameMode, width: usize, height: usize, win_length: usize) -> Result<Self, GameError> {
        let board = Board::new(width, height, win_length)?;
        Ok(Self {
            board,
            mode,
            outcome: Outcome::InProgress,
            current_turn: Mark::PlayerA,
            last_move: None,
            last_computer_move: None,
            winning_line: None,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_game_over(&self) -> bool {
        self.outcome.is_over()
    }

    /// Mark that the next human click will place
    pub fn current_turn(&self) -> Mark {
        self.current_turn
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    pub fn last_computer_move(&self) -> Option<MoveResult> {
        self.last_computer_move
    }

    /// Cells of the winning run once the game is won
    pub fn winning_line(&self) -> Option<&[Pos]> {
        self.winning_line.as_deref()
    }

    /// Place a mark and settle the outcome. Returns true if the game ended.
    fn play(&mut self, pos: Pos, mark: Mark) -> bool {
        self.board.place(pos, mark);
        self.last_move = Some(pos);
        debug!(row = pos.row, col = pos.col, ?mark, "move played");

        if has_win(&self.board, mark) {
            self.outcome = Outcome::win_for(mark);
            self.winning_line = find_winning_line(&self.board, mark);
        } else if is_draw(&self.board, mark) {
            self.outcome = Outcome::Draw;
        } else {
            return false;
        }

        info!(outcome = ?self.outcome, "game over");
        true
    }
}

/// Engine facade owned by the presentation layer
#[derive(Debug, Default)]
pub struct Game {
    session: Option<GameSession>,
    ai: AIEngine,
}

impl Game {
    /// No game is running until [`Game::start_new_game`] is called.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a reproducible random source for the computer's fallback moves
    pub fn with_seed(seed: u64) -> Self {
        Self {
            session: None,
            ai: AIEngine::with_seed(seed),
        }
    }

    /// Replace the current session with a fresh board.
    ///
    /// On error the previous session is left untouched.
    pub fn start_new_game(
        &mut self,
        mode: GameMode,
        width: usize,
        height: usize,
        win_length: usize,
    ) -> Result<(), GameError> {
        let session = GameSession::new(mode, width, height, win_length)?;
        if win_length > width.max(height) {
            warn!(width, height, win_length, "win length exceeds the board; no one can win");
        }
        info!(?mode, width, height, win_length, "new game");
        self.session = Some(session);
        Ok(())
    }

    /// Handle a click on cell (`row`, `col`) and return the resulting outcome.
    ///
    /// Clicks with no game running, after the game ended, outside the board
    /// or on an occupied cell are ignored.
    pub fn submit_human_move(&mut self, row: isize, col: isize) -> Outcome {
        let Some(session) = self.session.as_mut() else {
            debug!(row, col, "move ignored: no game started");
            return Outcome::InProgress;
        };

        if session.is_game_over() {
            debug!(row, col, "move ignored: game over");
            return session.outcome;
        }

        let Some(pos) = session.board.pos(row, col) else {
            debug!(row, col, "move ignored: out of bounds");
            return session.outcome;
        };

        if !session.board.is_empty(pos) {
            debug!(row, col, "move ignored: cell occupied");
            return session.outcome;
        }

        let mover = session.current_turn;
        if session.play(pos, mover) {
            return session.outcome;
        }

        match session.mode {
            GameMode::HumanVsHuman => {
                session.current_turn = mover.opponent();
            }
            GameMode::HumanVsComputer => {
                let computer = mover.opponent();
                // The board is not full, so an empty cell exists
                let Some(reply) = self.ai.get_move_with_stats(&mut session.board, computer) else {
                    unreachable!("no empty cell on a board that is not full");
                };
                session.last_computer_move = Some(reply);
                session.play(reply.pos, computer);
            }
        }

        session.outcome
    }

    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    pub fn board(&self) -> Option<&Board> {
        self.session.as_ref().map(GameSession::board)
    }

    /// Checked cell lookup on the current board
    pub fn cell(&self, row: isize, col: isize) -> Option<Result<Mark, GameError>> {
        self.board().map(|b| b.cell(row, col))
    }

    /// `InProgress` also covers "no game started yet"
    pub fn outcome(&self) -> Outcome {
        self.session
            .as_ref()
            .map_or(Outcome::InProgress, GameSession::outcome)
    }

    pub fn is_game_over(&self) -> bool {
        self.outcome().is_over()
    }

    pub fn mode(&self) -> Option<GameMode> {
        self.session.as_ref().map(GameSession::mode)
    }

    pub fn current_turn(&self) -> Option<Mark> {
        self.session.as_ref().map(GameSession::current_turn)
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.session.as_ref().and_then(GameSession::last_move)
    }

    pub fn last_computer_move(&self) -> Option<MoveResult> {
        self.session.as_ref().and_then(GameSession::last_computer_move)
    }

    pub fn winning_line(&self) -> Option<&[Pos]> {
        self.session.as_ref().and_then(GameSession::winning_line)
    }
}
