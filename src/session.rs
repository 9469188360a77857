//! Turn orchestration: apply a move, spawn on change, detect the end.

use std::fmt;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::command::Command;
use crate::engine::{Board, Move, Tile};
use crate::spawn::RandomSource;

/// Why a session stopped accepting moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// No move in any direction can alter the board.
    NoMovesLeft,
    /// The player asked to leave.
    Quit,
}

impl fmt::Display for EndReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndReason::NoMovesLeft => f.write_str("no moves left"),
            EndReason::Quit => f.write_str("player quit"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Active,
    /// Absorbing: once here, every further move is refused.
    Terminal(EndReason),
}

impl Status {
    #[inline]
    pub fn is_terminal(self) -> bool { matches!(self, Status::Terminal(_)) }
}

/// A tile placed after a changed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spawn {
    pub row: usize,
    pub col: usize,
    pub value: Tile,
}

/// Everything a display layer needs after one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    pub board: Board,
    /// False for a no-op move; no tile spawns in that case.
    pub changed: bool,
    pub spawned: Option<Spawn>,
    pub status: Status,
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    #[error("session already ended: {reason}")]
    Finished { reason: EndReason },
}

/// One game: the board, its status, and the source that feeds spawns.
#[derive(Debug)]
pub struct GameSession<S> {
    board: Board,
    status: Status,
    source: S,
    turns: u64,
}

impl<S: RandomSource> GameSession<S> {
    /// Start a game on an empty board with two spawned tiles.
    ///
    /// ```
    /// use slide_2048::session::{GameSession, Status};
    /// use slide_2048::spawn::RngSource;
    /// let session = GameSession::new(RngSource::seeded(42));
    /// assert_eq!(session.board().count_empty(), 14);
    /// assert_eq!(session.status(), Status::Active);
    /// ```
    pub fn new(source: S) -> Self {
        let mut session = Self { board: Board::EMPTY, status: Status::Active, source, turns: 0 };
        session.spawn();
        session.spawn();
        session.refresh_status();
        session
    }

    /// Resume from an existing board. The status is evaluated immediately.
    pub fn with_board(board: Board, source: S) -> Self {
        let mut session = Self { board, status: Status::Active, source, turns: 0 };
        session.refresh_status();
        session
    }

    #[inline]
    pub fn board(&self) -> &Board { &self.board }

    #[inline]
    pub fn status(&self) -> Status { self.status }

    #[inline]
    pub fn is_terminal(&self) -> bool { self.status.is_terminal() }

    /// Number of moves that changed the board.
    #[inline]
    pub fn turns(&self) -> u64 { self.turns }

    /// Play one move.
    ///
    /// A no-op move returns `changed: false` and leaves the session untouched.
    pub fn play(&mut self, dir: Move) -> Result<TurnOutcome, SessionError> {
        if let Status::Terminal(reason) = self.status {
            return Err(SessionError::Finished { reason });
        }

        let outcome = self.board.apply_move(dir);
        if !outcome.changed {
            debug!("move {dir} is a no-op");
            return Ok(TurnOutcome { board: self.board, changed: false, spawned: None, status: self.status });
        }

        self.board = outcome.board;
        self.turns += 1;
        let spawned = self.spawn();
        debug!("turn {}: {dir}, spawned {:?}", self.turns, spawned);
        self.refresh_status();

        Ok(TurnOutcome { board: self.board, changed: true, spawned, status: self.status })
    }

    /// End the session voluntarily. Quitting an ended session keeps its first reason.
    pub fn quit(&mut self) -> Status {
        if !self.is_terminal() {
            info!("session quit after {} turns", self.turns);
            self.status = Status::Terminal(EndReason::Quit);
        }
        self.status
    }

    /// Dispatch a parsed player command.
    pub fn handle(&mut self, command: Command) -> Result<TurnOutcome, SessionError> {
        match command {
            Command::Move(dir) => self.play(dir),
            Command::Quit => {
                let status = self.quit();
                Ok(TurnOutcome { board: self.board, changed: false, spawned: None, status })
            }
        }
    }

    fn spawn(&mut self) -> Option<Spawn> {
        let Some((row, col)) = self.source.pick_empty_cell(&self.board) else {
            warn!("no empty cell to spawn into; skipping");
            return None;
        };
        let value = self.source.draw_value();
        self.board.set(row, col, value);
        Some(Spawn { row, col, value })
    }

    fn refresh_status(&mut self) {
        if self.status == Status::Active && !self.board.has_any_move() {
            info!("game over after {} turns, highest tile {}", self.turns, self.board.highest_tile());
            self.status = Status::Terminal(EndReason::NoMovesLeft);
        }
    }
}
