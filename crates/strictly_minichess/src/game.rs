//! Turn tracking and validated play.

use super::action::{Move, MoveError};
use super::board::{Board, Cell, Coord, Side};
use super::movegen::is_legal;
use super::outcome::{Outcome, outcome};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game has ended.
    Over(Outcome),
}

impl GameStatus {
    /// Checks if the game has ended.
    pub fn is_over(&self) -> bool {
        matches!(self, GameStatus::Over(_))
    }
}

/// A board together with the side to move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Side,
}

impl Game {
    /// Creates a new game. White moves first.
    #[instrument]
    pub fn new() -> Self {
        Self::from_board(Board::new(), Side::White)
    }

    /// Resumes a game from an arbitrary position.
    pub fn from_board(board: Board, to_move: Side) -> Self {
        Self { board, to_move }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move.
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        match outcome(&self.board, self.to_move) {
            Some(result) => GameStatus::Over(result),
            None => GameStatus::InProgress,
        }
    }

    /// Checks that `mv` is a legal move for the side to move.
    pub fn validate(&self, mv: Move) -> Result<(), MoveError> {
        if self.status().is_over() {
            return Err(MoveError::GameOver);
        }

        if Coord::try_new(mv.from.x, mv.from.y).is_none()
            || Coord::try_new(mv.to.x, mv.to.y).is_none()
        {
            return Err(MoveError::OutOfBounds(mv));
        }

        match self.board.cell_at(mv.from) {
            Cell::Empty => return Err(MoveError::EmptySource(mv.from)),
            Cell::Occupied(piece) if piece.side != self.to_move => {
                return Err(MoveError::WrongSide(piece.side));
            }
            Cell::Occupied(_) => {}
        }

        if !is_legal(&self.board, mv) {
            return Err(MoveError::IllegalDestination(mv));
        }
        Ok(())
    }

    /// Validates and applies a move for the side to move, then passes the
    /// turn. Nothing is mutated when an error is returned.
    #[instrument(skip(self), fields(to_move = ?self.to_move))]
    pub fn play(&mut self, mv: Move) -> Result<GameStatus, MoveError> {
        self.validate(mv)?;

        self.board.apply(mv);
        self.to_move = self.to_move.opponent();

        let status = self.status();
        debug!(?status, "Move applied");
        Ok(status)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
