//! First-class move types.
//!
//! A move is an intent to relocate the piece at `from` onto `to`. It can be
//! parsed from console text, validated against the move generator and only
//! then applied.

use super::board::{BOARD_SIZE, Coord, Side};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A move from one coordinate to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Origin of the moving piece.
    pub from: Coord,
    /// Destination.
    pub to: Coord,
}

impl Move {
    /// Creates a new move.
    pub const fn new(from: Coord, to: Coord) -> Self {
        Self { from, to }
    }

    /// Returns the move with origin and destination swapped.
    pub fn reversed(self) -> Self {
        Self::new(self.to, self.from)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.from.x, self.from.y, self.to.x, self.to.y
        )
    }
}

/// Error that can occur when validating a move against a game.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum MoveError {
    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// Origin or destination lies off the board.
    #[display("Move {} leaves the board", _0)]
    OutOfBounds(Move),

    /// There is no piece on the origin cell.
    #[display("No piece at {}", _0)]
    EmptySource(Coord),

    /// The piece on the origin cell belongs to the side not on move.
    #[display("It's not {:?}'s turn", _0)]
    WrongSide(Side),

    /// The destination is not produced by the move generator.
    #[display("Move {} is not allowed", _0)]
    IllegalDestination(Move),
}

impl std::error::Error for MoveError {}

/// Error parsing `x1 y1 x2 y2` text.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum MoveParseError {
    /// Not exactly four tokens.
    #[display("Expected 4 numbers, found {}", _0)]
    TokenCount(usize),

    /// A token was not an integer.
    #[display("{:?} is not a number", _0)]
    NotANumber(String),

    /// A coordinate fell outside the board.
    #[display("{} is off the board", _0)]
    OutOfRange(isize),
}

impl MoveParseError {
    /// Checks if the input was malformed rather than merely off the board.
    pub fn is_malformed(&self) -> bool {
        !matches!(self, MoveParseError::OutOfRange(_))
    }
}

impl std::error::Error for MoveParseError {}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        if tokens.len() != 4 {
            return Err(MoveParseError::TokenCount(tokens.len()));
        }

        let mut values = [0isize; 4];
        for (slot, token) in values.iter_mut().zip(&tokens) {
            *slot = token
                .parse()
                .map_err(|_| MoveParseError::NotANumber((*token).to_string()))?;
        }

        let mut coords = [0usize; 4];
        for (slot, value) in coords.iter_mut().zip(values) {
            *slot = usize::try_from(value)
                .ok()
                .filter(|v| *v < BOARD_SIZE)
                .ok_or(MoveParseError::OutOfRange(value))?;
        }

        let [x1, y1, x2, y2] = coords;
        Ok(Move::new(Coord::new(x1, y1), Coord::new(x2, y2)))
    }
}
