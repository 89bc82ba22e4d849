//! End-of-game detection.
//!
//! A side wins once the material score reaches [`WIN_THRESHOLD`] in its
//! favor. A side to move that still holds pieces but cannot move draws the
//! game. A side to move with nothing left on the board ends the game
//! without a winner either way.

use super::board::{Board, Side};
use super::eval::score;
use super::movegen::has_legal_move;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Absolute score at which the leading side wins.
pub const WIN_THRESHOLD: i32 = 6;

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The side reached the win threshold.
    Winner(Side),
    /// The side to move holds pieces but has no legal move.
    Draw(Side),
    /// The side to move has no pieces left.
    NoPieces(Side),
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Side> {
        match self {
            Outcome::Winner(side) => Some(*side),
            Outcome::Draw(_) | Outcome::NoPieces(_) => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(side) => write!(f, "{side:?} wins"),
            Outcome::Draw(side) => write!(f, "Draw, {side:?} cannot move"),
            Outcome::NoPieces(side) => write!(f, "{side:?} has no pieces left"),
        }
    }
}

/// Checks if the score alone decides the game.
pub fn check_winner(board: &Board) -> Option<Side> {
    let value = score(board);
    if value >= WIN_THRESHOLD {
        Some(Side::Black)
    } else if value <= -WIN_THRESHOLD {
        Some(Side::White)
    } else {
        None
    }
}

/// Returns how the game ended with `to_move` on move, or `None` while it
/// is still going.
#[instrument(skip(board))]
pub fn outcome(board: &Board, to_move: Side) -> Option<Outcome> {
    if let Some(winner) = check_winner(board) {
        return Some(Outcome::Winner(winner));
    }
    if !board.has_pieces(to_move) {
        return Some(Outcome::NoPieces(to_move));
    }
    if !has_legal_move(board, to_move) {
        return Some(Outcome::Draw(to_move));
    }
    None
}
