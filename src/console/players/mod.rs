//! Player trait and implementations.

mod human;
mod minimax_ai;

pub use human::HumanPlayer;
pub use minimax_ai::MinimaxAi;

use anyhow::Result;
use strictly_minichess::{Game, Move};

/// Trait for players that can make moves.
pub trait Player {
    /// Gets a move from this player for the side to move in `game`.
    ///
    /// Returns `None` when the player has nothing to play: the human's
    /// input ran out, or the AI found no legal move.
    fn get_move(&mut self, game: &Game) -> Result<Option<Move>>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
