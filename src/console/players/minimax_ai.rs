//! AI player backed by the exhaustive minimax search.

use super::Player;
use anyhow::Result;
use strictly_minichess::{AI_SIDE, Game, Move, SEARCH_DEPTH, search};
use tracing::{debug, info};

/// AI that always plays Black and searches [`SEARCH_DEPTH`] plies.
pub struct MinimaxAi {
    name: String,
}

impl MinimaxAi {
    /// Creates a new minimax AI.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Player for MinimaxAi {
    fn get_move(&mut self, game: &Game) -> Result<Option<Move>> {
        if game.to_move() != AI_SIDE {
            anyhow::bail!("{} only plays {:?}", self.name, AI_SIDE);
        }

        debug!(ai = %self.name, "AI making move");
        let report = search(game.board(), SEARCH_DEPTH);
        info!(
            ai = %self.name,
            best_move = ?report.best_move,
            score = report.score,
            nodes = report.nodes,
            "AI chose move"
        );
        Ok(report.best_move)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
