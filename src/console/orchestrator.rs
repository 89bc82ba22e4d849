//! Game orchestration between the human and the AI.

use super::players::Player;
use super::render::{outcome_message, render_board, scoreboard_line};
use crate::config::GameConfig;
use anyhow::{Result, anyhow};
use std::io::Write;
use strictly_minichess::{AI_SIDE, Game, GameStatus, Outcome, Side};
use tracing::{debug, info, instrument};

/// How a console game stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    /// The game reached an outcome.
    Finished(Outcome),
    /// The player for this side stopped answering (end of input).
    Abandoned(Side),
}

/// Drives a game between a human (White) and an AI (Black), printing the
/// board and score after every half-move.
pub struct Orchestrator<W> {
    game: Game,
    human: Box<dyn Player>,
    ai: Box<dyn Player>,
    config: GameConfig,
    out: W,
}

impl<W: Write> Orchestrator<W> {
    /// Creates a new orchestrator for a fresh game.
    pub fn new(human: Box<dyn Player>, ai: Box<dyn Player>, config: GameConfig, out: W) -> Self {
        Self {
            game: Game::new(),
            human,
            ai,
            config,
            out,
        }
    }

    /// Replaces the game to start from, e.g. a parsed position.
    pub fn with_game(mut self, game: Game) -> Self {
        self.game = game;
        self
    }

    /// Returns the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Consumes the orchestrator and returns its output writer.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Runs the game loop until the game ends or input runs out.
    #[instrument(skip(self), fields(human = %self.human.name(), ai = %self.ai.name()))]
    pub fn run(&mut self) -> Result<GameEnd> {
        info!("Starting game orchestration");
        self.show_position()?;

        loop {
            if let GameStatus::Over(outcome) = self.game.status() {
                return self.finish(outcome);
            }

            let side = self.game.to_move();
            let is_ai = side == AI_SIDE;
            if is_ai {
                writeln!(self.out, "{} is thinking...", self.config.ai_name())?;
                self.out.flush()?;
            }

            let player = if is_ai { &mut self.ai } else { &mut self.human };
            let player_name = player.name().to_string();
            debug!(player = %player_name, ?side, "Waiting for move");

            let Some(mv) = player.get_move(&self.game)? else {
                if is_ai {
                    let outcome = if self.game.board().has_pieces(side) {
                        Outcome::Draw(side)
                    } else {
                        Outcome::NoPieces(side)
                    };
                    return self.finish(outcome);
                }
                info!(player = %player_name, "Player left the game");
                return Ok(GameEnd::Abandoned(side));
            };

            self.game
                .play(mv)
                .map_err(|e| anyhow!("{} played an illegal move: {}", player_name, e))?;
            info!(player = %player_name, %mv, "Move made");

            if is_ai {
                writeln!(self.out, "{}'s move:", self.config.ai_name())?;
            }
            self.show_position()?;
        }
    }

    fn show_position(&mut self) -> Result<()> {
        write!(self.out, "{}", render_board(self.game.board()))?;
        if *self.config.show_scoreboard() {
            writeln!(self.out, "{}", scoreboard_line(self.game.board()))?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn finish(&mut self, outcome: Outcome) -> Result<GameEnd> {
        writeln!(self.out, "{}", outcome_message(&outcome, &self.config))?;
        self.out.flush()?;
        info!(%outcome, "Game over");
        Ok(GameEnd::Finished(outcome))
    }
}
