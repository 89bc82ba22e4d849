//! Strictly Minichess console application.
//!
//! Runs a game of 3x3 pawns-and-horses between a human typing moves on
//! a line-based input and a minimax AI, with TOML configuration for the
//! presentation.
//!
//! # Example
//!
//! ```no_run
//! use std::io;
//! use strictly_minichess_app::{GameConfig, HumanPlayer, MinimaxAi, Orchestrator};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = GameConfig::load_or_default("minichess.toml")?;
//! let human = HumanPlayer::new(config.human_name().clone(), io::stdin().lock(), io::stdout());
//! let ai = MinimaxAi::new(config.ai_name().clone());
//! let mut orchestrator = Orchestrator::new(Box::new(human), Box::new(ai), config, io::stdout());
//! orchestrator.run()?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod console;

pub use config::{ConfigError, GameConfig};
pub use console::{
    GameEnd, HumanPlayer, MinimaxAi, Orchestrator, Player, analyze, outcome_message,
    render_board, scoreboard_line,
};
