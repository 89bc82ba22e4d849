//! Strictly Minichess - console CLI
//!
//! Play pawns-and-horses against the minimax AI, or ask the AI about a
//! position.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::io;
use std::path::Path;
use strictly_minichess::Board;
use strictly_minichess_app::{GameConfig, GameEnd, HumanPlayer, MinimaxAi, Orchestrator, analyze};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or_default() {
        Command::Play { config } => run_play(&config),
        Command::Analyze { position } => run_analyze(&position),
    }
}

fn init_tracing(default_filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .try_init();
}

/// Play a console game as White against the AI.
#[instrument(skip(config_path), fields(config = %config_path.display()))]
fn run_play(config_path: &Path) -> Result<()> {
    let config = GameConfig::load_or_default(config_path)?;
    init_tracing(config.log_filter());

    info!("Starting console game");

    let human = HumanPlayer::new(config.human_name().clone(), io::stdin().lock(), io::stdout());
    let ai = MinimaxAi::new(config.ai_name().clone());
    let mut orchestrator = Orchestrator::new(Box::new(human), Box::new(ai), config, io::stdout());

    match orchestrator.run()? {
        GameEnd::Finished(outcome) => info!(%outcome, "Game finished"),
        GameEnd::Abandoned(side) => info!(?side, "Game abandoned"),
    }

    Ok(())
}

/// Print the AI's choice for a position given on the command line.
fn run_analyze(position: &[String]) -> Result<()> {
    init_tracing("warn");

    let text = position.join(" ");
    let board: Board = text
        .parse()
        .with_context(|| format!("Invalid position: {}", text))?;

    analyze(&board, &mut io::stdout().lock())?;
    Ok(())
}
