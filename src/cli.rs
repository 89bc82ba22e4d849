//! Command-line interface for strictly_minichess.

use clap::{Parser, Subcommand};

/// Strictly Minichess - pawns and horses on a 3x3 board against a minimax AI
#[derive(Parser, Debug)]
#[command(name = "strictly_minichess")]
#[command(about = "Play 3x3 pawns-and-horses against a minimax AI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game on the console as White against the AI
    Play {
        /// Path to the game config file (defaults are used if it is missing)
        #[arg(short, long, default_value = "minichess.toml")]
        config: std::path::PathBuf,
    },

    /// Print the AI's choice for a position
    Analyze {
        /// Nine cells row by row, e.g. `WP WH .. / .. .. .. / .. BP BH`
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        position: Vec<String>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play {
            config: std::path::PathBuf::from("minichess.toml"),
        }
    }
}
