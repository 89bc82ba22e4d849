//! Human player that types moves on a line-based input.

use super::Player;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use strictly_minichess::{Game, Move};
use tracing::debug;

const PROMPT: &str = "Enter your move (x1 y1 x2 y2): ";
const INVALID_INPUT: &str = "Invalid input. Please enter four numbers separated by spaces.";
const NOT_ALLOWED: &str = "Move not allowed. Try again.";

/// Human player reading `x1 y1 x2 y2` lines.
///
/// Malformed lines and illegal moves are reported on `output` and the
/// player is asked again; the game is never touched until a legal move
/// arrives.
pub struct HumanPlayer<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    /// Returns the output writer.
    pub fn output(&self) -> &W {
        &self.output
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        write!(self.output, "{PROMPT}")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read move")?;
        Ok((read > 0).then_some(line))
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn get_move(&mut self, game: &Game) -> Result<Option<Move>> {
        while let Some(line) = self.read_line()? {
            let mv = match line.parse::<Move>() {
                Ok(mv) => mv,
                Err(e) if e.is_malformed() => {
                    debug!(error = %e, "Rejected input");
                    writeln!(self.output, "{INVALID_INPUT}")?;
                    continue;
                }
                Err(e) => {
                    debug!(error = %e, "Rejected input");
                    writeln!(self.output, "{NOT_ALLOWED}")?;
                    continue;
                }
            };

            match game.validate(mv) {
                Ok(()) => return Ok(Some(mv)),
                Err(e) => {
                    debug!(error = %e, "Rejected move");
                    writeln!(self.output, "{NOT_ALLOWED}")?;
                }
            }
        }

        debug!(player = %self.name, "Input closed");
        Ok(None)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
