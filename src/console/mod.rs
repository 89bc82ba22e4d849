//! Console front end: players, rendering and the game loop.

mod orchestrator;
mod players;
mod render;

pub use orchestrator::{GameEnd, Orchestrator};
pub use players::{HumanPlayer, MinimaxAi, Player};
pub use render::{analyze, outcome_message, render_board, scoreboard_line};
