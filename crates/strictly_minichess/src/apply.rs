//! Board mutation.

use super::action::Move;
use super::board::{Board, Cell};

/// Moves the contents of `mv.from` onto `mv.to` and empties `mv.from`.
///
/// Unchecked: whatever stood on `mv.to` is overwritten. Validate with
/// [`crate::is_legal`] first, or go through [`crate::Game::play`].
pub fn apply_move(board: &mut Board, mv: Move) {
    let moving = board.cell_at(mv.from);
    board.set_cell(mv.to, moving);
    board.set_cell(mv.from, Cell::Empty);
}

impl Board {
    /// Applies `mv` in place. Same contract as [`apply_move`].
    pub fn apply(&mut self, mv: Move) {
        apply_move(self, mv);
    }
}
