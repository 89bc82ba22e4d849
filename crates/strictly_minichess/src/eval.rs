//! Static material evaluation.

use super::board::{Board, Coord};

/// Sums piece values over the board.
///
/// White pawn -1, white horse -5, black pawn +1, black horse +5. Positive
/// favors Black (the AI), negative favors White (the human).
pub fn score(board: &Board) -> i32 {
    Coord::ALL
        .iter()
        .filter_map(|at| board.cell_at(*at).piece())
        .map(|piece| piece.value())
        .sum()
}
