//! Move generation.
//!
//! Pawns step one row toward the opposing back rank onto an empty cell and
//! capture one row forward on either diagonal. Horses jump in knight shape
//! and may land anywhere on the board except on a piece identical to
//! themselves (same side and kind). There are no double steps, en-passant,
//! promotions or check rules.

use super::action::Move;
use super::board::{Board, Cell, Coord, Kind, Piece, Side};

/// Knight-shaped offsets in generation order.
const HORSE_OFFSETS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Returns the legal destinations of the piece at `from`.
///
/// An empty cell has no moves. Destinations are ordered: pawn straight,
/// left capture, right capture; horse in [`HORSE_OFFSETS`] order.
pub fn legal_moves(board: &Board, from: Coord) -> Vec<Coord> {
    let mut out = Vec::new();
    if let Cell::Occupied(piece) = board.cell_at(from) {
        match piece.kind {
            Kind::Pawn => pawn_moves(board, piece.side, from, &mut out),
            Kind::Horse => horse_moves(board, piece, from, &mut out),
        }
    }
    out
}

fn pawn_moves(board: &Board, side: Side, from: Coord, out: &mut Vec<Coord>) {
    let step = side.forward();

    if let Some(to) = from.offset(step, 0)
        && board.cell_at(to).is_empty()
    {
        out.push(to);
    }

    for dy in [-1, 1] {
        if let Some(to) = from.offset(step, dy)
            && board.cell_at(to).belongs_to(side.opponent())
        {
            out.push(to);
        }
    }
}

fn horse_moves(board: &Board, piece: Piece, from: Coord, out: &mut Vec<Coord>) {
    for (dx, dy) in HORSE_OFFSETS {
        // Identity check: only a cell holding this exact piece blocks the jump.
        if let Some(to) = from.offset(dx, dy)
            && board.cell_at(to) != Cell::Occupied(piece)
        {
            out.push(to);
        }
    }
}

/// Returns every move available to `side`, scanning source cells row-major
/// and destinations in [`legal_moves`] order.
pub fn side_moves(board: &Board, side: Side) -> Vec<Move> {
    board
        .pieces(side)
        .flat_map(|(from, _)| {
            legal_moves(board, from)
                .into_iter()
                .map(move |to| Move::new(from, to))
        })
        .collect()
}

/// Checks if `side` has at least one legal move anywhere on the board.
pub fn has_legal_move(board: &Board, side: Side) -> bool {
    board
        .pieces(side)
        .any(|(from, _)| !legal_moves(board, from).is_empty())
}

/// Checks if `mv` is produced by the move generator for the piece at its origin.
pub fn is_legal(board: &Board, mv: Move) -> bool {
    legal_moves(board, mv.from).contains(&mv.to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BLACK_HORSE, BLACK_PAWN, WHITE_HORSE, WHITE_PAWN};

    fn board_with(pieces: &[(Coord, Piece)]) -> Board {
        let mut board = Board::empty();
        for (at, piece) in pieces {
            board.set_cell(*at, Cell::Occupied(*piece));
        }
        board
    }

    #[test]
    fn test_white_pawn_initial() {
        let board = Board::new();
        assert_eq!(legal_moves(&board, Coord::new(0, 0)), vec![Coord::new(1, 0)]);
    }

    #[test]
    fn test_white_horse_initial() {
        let board = Board::new();
        assert_eq!(
            legal_moves(&board, Coord::new(0, 1)),
            vec![Coord::new(2, 0), Coord::new(2, 2)]
        );
    }

    #[test]
    fn test_black_pieces_initial() {
        let board = Board::new();
        assert_eq!(legal_moves(&board, Coord::new(2, 1)), vec![Coord::new(1, 1)]);
        // (0,1) holds the white horse and is a legal capture.
        assert_eq!(
            legal_moves(&board, Coord::new(2, 2)),
            vec![Coord::new(0, 1), Coord::new(1, 0)]
        );
    }

    #[test]
    fn test_empty_cell_has_no_moves() {
        assert!(legal_moves(&Board::new(), Coord::new(1, 1)).is_empty());
    }

    #[test]
    fn test_pawn_blocked_straight_ahead() {
        let board = board_with(&[
            (Coord::new(0, 1), WHITE_PAWN),
            (Coord::new(1, 1), BLACK_PAWN),
        ]);
        assert!(legal_moves(&board, Coord::new(0, 1)).is_empty());
        assert!(legal_moves(&board, Coord::new(1, 1)).is_empty());
    }

    #[test]
    fn test_pawn_captures_diagonally_only_opponents() {
        let board = board_with(&[
            (Coord::new(0, 1), WHITE_PAWN),
            (Coord::new(1, 0), BLACK_HORSE),
            (Coord::new(1, 2), WHITE_HORSE),
        ]);
        assert_eq!(
            legal_moves(&board, Coord::new(0, 1)),
            vec![Coord::new(1, 1), Coord::new(1, 0)]
        );
    }

    #[test]
    fn test_pawn_on_last_row_is_stuck() {
        let board = board_with(&[
            (Coord::new(2, 0), WHITE_PAWN),
            (Coord::new(0, 2), BLACK_PAWN),
        ]);
        assert!(legal_moves(&board, Coord::new(2, 0)).is_empty());
        assert!(legal_moves(&board, Coord::new(0, 2)).is_empty());
    }

    #[test]
    fn test_horse_may_land_on_own_pawn() {
        let board = board_with(&[
            (Coord::new(0, 0), WHITE_HORSE),
            (Coord::new(1, 2), WHITE_PAWN),
            (Coord::new(2, 1), WHITE_HORSE),
        ]);
        // (2,1) holds an identical horse; (1,2) holds an own pawn and is allowed.
        assert_eq!(legal_moves(&board, Coord::new(0, 0)), vec![Coord::new(1, 2)]);
    }

    #[test]
    fn test_horse_captures_opposing_pawn() {
        let board = board_with(&[
            (Coord::new(0, 0), WHITE_HORSE),
            (Coord::new(1, 2), BLACK_PAWN),
        ]);
        assert_eq!(
            legal_moves(&board, Coord::new(0, 0)),
            vec![Coord::new(1, 2), Coord::new(2, 1)]
        );
        assert!(is_legal(&board, Move::new(Coord::new(0, 0), Coord::new(1, 2))));
    }

    #[test]
    fn test_horse_in_centre_cannot_move() {
        let board = board_with(&[(Coord::new(1, 1), BLACK_HORSE)]);
        assert!(legal_moves(&board, Coord::new(1, 1)).is_empty());
    }

    #[test]
    fn test_side_moves_row_major() {
        let moves = side_moves(&Board::new(), Side::Black);
        assert_eq!(
            moves,
            vec![
                Move::new(Coord::new(2, 1), Coord::new(1, 1)),
                Move::new(Coord::new(2, 2), Coord::new(0, 1)),
                Move::new(Coord::new(2, 2), Coord::new(1, 0)),
            ]
        );
        assert!(has_legal_move(&Board::new(), Side::White));
    }

    #[test]
    fn test_no_moves_for_stranded_side() {
        let board = board_with(&[
            (Coord::new(1, 1), BLACK_HORSE),
            (Coord::new(0, 1), WHITE_PAWN),
        ]);
        assert!(!has_legal_move(&board, Side::Black));
        assert!(side_moves(&board, Side::Black).is_empty());
        assert!(!has_legal_move(&Board::empty(), Side::White));
    }

    #[test]
    fn test_is_legal() {
        let board = Board::new();
        assert!(is_legal(&board, Move::new(Coord::new(0, 0), Coord::new(1, 0))));
        assert!(!is_legal(&board, Move::new(Coord::new(0, 0), Coord::new(1, 1))));
        assert!(!is_legal(&board, Move::new(Coord::new(1, 1), Coord::new(1, 0))));
    }
}
