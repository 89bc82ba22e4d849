//! Exhaustive fixed-depth minimax.
//!
//! Black (the AI) maximizes, White (the human) minimizes. Every node is
//! expanded: there is no pruning, no move ordering, no caching and no
//! iterative deepening, so cost grows as branching factor to the power of
//! depth. Each child is searched on its own clone of the parent board and
//! the board handed in is never mutated.

use super::action::Move;
use super::apply::apply_move;
use super::board::{Board, Side};
use super::eval::score;
use super::movegen::side_moves;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Plies searched when the AI picks a move.
pub const SEARCH_DEPTH: u32 = 4;

/// The side the engine plays for. Always the maximizer.
pub const AI_SIDE: Side = Side::Black;

/// The side the engine plays against. Always the minimizer.
pub const HUMAN_SIDE: Side = Side::White;

/// Value of a maximizing node with no moves.
pub const NEG_INFINITY: i32 = i32::MIN;

/// Value of a minimizing node with no moves.
pub const POS_INFINITY: i32 = i32::MAX;

/// Outcome of a root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    /// Chosen move, `None` when the AI has no move or `depth` was zero.
    pub best_move: Option<Move>,
    /// Value of the root node.
    pub score: i32,
    /// Nodes visited, root included.
    pub nodes: u64,
}

/// Minimax value of `board` searched `depth` plies deep.
///
/// At depth zero this is the static [`score`]. A node whose side to move
/// has no moves yields [`NEG_INFINITY`] when maximizing and
/// [`POS_INFINITY`] when minimizing, so parents steer away from lines that
/// strand their own side.
pub fn evaluate_node(board: &Board, depth: u32, maximizing: bool) -> i32 {
    let mut nodes = 0;
    node_value(board, depth, maximizing, &mut nodes)
}

fn node_value(board: &Board, depth: u32, maximizing: bool, nodes: &mut u64) -> i32 {
    *nodes += 1;

    if depth == 0 {
        return score(board);
    }

    let to_move = if maximizing { AI_SIDE } else { HUMAN_SIDE };
    let mut best = if maximizing { NEG_INFINITY } else { POS_INFINITY };

    for mv in side_moves(board, to_move) {
        let mut child = board.clone();
        apply_move(&mut child, mv);
        let value = node_value(&child, depth - 1, !maximizing, nodes);
        best = if maximizing {
            best.max(value)
        } else {
            best.min(value)
        };
    }

    best
}

/// Picks the AI's move on `board`, searching `depth` plies.
///
/// Candidates are tried in [`side_moves`] order and the first strictly
/// greater value wins ties. Returns `None` when the AI has no legal move
/// or `depth` is zero.
pub fn choose_move(board: &Board, depth: u32) -> Option<Move> {
    search(board, depth).best_move
}

/// Root search returning the chosen move together with its value and the
/// number of nodes visited.
#[instrument(skip(board))]
pub fn search(board: &Board, depth: u32) -> SearchReport {
    let mut nodes = 1;

    if depth == 0 {
        return SearchReport {
            best_move: None,
            score: score(board),
            nodes,
        };
    }

    let candidates = side_moves(board, AI_SIDE);
    let mut best_move = None;
    let mut best_score = NEG_INFINITY;

    for mv in &candidates {
        let mut child = board.clone();
        apply_move(&mut child, *mv);
        let value = node_value(&child, depth - 1, false, &mut nodes);
        if value > best_score {
            best_score = value;
            best_move = Some(*mv);
        }
    }

    // Every candidate strands the AI further down; still play something.
    if best_move.is_none() {
        best_move = candidates.first().copied();
    }

    debug!(
        candidates = candidates.len(),
        nodes,
        score = best_score,
        best_move = ?best_move,
        "Search finished"
    );

    SearchReport {
        best_move,
        score: best_score,
        nodes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BLACK_HORSE, BLACK_PAWN, Cell, Coord, WHITE_HORSE, WHITE_PAWN};
    use crate::movegen::legal_moves;

    fn board_with(pieces: &[(Coord, crate::board::Piece)]) -> Board {
        let mut board = Board::empty();
        for (at, piece) in pieces {
            board.set_cell(*at, Cell::Occupied(*piece));
        }
        board
    }

    #[test]
    fn test_depth_zero_is_static_score() {
        let boards = [
            Board::new(),
            Board::empty(),
            board_with(&[(Coord::new(0, 1), WHITE_HORSE)]),
            board_with(&[(Coord::new(1, 1), BLACK_HORSE), (Coord::new(2, 0), BLACK_PAWN)]),
        ];
        for board in &boards {
            assert_eq!(evaluate_node(board, 0, true), score(board));
            assert_eq!(evaluate_node(board, 0, false), score(board));

            let report = search(board, 0);
            assert_eq!(report.best_move, None);
            assert_eq!(report.score, score(board));
            assert_eq!(report.nodes, 1);
        }
    }

    #[test]
    fn test_root_move_is_legal_black_move() {
        let board = Board::new();
        let mv = choose_move(&board, SEARCH_DEPTH).expect("black can move");
        assert!(board.cell_at(mv.from).belongs_to(AI_SIDE));
        assert!(legal_moves(&board, mv.from).contains(&mv.to));
    }

    #[test]
    fn test_search_does_not_mutate_input() {
        let board = Board::new();
        let before = board.clone();
        let _ = search(&board, SEARCH_DEPTH);
        assert_eq!(board, before);
    }

    #[test]
    fn test_takes_free_horse_at_depth_one() {
        // Black horse can capture the white horse or step to an empty cell.
        let board = board_with(&[
            (Coord::new(2, 2), BLACK_HORSE),
            (Coord::new(0, 1), WHITE_HORSE),
            (Coord::new(0, 0), WHITE_PAWN),
        ]);
        let report = search(&board, 1);
        assert_eq!(
            report.best_move,
            Some(Move::new(Coord::new(2, 2), Coord::new(0, 1)))
        );
        assert_eq!(report.score, 5 - 1);
        // Root plus one leaf per candidate.
        assert_eq!(report.nodes, 3);
    }

    #[test]
    fn test_ties_keep_first_candidate() {
        // Both black moves are quiet and score the same.
        let board = board_with(&[(Coord::new(2, 2), BLACK_HORSE)]);
        let report = search(&board, 1);
        assert_eq!(
            report.best_move,
            Some(Move::new(Coord::new(2, 2), Coord::new(0, 1)))
        );
        assert_eq!(report.score, 5);
    }

    #[test]
    fn test_no_ai_move_is_none() {
        let board = board_with(&[(Coord::new(1, 1), BLACK_HORSE), (Coord::new(0, 0), WHITE_PAWN)]);
        assert_eq!(choose_move(&board, SEARCH_DEPTH), None);
        assert_eq!(search(&board, SEARCH_DEPTH).score, NEG_INFINITY);
        assert_eq!(choose_move(&Board::empty(), SEARCH_DEPTH), None);
    }

    #[test]
    fn test_exhausted_nodes_return_identities() {
        // A horse in the centre has no jump that stays on the board.
        let stuck = board_with(&[(Coord::new(1, 1), BLACK_HORSE), (Coord::new(1, 0), WHITE_HORSE)]);
        assert_eq!(evaluate_node(&stuck, 1, true), NEG_INFINITY);
        assert_eq!(evaluate_node(&Board::empty(), 3, false), POS_INFINITY);
        assert_eq!(evaluate_node(&Board::empty(), 3, true), NEG_INFINITY);
    }

    #[test]
    fn test_stranded_candidates_fall_back_to_first() {
        // The black pawn's only move reaches row 0 where it is stuck, and
        // every white reply leaves Black without a move.
        let board = board_with(&[(Coord::new(1, 0), BLACK_PAWN), (Coord::new(2, 2), WHITE_HORSE)]);
        let report = search(&board, 3);
        assert_eq!(report.score, NEG_INFINITY);
        assert_eq!(
            report.best_move,
            Some(Move::new(Coord::new(1, 0), Coord::new(0, 0)))
        );
    }

    #[test]
    fn test_minimizer_prefers_capture() {
        // White to move can take the black horse with its pawn.
        let board = board_with(&[
            (Coord::new(0, 0), WHITE_PAWN),
            (Coord::new(1, 1), BLACK_HORSE),
            (Coord::new(2, 0), BLACK_PAWN),
        ]);
        assert_eq!(evaluate_node(&board, 1, false), 1 - 1);
    }

    #[test]
    fn test_node_count_matches_exhaustive_tree() {
        let board = Board::new();

        fn count(board: &Board, depth: u32, maximizing: bool) -> u64 {
            if depth == 0 {
                return 1;
            }
            let side = if maximizing { AI_SIDE } else { HUMAN_SIDE };
            1 + side_moves(board, side)
                .into_iter()
                .map(|mv| {
                    let mut child = board.clone();
                    apply_move(&mut child, mv);
                    count(&child, depth - 1, !maximizing)
                })
                .sum::<u64>()
        }

        assert_eq!(search(&board, 3).nodes, count(&board, 3, true));
    }
}
