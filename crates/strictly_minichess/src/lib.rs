//! Strictly Minichess - pure game logic for 3x3 pawns and horses.
//!
//! White (the human) starts with a pawn and a horse on row 0, Black (the
//! AI) with a pawn and a horse on row 2. Pawns step forward and capture
//! diagonally, horses jump like knights. Material is scored -1/-5 for
//! White and +1/+5 for Black, and a side wins when the score reaches 6 in
//! its favor.
//!
//! # Example
//!
//! ```
//! use strictly_minichess::{Board, SEARCH_DEPTH, choose_move, legal_moves, score};
//!
//! let board = Board::new();
//! assert_eq!(score(&board), 0);
//!
//! let mv = choose_move(&board, SEARCH_DEPTH).expect("black has a move");
//! assert!(legal_moves(&board, mv.from).contains(&mv.to));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod apply;
mod board;
mod eval;
mod game;
mod movegen;
mod outcome;
mod search;

// Crate-level exports - Board model
pub use board::{
    BLACK_HORSE, BLACK_PAWN, BOARD_SIZE, Board, Cell, Coord, Kind, Piece, PositionError, Side,
    WHITE_HORSE, WHITE_PAWN,
};

// Crate-level exports - Moves
pub use action::{Move, MoveError, MoveParseError};
pub use apply::apply_move;
pub use movegen::{has_legal_move, is_legal, legal_moves, side_moves};

// Crate-level exports - Evaluation and search
pub use eval::score;
pub use search::{
    AI_SIDE, HUMAN_SIDE, NEG_INFINITY, POS_INFINITY, SEARCH_DEPTH, SearchReport, choose_move,
    evaluate_node, search,
};

// Crate-level exports - Game flow
pub use game::{Game, GameStatus};
pub use outcome::{Outcome, WIN_THRESHOLD, check_winner, outcome};
