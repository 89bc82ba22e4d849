//! Core domain types for the 3x3 pawns-and-horses board.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum::EnumIter;

/// Width and height of the board.
pub const BOARD_SIZE: usize = 3;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Side {
    /// White, always the human. Starts on row 0 and moves first.
    White,
    /// Black, always the AI. Starts on row 2.
    Black,
}

impl Side {
    /// Returns the opponent side.
    pub fn opponent(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Row step a pawn of this side takes when advancing.
    pub fn forward(self) -> isize {
        match self {
            Side::White => 1,
            Side::Black => -1,
        }
    }

    fn letter(self) -> char {
        match self {
            Side::White => 'W',
            Side::Black => 'B',
        }
    }
}

/// Piece category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Kind {
    /// Steps forward onto empty cells, captures diagonally forward.
    Pawn,
    /// Knight-shaped jumper.
    Horse,
}

impl Kind {
    fn letter(self) -> char {
        match self {
            Kind::Pawn => 'P',
            Kind::Horse => 'H',
        }
    }
}

/// A piece is the pair of its side and kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    /// Owning side.
    pub side: Side,
    /// Movement kind.
    pub kind: Kind,
}

impl Piece {
    /// Creates a new piece.
    pub const fn new(side: Side, kind: Kind) -> Self {
        Self { side, kind }
    }

    /// Material value. Positive favors Black, negative favors White.
    pub fn value(self) -> i32 {
        let magnitude = match self.kind {
            Kind::Pawn => 1,
            Kind::Horse => 5,
        };
        match self.side {
            Side::White => -magnitude,
            Side::Black => magnitude,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.side.letter(), self.kind.letter())
    }
}

/// White pawn.
pub const WHITE_PAWN: Piece = Piece::new(Side::White, Kind::Pawn);
/// White horse.
pub const WHITE_HORSE: Piece = Piece::new(Side::White, Kind::Horse);
/// Black pawn.
pub const BLACK_PAWN: Piece = Piece::new(Side::Black, Kind::Pawn);
/// Black horse.
pub const BLACK_HORSE: Piece = Piece::new(Side::Black, Kind::Horse);

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell holding exactly one piece.
    Occupied(Piece),
}

impl Cell {
    /// Returns the piece on this cell, if any.
    pub fn piece(self) -> Option<Piece> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(piece) => Some(piece),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Checks if the cell holds a piece of `side`.
    pub fn belongs_to(self, side: Side) -> bool {
        matches!(self, Cell::Occupied(piece) if piece.side == side)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => f.write_str(".."),
            Cell::Occupied(piece) => write!(f, "{piece}"),
        }
    }
}

impl FromStr for Cell {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ".." => Ok(Cell::Empty),
            "WP" => Ok(Cell::Occupied(WHITE_PAWN)),
            "WH" => Ok(Cell::Occupied(WHITE_HORSE)),
            "BP" => Ok(Cell::Occupied(BLACK_PAWN)),
            "BH" => Ok(Cell::Occupied(BLACK_HORSE)),
            other => Err(PositionError::UnknownToken(other.to_string())),
        }
    }
}

/// Board coordinate. `x` is the row, `y` the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// Row, `0..3`. Row 0 is White's back rank.
    pub x: usize,
    /// Column, `0..3`.
    pub y: usize,
}

impl Coord {
    /// All nine coordinates in row-major order.
    pub const ALL: [Coord; 9] = [
        Coord::new(0, 0),
        Coord::new(0, 1),
        Coord::new(0, 2),
        Coord::new(1, 0),
        Coord::new(1, 1),
        Coord::new(1, 2),
        Coord::new(2, 0),
        Coord::new(2, 1),
        Coord::new(2, 2),
    ];

    /// Creates a coordinate. Callers guarantee both values are below [`BOARD_SIZE`].
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Creates a coordinate if it lies on the board.
    pub fn try_new(x: usize, y: usize) -> Option<Self> {
        (x < BOARD_SIZE && y < BOARD_SIZE).then_some(Self { x, y })
    }

    /// Shifts the coordinate, returning `None` when it leaves the board.
    pub fn offset(self, dx: isize, dy: isize) -> Option<Self> {
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        Self::try_new(x, y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// 3x3 board.
///
/// `Board` is plain data with value semantics: cloning produces an
/// independent snapshot, which is what the search hands to each branch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates the starting position.
    ///
    /// ```text
    /// row0: WP WH ..
    /// row1: .. .. ..
    /// row2: .. BP BH
    /// ```
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.set_cell(Coord::new(0, 0), Cell::Occupied(WHITE_PAWN));
        board.set_cell(Coord::new(0, 1), Cell::Occupied(WHITE_HORSE));
        board.set_cell(Coord::new(2, 1), Cell::Occupied(BLACK_PAWN));
        board.set_cell(Coord::new(2, 2), Cell::Occupied(BLACK_HORSE));
        board
    }

    /// Creates a board with no pieces.
    pub fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Gets the cell at `at`.
    pub fn cell_at(&self, at: Coord) -> Cell {
        self.cells[at.x][at.y]
    }

    /// Sets the cell at `at`.
    pub fn set_cell(&mut self, at: Coord, cell: Cell) {
        self.cells[at.x][at.y] = cell;
    }

    /// Returns the pieces of `side` in row-major order.
    pub fn pieces(&self, side: Side) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        Coord::ALL.into_iter().filter_map(move |at| match self.cell_at(at) {
            Cell::Occupied(piece) if piece.side == side => Some((at, piece)),
            _ => None,
        })
    }

    /// Checks if `side` has at least one piece left.
    pub fn has_pieces(&self, side: Side) -> bool {
        self.pieces(side).next().is_some()
    }

    /// Returns the rows of the board.
    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "   0    1    2")?;
        for (i, row) in self.cells.iter().enumerate() {
            write!(f, "{i}")?;
            for cell in row {
                write!(f, " {cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum PositionError {
    /// The text did not contain exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    CellCount(usize),

    /// A cell token was not one of `WP WH BP BH ..`.
    #[display("Unknown cell token {:?}", _0)]
    UnknownToken(String),
}

impl std::error::Error for PositionError {}

impl FromStr for Board {
    type Err = PositionError;

    /// Parses nine cell tokens in row-major order, separated by whitespace
    /// or `/`, e.g. `"WP WH .. / .. .. .. / .. BP BH"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s
            .split(|c: char| c.is_whitespace() || c == '/')
            .filter(|t| !t.is_empty())
            .collect();
        if tokens.len() != BOARD_SIZE * BOARD_SIZE {
            return Err(PositionError::CellCount(tokens.len()));
        }

        let mut board = Board::empty();
        for (at, token) in Coord::ALL.into_iter().zip(tokens) {
            board.set_cell(at, token.parse()?);
        }
        Ok(board)
    }
}
