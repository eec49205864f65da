//! Core value types shared by every engine subsystem.
//!
//! Coordinates follow the board the game is displayed on: row 0 is Black's
//! home rank, row 7 is White's home rank and columns run 0..7 from White's
//! left. A `Square` can only be built inside that grid, so every consumer can
//! index the board without re-checking bounds.

use std::fmt;

use crate::game_state::chess_rules::{
    BISHOP_VALUE, BOARD_SIZE, KING_VALUE, KNIGHT_VALUE, PAWN_VALUE, QUEEN_VALUE, ROOK_VALUE,
};
use crate::utils::algebraic::{move_to_coordinate, square_to_algebraic};

/// Side owning a piece or having the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a single forward pawn step.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row holding this side's pawns at the start of the game.
    #[inline]
    pub const fn pawn_start_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Scores are White-positive, so White is the maximizing side.
    #[inline]
    pub const fn is_maximizing(self) -> bool {
        matches!(self, Color::White)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => f.write_str("White"),
            Color::Black => f.write_str("Black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Fixed material worth used by evaluation and capture ordering.
    #[inline]
    pub const fn material_value(self) -> i32 {
        match self {
            PieceKind::Pawn => PAWN_VALUE,
            PieceKind::Knight => KNIGHT_VALUE,
            PieceKind::Bishop => BISHOP_VALUE,
            PieceKind::Rook => ROOK_VALUE,
            PieceKind::Queen => QUEEN_VALUE,
            PieceKind::King => KING_VALUE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    #[inline]
    pub const fn material_value(self) -> i32 {
        self.kind.material_value()
    }
}

/// A board coordinate guaranteed to lie on the 8x8 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Builds a square from literal coordinates.
    ///
    /// # Panics
    ///
    /// Panics when either coordinate is outside `0..8`. Intended for
    /// constants and fixtures where an off-board value is a programming error.
    #[inline]
    pub const fn at(row: u8, col: u8) -> Self {
        assert!(row < BOARD_SIZE && col < BOARD_SIZE, "square outside the board");
        Self { row, col }
    }

    /// Row-major index in `0..64`.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        Self::new(index / BOARD_SIZE, index % BOARD_SIZE)
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    #[inline]
    pub const fn index(self) -> usize {
        (self.row * BOARD_SIZE + self.col) as usize
    }

    /// Square reached by stepping `(row_step, col_step)`, or `None` off the board.
    #[inline]
    pub fn offset(self, row_step: i8, col_step: i8) -> Option<Self> {
        let row = u8::try_from((self.row as i8).checked_add(row_step)?).ok()?;
        let col = u8::try_from((self.col as i8).checked_add(col_step)?).ok()?;
        Self::new(row, col)
    }

    /// All 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE * BOARD_SIZE).filter_map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&square_to_algebraic(*self))
    }
}

/// Relocation of whatever stands on `from` to `to`.
///
/// Equality is structural; no capture or promotion data is carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }

    pub fn from_coords(from_row: u8, from_col: u8, to_row: u8, to_col: u8) -> Option<Self> {
        Some(Self::new(
            Square::new(from_row, from_col)?,
            Square::new(to_row, to_col)?,
        ))
    }

    #[inline]
    pub const fn row_delta(self) -> i8 {
        self.to.row as i8 - self.from.row as i8
    }

    #[inline]
    pub const fn col_delta(self) -> i8 {
        self.to.col as i8 - self.from.col as i8
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&move_to_coordinate(*self))
    }
}

/// Raw 8x8 occupancy grid indexed `[row][col]`.
pub type Cells = [[Option<Piece>; BOARD_SIZE as usize]; BOARD_SIZE as usize];
