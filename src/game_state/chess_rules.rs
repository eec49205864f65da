//! Canonical chess-rule constants.
//!
//! Material values, the standard starting arrangement and the fixed search
//! depth used by the automated opponent.

use crate::game_state::chess_types::{Cells, Color, Piece, PieceKind};

pub const BOARD_SIZE: u8 = 8;

pub const PAWN_VALUE: i32 = 10;
pub const KNIGHT_VALUE: i32 = 30;
pub const BISHOP_VALUE: i32 = 30;
pub const ROOK_VALUE: i32 = 50;
pub const QUEEN_VALUE: i32 = 90;
pub const KING_VALUE: i32 = 900;

/// Plies searched by the automated opponent.
pub const DEFAULT_SEARCH_DEPTH: u8 = 3;

/// Number of most recent history entries inspected by the repetition heuristic.
pub const REPETITION_WINDOW: usize = 4;
/// Matches inside the window that mark a move as repetitive.
pub const REPETITION_THRESHOLD: usize = 2;

/// Standard starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1";

pub const BACK_RANK: [PieceKind; BOARD_SIZE as usize] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Home row of a side's back-rank pieces.
#[inline]
pub const fn home_row(color: Color) -> usize {
    match color {
        Color::White => 7,
        Color::Black => 0,
    }
}

/// Sixteen pieces per side, pawns on their start rows.
pub fn starting_cells() -> Cells {
    let mut cells: Cells = [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize];
    for color in [Color::White, Color::Black] {
        let back = home_row(color);
        let pawns = usize::from(color.pawn_start_row());
        for (col, kind) in BACK_RANK.iter().enumerate() {
            cells[back][col] = Some(Piece::new(*kind, color));
            cells[pawns][col] = Some(Piece::new(PieceKind::Pawn, color));
        }
    }
    cells
}
