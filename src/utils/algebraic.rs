//! Coordinate notation for squares (`e4`) and moves (`e2e4`).
//!
//! Files `a`..`h` are columns 0..7; rank `8` is row 0 and rank `1` is row 7,
//! so White's home rank prints as rank 1.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::{Move, Square};

/// Convert coordinate notation (for example: "e4") to a square.
pub fn algebraic_to_square(text: &str) -> ChessResult<Square> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidSquare(text.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidSquare(text.to_owned()));
    }

    Square::new(b'8' - rank, file - b'a').ok_or_else(|| ChessErrors::InvalidSquare(text.to_owned()))
}

pub fn square_to_algebraic(square: Square) -> String {
    let file = char::from(b'a' + square.col());
    let rank = char::from(b'8' - square.row());
    format!("{file}{rank}")
}

/// Parse "e2e4" (an optional space or dash between the squares is accepted).
pub fn coordinate_to_move(text: &str) -> ChessResult<Move> {
    let compact: String = text
        .trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '-'))
        .collect();
    if compact.len() != 4 || !compact.is_ascii() {
        return Err(ChessErrors::InvalidMove(text.to_owned()));
    }

    let from = algebraic_to_square(&compact[0..2])
        .map_err(|_| ChessErrors::InvalidMove(text.to_owned()))?;
    let to = algebraic_to_square(&compact[2..4])
        .map_err(|_| ChessErrors::InvalidMove(text.to_owned()))?;
    Ok(Move::new(from, to))
}

pub fn move_to_coordinate(mv: Move) -> String {
    format!(
        "{}{}",
        square_to_algebraic(mv.from),
        square_to_algebraic(mv.to)
    )
}
