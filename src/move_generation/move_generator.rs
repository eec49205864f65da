//! Move generation by brute-force scan of the legality predicates.
//!
//! Every origin square holding a piece of the requested color is paired with
//! every destination square, keeping the pairs the legality engine accepts.
//! The list is rebuilt from scratch on every call, in row-major order of
//! origin then destination.

use crate::game_state::chess_types::{Color, Move, Square};
use crate::game_state::position::Position;
use crate::moves::move_legality::is_legal;

pub trait MoveGenerator: Send + Sync {
    fn generate_moves(&self, position: &Position, color: Color) -> Vec<Move>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ScanMoveGenerator;

impl MoveGenerator for ScanMoveGenerator {
    fn generate_moves(&self, position: &Position, color: Color) -> Vec<Move> {
        let mut moves = Vec::new();
        for (from, piece) in position.pieces().filter(|(_, piece)| piece.color == color) {
            moves.extend(
                Square::all()
                    .map(|to| Move::new(from, to))
                    .filter(|&mv| is_legal(position, mv, piece)),
            );
        }
        moves
    }
}

#[inline]
pub fn generate_moves(position: &Position, color: Color) -> Vec<Move> {
    ScanMoveGenerator.generate_moves(position, color)
}

/// Destinations reachable from `from` by the piece standing there.
pub fn destinations_from(position: &Position, from: Square) -> Vec<Square> {
    let Some(piece) = position.piece_at(from) else {
        return Vec::new();
    };
    Square::all()
        .filter(|&to| is_legal(position, Move::new(from, to), piece))
        .collect()
}
