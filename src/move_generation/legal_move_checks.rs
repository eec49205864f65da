//! Check detection on a position.
//!
//! Every opposing piece is tested against the king's square with the same
//! movement predicates used for ordinary moves. Nothing is cached.

use crate::game_state::chess_types::{Color, Move, PieceKind, Square};
use crate::game_state::position::Position;
use crate::moves::move_legality::is_legal;

#[inline]
pub fn king_square(position: &Position, color: Color) -> Option<Square> {
    position
        .pieces()
        .find(|(_, piece)| piece.kind == PieceKind::King && piece.color == color)
        .map(|(square, _)| square)
}

/// Whether the king of `color` is attacked. A side without a king (already
/// captured) is reported as not in check.
pub fn is_in_check(position: &Position, color: Color) -> bool {
    let Some(king) = king_square(position, color) else {
        return false;
    };
    !attackers_of(position, king, color.opposite()).is_empty()
}

/// Squares holding pieces of `attacker_color` that could move onto `target`.
pub fn attackers_of(position: &Position, target: Square, attacker_color: Color) -> Vec<Square> {
    position
        .pieces()
        .filter(|(_, piece)| piece.color == attacker_color)
        .filter(|&(from, piece)| is_legal(position, Move::new(from, target), piece))
        .map(|(from, _)| from)
        .collect()
}
