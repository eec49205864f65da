//! Helpers shared by the per-piece legality predicates.

use crate::game_state::chess_types::{Color, Square};
use crate::game_state::position::Position;

/// Destination is free or holds a piece of the other side.
#[inline]
pub fn is_empty_or_enemy(position: &Position, square: Square, mover: Color) -> bool {
    position
        .piece_at(square)
        .is_none_or(|occupant| occupant.color != mover)
}

/// Every square strictly between `from` and `to` along `(row_step, col_step)`
/// is empty.
///
/// Walking off the board before reaching `to` counts as blocked, so the
/// predicate stays sound for directions that never reach the destination.
/// A zero step reaches nothing and is blocked.
pub fn is_path_clear(
    position: &Position,
    from: Square,
    to: Square,
    row_step: i8,
    col_step: i8,
) -> bool {
    if (row_step, col_step) == (0, 0) {
        return false;
    }

    let mut current = from;
    loop {
        let Some(next) = current.offset(row_step, col_step) else {
            return false;
        };
        if next == to {
            return true;
        }
        if !position.is_empty(next) {
            return false;
        }
        current = next;
    }
}
