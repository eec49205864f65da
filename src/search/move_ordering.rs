//! Capture-value move ordering.
//!
//! Candidates capturing more valuable pieces are searched first so that
//! alpha-beta cutoffs arrive early. The sort is stable: equal captures keep
//! generation order.

use std::cmp::Reverse;

use crate::game_state::chess_types::Move;
use crate::game_state::position::Position;

/// Material value of the piece standing on the destination, 0 when empty.
#[inline]
pub fn capture_value(position: &Position, mv: Move) -> i32 {
    position
        .piece_at(mv.to)
        .map_or(0, |captured| captured.material_value())
}

pub fn order_by_capture_value(position: &Position, moves: &mut [Move]) {
    moves.sort_by_key(|&mv| Reverse(capture_value(position, mv)));
}
