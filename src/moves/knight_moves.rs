//! Knight movement: (2,1) or (1,2) jumps onto an empty or enemy square.

use crate::game_state::chess_types::{Move, Piece};
use crate::game_state::position::Position;
use crate::moves::move_shared::is_empty_or_enemy;

pub fn is_legal_knight_move(position: &Position, mv: Move, knight: Piece) -> bool {
    let rows = mv.row_delta().unsigned_abs();
    let cols = mv.col_delta().unsigned_abs();
    let is_l_shape = (rows == 2 && cols == 1) || (rows == 1 && cols == 2);

    is_l_shape && is_empty_or_enemy(position, mv.to, knight.color)
}
