//! King movement: one square in any direction. No castling.

use crate::game_state::chess_types::{Move, Piece};
use crate::game_state::position::Position;
use crate::moves::move_shared::is_empty_or_enemy;

pub fn is_legal_king_move(position: &Position, mv: Move, king: Piece) -> bool {
    let rows = mv.row_delta().unsigned_abs();
    let cols = mv.col_delta().unsigned_abs();

    rows <= 1 && cols <= 1 && (rows, cols) != (0, 0) && is_empty_or_enemy(position, mv.to, king.color)
}

#[cfg(test)]
mod tests {
    use super::is_legal_king_move;
    use crate::game_state::chess_types::{Color, Move, Piece, PieceKind};
    use crate::game_state::position::Position;

    const WHITE_KING: Piece = Piece::new(PieceKind::King, Color::White);

    fn mv(from_row: u8, from_col: u8, to_row: u8, to_col: u8) -> Move {
        Move::from_coords(from_row, from_col, to_row, to_col).expect("coordinates are on the board")
    }

    #[test]
    fn king_steps_one_square() {
        let position = Position::from_fen("4k3/8/8/8/4K3/8/8/8 w - - 0 1").expect("FEN should parse");
        let mut reachable = 0;
        for to_row in 0..8 {
            for to_col in 0..8 {
                if is_legal_king_move(&position, mv(4, 4, to_row, to_col), WHITE_KING) {
                    reachable += 1;
                }
            }
        }
        assert_eq!(reachable, 8);
    }

    #[test]
    fn king_cannot_castle_or_take_own_piece() {
        let position = Position::from_fen("4k3/8/8/8/8/8/8/R3K2R w - - 0 1").expect("FEN should parse");
        assert!(!is_legal_king_move(&position, mv(7, 4, 7, 6), WHITE_KING));
        assert!(!is_legal_king_move(&position, mv(7, 4, 7, 2), WHITE_KING));

        let crowded = Position::new_game();
        assert!(!is_legal_king_move(&crowded, mv(7, 4, 6, 4), WHITE_KING));
    }
}
