//! Rook movement along unobstructed rows and columns.

use crate::game_state::chess_types::{Move, Piece};
use crate::game_state::position::Position;
use crate::moves::move_shared::{is_empty_or_enemy, is_path_clear};

pub fn is_legal_rook_move(position: &Position, mv: Move, rook: Piece) -> bool {
    let row_delta = mv.row_delta();
    let col_delta = mv.col_delta();

    let is_vertical = col_delta == 0 && row_delta != 0;
    let is_horizontal = row_delta == 0 && col_delta != 0;
    if !is_vertical && !is_horizontal {
        return false;
    }

    is_path_clear(position, mv.from, mv.to, row_delta.signum(), col_delta.signum())
        && is_empty_or_enemy(position, mv.to, rook.color)
}

#[cfg(test)]
mod tests {
    use super::is_legal_rook_move;
    use crate::game_state::chess_types::{Color, Move, Piece, PieceKind};
    use crate::game_state::position::Position;

    const WHITE_ROOK: Piece = Piece::new(PieceKind::Rook, Color::White);
    const BLACK_ROOK: Piece = Piece::new(PieceKind::Rook, Color::Black);

    fn mv(from_row: u8, from_col: u8, to_row: u8, to_col: u8) -> Move {
        Move::from_coords(from_row, from_col, to_row, to_col).expect("coordinates are on the board")
    }

    #[test]
    fn rook_moves_along_open_lines() {
        let position = Position::from_fen("4k3/8/8/8/3R4/8/8/4K3 w - - 0 1").expect("FEN should parse");
        assert!(is_legal_rook_move(&position, mv(4, 3, 0, 3), WHITE_ROOK));
        assert!(is_legal_rook_move(&position, mv(4, 3, 7, 3), WHITE_ROOK));
        assert!(is_legal_rook_move(&position, mv(4, 3, 4, 0), WHITE_ROOK));
        assert!(is_legal_rook_move(&position, mv(4, 3, 4, 7), WHITE_ROOK));
        assert!(!is_legal_rook_move(&position, mv(4, 3, 3, 4), WHITE_ROOK));
        assert!(!is_legal_rook_move(&position, mv(4, 3, 4, 3), WHITE_ROOK));
    }

    #[test]
    fn blocker_on_file_makes_any_farther_target_illegal() {
        // White pawn on d6 sits between the d4 rook and the black rook on d8.
        let position =
            Position::from_fen("3rk3/8/3P4/8/3R4/8/8/4K3 w - - 0 1").expect("FEN should parse");
        assert!(is_legal_rook_move(&position, mv(4, 3, 3, 3), WHITE_ROOK));
        assert!(!is_legal_rook_move(&position, mv(4, 3, 2, 3), WHITE_ROOK));
        assert!(!is_legal_rook_move(&position, mv(4, 3, 1, 3), WHITE_ROOK));
        assert!(!is_legal_rook_move(&position, mv(4, 3, 0, 3), WHITE_ROOK));
        assert!(is_legal_rook_move(&position, mv(0, 3, 2, 3), BLACK_ROOK));
        assert!(!is_legal_rook_move(&position, mv(0, 3, 4, 3), BLACK_ROOK));
    }

    #[test]
    fn rook_from_start_is_boxed_in() {
        let position = Position::new_game();
        assert!(!is_legal_rook_move(&position, mv(7, 0, 5, 0), WHITE_ROOK));
        assert!(!is_legal_rook_move(&position, mv(7, 0, 7, 1), WHITE_ROOK));
    }
}
