//! Queen movement: any legal bishop or rook move.

use crate::game_state::chess_types::{Move, Piece};
use crate::game_state::position::Position;
use crate::moves::bishop_moves::is_legal_bishop_move;
use crate::moves::rook_moves::is_legal_rook_move;

#[inline]
pub fn is_legal_queen_move(position: &Position, mv: Move, queen: Piece) -> bool {
    is_legal_bishop_move(position, mv, queen) || is_legal_rook_move(position, mv, queen)
}

#[cfg(test)]
mod tests {
    use super::is_legal_queen_move;
    use crate::game_state::chess_types::{Color, Move, Piece, PieceKind};
    use crate::game_state::position::Position;

    const BLACK_QUEEN: Piece = Piece::new(PieceKind::Queen, Color::Black);

    fn mv(from_row: u8, from_col: u8, to_row: u8, to_col: u8) -> Move {
        Move::from_coords(from_row, from_col, to_row, to_col).expect("coordinates are on the board")
    }

    #[test]
    fn queen_combines_rook_and_bishop_lines() {
        let position = Position::from_fen("4k3/8/8/3q4/8/8/8/4K3 b - - 0 1").expect("FEN should parse");
        assert!(is_legal_queen_move(&position, mv(3, 3, 7, 3), BLACK_QUEEN));
        assert!(is_legal_queen_move(&position, mv(3, 3, 3, 0), BLACK_QUEEN));
        assert!(is_legal_queen_move(&position, mv(3, 3, 7, 7), BLACK_QUEEN));
        assert!(is_legal_queen_move(&position, mv(3, 3, 0, 0), BLACK_QUEEN));
        assert!(!is_legal_queen_move(&position, mv(3, 3, 5, 4), BLACK_QUEEN));
    }

    #[test]
    fn queen_is_blocked_like_sliders() {
        let position = Position::new_game();
        assert!(!is_legal_queen_move(&position, mv(0, 3, 3, 3), BLACK_QUEEN));
        assert!(!is_legal_queen_move(&position, mv(0, 3, 3, 0), BLACK_QUEEN));
    }
}
