//! Bishop movement along unobstructed diagonals.

use crate::game_state::chess_types::{Move, Piece};
use crate::game_state::position::Position;
use crate::moves::move_shared::{is_empty_or_enemy, is_path_clear};

pub fn is_legal_bishop_move(position: &Position, mv: Move, bishop: Piece) -> bool {
    let row_delta = mv.row_delta();
    let col_delta = mv.col_delta();

    if row_delta == 0 || row_delta.abs() != col_delta.abs() {
        return false;
    }

    is_path_clear(position, mv.from, mv.to, row_delta.signum(), col_delta.signum())
        && is_empty_or_enemy(position, mv.to, bishop.color)
}

#[cfg(test)]
mod tests {
    use super::is_legal_bishop_move;
    use crate::game_state::chess_types::{Color, Move, Piece, PieceKind};
    use crate::game_state::position::Position;

    const WHITE_BISHOP: Piece = Piece::new(PieceKind::Bishop, Color::White);

    fn mv(from_row: u8, from_col: u8, to_row: u8, to_col: u8) -> Move {
        Move::from_coords(from_row, from_col, to_row, to_col).expect("coordinates are on the board")
    }

    #[test]
    fn bishop_slides_diagonally_in_all_directions() {
        let position = Position::from_fen("4k3/8/8/8/3B4/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let d4 = (4, 3);
        for (to_row, to_col) in [(0, 7), (1, 0), (7, 0), (6, 5)] {
            assert!(
                is_legal_bishop_move(&position, mv(d4.0, d4.1, to_row, to_col), WHITE_BISHOP),
                "d4 bishop should reach ({to_row},{to_col})"
            );
        }
    }

    #[test]
    fn bishop_rejects_straight_and_null_moves() {
        let position = Position::from_fen("4k3/8/8/8/3B4/8/8/4K3 w - - 0 1").expect("FEN should parse");
        assert!(!is_legal_bishop_move(&position, mv(4, 3, 4, 6), WHITE_BISHOP));
        assert!(!is_legal_bishop_move(&position, mv(4, 3, 2, 3), WHITE_BISHOP));
        assert!(!is_legal_bishop_move(&position, mv(4, 3, 4, 3), WHITE_BISHOP));
        assert!(!is_legal_bishop_move(&position, mv(4, 3, 2, 4), WHITE_BISHOP));
    }

    #[test]
    fn blocker_on_diagonal_stops_bishop_regardless_of_target() {
        // Black pawn on f6 blocks the d4-h8 diagonal.
        let position =
            Position::from_fen("4k2r/8/5p2/8/3B4/8/8/4K3 w - - 0 1").expect("FEN should parse");
        assert!(is_legal_bishop_move(&position, mv(4, 3, 3, 4), WHITE_BISHOP));
        assert!(is_legal_bishop_move(&position, mv(4, 3, 2, 5), WHITE_BISHOP));
        assert!(!is_legal_bishop_move(&position, mv(4, 3, 1, 6), WHITE_BISHOP));
        assert!(!is_legal_bishop_move(&position, mv(4, 3, 0, 7), WHITE_BISHOP));
    }

    #[test]
    fn bishop_does_not_capture_own_piece() {
        let position = Position::new_game();
        assert!(!is_legal_bishop_move(&position, mv(7, 2, 6, 3), WHITE_BISHOP));
        assert!(!is_legal_bishop_move(&position, mv(7, 2, 4, 5), WHITE_BISHOP));
    }
}
