//! Pawn movement: single push, double push from the start row, diagonal
//! capture. Direction and start row depend on the pawn's color.

use crate::game_state::chess_types::{Move, Piece};
use crate::game_state::position::Position;

pub fn is_legal_pawn_move(position: &Position, mv: Move, pawn: Piece) -> bool {
    let direction = pawn.color.pawn_direction();
    let row_delta = mv.row_delta();
    let col_delta = mv.col_delta();
    let destination = position.piece_at(mv.to);

    if col_delta == 0 && row_delta == direction && destination.is_none() {
        return true;
    }

    if col_delta == 0
        && mv.from.row() == pawn.color.pawn_start_row()
        && row_delta == 2 * direction
        && destination.is_none()
    {
        return mv
            .from
            .offset(direction, 0)
            .is_some_and(|skipped| position.is_empty(skipped));
    }

    col_delta.abs() == 1
        && row_delta == direction
        && destination.is_some_and(|target| target.color != pawn.color)
}

#[cfg(test)]
mod tests {
    use super::is_legal_pawn_move;
    use crate::game_state::chess_types::{Color, Move, Piece, PieceKind};
    use crate::game_state::position::Position;

    const WHITE_PAWN: Piece = Piece::new(PieceKind::Pawn, Color::White);
    const BLACK_PAWN: Piece = Piece::new(PieceKind::Pawn, Color::Black);

    fn mv(from_row: u8, from_col: u8, to_row: u8, to_col: u8) -> Move {
        Move::from_coords(from_row, from_col, to_row, to_col).expect("coordinates are on the board")
    }

    #[test]
    fn white_pawn_pushes_toward_row_zero() {
        let position = Position::new_game();
        assert!(is_legal_pawn_move(&position, mv(6, 4, 5, 4), WHITE_PAWN));
        assert!(is_legal_pawn_move(&position, mv(6, 4, 4, 4), WHITE_PAWN));
        assert!(!is_legal_pawn_move(&position, mv(6, 4, 3, 4), WHITE_PAWN));
    }

    #[test]
    fn black_pawn_pushes_toward_row_seven() {
        let position = Position::new_game();
        assert!(is_legal_pawn_move(&position, mv(1, 3, 2, 3), BLACK_PAWN));
        assert!(is_legal_pawn_move(&position, mv(1, 3, 3, 3), BLACK_PAWN));
        assert!(!is_legal_pawn_move(&position, mv(1, 3, 0, 3), BLACK_PAWN));
    }

    #[test]
    fn pawn_never_moves_backward() {
        let white = Position::from_fen("4k3/8/8/8/3P4/8/8/4K3 w - - 0 1").expect("FEN should parse");
        assert!(!is_legal_pawn_move(&white, mv(4, 3, 5, 3), WHITE_PAWN));
        assert!(!is_legal_pawn_move(&white, mv(4, 3, 6, 3), WHITE_PAWN));

        let black = Position::from_fen("4k3/8/8/3p4/8/8/8/4K3 b - - 0 1").expect("FEN should parse");
        assert!(!is_legal_pawn_move(&black, mv(3, 3, 2, 3), BLACK_PAWN));
    }

    #[test]
    fn pawn_never_captures_straight_ahead() {
        let position =
            Position::from_fen("4k3/8/8/3p4/3P4/8/8/4K3 w - - 0 1").expect("FEN should parse");
        assert!(!is_legal_pawn_move(&position, mv(4, 3, 3, 3), WHITE_PAWN));
        assert!(!is_legal_pawn_move(&position, mv(3, 3, 4, 3), BLACK_PAWN));
    }

    #[test]
    fn double_step_only_from_start_row_with_clear_path() {
        let advanced =
            Position::from_fen("4k3/8/8/8/8/3P4/8/4K3 w - - 0 1").expect("FEN should parse");
        assert!(!is_legal_pawn_move(&advanced, mv(5, 3, 3, 3), WHITE_PAWN));

        let blocked =
            Position::from_fen("4k3/8/8/8/8/3n4/3P4/4K3 w - - 0 1").expect("FEN should parse");
        assert!(!is_legal_pawn_move(&blocked, mv(6, 3, 4, 3), WHITE_PAWN));

        let target_occupied =
            Position::from_fen("4k3/8/8/8/3n4/8/3P4/4K3 w - - 0 1").expect("FEN should parse");
        assert!(!is_legal_pawn_move(&target_occupied, mv(6, 3, 4, 3), WHITE_PAWN));
        assert!(is_legal_pawn_move(&target_occupied, mv(6, 3, 5, 3), WHITE_PAWN));
    }

    #[test]
    fn diagonal_requires_enemy_piece() {
        let position =
            Position::from_fen("4k3/8/8/8/8/2n1N3/3P4/4K3 w - - 0 1").expect("FEN should parse");
        assert!(is_legal_pawn_move(&position, mv(6, 3, 5, 2), WHITE_PAWN));
        assert!(!is_legal_pawn_move(&position, mv(6, 3, 5, 4), WHITE_PAWN));

        let empty = Position::from_fen("4k3/8/8/8/8/8/3P4/4K3 w - - 0 1").expect("FEN should parse");
        assert!(!is_legal_pawn_move(&empty, mv(6, 3, 5, 2), WHITE_PAWN));
    }

    #[test]
    fn pawn_cannot_capture_two_columns_away() {
        let position =
            Position::from_fen("4k3/8/8/8/8/1n6/3P4/4K3 w - - 0 1").expect("FEN should parse");
        assert!(!is_legal_pawn_move(&position, mv(6, 3, 5, 1), WHITE_PAWN));
    }
}
