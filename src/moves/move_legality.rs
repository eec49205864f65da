//! Single entry point deciding whether a proposed relocation obeys the
//! moving piece's movement rule on the given position.
//!
//! Only piece movement is checked. Whether the move leaves the mover's own
//! king attacked is not part of legality here.

use crate::game_state::chess_types::{Move, Piece, PieceKind};
use crate::game_state::position::Position;
use crate::moves::bishop_moves::is_legal_bishop_move;
use crate::moves::king_moves::is_legal_king_move;
use crate::moves::knight_moves::is_legal_knight_move;
use crate::moves::pawn_moves::is_legal_pawn_move;
use crate::moves::queen_moves::is_legal_queen_move;
use crate::moves::rook_moves::is_legal_rook_move;

/// Legality of moving `piece` along `mv`. A destination held by a piece of
/// the same color is rejected before the per-type rule runs.
pub fn is_legal(position: &Position, mv: Move, piece: Piece) -> bool {
    if position
        .piece_at(mv.to)
        .is_some_and(|occupant| occupant.color == piece.color)
    {
        return false;
    }

    match piece.kind {
        PieceKind::Pawn => is_legal_pawn_move(position, mv, piece),
        PieceKind::Knight => is_legal_knight_move(position, mv, piece),
        PieceKind::Bishop => is_legal_bishop_move(position, mv, piece),
        PieceKind::Rook => is_legal_rook_move(position, mv, piece),
        PieceKind::Queen => is_legal_queen_move(position, mv, piece),
        PieceKind::King => is_legal_king_move(position, mv, piece),
    }
}

/// Legality of `mv` for whatever stands on its origin; `false` when empty.
pub fn is_legal_move(position: &Position, mv: Move) -> bool {
    position
        .piece_at(mv.from)
        .is_some_and(|piece| is_legal(position, mv, piece))
}

#[cfg(test)]
mod tests {
    use super::{is_legal, is_legal_move};
    use crate::game_state::chess_types::{Color, Move, Piece, PieceKind, Square};
    use crate::game_state::position::Position;

    fn mv(from_row: u8, from_col: u8, to_row: u8, to_col: u8) -> Move {
        Move::from_coords(from_row, from_col, to_row, to_col).expect("coordinates are on the board")
    }

    #[test]
    fn same_color_destination_is_rejected_up_front() {
        let position = Position::new_game();
        let white_knight = Piece::new(PieceKind::Knight, Color::White);
        assert!(!is_legal(&position, mv(7, 1, 6, 3), white_knight));
        assert!(is_legal(&position, mv(7, 1, 5, 2), white_knight));
    }

    #[test]
    fn knight_capture_uses_enemy_or_empty_rule() {
        let position =
            Position::from_fen("4k3/8/8/1p1P4/8/2N5/8/4K3 w - - 0 1").expect("FEN should parse");
        assert!(is_legal_move(&position, mv(5, 2, 3, 1)));
        assert!(!is_legal_move(&position, mv(5, 2, 3, 3)));
    }

    #[test]
    fn empty_origin_is_never_legal() {
        let position = Position::new_game();
        assert!(position.is_empty(Square::at(4, 4)));
        assert!(!is_legal_move(&position, mv(4, 4, 3, 4)));
    }

    #[test]
    fn zero_move_is_never_legal() {
        let position = Position::new_game();
        for square in Square::all() {
            assert!(!is_legal_move(&position, Move::new(square, square)));
        }
    }

    #[test]
    fn start_position_offers_twenty_moves_per_side() {
        let position = Position::new_game();
        for color in [Color::White, Color::Black] {
            let count = position
                .pieces()
                .filter(|(_, piece)| piece.color == color)
                .map(|(from, piece)| {
                    Square::all()
                        .filter(|&to| is_legal(&position, Move::new(from, to), piece))
                        .count()
                })
                .sum::<usize>();
            assert_eq!(count, 20, "{color} should have 20 opening moves");
        }
    }
}
