//! FEN-to-Position parser.
//!
//! Reads the piece placement and side-to-move fields. Castling, en-passant
//! and clock fields are accepted when present and otherwise ignored, as the
//! engine does not model those rules.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::game_state::position::Position;

pub fn parse_fen(fen: &str) -> ChessResult<Position> {
    let mut parts = fen.split_whitespace();

    let board_part = parts
        .next()
        .ok_or_else(|| ChessErrors::InvalidFen("missing board layout".to_owned()))?;
    let side_part = parts
        .next()
        .ok_or_else(|| ChessErrors::InvalidFen("missing side to move".to_owned()))?;

    if parts.count() > 4 {
        return Err(ChessErrors::InvalidFen("too many fields".to_owned()));
    }

    let side_to_move = parse_side_to_move(side_part)?;
    parse_board(board_part, Position::empty(side_to_move))
}

fn parse_board(board_part: &str, mut position: Position) -> ChessResult<Position> {
    let rows: Vec<&str> = board_part.split('/').collect();
    if rows.len() != 8 {
        return Err(ChessErrors::InvalidFen(
            "board layout must contain 8 ranks".to_owned(),
        ));
    }

    // FEN lists rank 8 first, which is row 0 on this board.
    for (row, row_str) in rows.iter().enumerate() {
        let mut col = 0usize;

        for ch in row_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessErrors::InvalidFen(format!(
                        "invalid empty-square count '{ch}'"
                    )));
                }
                col += empty_count as usize;
                continue;
            }

            let piece = piece_from_fen_char(ch).ok_or_else(|| {
                ChessErrors::InvalidFen(format!("invalid piece character '{ch}'"))
            })?;
            let square = u8::try_from(row)
                .ok()
                .zip(u8::try_from(col).ok())
                .and_then(|(r, c)| Square::new(r, c))
                .ok_or_else(|| ChessErrors::InvalidFen("rank has too many files".to_owned()))?;

            position = position.with_piece(square, piece);
            col += 1;
        }

        if col != 8 {
            return Err(ChessErrors::InvalidFen(format!(
                "rank '{row_str}' does not sum to 8 files"
            )));
        }
    }

    Ok(position)
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(ChessErrors::InvalidFen(format!(
            "invalid side-to-move field: {side_part}"
        ))),
    }
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else {
        Color::Black
    };
    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };
    Some(Piece::new(kind, color))
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
    use crate::game_state::position::Position;

    #[test]
    fn starting_fen_matches_new_game() {
        let parsed = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        assert_eq!(parsed, Position::new_game());
    }

    #[test]
    fn two_field_fen_is_enough() {
        let parsed = parse_fen("4k3/8/8/8/8/8/8/R3K3 b").expect("short FEN should parse");
        assert_eq!(parsed.side_to_move(), Color::Black);
        assert_eq!(
            parsed.piece_at(Square::at(7, 0)),
            Some(Piece::new(PieceKind::Rook, Color::White))
        );
        assert_eq!(parsed.pieces().count(), 3);
    }

    #[test]
    fn malformed_fen_is_rejected() {
        for fen in [
            "",
            "8/8/8/8/8/8/8 w",
            "8/8/8/8/8/8/8/9 w",
            "8/8/8/8/8/8/8/ppppppppp w",
            "8/8/8/8/8/8/8/7 w",
            "8/8/8/8/8/8/8/7x w",
            "8/8/8/8/8/8/8/8 x",
            "8/8/8/8/8/8/8/8",
            "8/8/8/8/8/8/8/8 w - - 0 1 extra",
        ] {
            assert!(
                matches!(parse_fen(fen), Err(ChessErrors::InvalidFen(_))),
                "{fen:?} should be rejected"
            );
        }
    }
}
