//! Errors used by the fallible outer layers of the engine.
//!
//! The rules core answers with plain predicates and optional results: an
//! illegal move is `false`, an empty search is `None`. `ChessErrors` covers
//! what sits around that core, namely parsing human input and FEN text and
//! rejecting moves against the live game.
//!
//! Usage guidelines:
//! - Parsing variants (`InvalidSquare`, `InvalidMove`, `InvalidFen`) are
//!   recoverable and suitable for showing to a user verbatim.
//! - Game variants (`EmptySquare`, `NotSideToMove`, `IllegalMove`,
//!   `GameOver`) leave the live game unchanged; the caller decides whether to
//!   prompt again.

use thiserror::Error;

use crate::game_state::chess_types::{Color, Move, Square};

pub type ChessResult<T> = Result<T, ChessErrors>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessErrors {
    /// Coordinate text such as `"e9"` that names no square.
    #[error("invalid square: {0}")]
    InvalidSquare(String),

    /// Move text that is not two squares, e.g. `"e2e4"`.
    #[error("invalid move: {0}")]
    InvalidMove(String),

    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    #[error("no piece on {0}")]
    EmptySquare(Square),

    /// The piece on the origin square belongs to the side not on move.
    #[error("the piece on {square} belongs to {owner}, but it is {to_move}'s turn")]
    NotSideToMove {
        square: Square,
        owner: Color,
        to_move: Color,
    },

    #[error("illegal move: {0}")]
    IllegalMove(Move),

    /// A king has been captured; the live game accepts no further moves.
    #[error("the game is over")]
    GameOver,
}
