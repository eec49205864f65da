//! Board snapshot consumed by legality, generation, evaluation and search.
//!
//! A `Position` is never edited once it has been handed out: applying a move
//! produces a fresh, independently owned copy with the piece relocated, the
//! side to move flipped and the move appended to a copied history. Search
//! backtracks by simply dropping the copy it explored.

use crate::chess_errors::ChessResult;
use crate::game_state::chess_rules::{
    starting_cells, BOARD_SIZE, REPETITION_THRESHOLD, REPETITION_WINDOW,
};
use crate::game_state::chess_types::{Cells, Color, Move, Piece, Square};
use crate::search::board_scoring::{BoardScorer, PieceSquareScorer};
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    cells: Cells,
    side_to_move: Color,
    history: Vec<Move>,
}

impl Position {
    /// Standard starting arrangement with White to move.
    pub fn new_game() -> Self {
        Self::from_cells(starting_cells(), Color::White)
    }

    pub fn empty(side_to_move: Color) -> Self {
        Self::from_cells([[None; BOARD_SIZE as usize]; BOARD_SIZE as usize], side_to_move)
    }

    pub fn from_cells(cells: Cells, side_to_move: Color) -> Self {
        Self {
            cells,
            side_to_move,
            history: Vec::new(),
        }
    }

    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    /// Builder used while assembling a position, before it is handed out.
    pub fn with_piece(mut self, square: Square, piece: Piece) -> Self {
        self.cells[usize::from(square.row())][usize::from(square.col())] = Some(piece);
        self
    }

    pub fn with_history(mut self, history: Vec<Move>) -> Self {
        self.history = history;
        self
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.cells[usize::from(square.row())][usize::from(square.col())]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    #[inline]
    pub fn cells(&self) -> &Cells {
        &self.cells
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| self.piece_at(square).map(|piece| (square, piece)))
    }

    /// Successor position with the piece on `mv.from` moved to `mv.to`.
    ///
    /// Whatever stood on the destination is overwritten; no legality check is
    /// made here, callers validate first.
    pub fn with_move(&self, mv: Move) -> Position {
        let mut cells = self.cells;
        let moving = cells[usize::from(mv.from.row())][usize::from(mv.from.col())].take();
        cells[usize::from(mv.to.row())][usize::from(mv.to.col())] = moving;

        let mut history = Vec::with_capacity(self.history.len() + 1);
        history.extend_from_slice(&self.history);
        history.push(mv);

        Position {
            cells,
            side_to_move: self.side_to_move.opposite(),
            history,
        }
    }

    /// Anti-oscillation signal: `mv` already occurs at least twice among the
    /// last four recorded moves.
    pub fn is_repetitive(&self, mv: Move) -> bool {
        if self.history.len() < REPETITION_WINDOW {
            return false;
        }

        let matches = self
            .history
            .iter()
            .rev()
            .take(REPETITION_WINDOW)
            .filter(|&&previous| previous == mv)
            .take(REPETITION_THRESHOLD)
            .count();

        matches >= REPETITION_THRESHOLD
    }

    /// Static score, positive when White stands better.
    pub fn evaluate(&self) -> i32 {
        PieceSquareScorer.score(self)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new_game()
    }
}
