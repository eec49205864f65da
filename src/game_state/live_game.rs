//! The single authoritative game a front-end plays on.
//!
//! Moves from a human and from an engine go through the same validation
//! before they replace the live position. Engines only ever see clones.

use log::{info, warn};

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::{Color, Move, Piece, PieceKind, Square};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::move_generator::destinations_from;
use crate::moves::move_legality::is_legal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    KingCaptured { winner: Color },
}

/// Outcome of one accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    pub mv: Move,
    pub captured: Option<Piece>,
    /// Whether the side now on move has its king attacked.
    pub gives_check: bool,
}

#[derive(Debug, Clone)]
pub struct LiveGame {
    position: Position,
    status: GameStatus,
}

impl LiveGame {
    pub fn new() -> Self {
        Self::from_position(Position::new_game())
    }

    pub fn from_position(position: Position) -> Self {
        Self {
            position,
            status: GameStatus::InProgress,
        }
    }

    pub fn restart(&mut self) {
        info!("game restarted");
        *self = Self::new();
    }

    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Independent copy handed to an engine.
    pub fn snapshot(&self) -> Position {
        self.position.clone()
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move()
    }

    /// Squares the piece on `from` may move to, for move hints.
    pub fn hints_from(&self, from: Square) -> Vec<Square> {
        match self.position.piece_at(from) {
            Some(piece) if piece.color == self.side_to_move() => {
                destinations_from(&self.position, from)
            }
            _ => Vec::new(),
        }
    }

    pub fn try_player_move(&mut self, mv: Move) -> ChessResult<MoveReport> {
        self.play(mv).inspect_err(|err| warn!("rejected move {mv}: {err}"))
    }

    pub fn apply_engine_move(&mut self, mv: Move) -> ChessResult<MoveReport> {
        self.play(mv)
            .inspect_err(|err| warn!("rejected engine move {mv}: {err}"))
    }

    fn play(&mut self, mv: Move) -> ChessResult<MoveReport> {
        if self.is_over() {
            return Err(ChessErrors::GameOver);
        }

        let piece = self
            .position
            .piece_at(mv.from)
            .ok_or(ChessErrors::EmptySquare(mv.from))?;

        let to_move = self.side_to_move();
        if piece.color != to_move {
            return Err(ChessErrors::NotSideToMove {
                square: mv.from,
                owner: piece.color,
                to_move,
            });
        }

        if !is_legal(&self.position, mv, piece) {
            return Err(ChessErrors::IllegalMove(mv));
        }

        let captured = self.position.piece_at(mv.to);
        self.position = self.position.with_move(mv);

        let gives_check = is_in_check(&self.position, self.position.side_to_move());
        info!("{to_move} played {mv}");

        if let Some(taken) = captured {
            info!("{to_move} captured {:?} on {}", taken.kind, mv.to);
            if taken.kind == PieceKind::King {
                self.status = GameStatus::KingCaptured { winner: to_move };
                info!("{to_move} wins by capturing the king");
            }
        }
        if gives_check {
            info!("{} is in check", self.position.side_to_move());
        }

        Ok(MoveReport {
            mv,
            captured,
            gives_check,
        })
    }
}

impl Default for LiveGame {
    fn default() -> Self {
        Self::new()
    }
}
