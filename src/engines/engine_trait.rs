//! Engine abstraction used by the game front-ends and the match harness.
//!
//! An engine receives an owned snapshot of the live position, never a
//! reference into the live game, and answers with the move it wants played.

use thiserror::Error;

use crate::game_state::chess_types::Move;
use crate::game_state::position::Position;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchParams {
    /// Overrides the engine's configured depth for one request.
    pub depth: Option<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    /// `None` when the side to move has no move to play.
    pub best_move: Option<Move>,
    pub score: Option<i32>,
    pub info_lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("search depth must be at least 1 ply, got {0}")]
    InvalidDepth(u8),
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn choose_move(
        &mut self,
        position: Position,
        params: &SearchParams,
    ) -> Result<EngineOutput, EngineError>;
}
