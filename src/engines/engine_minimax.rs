//! Automated opponent driven by the fixed-depth alpha-beta search.

use crate::engines::engine_trait::{Engine, EngineError, EngineOutput, SearchParams};
use crate::game_state::chess_rules::DEFAULT_SEARCH_DEPTH;
use crate::game_state::position::Position;
use crate::move_generation::move_generator::ScanMoveGenerator;
use crate::search::board_scoring::PieceSquareScorer;
use crate::search::minimax::{best_move, SearchConfig};

pub struct MinimaxEngine {
    generator: ScanMoveGenerator,
    scorer: PieceSquareScorer,
    config: SearchConfig,
}

impl MinimaxEngine {
    pub fn new(depth: u8) -> Self {
        Self {
            generator: ScanMoveGenerator,
            scorer: PieceSquareScorer,
            config: SearchConfig {
                depth,
                ..SearchConfig::default()
            },
        }
    }

    pub fn depth(&self) -> u8 {
        self.config.depth
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_DEPTH)
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "Arbor Minimax"
    }

    fn choose_move(
        &mut self,
        position: Position,
        params: &SearchParams,
    ) -> Result<EngineOutput, EngineError> {
        let depth = params.depth.unwrap_or(self.config.depth);
        if depth == 0 {
            return Err(EngineError::InvalidDepth(depth));
        }

        let config = SearchConfig { depth, ..self.config };
        let maximizing = position.side_to_move().is_maximizing();
        let result = best_move(&position, &self.generator, &self.scorer, config, maximizing);

        let mut out = EngineOutput {
            best_move: result.best_move,
            score: Some(result.best_score),
            info_lines: Vec::new(),
        };
        out.info_lines.push(format!(
            "info depth {} nodes {} score {}",
            depth, result.nodes, result.best_score
        ));
        Ok(out)
    }
}
