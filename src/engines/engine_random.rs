//! Random-move fallback bot.
//!
//! Picks uniformly among the generated moves of the side to move. Seedable so
//! matches against it can be replayed.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineError, EngineOutput, SearchParams};
use crate::game_state::position::Position;
use crate::move_generation::move_generator::{MoveGenerator, ScanMoveGenerator};

pub struct RandomEngine {
    move_generator: ScanMoveGenerator,
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            move_generator: ScanMoveGenerator,
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            move_generator: ScanMoveGenerator,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Arbor Random"
    }

    fn choose_move(
        &mut self,
        position: Position,
        params: &SearchParams,
    ) -> Result<EngineOutput, EngineError> {
        let legal_moves = self
            .move_generator
            .generate_moves(&position, position.side_to_move());

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine legal_moves {}",
            legal_moves.len()
        ));
        if let Some(depth) = params.depth {
            out.info_lines
                .push(format!("info string random_engine ignores depth {depth}"));
        }

        out.best_move = legal_moves.as_slice().choose(&mut self.rng).copied();
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::RandomEngine;
    use crate::engines::engine_trait::{Engine, SearchParams};
    use crate::game_state::chess_types::Color;
    use crate::game_state::position::Position;
    use crate::move_generation::move_generator::generate_moves;

    #[test]
    fn random_engine_picks_a_generated_move() {
        let mut engine = RandomEngine::with_seed(7);
        let position = Position::new_game();
        let legal = generate_moves(&position, Color::White);
        for _ in 0..16 {
            let out = engine
                .choose_move(position.clone(), &SearchParams::default())
                .expect("random engine never fails");
            let mv = out.best_move.expect("start position has moves");
            assert!(legal.contains(&mv));
        }
    }

    #[test]
    fn same_seed_replays_same_choices() {
        let position = Position::new_game();
        let mut first = RandomEngine::with_seed(42);
        let mut second = RandomEngine::with_seed(42);
        for _ in 0..8 {
            let a = first
                .choose_move(position.clone(), &SearchParams::default())
                .expect("random engine never fails");
            let b = second
                .choose_move(position.clone(), &SearchParams::default())
                .expect("random engine never fails");
            assert_eq!(a.best_move, b.best_move);
        }
    }

    #[test]
    fn random_engine_has_nothing_to_play_without_pieces() {
        let mut engine = RandomEngine::with_seed(1);
        let position = Position::from_fen("8/8/8/8/8/8/8/4K3 b - - 0 1").expect("FEN should parse");
        let out = engine
            .choose_move(position, &SearchParams::default())
            .expect("random engine never fails");
        assert_eq!(out.best_move, None);
    }
}
