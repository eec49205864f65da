//! Fixed-depth minimax search with alpha-beta pruning.
//!
//! Every node owns the position it explores; children are produced with
//! `Position::with_move` and discarded on return, so no undo bookkeeping is
//! needed. Candidates are ordered by capture value and moves flagged by the
//! repetition heuristic are skipped. Scores are White-positive: the
//! maximizing side wants them high, the minimizing side low.

use log::{debug, trace};

use crate::game_state::chess_rules::DEFAULT_SEARCH_DEPTH;
use crate::game_state::chess_types::Move;
use crate::game_state::position::Position;
use crate::move_generation::move_generator::MoveGenerator;
use crate::search::board_scoring::BoardScorer;
use crate::search::move_ordering::order_by_capture_value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies to search below the root.
    pub depth: u8,
    /// Disable to run plain minimax over the same tree.
    pub pruning: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_SEARCH_DEPTH,
            pruning: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub best_score: i32,
    pub nodes: u64,
}

struct SearchContext<'a, G: MoveGenerator, S: BoardScorer> {
    generator: &'a G,
    scorer: &'a S,
    pruning: bool,
    root_depth: u8,
    nodes: u64,
}

/// Best move for the side to move of `position`.
///
/// Returns `best_move: None` when the side to move has no moves, when every
/// move is repetitive, or when `config.depth` is 0; `best_score` is then the
/// static evaluation.
pub fn best_move<G: MoveGenerator, S: BoardScorer>(
    position: &Position,
    generator: &G,
    scorer: &S,
    config: SearchConfig,
    maximizing: bool,
) -> SearchResult {
    let mut ctx = SearchContext {
        generator,
        scorer,
        pruning: config.pruning,
        root_depth: config.depth,
        nodes: 0,
    };

    let (best_move, best_score) = search_node(
        &mut ctx,
        position,
        config.depth,
        i32::MIN,
        i32::MAX,
        maximizing,
    );

    debug!(
        "search depth={} pruning={} nodes={} best_score={} best_move={}",
        config.depth,
        config.pruning,
        ctx.nodes,
        best_score,
        best_move.map_or_else(|| "none".to_owned(), |mv| mv.to_string())
    );

    SearchResult {
        best_move,
        best_score,
        nodes: ctx.nodes,
    }
}

fn search_node<G: MoveGenerator, S: BoardScorer>(
    ctx: &mut SearchContext<'_, G, S>,
    position: &Position,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
) -> (Option<Move>, i32) {
    ctx.nodes += 1;

    if depth == 0 {
        return (None, ctx.scorer.score(position));
    }

    let candidates = candidate_moves(ctx.generator, position);
    if candidates.is_empty() {
        return (None, ctx.scorer.score(position));
    }

    let mut best_move = None;
    let mut best_score = if maximizing { i32::MIN } else { i32::MAX };

    for mv in candidates {
        let child = position.with_move(mv);
        let (_, score) = search_node(ctx, &child, depth - 1, alpha, beta, !maximizing);

        if depth == ctx.root_depth {
            trace!("root move={mv} score={score}");
        }

        if maximizing {
            if score > best_score || best_move.is_none() {
                best_score = score;
                best_move = Some(mv);
            }
            alpha = alpha.max(score);
        } else {
            if score < best_score || best_move.is_none() {
                best_score = score;
                best_move = Some(mv);
            }
            beta = beta.min(score);
        }

        if ctx.pruning && beta <= alpha {
            break;
        }
    }

    (best_move, best_score)
}

/// Moves for the side to move, captures of valuable pieces first, minus
/// repetitive shuffles.
fn candidate_moves<G: MoveGenerator>(generator: &G, position: &Position) -> Vec<Move> {
    let mut moves = generator.generate_moves(position, position.side_to_move());
    moves.retain(|&mv| !position.is_repetitive(mv));
    order_by_capture_value(position, &mut moves);
    moves
}
