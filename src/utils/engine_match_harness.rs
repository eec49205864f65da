//! Head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other on a `LiveGame`,
//! with an optional seeded random opening prefix. Engines receive snapshots
//! and their answers go through the same validation as human moves.

use log::{debug, info};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::time::Instant;
use thiserror::Error;

use crate::chess_errors::ChessErrors;
use crate::engines::engine_trait::{Engine, EngineError, SearchParams};
use crate::game_state::chess_types::Color;
use crate::game_state::live_game::{GameStatus, LiveGame};
use crate::game_state::position::Position;
use crate::move_generation::move_generator::generate_moves;

#[derive(Debug, Error)]
pub enum MatchError {
    #[error("engine failed: {0}")]
    Engine(#[from] EngineError),
    #[error("engine move rejected: {0}")]
    Rejected(#[from] ChessErrors),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    KingCaptured { winner: Color },
    /// The engine on move returned no move.
    NoMoves { side: Color },
    MaxPlies,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    Player1,
    Player2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesOutcome {
    PlayerWin { player: PlayerId, color: Color },
    NoMoves { player: PlayerId },
    MaxPlies,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub opening_min_plies: u8,
    pub opening_max_plies: u8,
    pub params: SearchParams,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            opening_min_plies: 0,
            opening_max_plies: 4,
            params: SearchParams::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_position: Position,
    pub opening_moves: Vec<String>,
    pub played_moves: Vec<String>,
    pub white_move_count: u32,
    pub black_move_count: u32,
    pub white_total_time_ns: u128,
    pub black_total_time_ns: u128,
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 4,
            base_seed: 0,
            per_game: MatchConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub unfinished: u16,
    pub outcomes: Vec<SeriesOutcome>,
    pub player1_moves: u32,
    pub player2_moves: u32,
    pub player1_total_time_ns: u128,
    pub player2_total_time_ns: u128,
    pub player1_avg_move_time_ms: f64,
    pub player2_avg_move_time_ms: f64,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        format!(
            "games={} player1_wins={} player2_wins={} unfinished={} p1_avg_ms={:.3} p2_avg_ms={:.3}",
            self.games,
            self.player1_wins,
            self.player2_wins,
            self.unfinished,
            self.player1_avg_move_time_ms,
            self.player2_avg_move_time_ms,
        )
    }
}

/// Play a single seeded match from the standard start.
///
/// `engine_white` plays White, `engine_black` plays Black.
pub fn play_engine_match(
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    seed: u64,
    config: &MatchConfig,
) -> Result<MatchResult, MatchError> {
    engine_white.new_game();
    engine_black.new_game();

    let mut game = LiveGame::new();
    let opening_moves = apply_seeded_random_opening(&mut game, seed, config)?;

    let mut played_moves = Vec::<String>::new();
    let mut white_move_count = 0u32;
    let mut black_move_count = 0u32;
    let mut white_total_time_ns = 0u128;
    let mut black_total_time_ns = 0u128;

    let mut outcome = MatchOutcome::MaxPlies;
    for _ in 0..config.max_plies {
        if let GameStatus::KingCaptured { winner } = game.status() {
            outcome = MatchOutcome::KingCaptured { winner };
            break;
        }

        let mover = game.side_to_move();
        let started = Instant::now();
        let (name, out) = match mover {
            Color::White => (
                engine_white.name().to_owned(),
                engine_white.choose_move(game.snapshot(), &config.params)?,
            ),
            Color::Black => (
                engine_black.name().to_owned(),
                engine_black.choose_move(game.snapshot(), &config.params)?,
            ),
        };
        let elapsed_ns = started.elapsed().as_nanos();

        match mover {
            Color::White => {
                white_move_count = white_move_count.saturating_add(1);
                white_total_time_ns = white_total_time_ns.saturating_add(elapsed_ns);
            }
            Color::Black => {
                black_move_count = black_move_count.saturating_add(1);
                black_total_time_ns = black_total_time_ns.saturating_add(elapsed_ns);
            }
        }

        let Some(chosen) = out.best_move else {
            outcome = MatchOutcome::NoMoves { side: mover };
            break;
        };

        match out.score {
            Some(score) => debug!("{name} ({mover}) plays {chosen} score={score}"),
            None => debug!("{name} ({mover}) plays {chosen}"),
        }
        game.apply_engine_move(chosen)?;
        played_moves.push(chosen.to_string());
    }

    if let GameStatus::KingCaptured { winner } = game.status() {
        outcome = MatchOutcome::KingCaptured { winner };
    }

    Ok(MatchResult {
        outcome,
        final_position: game.snapshot(),
        opening_moves,
        played_moves,
        white_move_count,
        black_move_count,
        white_total_time_ns,
        black_total_time_ns,
    })
}

/// Play a series and aggregate results per player.
///
/// Colors are drawn per game from `base_seed`, so a series is reproducible
/// whenever both engines are deterministic.
pub fn play_engine_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    config: &MatchSeriesConfig,
) -> Result<MatchSeriesStats, MatchError>
where
    F1: Fn() -> Box<dyn Engine>,
    F2: Fn() -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };
    let mut color_rng = StdRng::seed_from_u64(config.base_seed ^ 0xA5A5_5A5A_0123_4567);

    for i in 0..config.games {
        let player1_is_white = color_rng.random_bool(0.5);
        let seed = config.base_seed.wrapping_add(u64::from(i));

        let mut player1 = player1_factory();
        let mut player2 = player2_factory();
        let result = if player1_is_white {
            play_engine_match(player1.as_mut(), player2.as_mut(), seed, &config.per_game)?
        } else {
            play_engine_match(player2.as_mut(), player1.as_mut(), seed, &config.per_game)?
        };

        let (p1_moves, p1_ns, p2_moves, p2_ns) = if player1_is_white {
            (
                result.white_move_count,
                result.white_total_time_ns,
                result.black_move_count,
                result.black_total_time_ns,
            )
        } else {
            (
                result.black_move_count,
                result.black_total_time_ns,
                result.white_move_count,
                result.white_total_time_ns,
            )
        };
        stats.player1_moves = stats.player1_moves.saturating_add(p1_moves);
        stats.player2_moves = stats.player2_moves.saturating_add(p2_moves);
        stats.player1_total_time_ns = stats.player1_total_time_ns.saturating_add(p1_ns);
        stats.player2_total_time_ns = stats.player2_total_time_ns.saturating_add(p2_ns);

        let player_of = |color: Color| {
            if (color == Color::White) == player1_is_white {
                PlayerId::Player1
            } else {
                PlayerId::Player2
            }
        };

        let mapped = match result.outcome {
            MatchOutcome::KingCaptured { winner } => {
                let player = player_of(winner);
                match player {
                    PlayerId::Player1 => stats.player1_wins += 1,
                    PlayerId::Player2 => stats.player2_wins += 1,
                }
                SeriesOutcome::PlayerWin {
                    player,
                    color: winner,
                }
            }
            MatchOutcome::NoMoves { side } => {
                stats.unfinished += 1;
                SeriesOutcome::NoMoves {
                    player: player_of(side),
                }
            }
            MatchOutcome::MaxPlies => {
                stats.unfinished += 1;
                SeriesOutcome::MaxPlies
            }
        };
        info!(
            "game {}/{} seed={} result={:?} p1_wins={} p2_wins={}",
            i + 1,
            config.games,
            seed,
            mapped,
            stats.player1_wins,
            stats.player2_wins
        );
        stats.outcomes.push(mapped);
    }

    stats.player1_avg_move_time_ms =
        avg_ns_per_move_ms(stats.player1_total_time_ns, stats.player1_moves);
    stats.player2_avg_move_time_ms =
        avg_ns_per_move_ms(stats.player2_total_time_ns, stats.player2_moves);

    Ok(stats)
}

#[inline]
fn avg_ns_per_move_ms(total_ns: u128, moves: u32) -> f64 {
    if moves == 0 {
        0.0
    } else {
        (total_ns as f64) / (moves as f64) / 1_000_000.0
    }
}

fn apply_seeded_random_opening(
    game: &mut LiveGame,
    seed: u64,
    config: &MatchConfig,
) -> Result<Vec<String>, MatchError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut opening_moves = Vec::<String>::new();

    let low = config.opening_min_plies.min(config.opening_max_plies);
    let high = config.opening_max_plies.max(config.opening_min_plies);
    let target_plies = if low == high {
        low
    } else {
        rng.random_range(low..=high)
    };

    for _ in 0..target_plies {
        let moves = generate_moves(game.position(), game.side_to_move());
        if moves.is_empty() || game.is_over() {
            break;
        }
        let chosen = moves[rng.random_range(0..moves.len())];
        game.apply_engine_move(chosen)?;
        opening_moves.push(chosen.to_string());
    }

    Ok(opening_moves)
}
