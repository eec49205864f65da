//! Minimax-vs-random series runner.
//!
//! Run with:
//! `cargo run --release --bin engine_match -- --games 10 --depth 2`

use anyhow::Result;
use clap::Parser;

use arbor_chess::engines::engine_minimax::MinimaxEngine;
use arbor_chess::engines::engine_random::RandomEngine;
use arbor_chess::engines::engine_trait::Engine;
use arbor_chess::game_state::chess_rules::DEFAULT_SEARCH_DEPTH;
use arbor_chess::utils::engine_match_harness::{
    play_engine_match_series, MatchConfig, MatchSeriesConfig,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, default_value_t = 10)]
    games: u16,

    /// Ply limit per game before it is scored unfinished
    #[arg(long, default_value_t = 200)]
    max_plies: u16,

    /// Search depth of the minimax player
    #[arg(long, default_value_t = DEFAULT_SEARCH_DEPTH)]
    depth: u8,

    #[arg(long, default_value_t = 1234)]
    seed: u64,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .init();

    let depth = args.depth;
    let seed = args.seed;
    let stats = play_engine_match_series(
        || Box::new(MinimaxEngine::new(depth)) as Box<dyn Engine>,
        || Box::new(RandomEngine::with_seed(seed)) as Box<dyn Engine>,
        &MatchSeriesConfig {
            games: args.games,
            base_seed: seed,
            per_game: MatchConfig {
                max_plies: args.max_plies,
                ..MatchConfig::default()
            },
        },
    )?;

    println!("player1=minimax(depth {depth}) player2=random");
    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);
    Ok(())
}
