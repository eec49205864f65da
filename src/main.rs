//! Terminal game: one human against one automated opponent.
//!
//! Enter moves as two squares (`e2e4`). `moves e2` lists destinations for a
//! piece, `restart` starts over and `quit` leaves.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use arbor_chess::engines::engine_minimax::MinimaxEngine;
use arbor_chess::engines::engine_random::RandomEngine;
use arbor_chess::engines::engine_trait::{Engine, SearchParams};
use arbor_chess::game_state::chess_rules::DEFAULT_SEARCH_DEPTH;
use arbor_chess::game_state::chess_types::Color;
use arbor_chess::game_state::live_game::{GameStatus, LiveGame, MoveReport};
use arbor_chess::game_state::position::Position;
use arbor_chess::move_generation::move_generator::generate_moves;
use arbor_chess::utils::algebraic::{algebraic_to_square, coordinate_to_move};
use arbor_chess::utils::render_game_state::render_game_state;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Side {
    White,
    Black,
}

impl From<Side> for Color {
    fn from(side: Side) -> Self {
        match side {
            Side::White => Color::White,
            Side::Black => Color::Black,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Bot {
    Minimax,
    Random,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Plies searched by the minimax opponent
    #[arg(long, default_value_t = DEFAULT_SEARCH_DEPTH)]
    depth: u8,

    /// Side played from the keyboard
    #[arg(long, value_enum, default_value_t = Side::White)]
    human: Side,

    /// Opponent engine
    #[arg(long, value_enum, default_value_t = Bot::Minimax)]
    bot: Bot,

    /// Start from this FEN instead of the standard position
    #[arg(long)]
    fen: Option<String>,

    /// Seed for the random opponent
    #[arg(long)]
    seed: Option<u64>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

enum Command {
    Quit,
    Restart,
    Hints(String),
    Play(String),
}

fn parse_command(line: &str) -> Command {
    let line = line.trim();
    match line {
        "quit" | "exit" | "q" => Command::Quit,
        "restart" | "new" => Command::Restart,
        _ => match line.strip_prefix("moves") {
            Some(rest) => Command::Hints(rest.trim().to_owned()),
            None => Command::Play(line.to_owned()),
        },
    }
}

fn build_bot(args: &Args) -> Box<dyn Engine> {
    match args.bot {
        Bot::Minimax => Box::new(MinimaxEngine::new(args.depth)),
        Bot::Random => match args.seed {
            Some(seed) => Box::new(RandomEngine::with_seed(seed)),
            None => Box::new(RandomEngine::new()),
        },
    }
}

fn start_position(args: &Args) -> Result<Position> {
    match &args.fen {
        Some(fen) => Position::from_fen(fen).with_context(|| format!("cannot start from {fen:?}")),
        None => Ok(Position::new_game()),
    }
}

fn print_report(report: &MoveReport, game: &LiveGame) {
    if let Some(taken) = report.captured {
        println!("{} takes {:?} on {}", report.mv, taken.kind, report.mv.to);
    }
    if report.gives_check {
        println!("{} is in check!", game.side_to_move());
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .target(env_logger::Target::Stderr)
    .init();

    let human: Color = args.human.into();
    let mut bot = build_bot(&args);
    let params = SearchParams::default();
    let mut game = LiveGame::from_position(start_position(&args)?);
    info!("{} plays {}", bot.name(), human.opposite());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut stdout = io::stdout();
    let mut waiting = false;
    let mut bot_stalled = false;

    loop {
        if !waiting {
            println!("\n{}\n", render_game_state(game.position()));
        }

        if let GameStatus::KingCaptured { winner } = game.status() {
            println!("{winner} captured the king and wins. Type 'restart' or 'quit'.");
            waiting = true;
        } else if generate_moves(game.position(), game.side_to_move()).is_empty() {
            println!("{} has no moves. Type 'restart' or 'quit'.", game.side_to_move());
            waiting = true;
        } else if game.side_to_move() != human && bot_stalled {
            println!("{} finds no move. Type 'restart' or 'quit'.", bot.name());
            waiting = true;
        } else if game.side_to_move() != human {
            let out = bot.choose_move(game.snapshot(), &params)?;
            for line in &out.info_lines {
                info!("{line}");
            }
            match out.best_move {
                Some(mv) => {
                    match out.score {
                        Some(score) => println!("{} plays {mv} (score {score})", bot.name()),
                        None => println!("{} plays {mv}", bot.name()),
                    }
                    let report = game.apply_engine_move(mv)?;
                    print_report(&report, &game);
                }
                None => bot_stalled = true,
            }
            continue;
        }

        print!("{} > ", human);
        stdout.flush().context("failed to flush stdout")?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line.context("failed to read stdin")?;

        match parse_command(&line) {
            Command::Quit => return Ok(()),
            Command::Restart => {
                game.restart();
                bot.new_game();
                waiting = false;
                bot_stalled = false;
            }
            Command::Hints(text) => {
                waiting = true;
                match algebraic_to_square(&text) {
                    Ok(from) => {
                        let hints: Vec<String> = game
                            .hints_from(from)
                            .into_iter()
                            .map(|to| to.to_string())
                            .collect();
                        println!("{from}: {}", hints.join(" "));
                    }
                    Err(err) => println!("{err}"),
                }
            }
            Command::Play(_) if game.is_over() => {
                waiting = true;
                println!("The game is over. Type 'restart' or 'quit'.");
            }
            Command::Play(text) => match coordinate_to_move(&text) {
                Ok(mv) => match game.try_player_move(mv) {
                    Ok(report) => {
                        waiting = false;
                        print_report(&report, &game);
                    }
                    Err(err) => {
                        waiting = true;
                        println!("{err}");
                    }
                },
                Err(err) => {
                    waiting = true;
                    println!("{err}");
                }
            },
        }
    }
}
