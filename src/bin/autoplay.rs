use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::info;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::Serialize;
use slide_2048::config::Config;
use slide_2048::engine::Board;
use slide_2048::session::{GameSession, Status};
use slide_2048::spawn::RngSource;

#[derive(Debug, Parser)]
#[command(name = "autoplay", about = "Play whole 2048 games with a random legal-move policy")]
struct Args {
    /// Number of games to play
    #[arg(long)]
    games: Option<u64>,

    /// Per-game: stop after this many changed moves
    #[arg(long)]
    steps: Option<u64>,

    /// Per-game: stop once the highest tile reaches this value
    #[arg(long)]
    stop_tile: Option<u32>,

    /// Base seed; game `i` uses `seed + i`
    #[arg(long)]
    seed: Option<u64>,

    /// Path to a TOML configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Suppress per-move boards
    #[arg(long)]
    quiet: bool,

    /// Emit one JSON summary per game
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct GameSummary {
    game: u64,
    seed: u64,
    moves: u64,
    highest_tile: u32,
    tile_sum: u64,
    status: Status,
    board: Board,
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = Config::load(args.config.as_deref())
        .with_context(|| format!("loading config {:?}", args.config))?;
    let games = args.games.unwrap_or(config.autoplay.games);
    let steps = args.steps.or(config.autoplay.steps);
    let stop_tile = args.stop_tile.or(config.autoplay.stop_tile);
    let base_seed = args.seed.or(config.seed).unwrap_or_else(|| rand::thread_rng().gen());

    for game in 0..games {
        let seed = base_seed.wrapping_add(game);
        let summary = run_single_game(game, seed, steps, stop_tile, args.quiet)?;
        if args.json {
            println!("{}", serde_json::to_string(&summary)?);
        } else {
            println!(
                "Game {} | seed: {} | moves: {} | highest tile: {} | tile sum: {} | {:?}",
                summary.game, summary.seed, summary.moves, summary.highest_tile, summary.tile_sum, summary.status
            );
        }
    }
    Ok(())
}

fn run_single_game(game: u64, seed: u64, steps: Option<u64>, stop_tile: Option<u32>, quiet: bool) -> Result<GameSummary> {
    // Spawns and the policy draw from separate streams so either can be replayed.
    let mut session = GameSession::new(RngSource::seeded(seed));
    let mut policy = StdRng::seed_from_u64(seed ^ 0x9E37_79B9_7F4A_7C15);

    if !quiet {
        println!("{}", session.board());
    }
    while !session.is_terminal() {
        let legal = session.board().legal_moves();
        if legal.is_empty() {
            break;
        }
        let dir = legal[policy.gen_range(0..legal.len())];
        let outcome = session.play(dir)?;
        if !quiet {
            println!("{dir}\n{}", outcome.board);
        }
        if let Some(limit) = steps {
            if session.turns() >= limit { break; }
        }
        if let Some(target) = stop_tile {
            if outcome.board.highest_tile() >= target { break; }
        }
    }
    info!("game {game} finished after {} moves", session.turns());

    let board = *session.board();
    Ok(GameSummary {
        game,
        seed,
        moves: session.turns(),
        highest_tile: board.highest_tile(),
        tile_sum: board.tile_sum(),
        status: session.status(),
        board,
    })
}
