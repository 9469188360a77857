use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use slide_2048::command::Command;
use slide_2048::config::Config;
use slide_2048::session::{GameSession, Status};
use slide_2048::spawn::RngSource;

#[derive(Debug, Parser)]
#[command(name = "slide-2048", version, about = "Play 2048 in the terminal")]
struct Args {
    /// Seed for tile spawns (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// Path to a TOML configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let config = Config::load(args.config.as_deref())
        .with_context(|| format!("loading config {:?}", args.config))?;
    let source = match args.seed.or(config.seed) {
        Some(seed) => RngSource::seeded(seed),
        None => RngSource::from_entropy(),
    };
    let mut session = GameSession::new(source);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut stdout = io::stdout();

    loop {
        println!("{}", session.board());
        if let Status::Terminal(_) = session.status() {
            println!("Game Over!");
            break;
        }
        print!("Enter move (l/r/u/d/e): ");
        stdout.flush()?;

        let Some(line) = lines.next() else {
            // stdin closed
            session.quit();
            break;
        };
        let command: Command = match line.context("reading move")?.parse() {
            Ok(c) => c,
            Err(_) => {
                println!("Invalid move!");
                continue;
            }
        };

        let outcome = session.handle(command)?;
        if command == Command::Quit {
            println!("Exiting from game");
            break;
        }
        if !outcome.changed {
            println!("Please select other move");
        }
    }
    Ok(())
}
