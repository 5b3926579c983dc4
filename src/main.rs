//! Worldle - CLI
//!
//! Guess the hidden five-letter word in six attempts. TUI by default,
//! plain line mode via `simple`.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use rand::seq::IndexedRandom;
use std::path::PathBuf;
use std::time::Duration;
use worldle::{
    commands::run_simple,
    core::Word,
    engine::GameEngine,
    interactive::{App, run_tui},
    ports::{RotationProvider, ScheduleProvider, WordProvider, WordlistValidator},
    wordlists::{ANSWERS, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "worldle",
    about = "Guess the hidden five-letter word in six attempts",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Puzzle schedule JSON file (YYYY-M-D keys, base64 words); default is
    /// a daily rotation over the built-in answer pool
    #[arg(short, long, global = true)]
    puzzles: Option<PathBuf>,

    /// Play the puzzle for this date instead of today (YYYY-MM-DD)
    #[arg(short, long, global = true)]
    date: Option<NaiveDate>,

    /// Play a specific solution word (skips the daily lookup)
    #[arg(short, long, global = true, conflicts_with = "random")]
    word: Option<String>,

    /// Play a random word from the answer pool
    #[arg(short, long, global = true)]
    random: bool,

    /// Custom dictionary file for guess validation (one word per line)
    #[arg(long, global = true)]
    wordlist: Option<PathBuf>,

    /// Dictionary check timeout in seconds
    #[arg(long, global = true, default_value = "5")]
    timeout_secs: u64,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Plain line-based mode (type a word per turn)
    Simple,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let solution = resolve_solution(&cli)
        .await
        .context("no playable word for today")?;

    let validator = match &cli.wordlist {
        Some(path) => WordlistValidator::from_file(path)
            .with_context(|| format!("cannot read wordlist {}", path.display()))?,
        None => WordlistValidator::embedded(),
    };

    let engine = GameEngine::new(solution, validator)
        .with_validation_timeout(Duration::from_secs(cli.timeout_secs));

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_tui(App::new(engine)).await,
        Commands::Simple => run_simple(engine).await,
    }
}

/// Resolve the session's solution word from the CLI flags
///
/// Precedence: explicit `--word`, then `--random`, then the date-keyed
/// provider (schedule file if given, built-in rotation otherwise).
async fn resolve_solution(cli: &Cli) -> Result<Word> {
    if let Some(word) = &cli.word {
        return Word::new(word).context("--word is not a playable word");
    }

    if cli.random {
        let pool = words_from_slice(ANSWERS);
        return pool
            .choose(&mut rand::rng())
            .cloned()
            .context("built-in answer pool is empty");
    }

    let date = cli.date.unwrap_or_else(|| Local::now().date_naive());
    let provider: Box<dyn WordProvider> = match &cli.puzzles {
        Some(path) => Box::new(
            ScheduleProvider::from_path(path)
                .with_context(|| format!("cannot load puzzle schedule {}", path.display()))?,
        ),
        None => Box::new(RotationProvider::embedded()),
    };

    Ok(provider.word_for(date).await?)
}
