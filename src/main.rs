//! WordClub - CLI
//!
//! Terminal board by default, plus a line mode and a one-shot checker.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordclub::{
    commands::{check_guess, run_simple},
    core::Word,
    game::{DEFAULT_MAX_ATTEMPTS, DEFAULT_TARGET, GameConfig, Session},
    interactive::run_tui,
    logging::{LogTarget, init_tracing},
    output::print_check_result,
    wordlists::{
        TARGETS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordclub",
    about = "Adivina la palabra: a Wordle-style game with Spanish words",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Target word
    #[arg(short, long, global = true, env = "WORDCLUB_WORD", default_value = DEFAULT_TARGET)]
    word: String,

    /// Number of attempts (board rows)
    #[arg(
        short,
        long,
        global = true,
        default_value_t = DEFAULT_MAX_ATTEMPTS as u16,
        value_parser = clap::value_parser!(u16).range(1..=12)
    )]
    attempts: u16,

    /// Draw a random target at every game start instead of using --word
    #[arg(short, long, global = true)]
    random: bool,

    /// Word list for --random (default: embedded list)
    #[arg(short, long, global = true, requires = "random")]
    targets: Option<PathBuf>,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive board (default)
    Play,

    /// Line mode: one guess per line, no TUI
    Simple,

    /// Score a single guess against the target word
    Check {
        /// The guess to score
        guess: String,
    },
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    let log_target = match (&cli.log_file, &command) {
        (Some(path), _) => LogTarget::File(path),
        (None, Commands::Play) => LogTarget::Off,
        (None, _) => LogTarget::Stderr,
    };
    init_tracing(log_target)?;

    match command {
        Commands::Play => run_tui(Session::new(build_config(&cli)?)),
        Commands::Simple => run_simple(Session::new(build_config(&cli)?)),
        Commands::Check { guess } => run_check_command(&cli.word, &guess),
    }
}

/// Build the game configuration from the command line
fn build_config(cli: &Cli) -> Result<GameConfig> {
    let attempts = usize::from(cli.attempts);

    if cli.random {
        let words = match &cli.targets {
            Some(path) => load_from_file(path)
                .with_context(|| format!("cannot read word list {}", path.display()))?,
            None => words_from_slice(TARGETS),
        };
        return GameConfig::random(words, attempts).context("no valid words to choose from");
    }

    GameConfig::fixed(&cli.word, attempts)
        .with_context(|| format!("invalid target word '{}'", cli.word))
}

fn run_check_command(word: &str, guess: &str) -> Result<()> {
    let target = Word::parse(word).with_context(|| format!("invalid target word '{word}'"))?;
    let result = check_guess(&target, guess)?;
    print_check_result(&result.guess, &result.feedback);
    Ok(())
}
