//! Word Game - CLI
//!
//! Terminal word-guessing game with TUI and line-based modes.

use anyhow::{Context, Result};
use clap::builder::TypedValueParser;
use clap::{Parser, Subcommand};
use log::LevelFilter;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use wordle_game::{
    commands::{run_simple, score_guess},
    core::Word,
    game::{MAX_ATTEMPTS, Session, WordSource},
    output::print_score_result,
    wordlists::{
        WORDS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Target words: 'embedded' (default) or path to a file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Extra words accepted as guesses (never chosen as targets)
    #[arg(short = 'g', long, global = true)]
    guesses: Option<PathBuf>,

    /// Number of guesses per round
    #[arg(short = 'm', long, global = true, default_value_t = MAX_ATTEMPTS,
          value_parser = clap::value_parser!(u16).range(1..).map(usize::from))]
    max_attempts: usize,

    /// Seed for reproducible target selection
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Log file used while the TUI owns the terminal
    #[arg(long, global = true, default_value = "wordle.log")]
    log_file: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Score one guess against a target word
    Score {
        /// The guessed word
        guess: String,

        /// The target word
        target: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    let log_file = matches!(command, Commands::Play).then_some(cli.log_file.as_path());
    init_logging(cli.verbose, log_file)?;

    match command {
        Commands::Play => {
            let session =
                build_session(&cli.wordlist, cli.guesses.as_deref(), cli.max_attempts, cli.seed)?;
            run_play_command(session)
        }
        Commands::Simple => {
            let mut session =
                build_session(&cli.wordlist, cli.guesses.as_deref(), cli.max_attempts, cli.seed)?;
            run_simple(&mut session)
        }
        Commands::Score { guess, target } => run_score_command(&guess, &target),
    }
}

/// Configure `env_logger`
///
/// Without `-v`, `RUST_LOG` decides and the default is `warn`. In TUI mode
/// logs go to a file so they don't corrupt the screen.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<()> {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(LevelFilter::Warn);
    builder.parse_default_env();

    match verbose {
        0 => {}
        1 => {
            builder.filter_level(LevelFilter::Info);
        }
        2 => {
            builder.filter_level(LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(LevelFilter::Trace);
        }
    }

    if let Some(path) = log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

/// Build the word source based on the -w and -g flags
///
/// - "embedded": use the word list compiled into the binary
/// - "<path>": load targets from a file
fn load_word_source(wordlist: &str, guesses: Option<&Path>) -> Result<WordSource> {
    let targets: Vec<Word> = match wordlist {
        "embedded" => words_from_slice(WORDS),
        path => load_from_file(path)?,
    };

    let extra = match guesses {
        Some(path) => load_from_file(path)?,
        None => Vec::new(),
    };

    let source = WordSource::new(targets, extra)
        .with_context(|| format!("No usable five-letter words in '{wordlist}'"))?;
    log::info!(
        "Word source ready: {} targets, {} valid guesses",
        source.target_count(),
        source.guess_count()
    );
    Ok(source)
}

fn build_session(
    wordlist: &str,
    guesses: Option<&Path>,
    max_attempts: usize,
    seed: Option<u64>,
) -> Result<Session<StdRng>> {
    let source = load_word_source(wordlist, guesses)?;
    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    Ok(Session::new(source, rng, max_attempts)?)
}

fn run_score_command(guess: &str, target: &str) -> Result<()> {
    let result = score_guess(guess, target).context("Cannot score these words")?;
    print_score_result(&result, &target.trim().to_uppercase());
    Ok(())
}

fn run_play_command(session: Session<StdRng>) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let app = App::new(session);
    run_tui(app)
}
