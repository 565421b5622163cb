//! Wordle Advisor - CLI
//!
//! Interactive Wordle advisor that prunes the dictionary with each round of
//! feedback and recommends the next guess.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_advisor::{
    commands::{
        SolveConfig, find_starters, run_assist, run_benchmark, run_play, sample_targets,
        solve_word,
    },
    config::AdvisorConfig,
    core::{CandidateSet, Word},
    game::{GameError, GameState},
    logging::init_logging,
    output::{print_benchmark_result, print_solve_result, print_starters},
    solver::{Advisor, DEFAULT_ELIMINATION_CUTOFF, PolicyType},
    wordlists::{load_dictionary, load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_advisor",
    about = "Wordle advisor using positional letter frequency and expected elimination",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: auto (default), frequency, elimination
    #[arg(short, long, global = true, default_value = "auto")]
    strategy: String,

    /// Largest candidate count scored by elimination in auto mode
    #[arg(short, long, global = true, default_value_t = DEFAULT_ELIMINATION_CUTOFF)]
    cutoff: usize,

    /// Give up on elimination scoring after this many milliseconds
    #[arg(long, global = true)]
    deadline_ms: Option<u64>,

    /// Word list file (one 5-letter word per line); defaults to the embedded dictionary
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Log level when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against a random hidden word (default)
    Play,

    /// Advise on a game played elsewhere by typing in its feedback
    Assist,

    /// Let the advisor solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show verbose output with candidate counts and scores
        #[arg(short, long)]
        verbose: bool,

        /// Override the first guess
        #[arg(short = 'f', long)]
        first_word: Option<String>,
    },

    /// Benchmark the advisor on random dictionary words
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Override the first guess
        #[arg(short = 'f', long)]
        first_word: Option<String>,
    },

    /// Rank opening words by English letter frequency
    Starter {
        /// Number of top words to list
        #[arg(short = 'n', long, default_value = "10")]
        top: usize,
    },
}

fn load_words(path: Option<&PathBuf>) -> Result<CandidateSet> {
    match path {
        Some(path) => load_from_file(path)
            .with_context(|| format!("Failed to load word list {}", path.display())),
        None => load_dictionary().context("Embedded dictionary is invalid"),
    }
}

fn parse_word(text: &str) -> Result<Word> {
    Word::new(text).with_context(|| format!("Invalid word '{text}'"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let dictionary = load_words(cli.wordlist.as_ref())?;
    let config = AdvisorConfig::new(&cli.strategy, cli.cutoff, cli.deadline_ms)?;
    let advisor = config.advisor();
    tracing::debug!(words = dictionary.len(), ?config, "advisor ready");

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => finish_session(run_play(&dictionary, &advisor)),
        Commands::Assist => finish_session(run_assist(&dictionary, &advisor)),
        Commands::Solve {
            word,
            verbose,
            first_word,
        } => run_solve_command(&word, verbose, first_word.as_deref(), &dictionary, &advisor),
        Commands::Benchmark { count, first_word } => {
            run_benchmark_command(count, first_word.as_deref(), &dictionary, &advisor)
        }
        Commands::Starter { top } => {
            print_starters(&find_starters(&dictionary, top));
            Ok(())
        }
    }
}

/// Quitting is a normal way to end a session
fn finish_session(result: Result<GameState, GameError>) -> Result<()> {
    match result {
        Ok(_) | Err(GameError::Quit) => Ok(()),
        Err(e) => Err(e).context("Game session failed"),
    }
}

fn run_solve_command(
    word: &str,
    verbose: bool,
    first_word: Option<&str>,
    dictionary: &CandidateSet,
    advisor: &Advisor<PolicyType>,
) -> Result<()> {
    let mut config = SolveConfig::new(parse_word(word)?);
    config.opening = first_word.map(parse_word).transpose()?;

    if !dictionary.contains(&config.target) {
        tracing::warn!(word = %config.target, "target is not in the word list");
    }

    let result = solve_word(config, dictionary, advisor)?;
    print_solve_result(&result, verbose);
    Ok(())
}

fn run_benchmark_command(
    count: usize,
    first_word: Option<&str>,
    dictionary: &CandidateSet,
    advisor: &Advisor<PolicyType>,
) -> Result<()> {
    let opening = first_word.map(parse_word).transpose()?;

    if let Some(word) = opening {
        println!("Running benchmark on {count} random words with forced first word: {word}...");
    } else {
        println!("Running benchmark on {count} random words...");
    }

    let targets = sample_targets(dictionary, count);
    let result = run_benchmark(dictionary, advisor, &targets, opening, true)?;
    print_benchmark_result(&result);
    Ok(())
}
