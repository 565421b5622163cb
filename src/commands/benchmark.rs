//! Benchmark command
//!
//! Lets the advisor solve many target words and collects turn statistics.

use super::solve::{SolveConfig, solve_word};
use crate::core::{CandidateSet, Word};
use crate::game::GameError;
use crate::solver::{Advisor, StrategyPolicy};
use indicatif::{ProgressBar, ProgressStyle};
use rand::seq::IndexedRandom;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    /// Guesses summed over solved words
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Solved words per turn count
    pub distribution: HashMap<usize, usize>,
    pub failures: Vec<Word>,
    pub duration: Duration,
    pub words_per_second: f64,
}

impl BenchmarkResult {
    #[must_use]
    pub fn success_rate(&self) -> f64 {
        if self.total_words == 0 {
            return 0.0;
        }
        self.solved as f64 / self.total_words as f64 * 100.0
    }
}

/// Pick up to `count` distinct target words at random
#[must_use]
pub fn sample_targets(dictionary: &CandidateSet, count: usize) -> Vec<Word> {
    let mut rng = rand::rng();
    dictionary
        .as_slice()
        .choose_multiple(&mut rng, count)
        .copied()
        .collect()
}

/// Run benchmark on a set of target words
///
/// If `opening` is provided, it is used as the first guess instead of the
/// advisor's pick.
///
/// # Errors
///
/// Returns the first `GameError` raised while solving a target.
///
/// # Panics
///
/// Panics if the hard-coded progress bar template is invalid.
pub fn run_benchmark<P: StrategyPolicy>(
    dictionary: &CandidateSet,
    advisor: &Advisor<P>,
    targets: &[Word],
    opening: Option<Word>,
    show_progress: bool,
) -> Result<BenchmarkResult, GameError> {
    let pb = if show_progress {
        ProgressBar::new(targets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .expect("valid progress template")
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut solved = 0;
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut failures = Vec::new();

    for (idx, &target) in targets.iter().enumerate() {
        let mut config = SolveConfig::new(target);
        config.opening = opening;
        let result = solve_word(config, dictionary, advisor)?;

        if result.success {
            let guesses = result.guesses.len();
            solved += 1;
            total_guesses += guesses;
            min_guesses = min_guesses.min(guesses);
            max_guesses = max_guesses.max(guesses);
            *distribution.entry(guesses).or_insert(0) += 1;
        } else {
            tracing::debug!(word = %target, "advisor failed to solve");
            failures.push(target);
        }

        if idx % 10 == 0 && solved > 0 {
            pb.set_message(format!("Avg: {:.2}", total_guesses as f64 / solved as f64));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let total_words = targets.len();
    let secs = duration.as_secs_f64();

    Ok(BenchmarkResult {
        total_words,
        solved,
        total_guesses,
        average_guesses: if solved == 0 {
            0.0
        } else {
            total_guesses as f64 / solved as f64
        },
        min_guesses: if solved == 0 { 0 } else { min_guesses },
        max_guesses,
        distribution,
        failures,
        duration,
        words_per_second: if secs > 0.0 {
            total_words as f64 / secs
        } else {
            0.0
        },
    })
}
