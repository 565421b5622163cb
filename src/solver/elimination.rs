//! Exhaustive elimination scoring
//!
//! For every candidate used as a guess, simulates every other candidate as the
//! hidden solution and measures how many words the resulting feedback would
//! prune. The score is the mean eliminated count.
//!
//! Cost is quadratic in the candidate count times a linear prune, so callers
//! should only use it below a tractability cutoff.

use super::prune::eliminated_count;
use super::ranking::{Method, Ranking, ScoreTable, ScoredWord};
use crate::core::{CandidateSet, Feedback, Word, evaluate};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Error type for interrupted scoring
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    #[error("Elimination scoring exceeded its deadline of {0:?}")]
    DeadlineExceeded(Duration),
}

/// Mean number of candidates eliminated when guessing `guess`
///
/// Every word in `candidates` is treated as an equally likely solution.
/// Solutions producing the same feedback prune identically, so each distinct
/// feedback is pruned once and weighted by how often it occurs.
///
/// # Examples
/// ```
/// use wordle_advisor::core::Word;
/// use wordle_advisor::solver::elimination::expected_eliminated;
///
/// let words: Vec<Word> = ["apple", "angle", "ankle"]
///     .into_iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
///
/// // "angle" splits apple | angle | ankle into singletons: 2 eliminated each time
/// let score = expected_eliminated(&words[1], &words);
/// assert!((score - 2.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn expected_eliminated(guess: &Word, candidates: &[Word]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    let mut feedback_counts: FxHashMap<Feedback, usize> = FxHashMap::default();
    for solution in candidates {
        *feedback_counts
            .entry(evaluate(guess, solution).feedback)
            .or_insert(0) += 1;
    }

    let total: usize = feedback_counts
        .iter()
        .map(|(feedback, &count)| count * eliminated_count(candidates, guess, feedback))
        .sum();

    total as f64 / candidates.len() as f64
}

/// Rank candidates by mean eliminated count
///
/// The recommended guess is the highest-scoring word, the earliest in
/// candidate order on ties. Returns `None` for an empty candidate set.
#[must_use]
pub fn score_by_elimination(candidates: &CandidateSet) -> Option<Ranking> {
    let scores = score_all(candidates.as_slice(), None)?;
    build_ranking(candidates, scores)
}

/// Like [`score_by_elimination`], giving up once `budget` has elapsed
///
/// # Errors
/// Returns `ScoringError::DeadlineExceeded` if scoring did not finish in time.
pub fn score_by_elimination_within(
    candidates: &CandidateSet,
    budget: Duration,
) -> Result<Option<Ranking>, ScoringError> {
    let deadline = Instant::now() + budget;
    let scores = score_all(candidates.as_slice(), Some(deadline))
        .ok_or(ScoringError::DeadlineExceeded(budget))?;
    Ok(build_ranking(candidates, scores))
}

/// Score every candidate in parallel; `None` if the deadline passed
fn score_all(candidates: &[Word], deadline: Option<Instant>) -> Option<Vec<f64>> {
    candidates
        .par_iter()
        .map(|guess| {
            if deadline.is_some_and(|d| Instant::now() >= d) {
                return None;
            }
            Some(expected_eliminated(guess, candidates))
        })
        .collect()
}

fn build_ranking(candidates: &CandidateSet, scores: Vec<f64>) -> Option<Ranking> {
    let entries: Vec<ScoredWord> = candidates
        .iter()
        .zip(scores)
        .map(|(&word, score)| ScoredWord { word, score })
        .collect();

    let best = entries
        .iter()
        .fold(None::<&ScoredWord>, |best, entry| match best {
            Some(current) if current.score >= entry.score => Some(current),
            _ => Some(entry),
        })?
        .word;

    tracing::debug!(
        candidates = candidates.len(),
        best = %best,
        "ranked by expected elimination"
    );

    Some(Ranking {
        method: Method::Elimination,
        scores: ScoreTable::new(entries),
        best,
    })
}
