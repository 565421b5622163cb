//! Positional letter-frequency scoring
//!
//! Approximates how likely each candidate is by treating the five positions
//! as independent letter distributions estimated from the candidate set itself.

use super::ranking::{Method, Ranking, ScoreTable, ScoredWord};
use crate::core::{CandidateSet, WORD_LENGTH, Word};

const ALPHABET: usize = 26;

/// Per-position letter probabilities: `table[letter][position]`
#[derive(Debug, Clone, PartialEq)]
pub struct PositionalFrequencies {
    table: [[f64; WORD_LENGTH]; ALPHABET],
}

impl PositionalFrequencies {
    /// Count letters per position and normalize each position to sum to 1
    ///
    /// Returns `None` for an empty candidate set.
    #[must_use]
    pub fn from_candidates(candidates: &[Word]) -> Option<Self> {
        if candidates.is_empty() {
            return None;
        }

        let mut table = [[0.0; WORD_LENGTH]; ALPHABET];
        for word in candidates {
            for (position, &letter) in word.letters().iter().enumerate() {
                table[usize::from(letter - b'a')][position] += 1.0;
            }
        }

        // Every column sums to the number of candidates
        let total = candidates.len() as f64;
        for row in &mut table {
            for cell in row.iter_mut() {
                *cell /= total;
            }
        }

        Some(Self { table })
    }

    /// Probability of `letter` appearing at `position`
    ///
    /// Zero for anything but a lowercase ASCII letter or a position past the
    /// end of the word.
    #[inline]
    #[must_use]
    pub fn probability(&self, letter: u8, position: usize) -> f64 {
        if !letter.is_ascii_lowercase() {
            return 0.0;
        }
        self.table[usize::from(letter - b'a')]
            .get(position)
            .copied()
            .unwrap_or(0.0)
    }

    /// Product of the positional probabilities of the word's letters
    #[must_use]
    pub fn word_score(&self, word: &Word) -> f64 {
        word.letters()
            .iter()
            .enumerate()
            .map(|(position, &letter)| self.probability(letter, position))
            .product()
    }
}

/// Rank candidates by positional letter frequency
///
/// Scores are normalized to sum to 1. The recommended guess is the
/// highest-scoring word with five distinct letters, or the highest-scoring
/// word overall if every candidate repeats a letter.
///
/// Returns `None` for an empty candidate set.
///
/// # Examples
/// ```
/// use wordle_advisor::core::{CandidateSet, Word};
/// use wordle_advisor::solver::score_by_frequency;
///
/// let set: CandidateSet = ["crane", "crate", "grate", "apple"]
///     .into_iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let ranking = score_by_frequency(&set).unwrap();
///
/// assert_eq!(ranking.best.text(), "crate");
/// assert!((ranking.scores.total() - 1.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn score_by_frequency(candidates: &CandidateSet) -> Option<Ranking> {
    let frequencies = PositionalFrequencies::from_candidates(candidates.as_slice())?;

    let raw: Vec<ScoredWord> = candidates
        .iter()
        .map(|&word| ScoredWord {
            word,
            score: frequencies.word_score(&word),
        })
        .collect();

    // Each letter of a candidate occurs at its own position, so every score is positive
    let total: f64 = raw.iter().map(|entry| entry.score).sum();
    let scores = ScoreTable::new(
        raw.into_iter()
            .map(|entry| ScoredWord {
                score: entry.score / total,
                ..entry
            })
            .collect(),
    );

    let best = pick_best(&scores)?;
    tracing::debug!(
        candidates = candidates.len(),
        best = %best,
        "ranked by positional frequency"
    );

    Some(Ranking {
        method: Method::Frequency,
        scores,
        best,
    })
}

/// Highest-scoring word with distinct letters, else the highest-scoring word
fn pick_best(scores: &ScoreTable) -> Option<Word> {
    let ascending = scores.ascending();
    ascending
        .iter()
        .rev()
        .find(|entry| entry.word.has_distinct_letters())
        .or_else(|| ascending.last())
        .map(|entry| entry.word)
}
