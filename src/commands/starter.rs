//! Starter word command
//!
//! Ranks dictionary words with distinct letters by summed English letter weight.

use crate::core::{CandidateSet, Word};
use crate::solver::starter::{best_starter, rank_starters};

/// Ranked starter words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarterReport {
    pub best: Option<(Word, u32)>,
    /// Highest-scoring words, in increasing score order
    pub top: Vec<(Word, u32)>,
    pub eligible: usize,
}

/// Rank starter words and keep the `top` highest
#[must_use]
pub fn find_starters(dictionary: &CandidateSet, top: usize) -> StarterReport {
    let ranked = rank_starters(dictionary.as_slice());
    let eligible = ranked.len();
    let skip = eligible.saturating_sub(top);

    StarterReport {
        best: best_starter(dictionary.as_slice()),
        top: ranked.into_iter().skip(skip).collect(),
        eligible,
    }
}
