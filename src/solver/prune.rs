//! Constraint pruning
//!
//! Narrows a candidate set to the words consistent with one guess and its feedback.

use crate::core::{CandidateSet, Feedback, Mark, WORD_LENGTH, Word};

/// Check whether `candidate` is consistent with `feedback` for `guess`
///
/// Rules per position `i`:
/// - `Match`:   candidate has `guess[i]` at `i`
/// - `Present`: candidate contains `guess[i]`, but not at `i`
/// - `Absent`:  candidate does not contain `guess[i]` anywhere
///
/// `Absent` ignores the other positions of the guess, so a repeated guess
/// letter marked `Absent` once rejects every candidate containing it.
#[inline]
#[must_use]
pub fn admits(candidate: &Word, guess: &Word, feedback: &Feedback) -> bool {
    (0..WORD_LENGTH).all(|i| {
        let letter = guess.letter_at(i);
        match feedback.mark_at(i) {
            Mark::Match => candidate.letter_at(i) == letter,
            Mark::Present => candidate.contains(letter) && candidate.letter_at(i) != letter,
            Mark::Absent => !candidate.contains(letter),
        }
    })
}

/// Return the candidates still consistent with `guess` and `feedback`
///
/// Candidate order is preserved and the input set is left untouched.
/// An empty result means no known word fits.
///
/// # Examples
/// ```
/// use wordle_advisor::core::{CandidateSet, Feedback, Word};
/// use wordle_advisor::solver::prune;
///
/// let set: CandidateSet = ["apple", "angle", "ankle"]
///     .into_iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let guess = Word::new("angle").unwrap();
/// let pruned = prune(&set, &guess, &Feedback::parse("oxxoo").unwrap());
///
/// assert_eq!(pruned.len(), 1);
/// assert_eq!(pruned.as_slice()[0].text(), "apple");
/// ```
#[must_use]
pub fn prune(candidates: &CandidateSet, guess: &Word, feedback: &Feedback) -> CandidateSet {
    let kept: Vec<Word> = candidates
        .iter()
        .filter(|candidate| admits(candidate, guess, feedback))
        .copied()
        .collect();

    tracing::trace!(
        guess = %guess,
        feedback = %feedback,
        before = candidates.len(),
        after = kept.len(),
        "pruned candidates"
    );

    CandidateSet::from_subset(kept)
}

/// Count how many candidates `prune` would remove, without allocating
#[inline]
#[must_use]
pub fn eliminated_count(candidates: &[Word], guess: &Word, feedback: &Feedback) -> usize {
    candidates
        .iter()
        .filter(|candidate| !admits(candidate, guess, feedback))
        .count()
}
