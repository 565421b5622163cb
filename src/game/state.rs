//! Immutable game state threaded through each turn

use crate::core::{CandidateSet, Feedback, Word};
use crate::solver::prune;

/// Maximum number of guesses in a game
pub const MAX_TURNS: usize = 6;

/// One completed turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnRecord {
    pub guess: Word,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Snapshot of a game between turns
///
/// Every turn produces a new state; nothing is mutated in place.
#[derive(Debug, Clone)]
pub struct GameState {
    candidates: CandidateSet,
    solution: Option<Word>,
    history: Vec<TurnRecord>,
    victory: bool,
}

impl GameState {
    /// Start a game over the whole dictionary
    ///
    /// `solution` is `None` when the hidden word is unknown and feedback
    /// comes from outside.
    #[must_use]
    pub const fn new(dictionary: CandidateSet, solution: Option<Word>) -> Self {
        Self {
            candidates: dictionary,
            solution,
            history: Vec::new(),
            victory: false,
        }
    }

    /// State after playing `guess` and receiving `feedback`
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::{CandidateSet, Feedback, Word};
    /// use wordle_advisor::game::GameState;
    ///
    /// let dictionary: CandidateSet = ["apple", "angle", "ankle"]
    ///     .into_iter()
    ///     .map(|w| Word::new(w).unwrap())
    ///     .collect();
    /// let state = GameState::new(dictionary, None);
    /// let next = state.apply(Word::new("angle").unwrap(), Feedback::parse("oxxoo").unwrap());
    ///
    /// assert_eq!(state.turn(), 0);
    /// assert_eq!(next.turn(), 1);
    /// assert_eq!(next.candidates().len(), 1);
    /// ```
    #[must_use]
    pub fn apply(&self, guess: Word, feedback: Feedback) -> Self {
        let candidates = prune(&self.candidates, &guess, &feedback);

        let mut history = self.history.clone();
        history.push(TurnRecord {
            guess,
            feedback,
            candidates_before: self.candidates.len(),
            candidates_after: candidates.len(),
        });

        Self {
            candidates,
            solution: self.solution,
            history,
            victory: feedback.is_victory(),
        }
    }

    /// Number of turns played so far
    #[must_use]
    pub fn turn(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    #[must_use]
    pub const fn solution(&self) -> Option<&Word> {
        self.solution.as_ref()
    }

    #[must_use]
    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    #[must_use]
    pub const fn victory(&self) -> bool {
        self.victory
    }

    /// Won, or out of turns
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.victory || self.turn() >= MAX_TURNS
    }

    /// Chance of hitting the solution with a uniformly random candidate, in percent
    #[must_use]
    pub fn random_odds(&self) -> Option<f64> {
        (!self.candidates.is_empty()).then(|| 100.0 / self.candidates.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn dictionary() -> CandidateSet {
        ["apple", "angle", "ankle", "crane", "slate"]
            .into_iter()
            .map(word)
            .collect()
    }

    #[test]
    fn new_game_is_fresh() {
        let state = GameState::new(dictionary(), Some(word("apple")));
        assert_eq!(state.turn(), 0);
        assert!(!state.victory());
        assert!(!state.is_over());
        assert_eq!(state.candidates().len(), 5);
        assert_eq!(state.solution(), Some(&word("apple")));
        assert!((state.random_odds().unwrap() - 20.0).abs() < 1e-12);
    }

    #[test]
    fn apply_leaves_previous_state_untouched() {
        let state = GameState::new(dictionary(), None);
        let feedback = evaluate(&word("angle"), &word("apple")).feedback;
        let next = state.apply(word("angle"), feedback);

        assert_eq!(state.turn(), 0);
        assert_eq!(state.candidates().len(), 5);
        assert_eq!(next.turn(), 1);
        assert_eq!(
            next.history()[0],
            TurnRecord {
                guess: word("angle"),
                feedback,
                candidates_before: 5,
                candidates_after: 1,
            }
        );
    }

    #[test]
    fn victory_ends_game() {
        let state = GameState::new(dictionary(), None).apply(word("apple"), Feedback::VICTORY);
        assert!(state.victory());
        assert!(state.is_over());
    }

    #[test]
    fn six_turns_end_game() {
        let miss = evaluate(&word("crane"), &word("apple")).feedback;
        let mut state = GameState::new(dictionary(), Some(word("apple")));
        for _ in 0..MAX_TURNS {
            assert!(!state.is_over());
            state = state.apply(word("crane"), miss);
        }
        assert!(state.is_over());
        assert!(!state.victory());
    }

    #[test]
    fn empty_candidates_have_no_odds() {
        let state = GameState::new(dictionary(), None).apply(word("zzzzz"), Feedback::VICTORY);
        assert!(state.candidates().is_empty());
        assert!(state.random_odds().is_none());
    }
}
