//! Word solving command
//!
//! Lets the advisor play against a known solution and returns the solution path.

use crate::core::{CandidateSet, Feedback, Word};
use crate::game::{
    AdvisorPlayer, FeedbackInput, GameError, GameState, MAX_TURNS, Player, TurnRecord, play_turn,
};
use crate::solver::{Advice, Advisor, Method, StrategyPolicy};

/// Configuration for solving a word
#[derive(Debug, Clone, Copy)]
pub struct SolveConfig {
    pub target: Word,
    pub max_guesses: usize,
    /// Forced first guess
    pub opening: Option<Word>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: Word) -> Self {
        Self {
            target,
            max_guesses: MAX_TURNS,
            opening: None,
        }
    }
}

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: Word,
}

/// A single guess step in the solution
#[derive(Debug, Clone, PartialEq)]
pub struct GuessStep {
    pub word: Word,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Scoring method and score behind the guess, when it was the advisor's pick
    pub method: Option<Method>,
    pub score: Option<f64>,
}

/// Follows the advisor and remembers the score of each pick
struct RecordingPlayer {
    inner: AdvisorPlayer,
    last: Option<(Method, Option<f64>)>,
}

impl Player for RecordingPlayer {
    fn next_guess(&mut self, advice: &Advice, state: &GameState) -> Result<Word, GameError> {
        let guess = self.inner.next_guess(advice, state)?;
        self.last = advice
            .ranking()
            .map(|ranking| (ranking.method, ranking.scores.get(&guess)));
        Ok(guess)
    }

    fn feedback(&mut self, guess: &Word) -> Result<FeedbackInput, GameError> {
        self.inner.feedback(guess)
    }
}

/// Solve a specific word with the given advisor
///
/// The target may lie outside the dictionary; the advisor then runs out of
/// candidates and the result reports a failure.
///
/// # Errors
///
/// Returns `GameError` only for failures other than running out of candidates.
pub fn solve_word<P: StrategyPolicy>(
    config: SolveConfig,
    dictionary: &CandidateSet,
    advisor: &Advisor<P>,
) -> Result<SolveResult, GameError> {
    let mut state = GameState::new(dictionary.clone(), Some(config.target));
    let mut player = RecordingPlayer {
        inner: AdvisorPlayer::with_opening(config.opening),
        last: None,
    };
    let mut guesses = Vec::new();

    while !state.is_over() && state.turn() < config.max_guesses {
        player.last = None;
        state = match play_turn(&state, advisor, &mut player) {
            Ok(next) => next,
            Err(GameError::NoGuess) => break,
            Err(e) => return Err(e),
        };

        if let Some(record) = state.history().last() {
            guesses.push(step_from(record, player.last));
        }
    }

    Ok(SolveResult {
        success: state.victory(),
        guesses,
        target: config.target,
    })
}

fn step_from(record: &TurnRecord, scored: Option<(Method, Option<f64>)>) -> GuessStep {
    GuessStep {
        word: record.guess,
        feedback: record.feedback,
        candidates_before: record.candidates_before,
        candidates_after: record.candidates_after,
        method: scored.map(|(method, _)| method),
        score: scored.and_then(|(_, score)| score),
    }
}
