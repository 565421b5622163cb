//! Interactive sessions
//!
//! `play` hides a random dictionary word and evaluates guesses against it.
//! `assist` advises on a game played elsewhere: the user types in the feedback.

use super::console::{ConsolePlayer, FeedbackSource};
use crate::core::{CandidateSet, Word};
use crate::game::{GameError, GameState, run_game};
use crate::solver::{Advisor, StrategyPolicy};
use rand::seq::IndexedRandom;
use std::io::{self, BufRead, Write};

/// Run one console game on the given reader and writer
///
/// A known `solution` makes the console evaluate guesses; without one the
/// user is prompted for feedback. Quitting still prints the farewell.
///
/// # Errors
/// Returns `GameError::Quit` if the user quits and `GameError::Input` on I/O
/// failure.
pub fn play_session<P, R, W>(
    dictionary: &CandidateSet,
    solution: Option<Word>,
    advisor: &Advisor<P>,
    input: R,
    output: W,
) -> Result<GameState, GameError>
where
    P: StrategyPolicy,
    R: BufRead,
    W: Write,
{
    let source = if solution.is_some() {
        FeedbackSource::Evaluate
    } else {
        FeedbackSource::Prompt
    };
    let mut console = ConsolePlayer::new(input, output, source);

    let initial = GameState::new(dictionary.clone(), solution);
    let result = console
        .greet()
        .and_then(|()| run_game(initial, advisor, &mut console));

    match &result {
        Ok(state) => console.farewell(Some(state))?,
        Err(GameError::Quit) => console.farewell(None)?,
        Err(_) => {}
    }
    result
}

/// Play against a random word from the dictionary on stdin/stdout
///
/// # Errors
/// Returns `GameError::NoGuess` for an empty dictionary and any session error.
pub fn run_play<P: StrategyPolicy>(
    dictionary: &CandidateSet,
    advisor: &Advisor<P>,
) -> Result<GameState, GameError> {
    let solution = *dictionary
        .as_slice()
        .choose(&mut rand::rng())
        .ok_or(GameError::NoGuess)?;

    play_session(
        dictionary,
        Some(solution),
        advisor,
        io::stdin().lock(),
        io::stdout(),
    )
}

/// Advise on an external game on stdin/stdout
///
/// # Errors
/// Returns any session error.
pub fn run_assist<P: StrategyPolicy>(
    dictionary: &CandidateSet,
    advisor: &Advisor<P>,
) -> Result<GameState, GameError> {
    play_session(dictionary, None, advisor, io::stdin().lock(), io::stdout())
}
