//! Player boundary and turn driver

use super::state::{GameState, TurnRecord};
use crate::core::{Feedback, Word, evaluate};
use crate::solver::{Advice, Advisor, StrategyPolicy};
use std::io;
use thiserror::Error;

/// Feedback supplied by a player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackInput {
    /// Feedback read from the real game
    Given(Feedback),
    /// Evaluate the guess against the known solution
    Evaluate,
}

/// Error type for the game loop
#[derive(Debug, Error)]
pub enum GameError {
    #[error("Cannot evaluate a guess without a known solution")]
    UnknownSolution,
    #[error("No guess available: no candidates remain")]
    NoGuess,
    #[error("Game is already over")]
    GameOver,
    #[error("Player quit")]
    Quit,
    #[error("Input error: {0}")]
    Input(#[from] io::Error),
}

/// Source of guesses and feedback for the game loop
///
/// Implemented by the console front end and by the automated advisor player.
#[cfg_attr(test, mockall::automock)]
pub trait Player {
    /// Choose the next guess, given the advisor's recommendation
    ///
    /// # Errors
    /// Returns `GameError` if no guess can be produced.
    fn next_guess(&mut self, advice: &Advice, state: &GameState) -> Result<Word, GameError>;

    /// Report the feedback for `guess`
    ///
    /// # Errors
    /// Returns `GameError` if no feedback can be produced.
    fn feedback(&mut self, guess: &Word) -> Result<FeedbackInput, GameError>;

    /// Called after each completed turn
    fn observe(&mut self, record: &TurnRecord, state: &GameState) {
        tracing::trace!(turn = state.turn(), guess = %record.guess, "turn observed");
    }
}

/// Play one turn: advise, pull a guess, pull or compute feedback, prune
///
/// # Errors
/// Returns `GameError::GameOver` if `state` is finished, `UnknownSolution` if
/// the player requests evaluation without a known solution, and any error the
/// player raises.
pub fn play_turn<P, Pl>(
    state: &GameState,
    advisor: &Advisor<P>,
    player: &mut Pl,
) -> Result<GameState, GameError>
where
    P: StrategyPolicy,
    Pl: Player + ?Sized,
{
    if state.is_over() {
        return Err(GameError::GameOver);
    }

    let advice = advisor.advise(state.candidates());
    let guess = player.next_guess(&advice, state)?;

    let feedback = match player.feedback(&guess)? {
        FeedbackInput::Given(feedback) => feedback,
        FeedbackInput::Evaluate => {
            let solution = state.solution().ok_or(GameError::UnknownSolution)?;
            evaluate(&guess, solution).feedback
        }
    };

    let next = state.apply(guess, feedback);
    tracing::info!(
        turn = next.turn(),
        guess = %guess,
        feedback = %feedback,
        remaining = next.candidates().len(),
        "turn complete"
    );

    if let Some(record) = next.history().last() {
        player.observe(record, &next);
    }

    Ok(next)
}

/// Play turns until victory or the turn limit
///
/// # Errors
/// Returns the first error raised by `play_turn`.
pub fn run_game<P, Pl>(
    initial: GameState,
    advisor: &Advisor<P>,
    player: &mut Pl,
) -> Result<GameState, GameError>
where
    P: StrategyPolicy,
    Pl: Player + ?Sized,
{
    let mut state = initial;
    while !state.is_over() {
        state = play_turn(&state, advisor, player)?;
    }
    Ok(state)
}

/// Automated player that follows the advisor and evaluates against the solution
#[derive(Debug, Clone, Copy, Default)]
pub struct AdvisorPlayer {
    opening: Option<Word>,
}

impl AdvisorPlayer {
    #[must_use]
    pub const fn new() -> Self {
        Self { opening: None }
    }

    /// Force the first guess instead of taking the advisor's
    #[must_use]
    pub const fn with_opening(opening: Option<Word>) -> Self {
        Self { opening }
    }
}

impl Player for AdvisorPlayer {
    fn next_guess(&mut self, advice: &Advice, state: &GameState) -> Result<Word, GameError> {
        if state.turn() == 0
            && let Some(opening) = self.opening
        {
            return Ok(opening);
        }

        advice
            .best()
            .or_else(|| state.candidates().first())
            .copied()
            .ok_or(GameError::NoGuess)
    }

    fn feedback(&mut self, _guess: &Word) -> Result<FeedbackInput, GameError> {
        Ok(FeedbackInput::Evaluate)
    }
}
