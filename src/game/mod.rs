//! Turn-based game loop
//!
//! The loop pulls guesses and feedback from a `Player`, evaluates against the
//! solution when one is known, prunes, and hands back a new `GameState`.

mod player;
mod state;

pub use player::{AdvisorPlayer, FeedbackInput, GameError, Player, play_turn, run_game};
pub use state::{GameState, MAX_TURNS, TurnRecord};

#[cfg(test)]
pub use player::MockPlayer;
