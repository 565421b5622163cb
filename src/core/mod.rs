//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types: validated words,
//! per-letter feedback with its evaluator, and the candidate set.
//! All types here are pure, testable, and have clear mathematical properties.

mod candidates;
mod feedback;
mod word;

pub use candidates::CandidateSet;
pub use feedback::{Evaluation, Feedback, FeedbackError, Mark, evaluate};
pub use word::{WORD_LENGTH, Word, WordError};
