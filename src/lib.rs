//! Wordle Advisor
//!
//! Narrows the Wordle dictionary with each round of feedback and recommends the
//! next guess, scoring candidates by positional letter frequency when many
//! remain and by exhaustive expected elimination once few are left.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_advisor::core::{CandidateSet, Feedback, Word};
//! use wordle_advisor::solver::{Advisor, prune};
//!
//! let dictionary: CandidateSet = ["apple", "angle", "ankle"]
//!     .into_iter()
//!     .map(|w| Word::new(w).unwrap())
//!     .collect();
//!
//! let advisor: Advisor = Advisor::default();
//! let guess = *advisor.advise(&dictionary).best().unwrap();
//! assert_eq!(guess.text(), "angle");
//!
//! // Right letter, right spot for a, l and e; n and g are absent
//! let feedback = Feedback::parse("oxxoo").unwrap();
//! let remaining = prune(&dictionary, &guess, &feedback);
//! assert_eq!(remaining.first().map(Word::text), Some("apple"));
//! ```

// Core domain types
pub mod core;

// Pruning and scoring
pub mod solver;

// Turn-based game loop
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Advisor settings
pub mod config;

// Tracing setup
pub mod logging;
