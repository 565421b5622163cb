//! Wordle scoring and pruning engine
//!
//! This module narrows candidate sets by feedback and ranks what remains
//! with either positional letter frequencies or exhaustive elimination.

mod advisor;
pub mod elimination;
pub mod frequency;
mod prune;
mod ranking;
pub mod starter;
pub mod strategy;

pub use advisor::{Advice, Advisor};
pub use elimination::{ScoringError, score_by_elimination};
pub use frequency::score_by_frequency;
pub use prune::{admits, eliminated_count, prune};
pub use ranking::{Method, Ranking, ScoreTable, ScoredWord};
pub use strategy::{
    DEFAULT_ELIMINATION_CUTOFF, EliminationScorer, FixedPolicy, FrequencyScorer, PolicyType,
    Scorer, ScoringStrategy, StrategyPolicy, ThresholdPolicy,
};
