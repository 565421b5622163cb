//! Scoring strategies and the policy that picks between them
//!
//! Defines the `ScoringStrategy` trait with its two implementations and the
//! `StrategyPolicy` trait deciding which one to run for a candidate count.

use super::elimination::{ScoringError, score_by_elimination, score_by_elimination_within};
use super::frequency::score_by_frequency;
use super::ranking::{Method, Ranking};
use crate::core::CandidateSet;
use std::time::Duration;

/// Default tractability cutoff for the elimination scorer
pub const DEFAULT_ELIMINATION_CUTOFF: usize = 1000;

/// A way of ranking a candidate set
pub trait ScoringStrategy {
    fn method(&self) -> Method;

    /// Rank the candidates
    ///
    /// Returns `Ok(None)` for an empty candidate set.
    ///
    /// # Errors
    /// Returns `ScoringError` if the strategy could not finish.
    fn rank(&self, candidates: &CandidateSet) -> Result<Option<Ranking>, ScoringError>;
}

/// Positional letter-frequency scorer; fast and never fails
#[derive(Debug, Clone, Copy, Default)]
pub struct FrequencyScorer;

impl ScoringStrategy for FrequencyScorer {
    fn method(&self) -> Method {
        Method::Frequency
    }

    fn rank(&self, candidates: &CandidateSet) -> Result<Option<Ranking>, ScoringError> {
        Ok(score_by_frequency(candidates))
    }
}

/// Exhaustive elimination scorer with an optional time budget
#[derive(Debug, Clone, Copy, Default)]
pub struct EliminationScorer {
    pub budget: Option<Duration>,
}

impl EliminationScorer {
    #[must_use]
    pub const fn new(budget: Option<Duration>) -> Self {
        Self { budget }
    }
}

impl ScoringStrategy for EliminationScorer {
    fn method(&self) -> Method {
        Method::Elimination
    }

    fn rank(&self, candidates: &CandidateSet) -> Result<Option<Ranking>, ScoringError> {
        match self.budget {
            Some(budget) => score_by_elimination_within(candidates, budget),
            None => Ok(score_by_elimination(candidates)),
        }
    }
}

/// Enum wrapper for both scorers
///
/// Allows runtime selection of scorer while maintaining static dispatch.
#[derive(Debug, Clone, Copy)]
pub enum Scorer {
    Frequency(FrequencyScorer),
    Elimination(EliminationScorer),
}

impl Scorer {
    /// Scorer implementing `method`; the budget only applies to elimination
    #[must_use]
    pub const fn for_method(method: Method, budget: Option<Duration>) -> Self {
        match method {
            Method::Frequency => Self::Frequency(FrequencyScorer),
            Method::Elimination => Self::Elimination(EliminationScorer::new(budget)),
        }
    }
}

impl ScoringStrategy for Scorer {
    fn method(&self) -> Method {
        match self {
            Self::Frequency(s) => s.method(),
            Self::Elimination(s) => s.method(),
        }
    }

    fn rank(&self, candidates: &CandidateSet) -> Result<Option<Ranking>, ScoringError> {
        match self {
            Self::Frequency(s) => s.rank(candidates),
            Self::Elimination(s) => s.rank(candidates),
        }
    }
}

/// Decides which scoring method to use for a candidate count
pub trait StrategyPolicy {
    fn choose(&self, candidate_count: usize) -> Method;
}

/// Closures work as policies, which keeps tests free of boilerplate
impl<F> StrategyPolicy for F
where
    F: Fn(usize) -> Method,
{
    fn choose(&self, candidate_count: usize) -> Method {
        self(candidate_count)
    }
}

/// Elimination at or below the cutoff, frequency above it
///
/// ```text
/// if candidates <= cutoff → Elimination
/// else                    → Frequency
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdPolicy {
    pub cutoff: usize,
}

impl ThresholdPolicy {
    #[must_use]
    pub const fn new(cutoff: usize) -> Self {
        Self { cutoff }
    }
}

impl Default for ThresholdPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_ELIMINATION_CUTOFF)
    }
}

impl StrategyPolicy for ThresholdPolicy {
    fn choose(&self, candidate_count: usize) -> Method {
        if candidate_count <= self.cutoff {
            Method::Elimination
        } else {
            Method::Frequency
        }
    }
}

/// Always the same method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPolicy(pub Method);

impl StrategyPolicy for FixedPolicy {
    fn choose(&self, _candidate_count: usize) -> Method {
        self.0
    }
}

/// Enum wrapper for the built-in policies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyType {
    /// Size-based choice (default)
    Threshold(ThresholdPolicy),
    /// Forced choice
    Fixed(FixedPolicy),
}

impl PolicyType {
    /// Create a policy from its name
    ///
    /// Supported names: "auto", "frequency", "elimination".
    /// Returns `None` if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str, cutoff: usize) -> Option<Self> {
        match name {
            "auto" | "adaptive" => Some(Self::Threshold(ThresholdPolicy::new(cutoff))),
            "frequency" | "freq" => Some(Self::Fixed(FixedPolicy(Method::Frequency))),
            "elimination" | "exhaustive" => Some(Self::Fixed(FixedPolicy(Method::Elimination))),
            _ => None,
        }
    }
}

impl Default for PolicyType {
    fn default() -> Self {
        Self::Threshold(ThresholdPolicy::default())
    }
}

impl StrategyPolicy for PolicyType {
    fn choose(&self, candidate_count: usize) -> Method {
        match self {
            Self::Threshold(p) => p.choose(candidate_count),
            Self::Fixed(p) => p.choose(candidate_count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn set(texts: &[&str]) -> CandidateSet {
        texts.iter().map(|t| Word::new(t).unwrap()).collect()
    }

    #[test]
    fn threshold_boundary_is_inclusive() {
        let policy = ThresholdPolicy::default();

        assert_eq!(policy.choose(1), Method::Elimination);
        assert_eq!(policy.choose(999), Method::Elimination);
        assert_eq!(policy.choose(1000), Method::Elimination);
        assert_eq!(policy.choose(1001), Method::Frequency);
        assert_eq!(policy.choose(12_972), Method::Frequency);
    }

    #[test]
    fn threshold_custom_cutoff() {
        let policy = ThresholdPolicy::new(10);
        assert_eq!(policy.choose(10), Method::Elimination);
        assert_eq!(policy.choose(11), Method::Frequency);
    }

    #[test]
    fn fixed_policy_ignores_size() {
        let policy = FixedPolicy(Method::Frequency);
        assert_eq!(policy.choose(1), Method::Frequency);
        assert_eq!(policy.choose(1_000_000), Method::Frequency);
    }

    #[test]
    fn closure_policy() {
        let policy = |n: usize| {
            if n % 2 == 0 {
                Method::Frequency
            } else {
                Method::Elimination
            }
        };
        assert_eq!(policy.choose(2), Method::Frequency);
        assert_eq!(policy.choose(3), Method::Elimination);
    }

    #[test]
    fn policy_from_name() {
        assert_eq!(
            PolicyType::from_name("auto", 50),
            Some(PolicyType::Threshold(ThresholdPolicy::new(50)))
        );
        assert_eq!(
            PolicyType::from_name("frequency", 50),
            Some(PolicyType::Fixed(FixedPolicy(Method::Frequency)))
        );
        assert_eq!(
            PolicyType::from_name("elimination", 50),
            Some(PolicyType::Fixed(FixedPolicy(Method::Elimination)))
        );
        assert_eq!(PolicyType::from_name("entropy", 50), None);
    }

    #[test]
    fn scorer_dispatch() {
        let candidates = set(&["crane", "crate", "grate"]);

        let frequency = Scorer::for_method(Method::Frequency, None);
        assert_eq!(frequency.method(), Method::Frequency);
        let ranking = frequency.rank(&candidates).unwrap().unwrap();
        assert_eq!(ranking.method, Method::Frequency);

        let elimination = Scorer::for_method(Method::Elimination, None);
        assert_eq!(elimination.method(), Method::Elimination);
        let ranking = elimination.rank(&candidates).unwrap().unwrap();
        assert_eq!(ranking.method, Method::Elimination);
    }

    #[test]
    fn scorers_return_none_for_empty_set() {
        let empty = set(&[]);
        assert!(FrequencyScorer.rank(&empty).unwrap().is_none());
        assert!(EliminationScorer::default().rank(&empty).unwrap().is_none());
    }

    #[test]
    fn elimination_budget_can_expire() {
        let scorer = EliminationScorer::new(Some(Duration::ZERO));
        assert!(scorer.rank(&set(&["crane", "crate"])).is_err());
    }
}
