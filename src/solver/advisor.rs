//! Main advisor interface

use super::frequency::score_by_frequency;
use super::ranking::{Method, Ranking};
use super::strategy::{PolicyType, Scorer, ScoringStrategy, StrategyPolicy};
use crate::core::{CandidateSet, Word};
use std::time::Duration;

/// What the advisor recommends for the current candidate set
#[derive(Debug, Clone)]
pub enum Advice {
    /// Ranked candidates with a recommended guess
    Suggest(Ranking),
    /// No known word fits the feedback so far
    NoSuggestion,
}

impl Advice {
    /// The recommended guess, if any
    #[must_use]
    pub const fn best(&self) -> Option<&Word> {
        match self {
            Self::Suggest(ranking) => Some(&ranking.best),
            Self::NoSuggestion => None,
        }
    }

    #[must_use]
    pub const fn ranking(&self) -> Option<&Ranking> {
        match self {
            Self::Suggest(ranking) => Some(ranking),
            Self::NoSuggestion => None,
        }
    }
}

/// Main Wordle advisor
///
/// Picks a scoring method for the candidate count through its policy and
/// ranks the candidates with it.
#[derive(Debug, Clone, Default)]
pub struct Advisor<P: StrategyPolicy = PolicyType> {
    policy: P,
    budget: Option<Duration>,
}

impl<P: StrategyPolicy> Advisor<P> {
    /// Create a new advisor with the given policy
    pub const fn new(policy: P) -> Self {
        Self {
            policy,
            budget: None,
        }
    }

    /// Limit the elimination scorer to `budget`
    ///
    /// When the budget runs out the advisor falls back to frequency scoring.
    #[must_use]
    pub fn with_budget(mut self, budget: Option<Duration>) -> Self {
        self.budget = budget;
        self
    }

    #[must_use]
    pub const fn policy(&self) -> &P {
        &self.policy
    }

    /// Scoring method the policy picks for `candidate_count` candidates
    #[must_use]
    pub fn method_for(&self, candidate_count: usize) -> Method {
        self.policy.choose(candidate_count)
    }

    /// Rank the candidates and recommend a guess
    ///
    /// Returns `Advice::NoSuggestion` if the candidate set is empty.
    #[must_use]
    pub fn advise(&self, candidates: &CandidateSet) -> Advice {
        if candidates.is_empty() {
            tracing::info!("no candidates remain");
            return Advice::NoSuggestion;
        }

        let method = self.method_for(candidates.len());
        tracing::debug!(candidates = candidates.len(), %method, "scoring candidates");

        let ranking = match Scorer::for_method(method, self.budget).rank(candidates) {
            Ok(ranking) => ranking,
            Err(error) => {
                tracing::warn!(%error, "falling back to frequency scoring");
                score_by_frequency(candidates)
            }
        };

        ranking.map_or(Advice::NoSuggestion, Advice::Suggest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::strategy::{FixedPolicy, ThresholdPolicy};

    fn set(texts: &[&str]) -> CandidateSet {
        texts.iter().map(|t| Word::new(t).unwrap()).collect()
    }

    #[test]
    fn empty_set_gives_no_suggestion() {
        let advisor = Advisor::<PolicyType>::default();
        let advice = advisor.advise(&set(&[]));
        assert!(matches!(advice, Advice::NoSuggestion));
        assert!(advice.best().is_none());
    }

    #[test]
    fn single_candidate_is_suggested() {
        let advisor = Advisor::<PolicyType>::default();
        let advice = advisor.advise(&set(&["apple"]));
        assert_eq!(advice.best().unwrap().text(), "apple");
    }

    #[test]
    fn policy_selects_method() {
        let candidates = set(&["crane", "crate", "grate", "irate"]);

        let small_cutoff = Advisor::new(ThresholdPolicy::new(3));
        let ranking = small_cutoff.advise(&candidates).ranking().cloned().unwrap();
        assert_eq!(ranking.method, Method::Frequency);

        let large_cutoff = Advisor::new(ThresholdPolicy::new(4));
        let ranking = large_cutoff.advise(&candidates).ranking().cloned().unwrap();
        assert_eq!(ranking.method, Method::Elimination);
    }

    #[test]
    fn cutoff_is_inclusive_when_advising() {
        let advisor = Advisor::new(ThresholdPolicy::new(3));

        let at_cutoff = advisor.advise(&set(&["crane", "crate", "grate"]));
        assert_eq!(at_cutoff.ranking().unwrap().method, Method::Elimination);

        let above_cutoff = advisor.advise(&set(&["crane", "crate", "grate", "irate"]));
        assert_eq!(above_cutoff.ranking().unwrap().method, Method::Frequency);
    }

    #[test]
    fn injected_policy_is_consulted() {
        let advisor = Advisor::new(|_: usize| Method::Frequency);
        assert_eq!(advisor.method_for(3), Method::Frequency);

        let forced = Advisor::new(FixedPolicy(Method::Elimination));
        assert_eq!(forced.method_for(50_000), Method::Elimination);
    }

    #[test]
    fn expired_budget_falls_back_to_frequency() {
        let advisor =
            Advisor::new(FixedPolicy(Method::Elimination)).with_budget(Some(Duration::ZERO));
        let advice = advisor.advise(&set(&["crane", "crate", "grate"]));
        let ranking = advice.ranking().unwrap();
        assert_eq!(ranking.method, Method::Frequency);
    }
}
