//! Advisor configuration
//!
//! Collects the tunable knobs of the scoring engine and builds an `Advisor`.

use crate::solver::{Advisor, PolicyType};
use std::time::Duration;
use thiserror::Error;

/// Error type for invalid configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Unknown strategy '{0}' (expected auto, frequency or elimination)")]
    UnknownStrategy(String),
}

/// Scoring engine settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdvisorConfig {
    pub policy: PolicyType,
    /// Time budget for the elimination scorer; frequency is used when it runs out
    pub budget: Option<Duration>,
}

impl AdvisorConfig {
    /// Build a configuration from a strategy name, cutoff and optional deadline
    ///
    /// # Errors
    /// Returns `ConfigError::UnknownStrategy` if the strategy name is not recognized.
    pub fn new(
        strategy: &str,
        cutoff: usize,
        deadline_ms: Option<u64>,
    ) -> Result<Self, ConfigError> {
        let policy = PolicyType::from_name(strategy, cutoff)
            .ok_or_else(|| ConfigError::UnknownStrategy(strategy.to_string()))?;
        Ok(Self {
            policy,
            budget: deadline_ms.map(Duration::from_millis),
        })
    }

    #[must_use]
    pub fn advisor(&self) -> Advisor<PolicyType> {
        Advisor::new(self.policy).with_budget(self.budget)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{DEFAULT_ELIMINATION_CUTOFF, FixedPolicy, Method, ThresholdPolicy};

    #[test]
    fn default_uses_threshold_policy() {
        let config = AdvisorConfig::default();
        assert_eq!(
            config.policy,
            PolicyType::Threshold(ThresholdPolicy::new(DEFAULT_ELIMINATION_CUTOFF))
        );
        assert_eq!(config.budget, None);
    }

    #[test]
    fn builds_from_names() {
        let config = AdvisorConfig::new("frequency", 10, Some(250)).unwrap();
        assert_eq!(
            config.policy,
            PolicyType::Fixed(FixedPolicy(Method::Frequency))
        );
        assert_eq!(config.budget, Some(Duration::from_millis(250)));

        let advisor = AdvisorConfig::new("auto", 10, None).unwrap().advisor();
        assert_eq!(advisor.method_for(10), Method::Elimination);
        assert_eq!(advisor.method_for(11), Method::Frequency);
    }

    #[test]
    fn rejects_unknown_strategy() {
        assert_eq!(
            AdvisorConfig::new("entropy", 10, None),
            Err(ConfigError::UnknownStrategy("entropy".to_string()))
        );
    }
}
