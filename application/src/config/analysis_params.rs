//! Analysis parameters for the controller loop
//!
//! [`AnalysisParams`] groups the static parameters that control one
//! [`AnalyzeTextUseCase`](crate::use_cases::analyze_text::AnalyzeTextUseCase) run.

use sarcasm_domain::{GatePolicy, MajorityVoter};
use serde::{Deserialize, Serialize};

/// Controller loop control parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisParams {
    /// Perspectives activated before the first debate round.
    pub n_initial: usize,
    /// Upper bound on debate / gate / recruit iterations.
    pub max_rounds: usize,
    /// A perspective votes sarcastic when its strength is strictly above this.
    pub vote_threshold: f64,
    /// Reinforcement decision when the gate answer is unreadable.
    pub gate_policy: GatePolicy,
}

impl Default for AnalysisParams {
    fn default() -> Self {
        Self {
            n_initial: 3,
            max_rounds: 3,
            vote_threshold: MajorityVoter::DEFAULT_THRESHOLD,
            gate_policy: GatePolicy::default(),
        }
    }
}

impl AnalysisParams {
    // ==================== Builder Methods ====================

    pub fn with_n_initial(mut self, n: usize) -> Self {
        self.n_initial = n;
        self
    }

    pub fn with_max_rounds(mut self, rounds: usize) -> Self {
        self.max_rounds = rounds;
        self
    }

    pub fn with_vote_threshold(mut self, threshold: f64) -> Self {
        self.vote_threshold = threshold;
        self
    }

    pub fn with_gate_policy(mut self, policy: GatePolicy) -> Self {
        self.gate_policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let params = AnalysisParams::default();
        assert_eq!(params.n_initial, 3);
        assert_eq!(params.max_rounds, 3);
        assert_eq!(params.vote_threshold, 0.5);
        assert_eq!(params.gate_policy, GatePolicy::StopWhenUnclear);
    }

    #[test]
    fn test_builder() {
        let params = AnalysisParams::default()
            .with_n_initial(2)
            .with_max_rounds(0)
            .with_vote_threshold(0.7)
            .with_gate_policy(GatePolicy::ContinueWhenUnclear);

        assert_eq!(params.n_initial, 2);
        assert_eq!(params.max_rounds, 0);
        assert_eq!(params.vote_threshold, 0.7);
        assert!(params.gate_policy.fallback());
    }
}
