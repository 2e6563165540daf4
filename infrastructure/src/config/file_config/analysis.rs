//! Controller configuration from TOML (`[analysis]` section)

use sarcasm_application::AnalysisParams;
use sarcasm_domain::GatePolicy;
use serde::{Deserialize, Serialize};

/// Raw controller configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAnalysisConfig {
    /// Size of the initial team
    pub n_initial: usize,
    /// Upper bound on debate/gate/recruit rounds
    pub max_rounds: usize,
    /// Strength a vote must exceed to count as sarcastic
    pub vote_threshold: f64,
    /// What an unreadable gate answer means
    pub gate_default: GatePolicy,
}

impl Default for FileAnalysisConfig {
    fn default() -> Self {
        let params = AnalysisParams::default();
        Self {
            n_initial: params.n_initial,
            max_rounds: params.max_rounds,
            vote_threshold: params.vote_threshold,
            gate_default: params.gate_policy,
        }
    }
}

impl FileAnalysisConfig {
    pub fn to_params(&self) -> AnalysisParams {
        AnalysisParams::default()
            .with_n_initial(self.n_initial)
            .with_max_rounds(self.max_rounds)
            .with_vote_threshold(self.vote_threshold)
            .with_gate_policy(self.gate_default)
    }
}
