//! Terminal analysis result types

use super::result::AgentOutputs;
use crate::perspective::Perspective;
use serde::{Deserialize, Serialize};

/// Binary classification decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Sarcastic,
    NotSarcastic,
}

impl Verdict {
    pub fn is_sarcastic(&self) -> bool {
        matches!(self, Verdict::Sarcastic)
    }

    /// Numeric label used for evaluation (1 = sarcastic)
    pub fn label(&self) -> i32 {
        match self {
            Verdict::Sarcastic => 1,
            Verdict::NotSarcastic => 0,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Sarcastic => write!(f, "SARCASTIC"),
            Verdict::NotSarcastic => write!(f, "NOT SARCASTIC"),
        }
    }
}

/// Result of analyzing one text
///
/// `outputs` holds only the scored entries that were fed to the voter;
/// `activated_agents` lists every perspective that ran, in activation order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub text: String,
    pub decision: Verdict,
    pub reasoning: String,
    pub summary: String,
    pub outputs: AgentOutputs,
    pub activated_agents: Vec<Perspective>,
    pub rounds_completed: usize,
}
