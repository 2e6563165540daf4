//! Phases of a single text analysis

use serde::{Deserialize, Serialize};

/// Phase of a controller run, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnalysisPhase {
    /// Web context lookup for the input text
    Context,
    /// Initial team selection and first analyses
    Selection,
    /// One debate round (1-indexed)
    Debate(usize),
    /// Sufficiency check after a debate round
    Gate(usize),
    /// Recruitment of an additional perspective
    Recruit(usize),
    /// Vote aggregation
    Vote,
    /// Human-readable synthesis
    Summary,
}

impl AnalysisPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisPhase::Context => "context",
            AnalysisPhase::Selection => "selection",
            AnalysisPhase::Debate(_) => "debate",
            AnalysisPhase::Gate(_) => "gate",
            AnalysisPhase::Recruit(_) => "recruit",
            AnalysisPhase::Vote => "vote",
            AnalysisPhase::Summary => "summary",
        }
    }

    pub fn display_name(&self) -> String {
        match self {
            AnalysisPhase::Context => "Web Context".to_string(),
            AnalysisPhase::Selection => "Team Selection".to_string(),
            AnalysisPhase::Debate(round) => format!("Round {}: Debate", round),
            AnalysisPhase::Gate(round) => format!("Round {}: Gate", round),
            AnalysisPhase::Recruit(round) => format!("Round {}: Recruit", round),
            AnalysisPhase::Vote => "Vote".to_string(),
            AnalysisPhase::Summary => "Summary".to_string(),
        }
    }
}

impl std::fmt::Display for AnalysisPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
