//! Rule-based vote aggregation over final perspective scores

use crate::analysis::{AgentOutputs, Verdict};
use serde::{Deserialize, Serialize};

/// Reasoning emitted when no scored output reached the voter
pub const NO_VALID_OUTPUTS: &str = "No valid agent outputs to analyze.";

/// Outcome of a vote, including the tally behind it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoteOutcome {
    pub decision: Verdict,
    pub reasoning: String,
    pub sarcastic_votes: usize,
    pub literal_votes: usize,
}

impl VoteOutcome {
    pub fn total_votes(&self) -> usize {
        self.sarcastic_votes + self.literal_votes
    }

    /// Generate a visual vote summary (e.g., "[●●○]")
    pub fn vote_summary(&self) -> String {
        let mut summary = String::from("[");
        summary.extend(std::iter::repeat_n('●', self.sarcastic_votes));
        summary.extend(std::iter::repeat_n('○', self.literal_votes));
        summary.push(']');
        summary
    }
}

/// Deterministic majority voter
///
/// Each scored perspective casts one vote: sarcastic when its strength is
/// strictly above the threshold, literal otherwise. The text is SARCASTIC
/// only when sarcastic votes strictly outnumber literal ones, so ties go to
/// NOT SARCASTIC.
///
/// # Example
///
/// ```
/// use sarcasm_domain::analysis::{AgentOutputs, AgentResult, Verdict};
/// use sarcasm_domain::perspective::Perspective;
/// use sarcasm_domain::quorum::MajorityVoter;
///
/// let outputs: AgentOutputs = [
///     (Perspective::RhetoricalDevice, AgentResult::new(0.9, "hyperbole")),
///     (Perspective::PersonaConflict, AgentResult::new(0.7, "odd persona")),
///     (Perspective::CommonSenseViolation, AgentResult::new(0.2, "plausible")),
/// ]
/// .into_iter()
/// .collect();
///
/// let outcome = MajorityVoter::default().decide(&outputs);
/// assert_eq!(outcome.decision, Verdict::Sarcastic);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MajorityVoter {
    threshold: f64,
}

impl Default for MajorityVoter {
    fn default() -> Self {
        Self {
            threshold: Self::DEFAULT_THRESHOLD,
        }
    }
}

impl MajorityVoter {
    pub const DEFAULT_THRESHOLD: f64 = 0.5;

    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Aggregate the final outputs into a decision. Unscored entries are ignored.
    pub fn decide(&self, outputs: &AgentOutputs) -> VoteOutcome {
        let strengths: Vec<f64> = outputs.iter().filter_map(|(_, r)| r.strength).collect();

        if strengths.is_empty() {
            return VoteOutcome {
                decision: Verdict::NotSarcastic,
                reasoning: NO_VALID_OUTPUTS.to_string(),
                sarcastic_votes: 0,
                literal_votes: 0,
            };
        }

        let sarcastic_votes = strengths.iter().filter(|s| **s > self.threshold).count();
        let literal_votes = strengths.len() - sarcastic_votes;

        let decision = if sarcastic_votes > literal_votes {
            Verdict::Sarcastic
        } else {
            Verdict::NotSarcastic
        };

        VoteOutcome {
            decision,
            reasoning: format!(
                "Rule-based decision: SARCASTIC votes ({}) vs. NOT SARCASTIC votes ({}).",
                sarcastic_votes, literal_votes
            ),
            sarcastic_votes,
            literal_votes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::AgentResult;
    use crate::perspective::Perspective;

    fn outputs(strengths: &[Option<f64>]) -> AgentOutputs {
        Perspective::ALL
            .into_iter()
            .zip(strengths)
            .map(|(p, s)| {
                let result = match s {
                    Some(v) => AgentResult::new(*v, "x"),
                    None => AgentResult::unscored("x"),
                };
                (p, result)
            })
            .collect()
    }

    #[test]
    fn test_tie_is_not_sarcastic() {
        let outcome = MajorityVoter::default()
            .decide(&outputs(&[Some(0.8), Some(0.9), Some(0.1), Some(0.2)]));

        assert_eq!(outcome.decision, Verdict::NotSarcastic);
        assert_eq!(
            outcome.reasoning,
            "Rule-based decision: SARCASTIC votes (2) vs. NOT SARCASTIC votes (2)."
        );
    }

    #[test]
    fn test_three_to_one_is_sarcastic() {
        let outcome = MajorityVoter::default()
            .decide(&outputs(&[Some(0.8), Some(0.9), Some(0.6), Some(0.1)]));

        assert_eq!(outcome.decision, Verdict::Sarcastic);
        assert_eq!(outcome.sarcastic_votes, 3);
        assert_eq!(outcome.literal_votes, 1);
        assert_eq!(outcome.vote_summary(), "[●●●○]");
    }

    #[test]
    fn test_empty_outputs() {
        let outcome = MajorityVoter::default().decide(&AgentOutputs::new());
        assert_eq!(outcome.decision, Verdict::NotSarcastic);
        assert_eq!(outcome.reasoning, NO_VALID_OUTPUTS);
        assert_eq!(outcome.total_votes(), 0);
    }

    #[test]
    fn test_unscored_entries_are_ignored() {
        let outcome = MajorityVoter::default().decide(&outputs(&[None, Some(0.9), None]));
        assert_eq!(outcome.decision, Verdict::Sarcastic);
        assert_eq!(outcome.total_votes(), 1);

        let outcome = MajorityVoter::default().decide(&outputs(&[None, None]));
        assert_eq!(outcome.reasoning, NO_VALID_OUTPUTS);
    }

    #[test]
    fn test_threshold_is_strict() {
        let outcome = MajorityVoter::default().decide(&outputs(&[Some(0.5)]));
        assert_eq!(outcome.decision, Verdict::NotSarcastic);

        let outcome = MajorityVoter::new(0.3).decide(&outputs(&[Some(0.4)]));
        assert_eq!(outcome.decision, Verdict::Sarcastic);
    }

    #[test]
    fn test_parse_failure_counts_as_literal_vote() {
        let mut outs = outputs(&[Some(0.9)]);
        outs.insert(
            Perspective::PersonaConflict,
            AgentResult::parse_failure("No JSON braces found", "ERROR"),
        );
        let outcome = MajorityVoter::default().decide(&outs);
        assert_eq!(outcome.literal_votes, 1);
        assert_eq!(outcome.decision, Verdict::NotSarcastic);
    }
}
