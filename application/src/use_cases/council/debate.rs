//! One debate round: the most uncertain agent re-evaluates after reading its peers

use crate::agents::AgentRoster;
use sarcasm_domain::util::preview;
use sarcasm_domain::{AgentOutputs, CouncilPrompt, Perspective, parse_revision};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// What a debate round did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebateOutcome {
    /// Fewer than two active perspectives; nothing to debate.
    Skipped,
    /// The focus agent's entry was overwritten with its revision.
    Revised(Perspective),
    /// The focus agent's response was unusable; its entry is untouched.
    Unchanged(Perspective),
}

/// The active perspective whose strength is closest to 0.5.
///
/// Missing strength counts as 0.5. Ties go to the earliest activated.
pub fn focus_agent(outputs: &AgentOutputs) -> Option<Perspective> {
    outputs
        .iter()
        .map(|(p, r)| (p, (r.strength.unwrap_or(0.5) - 0.5).abs()))
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(p, _)| p)
}

/// Runs debate rounds on the roster's agents
pub struct DebateEngine {
    roster: Arc<AgentRoster>,
}

impl DebateEngine {
    pub fn new(roster: Arc<AgentRoster>) -> Self {
        Self { roster }
    }

    /// Run one round, possibly overwriting a single entry of `outputs`.
    ///
    /// The re-evaluation goes to the focus agent's own generator. Only a
    /// response that starts with `{` and decodes strictly is accepted.
    pub async fn run_round(
        &self,
        text: &str,
        outputs: &mut AgentOutputs,
        web_context: &str,
        utterance_context: Option<&str>,
    ) -> DebateOutcome {
        if outputs.len() < 2 {
            debug!("Debate skipped: {} active agent(s)", outputs.len());
            return DebateOutcome::Skipped;
        }
        let Some(focus) = focus_agent(outputs) else {
            return DebateOutcome::Skipped;
        };
        let (Some(agent), Some(current)) = (self.roster.get(focus), outputs.get(focus)) else {
            warn!(agent = %focus, "Focus agent missing from roster");
            return DebateOutcome::Unchanged(focus);
        };

        info!(agent = %focus, "Debate focus: re-evaluating");
        let evidence = CouncilPrompt::evidence_report(outputs);
        let prompt =
            CouncilPrompt::debate(focus, current, &evidence, text, web_context, utterance_context);
        let raw = agent.reconsider(&prompt).await;

        match parse_revision(&raw) {
            Some(revised) => {
                debug!(agent = %focus, strength = ?revised.strength, "Debate revision accepted");
                outputs.insert(focus, revised);
                DebateOutcome::Revised(focus)
            }
            None => {
                warn!(
                    agent = %focus,
                    "Invalid debate response, keeping previous result: {}",
                    preview(&raw, 80)
                );
                DebateOutcome::Unchanged(focus)
            }
        }
    }
}
