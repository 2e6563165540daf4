//! Reinforcement gate: does the team need another perspective?

use crate::ports::text_generator::TextGenerator;
use sarcasm_domain::util::preview;
use sarcasm_domain::{CouncilPrompt, GatePolicy, Perspective, try_parse_decision};
use std::sync::Arc;
use tracing::{info, warn};

pub struct ReinforcementGate {
    generator: Arc<dyn TextGenerator>,
    policy: GatePolicy,
}

impl ReinforcementGate {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator,
            policy: GatePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: GatePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// `true` when the post-debate conclusions are judged insufficient.
    ///
    /// An unreadable answer resolves through the configured [`GatePolicy`].
    pub async fn needs_reinforcement(
        &self,
        text: &str,
        explanations: &[(Perspective, String)],
        utterance_context: Option<&str>,
    ) -> bool {
        let prompt = CouncilPrompt::reinforcement_gate(text, explanations, utterance_context);
        let raw = self.generator.complete(&prompt).await;

        match try_parse_decision(&raw) {
            Some(decision) => {
                info!(needs_reinforcement = decision, "Gate decision");
                decision
            }
            None => {
                let fallback = self.policy.fallback();
                warn!(
                    fallback,
                    "Unreadable gate decision, applying default: {}",
                    preview(&raw, 80)
                );
                fallback
            }
        }
    }
}
