//! One stateless perspective reasoner

use crate::ports::text_generator::TextGenerator;
use sarcasm_domain::util::preview;
use sarcasm_domain::{AgentResult, Perspective, PerspectivePrompt, parse_agent_output};
use std::sync::Arc;
use tracing::{debug, warn};

/// A perspective bound to its own generator handle.
///
/// `analyze` makes exactly one generation call and never fails; malformed
/// or missing output degrades to a zero-strength result.
#[derive(Clone)]
pub struct PerspectiveAgent {
    perspective: Perspective,
    generator: Arc<dyn TextGenerator>,
}

impl PerspectiveAgent {
    pub fn new(perspective: Perspective, generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            perspective,
            generator,
        }
    }

    pub fn perspective(&self) -> Perspective {
        self.perspective
    }

    /// Score the text from this perspective
    pub async fn analyze(
        &self,
        text: &str,
        web_context: Option<&str>,
        utterance_context: Option<&str>,
    ) -> AgentResult {
        let prompt =
            PerspectivePrompt::analysis(self.perspective, text, web_context, utterance_context);
        let raw = self.generator.complete(&prompt).await;
        let result = parse_agent_output(raw.trim());

        if result.is_parse_failure() {
            warn!(
                agent = %self.perspective,
                "Unparseable analysis output: {}",
                preview(&raw, 120)
            );
        } else {
            debug!(agent = %self.perspective, strength = ?result.strength, "Analysis complete");
        }
        result
    }

    /// Send a free-form prompt (debate re-evaluation) on this agent's own handle
    pub async fn reconsider(&self, prompt: &str) -> String {
        self.generator.complete(prompt).await
    }
}
