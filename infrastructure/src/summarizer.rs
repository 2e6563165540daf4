//! Generator-backed summarizer

use async_trait::async_trait;
use sarcasm_application::ports::summarizer::Summarizer;
use sarcasm_application::ports::text_generator::TextGenerator;
use sarcasm_domain::quorum::parsing::NO_SUMMARY;
use sarcasm_domain::{AgentOutputs, CouncilPrompt, parse_summary};
use std::sync::Arc;
use tracing::debug;

/// Asks the generator for a structured synthesis of the final outputs.
///
/// With no outputs there is nothing to synthesize and no call is made.
pub struct LlmSummarizer {
    generator: Arc<dyn TextGenerator>,
}

impl LlmSummarizer {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }
}

#[async_trait]
impl Summarizer for LlmSummarizer {
    async fn summarize(&self, outputs: &AgentOutputs, text: &str) -> String {
        if outputs.is_empty() {
            return NO_SUMMARY.to_string();
        }
        let raw = self
            .generator
            .complete(&CouncilPrompt::summary(outputs, text))
            .await;
        debug!(bytes = raw.len(), "Summary response");
        parse_summary(&raw)
    }
}
