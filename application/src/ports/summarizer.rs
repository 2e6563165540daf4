//! Summarizer port

use async_trait::async_trait;
use sarcasm_domain::AgentOutputs;
use sarcasm_domain::quorum::parsing::NO_SUMMARY;

/// Produces a human-readable synthesis of the final perspective outputs
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, outputs: &AgentOutputs, text: &str) -> String;
}

/// Summarizer that always reports no summary
pub struct NoSummary;

#[async_trait]
impl Summarizer for NoSummary {
    async fn summarize(&self, _outputs: &AgentOutputs, _text: &str) -> String {
        NO_SUMMARY.to_string()
    }
}
