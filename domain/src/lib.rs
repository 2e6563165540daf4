//! Domain layer for sarcasm-council
//!
//! Pure types and rules with no I/O: perspectives, per-agent results,
//! output recovery, voting, prompts and evaluation metrics.
//!
//! # Core Concepts
//!
//! ## Perspectives
//!
//! Six independent reasoners each score one dimension of sarcasm
//! (semantic incongruity, pragmatic contrast, rhetorical devices, emotion
//! polarity, commonsense violation, persona conflict) with a strength in
//! `[0, 1]` and an explanation.
//!
//! ## Council
//!
//! A controller activates a few perspectives, lets the most uncertain one
//! revise after reading its peers, recruits more when the debate is stuck,
//! and finally takes a strict majority vote over the scores.

pub mod analysis;
pub mod config;
pub mod core;
pub mod evaluation;
pub mod perspective;
pub mod prompt;
pub mod quorum;
pub mod util;

// Re-export commonly used types
pub use analysis::{
    AgentOutputs, AgentResult, AnalysisPhase, AnalysisResult, PARSE_FAILURE_MARKER, RoundState,
    Verdict,
};
pub use config::{ConfigIssue, ConfigIssueCode, GatePolicy, OutputFormat, Severity};
pub use core::error::DomainError;
pub use evaluation::{ClassificationMetrics, ConfusionMatrix};
pub use perspective::{AgentCatalog, CatalogEntry, Perspective};
pub use prompt::{CouncilPrompt, PerspectivePrompt, WebPrompt};

// Re-export quorum types
pub use quorum::{
    MajorityVoter, NO_VALID_OUTPUTS, VoteOutcome, parse_agent_list, parse_agent_name,
    parse_agent_output, parse_decision, parse_revision, parse_summary, try_parse_decision,
};
