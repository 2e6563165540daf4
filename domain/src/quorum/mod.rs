//! Council decision rules
//!
//! Everything the controller needs to turn raw generator text into decisions:
//!
//! - [`parsing`]: total recovery functions for perspective results and
//!   meta-query answers (gate, selector, recruiter, summarizer)
//! - [`vote`]: the deterministic majority rule over final scores
//!
//! ```text
//! raw text ──▶ parse_agent_output ──▶ AgentResult ──┐
//!                                                   ├──▶ MajorityVoter ──▶ Verdict
//! raw text ──▶ parse_revision (debate) ─────────────┘
//! ```

pub mod parsing;
pub mod vote;

pub use parsing::{
    parse_agent_list, parse_agent_name, parse_agent_output, parse_decision, parse_revision,
    parse_summary, try_parse_decision,
};
pub use vote::{MajorityVoter, NO_VALID_OUTPUTS, VoteOutcome};
