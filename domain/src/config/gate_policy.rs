//! What the reinforcement gate does when its answer is unreadable

use serde::{Deserialize, Serialize};

/// Default applied when the gate's response cannot be parsed
///
/// A readable "yes"/"no" always wins; the policy only covers transport
/// failures and malformed answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GatePolicy {
    /// Treat an unreadable answer as "team is sufficient" and stop (default)
    #[default]
    StopWhenUnclear,
    /// Treat an unreadable answer as "needs reinforcement" and keep recruiting
    ContinueWhenUnclear,
}

impl GatePolicy {
    /// Reinforcement decision to use when the gate answer is unreadable
    pub fn fallback(&self) -> bool {
        matches!(self, GatePolicy::ContinueWhenUnclear)
    }
}
