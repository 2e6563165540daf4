//! Output format value object

use serde::{Deserialize, Serialize};

/// How an analysis result is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Decision, reasoning, summary and every perspective's score
    Full,
    /// Only the decision line (default)
    #[default]
    Decision,
    /// JSON output
    Json,
}
