//! Structured configuration issues.
//!
//! Loaders collect every problem they find instead of failing on the first
//! one, so the CLI can print warnings and refuse to start only on errors.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// An `[agents]` key does not name a known perspective.
    UnknownAgent,
    /// The configured agent list is empty.
    EmptyCatalog,
    /// `n_initial` is zero.
    NoInitialAgents,
    /// `n_initial` exceeds the number of cataloged perspectives.
    InitialTeamTooLarge,
    /// `vote_threshold` lies outside `[0, 1]`.
    ThresholdOutOfRange,
    /// `max_rounds` is zero, so no debate or recruitment happens.
    NoRounds,
    /// `batch.workers` is zero.
    NoWorkers,
    /// `retry.max_attempts` is zero.
    NoAttempts,
    /// No API credential is configured.
    MissingCredential,
}

/// A detected issue in the configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    /// Whether any issue in the list is fatal
    pub fn has_errors(issues: &[ConfigIssue]) -> bool {
        issues.iter().any(|i| i.severity == Severity::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_errors_returns_true_for_errors() {
        let issues = vec![
            ConfigIssue::warning(ConfigIssueCode::NoRounds, "no rounds"),
            ConfigIssue::error(ConfigIssueCode::NoWorkers, "no workers"),
        ];
        assert!(ConfigIssue::has_errors(&issues));
    }

    #[test]
    fn has_errors_returns_false_for_warnings_only() {
        let issues = vec![ConfigIssue::warning(ConfigIssueCode::NoRounds, "no rounds")];
        assert!(!ConfigIssue::has_errors(&issues));
        assert!(!ConfigIssue::has_errors(&[]));
    }
}
