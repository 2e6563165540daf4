//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod agents;
mod analysis;
mod batch;
mod output;
mod provider;
mod retry;
mod web_search;

pub use agents::FileAgentsConfig;
pub use analysis::FileAnalysisConfig;
pub use batch::FileBatchConfig;
pub use output::FileOutputConfig;
pub use provider::FileProviderConfig;
pub use retry::FileRetryConfig;
pub use web_search::FileWebSearchConfig;

use sarcasm_domain::{AgentCatalog, ConfigIssue, ConfigIssueCode, DomainError};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Controller loop settings
    pub analysis: FileAnalysisConfig,
    /// Chat completion endpoint and credentials
    pub provider: FileProviderConfig,
    /// Retry policy for every generation call
    pub retry: FileRetryConfig,
    /// Web context enrichment
    pub web_search: FileWebSearchConfig,
    /// Batch harness settings
    pub batch: FileBatchConfig,
    /// Perspective catalog
    pub agents: FileAgentsConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Credentials are not checked here since they may come from the
    /// environment; see [`FileConfig::credential_issue`].
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let (catalog, mut issues) = self.agents.to_catalog();

        let analysis = &self.analysis;
        if analysis.n_initial == 0 {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::NoInitialAgents,
                "analysis.n_initial is 0: no perspective will run and every text is NOT SARCASTIC",
            ));
        }
        if let Ok(catalog) = &catalog
            && analysis.n_initial > catalog.len()
        {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::InitialTeamTooLarge,
                format!(
                    "analysis.n_initial ({}) exceeds the {} enabled perspectives, using {}",
                    analysis.n_initial,
                    catalog.len(),
                    catalog.len()
                ),
            ));
        }
        if !(0.0..=1.0).contains(&analysis.vote_threshold) {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ThresholdOutOfRange,
                format!(
                    "analysis.vote_threshold must be within [0, 1], got {}",
                    analysis.vote_threshold
                ),
            ));
        }
        if analysis.max_rounds == 0 {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::NoRounds,
                "analysis.max_rounds is 0: the initial team votes without debate",
            ));
        }
        if self.batch.workers == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::NoWorkers,
                "batch.workers must be at least 1",
            ));
        }
        if self.retry.max_attempts == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::NoAttempts,
                "retry.max_attempts must be at least 1",
            ));
        }

        issues
    }

    /// Issue reported when no API key can be resolved
    pub fn credential_issue(&self) -> Option<ConfigIssue> {
        if self.provider.resolve_api_keys().is_empty() {
            Some(ConfigIssue::error(
                ConfigIssueCode::MissingCredential,
                format!(
                    "No API key configured: set provider.api_keys or the {} environment variable",
                    self.provider.api_key_env
                ),
            ))
        } else {
            None
        }
    }

    /// The perspective catalog described by `[agents]`
    pub fn catalog(&self) -> Result<AgentCatalog, DomainError> {
        self.agents.to_catalog().0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sarcasm_domain::{OutputFormat, Severity};

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[analysis]
n_initial = 2
max_rounds = 4
vote_threshold = 0.6

[provider]
base_url = "http://localhost:8000"
model = "local-model"
api_keys = ["k1", "k2"]

[retry]
max_attempts = 5
backoff_secs = 1

[web_search]
enabled = false

[batch]
workers = 8
record_timeout_secs = 30

[agents]
enabled = ["RhetoricalDeviceAgent", "PersonaConflictAgent", "PragmaticContrastAgent"]

[output]
format = "full"
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.analysis.n_initial, 2);
        assert_eq!(config.analysis.max_rounds, 4);
        assert_eq!(config.provider.model, "local-model");
        assert_eq!(config.provider.resolve_api_keys(), vec!["k1", "k2"]);
        assert_eq!(config.retry.to_policy().max_attempts, 5);
        assert!(!config.web_search.enabled);
        assert_eq!(config.batch.to_params().workers, 8);
        assert_eq!(config.catalog().unwrap().len(), 3);
        assert_eq!(config.output.format, Some(OutputFormat::Full));
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[batch]
workers = 4
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.batch.workers, 4);
        // Defaults should apply
        assert_eq!(config.batch.record_timeout_secs, 120);
        assert_eq!(config.analysis.n_initial, 3);
        assert!(config.web_search.enabled);
        assert_eq!(config.web_search.max_snippets, 3);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_reports_every_problem() {
        let toml_str = r#"
[analysis]
n_initial = 4
vote_threshold = 1.5
max_rounds = 0

[batch]
workers = 0

[agents]
enabled = ["RhetoricalDeviceAgent", "PersonaConflictAgent", "SarcasmAgent"]
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let issues = config.validate();
        let codes: Vec<ConfigIssueCode> = issues.iter().map(|i| i.code).collect();

        assert!(codes.contains(&ConfigIssueCode::UnknownAgent));
        assert!(codes.contains(&ConfigIssueCode::InitialTeamTooLarge));
        assert!(codes.contains(&ConfigIssueCode::ThresholdOutOfRange));
        assert!(codes.contains(&ConfigIssueCode::NoRounds));
        assert!(codes.contains(&ConfigIssueCode::NoWorkers));
        assert!(ConfigIssue::has_errors(&issues));

        let too_large = issues
            .iter()
            .find(|i| i.code == ConfigIssueCode::InitialTeamTooLarge)
            .unwrap();
        assert_eq!(too_large.severity, Severity::Warning);
    }

    #[test]
    fn test_credential_issue() {
        let mut config = FileConfig::default();
        config.provider.api_key_env = "SARCASM_TEST_NO_SUCH_VAR".to_string();
        let issue = config.credential_issue().unwrap();
        assert_eq!(issue.code, ConfigIssueCode::MissingCredential);
        assert!(issue.message.contains("SARCASM_TEST_NO_SUCH_VAR"));

        config.provider.api_keys = vec!["sk-test".to_string()];
        assert!(config.credential_issue().is_none());
    }
}
