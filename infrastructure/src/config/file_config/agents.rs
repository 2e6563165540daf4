//! Perspective catalog configuration from TOML (`[agents]` section)
//!
//! ```toml
//! [agents]
//! enabled = ["RhetoricalDeviceAgent", "PersonaConflictAgent"]
//!
//! [agents.descriptions]
//! PersonaConflictAgent = "Checks whether the speaker's self-image clashes with the claim."
//! ```

use sarcasm_domain::{AgentCatalog, ConfigIssue, ConfigIssueCode, DomainError, Perspective};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAgentsConfig {
    /// Perspectives available to the controller; empty means all of them
    pub enabled: Vec<String>,
    /// Identifier → description shown to the selector and recruiter
    pub descriptions: BTreeMap<String, String>,
}

impl FileAgentsConfig {
    /// Build the catalog, skipping unknown names. Returns the issues found.
    pub fn to_catalog(&self) -> (Result<AgentCatalog, DomainError>, Vec<ConfigIssue>) {
        let mut issues = Vec::new();

        let catalog = if self.enabled.is_empty() {
            Ok(AgentCatalog::default())
        } else {
            let known = self.enabled.iter().filter_map(|name| match name.parse::<Perspective>() {
                Ok(p) => Some(p),
                Err(_) => {
                    issues.push(unknown_agent("agents.enabled", name));
                    None
                }
            });
            let known: Vec<Perspective> = known.collect();
            AgentCatalog::from_perspectives(known)
        };

        if catalog.is_err() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::EmptyCatalog,
                "agents.enabled: no known perspective is enabled",
            ));
        }

        let catalog = catalog.map(|mut catalog| {
            for (name, description) in &self.descriptions {
                match catalog.resolve(name) {
                    Some(p) => catalog = catalog.with_description(p, description.clone()),
                    None => issues.push(unknown_agent("agents.descriptions", name)),
                }
            }
            catalog
        });

        (catalog, issues)
    }
}

fn unknown_agent(field: &str, name: &str) -> ConfigIssue {
    ConfigIssue::warning(
        ConfigIssueCode::UnknownAgent,
        format!("{}: '{}' is not an enabled perspective, ignoring it", field, name),
    )
}
