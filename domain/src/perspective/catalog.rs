//! Agent catalog: the configured, ordered set of available perspectives

use super::kind::Perspective;
use crate::core::error::DomainError;

/// One catalog entry: a perspective plus the description used in meta-queries
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub perspective: Perspective,
    pub description: String,
}

/// Ordered catalog of perspectives available to a controller
///
/// Entries are unique. The order is the order used when listing options to
/// the selector and when computing the inactive candidate pool.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentCatalog {
    entries: Vec<CatalogEntry>,
}

impl Default for AgentCatalog {
    /// All perspectives with their built-in descriptions
    fn default() -> Self {
        Self {
            entries: Perspective::ALL
                .into_iter()
                .map(|perspective| CatalogEntry {
                    perspective,
                    description: perspective.default_description().to_string(),
                })
                .collect(),
        }
    }
}

impl AgentCatalog {
    /// Build a catalog from explicit perspectives using built-in descriptions.
    ///
    /// Duplicates are dropped, keeping the first occurrence.
    pub fn from_perspectives(
        perspectives: impl IntoIterator<Item = Perspective>,
    ) -> Result<Self, DomainError> {
        let mut entries: Vec<CatalogEntry> = Vec::new();
        for perspective in perspectives {
            if entries.iter().any(|e| e.perspective == perspective) {
                continue;
            }
            entries.push(CatalogEntry {
                perspective,
                description: perspective.default_description().to_string(),
            });
        }
        if entries.is_empty() {
            return Err(DomainError::EmptyCatalog);
        }
        Ok(Self { entries })
    }

    /// Override the description of a cataloged perspective
    pub fn with_description(mut self, perspective: Perspective, description: impl Into<String>) -> Self {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.perspective == perspective) {
            entry.description = description.into();
        }
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, perspective: Perspective) -> bool {
        self.entries.iter().any(|e| e.perspective == perspective)
    }

    /// Resolve a bare identifier to a cataloged perspective (exact match)
    pub fn resolve(&self, name: &str) -> Option<Perspective> {
        name.parse::<Perspective>()
            .ok()
            .filter(|p| self.contains(*p))
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn perspectives(&self) -> impl Iterator<Item = Perspective> + '_ {
        self.entries.iter().map(|e| e.perspective)
    }

    pub fn description(&self, perspective: Perspective) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.perspective == perspective)
            .map(|e| e.description.as_str())
    }

    /// Render `- Name: description` lines for meta-query prompts
    pub fn describe(&self) -> String {
        self.entries
            .iter()
            .map(|e| format!("- {}: {}", e.perspective, e.description))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
