//! Identifier → agent mapping for one controller

use super::PerspectiveAgent;
use crate::ports::text_generator::TextGenerator;
use sarcasm_domain::{AgentCatalog, Perspective};
use std::sync::Arc;

/// The catalog plus one [`PerspectiveAgent`] per cataloged perspective.
pub struct AgentRoster {
    catalog: AgentCatalog,
    agents: Vec<PerspectiveAgent>,
}

impl AgentRoster {
    /// Build agents with a dedicated generator per perspective
    pub fn new(
        catalog: AgentCatalog,
        mut generator_for: impl FnMut(Perspective) -> Arc<dyn TextGenerator>,
    ) -> Self {
        let agents = catalog
            .perspectives()
            .map(|p| PerspectiveAgent::new(p, generator_for(p)))
            .collect();
        Self { catalog, agents }
    }

    /// Build agents that all share one generator
    pub fn uniform(catalog: AgentCatalog, generator: Arc<dyn TextGenerator>) -> Self {
        Self::new(catalog, |_| Arc::clone(&generator))
    }

    pub fn catalog(&self) -> &AgentCatalog {
        &self.catalog
    }

    pub fn get(&self, perspective: Perspective) -> Option<&PerspectiveAgent> {
        self.agents.iter().find(|a| a.perspective() == perspective)
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}
