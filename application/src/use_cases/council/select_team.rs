//! Initial team selection

use crate::ports::text_generator::TextGenerator;
use rand::seq::SliceRandom;
use sarcasm_domain::util::preview;
use sarcasm_domain::{AgentCatalog, CouncilPrompt, Perspective, parse_agent_list};
use std::sync::Arc;
use tracing::{info, warn};

/// Chooses the first perspectives to activate via a meta-query
pub struct TeamSelector {
    generator: Arc<dyn TextGenerator>,
}

impl TeamSelector {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Return `n_initial` distinct cataloged perspectives.
    ///
    /// When the response names fewer valid perspectives than requested, it is
    /// discarded entirely in favour of a uniform random sample. Requests larger
    /// than the catalog are capped at the catalog size.
    pub async fn select_initial(
        &self,
        text: &str,
        catalog: &AgentCatalog,
        n_initial: usize,
    ) -> Vec<Perspective> {
        let n = n_initial.min(catalog.len());
        if n < n_initial {
            warn!(
                requested = n_initial,
                available = catalog.len(),
                "Initial team larger than catalog, capping"
            );
        }
        if n == 0 {
            return Vec::new();
        }

        let prompt = CouncilPrompt::team_selection(text, catalog, n);
        let raw = self.generator.complete(&prompt).await;
        let mut selected = parse_agent_list(&raw, catalog);

        if selected.len() >= n {
            selected.truncate(n);
            info!("Selected initial team: {:?}", selected);
            return selected;
        }

        warn!(
            valid = selected.len(),
            needed = n,
            "Team selection returned too few valid agents ({}), falling back to random",
            preview(&raw, 80)
        );
        random_team(catalog, n)
    }
}

/// Uniform sample of `n` distinct cataloged perspectives
fn random_team(catalog: &AgentCatalog, n: usize) -> Vec<Perspective> {
    let all: Vec<Perspective> = catalog.perspectives().collect();
    all.choose_multiple(&mut rand::thread_rng(), n)
        .copied()
        .collect()
}
