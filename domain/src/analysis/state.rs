//! Mutable per-analysis state owned by a single controller run

use super::result::{AgentOutputs, AgentResult};
use crate::perspective::{AgentCatalog, Perspective};

/// State carried through the debate / gate / recruit loop
///
/// The activation set only grows. Every activated perspective has an entry in
/// `outputs`, and the debate engine may overwrite those entries in place.
#[derive(Debug, Clone, Default)]
pub struct RoundState {
    /// Number of loop iterations entered so far
    pub round_index: usize,
    activated: Vec<Perspective>,
    outputs: AgentOutputs,
}

impl RoundState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the first result of a newly activated perspective.
    ///
    /// Returns `false` (and changes nothing) if it was already active.
    pub fn activate(&mut self, perspective: Perspective, result: AgentResult) -> bool {
        if self.is_active(perspective) {
            return false;
        }
        self.activated.push(perspective);
        self.outputs.insert(perspective, result);
        true
    }

    pub fn is_active(&self, perspective: Perspective) -> bool {
        self.activated.contains(&perspective)
    }

    pub fn active_count(&self) -> usize {
        self.activated.len()
    }

    /// Activated perspectives in activation order
    pub fn activated(&self) -> &[Perspective] {
        &self.activated
    }

    pub fn outputs(&self) -> &AgentOutputs {
        &self.outputs
    }

    pub fn outputs_mut(&mut self) -> &mut AgentOutputs {
        &mut self.outputs
    }

    /// Catalog entries not yet activated, in catalog order
    pub fn inactive_candidates(&self, catalog: &AgentCatalog) -> Vec<Perspective> {
        catalog
            .perspectives()
            .filter(|p| !self.is_active(*p))
            .collect()
    }

    pub fn explanations(&self) -> Vec<(Perspective, String)> {
        self.outputs.explanations()
    }

    pub fn into_parts(self) -> (Vec<Perspective>, AgentOutputs) {
        (self.activated, self.outputs)
    }
}
