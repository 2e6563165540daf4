//! Recruitment of one complementary perspective

use crate::ports::text_generator::{TextGenerator, is_generation_failure};
use rand::seq::SliceRandom;
use sarcasm_domain::util::preview;
use sarcasm_domain::{CouncilPrompt, Perspective, parse_agent_name};
use std::sync::Arc;
use tracing::{info, warn};

pub struct Recruiter {
    generator: Arc<dyn TextGenerator>,
}

impl Recruiter {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Pick one not-yet-active candidate, or `None`.
    ///
    /// Only an exact candidate name is accepted. A transport failure (the
    /// [`GENERATION_FAILED`](crate::ports::text_generator::GENERATION_FAILED)
    /// sentinel) does not end the loop: it falls back to a uniform random
    /// candidate instead of being read as an unknown name.
    pub async fn select_complementary(
        &self,
        active: &[Perspective],
        candidates: &[Perspective],
        text: &str,
        explanations: &[(Perspective, String)],
        utterance_context: Option<&str>,
    ) -> Option<Perspective> {
        if candidates.is_empty() {
            return None;
        }

        let prompt =
            CouncilPrompt::recruitment(active, candidates, text, explanations, utterance_context);
        let raw = self.generator.complete(&prompt).await;

        if is_generation_failure(&raw) {
            let pick = random_candidate(candidates);
            warn!(pick = ?pick, "Recruiter unavailable, picking a random candidate");
            return pick;
        }

        let pick = parse_agent_name(&raw, candidates);
        match pick {
            Some(p) => info!(agent = %p, "Recruited"),
            None => info!("Recruiter declined or named no candidate: {}", preview(&raw, 80)),
        }
        pick
    }
}

fn random_candidate(candidates: &[Perspective]) -> Option<Perspective> {
    candidates.choose(&mut rand::thread_rng()).copied()
}
