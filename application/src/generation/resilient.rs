//! Bounded, cancellable retry around an [`LlmSession`]

use crate::config::RetryPolicy;
use crate::ports::llm_gateway::LlmSession;
use crate::ports::text_generator::{GENERATION_FAILED, TextGenerator};
use async_trait::async_trait;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// [`TextGenerator`] that retries failed sends and honours cancellation.
///
/// Both the in-flight request and the backoff sleep race against the
/// cancellation token. Exhausted retries and cancellation both yield
/// [`GENERATION_FAILED`].
pub struct ResilientGenerator {
    session: Arc<dyn LlmSession>,
    policy: RetryPolicy,
    cancellation: CancellationToken,
}

impl ResilientGenerator {
    pub fn new(session: Arc<dyn LlmSession>) -> Self {
        Self {
            session,
            policy: RetryPolicy::default(),
            cancellation: CancellationToken::new(),
        }
    }

    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }
}

#[async_trait]
impl TextGenerator for ResilientGenerator {
    async fn complete(&self, prompt: &str) -> String {
        let max_attempts = self.policy.max_attempts.max(1);

        for attempt in 1..=max_attempts {
            if self.cancellation.is_cancelled() {
                debug!("Generation skipped: cancelled");
                return GENERATION_FAILED.to_string();
            }

            let result = tokio::select! {
                biased;
                _ = self.cancellation.cancelled() => {
                    debug!("Generation cancelled mid-request");
                    return GENERATION_FAILED.to_string();
                }
                result = self.session.send(prompt) => result,
            };

            match result {
                Ok(text) => return text,
                Err(e) => warn!(
                    model = self.session.model(),
                    attempt,
                    max_attempts,
                    "Generation attempt failed: {}",
                    e
                ),
            }

            if attempt < max_attempts {
                tokio::select! {
                    biased;
                    _ = self.cancellation.cancelled() => {
                        debug!("Generation cancelled during backoff");
                        return GENERATION_FAILED.to_string();
                    }
                    _ = tokio::time::sleep(self.policy.backoff) => {}
                }
            }
        }

        warn!(model = self.session.model(), "Generation gave up after {} attempts", max_attempts);
        GENERATION_FAILED.to_string()
    }
}
