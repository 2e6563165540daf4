//! Controller wiring from file configuration

use crate::config::{ConfigError, FileConfig};
use crate::openai::OpenAiChatSession;
use crate::summarizer::LlmSummarizer;
use crate::web::DuckDuckGoContextProvider;
use sarcasm_application::ports::controller_factory::{ControllerFactory, FactoryError};
use sarcasm_application::ports::llm_gateway::LlmSession;
use sarcasm_application::ports::text_generator::TextGenerator;
use sarcasm_application::ports::web_context::{NoWebContext, WebContextProvider};
use sarcasm_application::{
    AgentRoster, AnalysisParams, AnalyzeTextUseCase, ResilientGenerator, RetryPolicy,
};
use sarcasm_domain::AgentCatalog;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Builds controllers that talk to an OpenAI-compatible endpoint.
///
/// One HTTP client is shared by every controller it builds. Each controller
/// gets its own session (and thus credential) and one resilient generator
/// bound to the caller's cancellation token, which serves the perspectives,
/// the meta-queries, the web context lookup and the summary.
pub struct CouncilFactory {
    client: reqwest::Client,
    base_url: String,
    model: String,
    max_tokens: u32,
    catalog: AgentCatalog,
    params: AnalysisParams,
    retry: RetryPolicy,
    web_search: Option<WebSearchSettings>,
}

#[derive(Debug, Clone)]
struct WebSearchSettings {
    search_url: String,
    max_snippets: usize,
}

impl CouncilFactory {
    pub fn from_config(config: &FileConfig) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .timeout(config.provider.request_timeout())
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        let catalog = config
            .catalog()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;

        let web_search = config.web_search.enabled.then(|| WebSearchSettings {
            search_url: config.web_search.search_url.clone(),
            max_snippets: config.web_search.max_snippets,
        });

        Ok(Self {
            client,
            base_url: config.provider.base_url.clone(),
            model: config.provider.model.clone(),
            max_tokens: config.provider.max_tokens,
            catalog,
            params: config.analysis.to_params(),
            retry: config.retry.to_policy(),
            web_search,
        })
    }

    /// Override the controller parameters (e.g. from CLI flags)
    pub fn with_params(mut self, params: AnalysisParams) -> Self {
        self.params = params;
        self
    }

    pub fn params(&self) -> &AnalysisParams {
        &self.params
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn catalog(&self) -> &AgentCatalog {
        &self.catalog
    }

    pub fn web_search_enabled(&self) -> bool {
        self.web_search.is_some()
    }
}

impl ControllerFactory for CouncilFactory {
    fn build(
        &self,
        credential: &str,
        cancel: CancellationToken,
    ) -> Result<AnalyzeTextUseCase, FactoryError> {
        if credential.trim().is_empty() {
            return Err(FactoryError("empty API key".to_string()));
        }

        let session: Arc<dyn LlmSession> = Arc::new(
            OpenAiChatSession::new(self.client.clone(), &self.base_url, credential, &self.model)
                .with_max_tokens(self.max_tokens),
        );
        let generator: Arc<dyn TextGenerator> = Arc::new(
            ResilientGenerator::new(session)
                .with_policy(self.retry)
                .with_cancellation(cancel),
        );

        let web_context: Arc<dyn WebContextProvider> = match &self.web_search {
            Some(settings) => Arc::new(
                DuckDuckGoContextProvider::new(Arc::clone(&generator), self.client.clone())
                    .with_search_url(settings.search_url.clone())
                    .with_max_snippets(settings.max_snippets),
            ),
            None => Arc::new(NoWebContext),
        };

        let roster = AgentRoster::uniform(self.catalog.clone(), Arc::clone(&generator));
        let summarizer = Arc::new(LlmSummarizer::new(Arc::clone(&generator)));

        Ok(
            AnalyzeTextUseCase::new(roster, generator, web_context, summarizer)
                .with_params(self.params.clone()),
        )
    }
}
