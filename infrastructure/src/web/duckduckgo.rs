//! Background knowledge from DuckDuckGo search snippets.
//!
//! Four steps, each with a fixed fallback string:
//!
//! 1. Ask the generator whether the text needs outside knowledge. A "yes"
//!    anywhere in the answer means search; a failed call also means search.
//! 2. Ask for one or two keywords. A "no search" answer or an empty one ends
//!    with [`NO_BACKGROUND`].
//! 3. Fetch the HTML results page and collect `div.result a.result__snippet`
//!    texts. Transport errors end with [`SEARCH_FAILED`], no snippets with
//!    [`NO_SEARCH_RESULTS`].
//! 4. Ask for a one-sentence summary of the snippets.

use async_trait::async_trait;
use sarcasm_application::ports::text_generator::{TextGenerator, is_generation_failure};
use sarcasm_application::ports::web_context::WebContextProvider;
use sarcasm_domain::WebPrompt;
use sarcasm_domain::prompt::web::{
    NO_BACKGROUND, NO_SEARCH_MARKER, NO_SEARCH_RESULTS, NO_WEB_SEARCH, SEARCH_FAILED,
};
use scraper::{Html, Selector};
use std::sync::{Arc, LazyLock};
use tracing::{debug, info, warn};

/// DuckDuckGo HTML endpoint (no API key required).
pub const DDG_HTML_URL: &str = "https://html.duckduckgo.com/html/";

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

static SNIPPET_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.result a.result__snippet").expect("static selector"));

pub struct DuckDuckGoContextProvider {
    generator: Arc<dyn TextGenerator>,
    client: reqwest::Client,
    search_url: String,
    max_snippets: usize,
}

impl DuckDuckGoContextProvider {
    pub fn new(generator: Arc<dyn TextGenerator>, client: reqwest::Client) -> Self {
        Self {
            generator,
            client,
            search_url: DDG_HTML_URL.to_string(),
            max_snippets: 3,
        }
    }

    pub fn with_search_url(mut self, url: impl Into<String>) -> Self {
        self.search_url = url.into();
        self
    }

    pub fn with_max_snippets(mut self, max: usize) -> Self {
        self.max_snippets = max;
        self
    }

    async fn should_search(&self, text: &str) -> bool {
        let answer = self.generator.complete(&WebPrompt::needs_search(text)).await;
        if is_generation_failure(&answer) {
            warn!("Search decision failed, searching anyway");
            return true;
        }
        let needed = answer.to_lowercase().contains("yes");
        debug!(needed, "Search decision: {}", answer.trim());
        needed
    }

    async fn search_query(&self, text: &str) -> Option<String> {
        let answer = self.generator.complete(&WebPrompt::search_keywords(text)).await;
        let query = answer.trim();
        if query.is_empty()
            || is_generation_failure(query)
            || query.to_lowercase().contains(NO_SEARCH_MARKER)
        {
            return None;
        }
        Some(query.to_string())
    }

    async fn fetch_snippets(&self, query: &str) -> Result<Vec<String>, reqwest::Error> {
        let html = self
            .client
            .get(&self.search_url)
            .query(&[("q", query)])
            .header("User-Agent", USER_AGENT)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(extract_snippets(&html, self.max_snippets))
    }
}

#[async_trait]
impl WebContextProvider for DuckDuckGoContextProvider {
    async fn search_and_summarize(&self, text: &str) -> String {
        if !self.should_search(text).await {
            return NO_WEB_SEARCH.to_string();
        }

        let Some(query) = self.search_query(text).await else {
            return NO_BACKGROUND.to_string();
        };
        info!(query = %query, "Searching the web");

        let snippets = match self.fetch_snippets(&query).await {
            Ok(snippets) => snippets,
            Err(e) => {
                warn!("Web search failed: {}", e);
                return SEARCH_FAILED.to_string();
            }
        };
        if snippets.is_empty() {
            return NO_SEARCH_RESULTS.to_string();
        }

        let summary = self
            .generator
            .complete(&WebPrompt::summarize_snippets(&snippets))
            .await;
        if is_generation_failure(&summary) {
            return SEARCH_FAILED.to_string();
        }
        summary.trim().to_string()
    }
}

/// Snippet texts from a DuckDuckGo HTML results page, whitespace-collapsed
pub fn extract_snippets(html: &str, max: usize) -> Vec<String> {
    let document = Html::parse_document(html);
    document
        .select(&SNIPPET_SELECTOR)
        .map(|el| el.text().collect::<Vec<_>>().join(" "))
        .map(|t| t.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|t| !t.is_empty())
        .take(max)
        .collect()
}
