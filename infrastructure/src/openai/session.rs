//! Chat completion session bound to one API key

use super::protocol::{ChatRequest, ChatResponse};
use async_trait::async_trait;
use sarcasm_application::ports::llm_gateway::{GatewayError, LlmSession};
use tracing::debug;

const COMPLETIONS_PATH: &str = "/v1/chat/completions";

pub struct OpenAiChatSession {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
    max_tokens: u32,
}

impl OpenAiChatSession {
    /// `client` carries the request timeout; it is cheap to clone and share.
    pub fn new(
        client: reqwest::Client,
        base_url: &str,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            client,
            endpoint: Self::endpoint_for(base_url),
            api_key: api_key.into(),
            model: model.into(),
            max_tokens: 512,
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn endpoint_for(base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), COMPLETIONS_PATH)
    }
}

#[async_trait]
impl LlmSession for OpenAiChatSession {
    fn model(&self) -> &str {
        &self.model
    }

    async fn send(&self, content: &str) -> Result<String, GatewayError> {
        let request = ChatRequest::single_user_message(&self.model, content, self.max_tokens);

        debug!(model = %self.model, bytes = content.len(), "Chat completion request");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GatewayError::Timeout
                } else {
                    GatewayError::ConnectionError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::RequestFailed(format!(
                "HTTP {} {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown"),
                sarcasm_domain::util::truncate_str(&body, 200)
            )));
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        body.first_content()
            .ok_or_else(|| GatewayError::InvalidResponse("No message content in response".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_base_url() {
        let client = reqwest::Client::new();
        let session = OpenAiChatSession::new(client.clone(), "https://api.openai.com/", "k", "gpt-4o");
        assert_eq!(session.endpoint(), "https://api.openai.com/v1/chat/completions");

        let session = OpenAiChatSession::new(client, "http://localhost:8000", "k", "m");
        assert_eq!(session.endpoint(), "http://localhost:8000/v1/chat/completions");
        assert_eq!(session.model(), "m");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_connection_error() {
        let session = OpenAiChatSession::new(reqwest::Client::new(), "http://127.0.0.1:9", "k", "m");
        let err = session.send("hello").await.unwrap_err();
        assert!(matches!(
            err,
            GatewayError::ConnectionError(_) | GatewayError::Timeout
        ));
    }
}
