use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use tracing::{error, info, warn};

use crate::application::KnowledgeRetriever;
use crate::domain::{ChatCompletionRequest, ChatCompletionResponse, RagflowConfig, RetrievalError};

/// HTTP client for RAGFlow's OpenAI-compatible chat completion endpoint
/// (`{base_url}/chats_openai/{chat_id}/chat/completions`).
///
/// Implements [`KnowledgeRetriever`]. Every call is a single non-streaming
/// request with no retries and no redirect following; the configured timeout (30 s by default) covers
/// the whole exchange.
///
/// Missing credentials are not an error at construction time. They are
/// reported on the first query without touching the network.
pub struct RagflowClient {
    client: reqwest::Client,
    config: RagflowConfig,
    /// Full endpoint URL (base + chat path).
    url: String,
    authorization: String,
}

impl RagflowClient {
    pub fn new(config: RagflowConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .unwrap_or_default();
        Self {
            client,
            url: config.completions_url(),
            authorization: config.authorization_header(),
            config,
        }
    }

    pub fn config(&self) -> &RagflowConfig {
        &self.config
    }

    async fn send(&self, query: &str) -> Result<ChatCompletionResponse, RetrievalError> {
        let request = ChatCompletionRequest::user_query(self.config.model(), query);

        let response = self
            .client
            .post(&self.url)
            .header(AUTHORIZATION, &self.authorization)
            .header(CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| RetrievalError::unexpected(e.to_string()))?;

        // Redirects are not followed; any non-2xx, 3xx included, is an upstream failure.
        let status = response.status();
        if !status.is_success() {
            return Err(RetrievalError::upstream_status(
                status.as_u16(),
                format!("HTTP status {status} for url ({})", self.url),
            ));
        }

        response
            .json::<ChatCompletionResponse>()
            .await
            .map_err(|e| RetrievalError::unexpected(e.to_string()))
    }
}

#[async_trait]
impl KnowledgeRetriever for RagflowClient {
    async fn try_retrieve(&self, query: &str) -> Result<String, RetrievalError> {
        if !self.config.is_configured() {
            warn!(
                api_key_set = self.config.has_api_key(),
                chat_id_set = self.config.has_chat_id(),
                "ragflow_not_configured"
            );
            return Err(RetrievalError::NotConfigured);
        }

        let response = match self.send(query).await {
            Ok(r) => r,
            Err(e) => {
                match &e {
                    RetrievalError::UpstreamStatus { status, details } => {
                        error!(status_code = status, error = %details, "ragflow_api_error");
                    }
                    other => error!(error = %other, "ragflow_unexpected_error"),
                }
                return Err(e);
            }
        };

        let content = response
            .into_first_content()
            .ok_or(RetrievalError::EmptyResponse)?;

        info!(query, "ragflow_retrieval_successful");
        Ok(content)
    }
}
