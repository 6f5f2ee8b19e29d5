use std::time::Duration;

/// Default RAGFlow HTTP API root for a locally running instance.
pub const DEFAULT_BASE_URL: &str = "http://localhost:9380/api/v1";
/// Placeholder model name; RAGFlow answers with the model bound to the chat assistant.
pub const DEFAULT_MODEL: &str = "ragflow";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for a RAGFlow chat assistant.
///
/// Built once at startup and shared read-only with every consumer. Empty
/// credentials are accepted here; they are only reported when a query is made.
#[derive(Debug, Clone)]
pub struct RagflowConfig {
    base_url: String,
    api_key: String,
    chat_id: String,
    model: String,
    timeout: Duration,
}

impl RagflowConfig {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        chat_id: impl Into<String>,
    ) -> Self {
        let base: String = base_url.into();
        Self {
            base_url: base.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            chat_id: chat_id.into(),
            model: DEFAULT_MODEL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Construct from environment variables:
    ///
    /// | Variable           | Default                        |
    /// |--------------------|--------------------------------|
    /// | `RAGFLOW_BASE_URL` | `http://localhost:9380/api/v1` |
    /// | `RAGFLOW_API_KEY`  | `""` (empty)                   |
    /// | `RAGFLOW_CHAT_ID`  | `""` (empty)                   |
    pub fn from_env() -> Self {
        let base = std::env::var("RAGFLOW_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let key = std::env::var("RAGFLOW_API_KEY").unwrap_or_default();
        let chat_id = std::env::var("RAGFLOW_CHAT_ID").unwrap_or_default();
        Self::new(base, key, chat_id)
    }

    pub fn with_base_url(self, base_url: impl Into<String>) -> Self {
        Self::new(base_url, self.api_key, self.chat_id)
            .with_model(self.model)
            .with_timeout(self.timeout)
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    pub fn with_chat_id(mut self, chat_id: impl Into<String>) -> Self {
        self.chat_id = chat_id.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn chat_id(&self) -> &str {
        &self.chat_id
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    pub fn has_chat_id(&self) -> bool {
        !self.chat_id.is_empty()
    }

    /// Both credentials are required before any request is sent.
    pub fn is_configured(&self) -> bool {
        self.has_api_key() && self.has_chat_id()
    }

    pub fn completions_url(&self) -> String {
        format!(
            "{}/chats_openai/{}/chat/completions",
            self.base_url, self.chat_id
        )
    }

    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.api_key)
    }
}
