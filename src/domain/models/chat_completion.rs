use serde::{Deserialize, Serialize};

/// OpenAI-style chat completion request as accepted by RAGFlow's
/// `chats_openai` endpoint. Streaming is always off.
#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    pub stream: bool,
}

#[derive(Debug, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

impl<'a> ChatCompletionRequest<'a> {
    /// A single user turn carrying `query`.
    pub fn user_query(model: &'a str, query: &'a str) -> Self {
        Self {
            model,
            messages: vec![ChatMessage {
                role: "user",
                content: query,
            }],
            stream: false,
        }
    }
}

/// The subset of the completion response we read. Citation metadata that
/// RAGFlow may attach elsewhere in the payload is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Option<Vec<Choice>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub message: ChoiceMessage,
}

#[derive(Debug, Default, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletionResponse {
    /// Content of the first choice, or `None` when `choices` is missing, null,
    /// or empty. A first choice without message content yields an empty string.
    pub fn into_first_content(self) -> Option<String> {
        self.choices
            .unwrap_or_default()
            .into_iter()
            .next()
            .map(|c| c.message.content.unwrap_or_default())
    }
}
