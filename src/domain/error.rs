use thiserror::Error;

/// Outcome of a failed knowledge base lookup.
///
/// The `Display` text of every variant is the exact string handed back to
/// agents by [`crate::RagflowClient::retrieve`], so callers that only see
/// strings and callers that match on variants observe the same thing.
#[derive(Debug, Error)]
pub enum RetrievalError {
    #[error("RAGFlow is not configured. Please provide API key and Chat ID.")]
    NotConfigured,

    #[error("Error communicating with RAGFlow: {details}")]
    UpstreamStatus { status: u16, details: String },

    #[error("An unexpected error occurred while querying RAGFlow: {0}")]
    Unexpected(String),

    #[error("No response from RAGFlow.")]
    EmptyResponse,
}

impl RetrievalError {
    pub fn upstream_status(status: u16, details: impl Into<String>) -> Self {
        Self::UpstreamStatus {
            status,
            details: details.into(),
        }
    }

    pub fn unexpected(msg: impl Into<String>) -> Self {
        Self::Unexpected(msg.into())
    }

    /// HTTP status code reported by the backend, when there was one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::UpstreamStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_configured(&self) -> bool {
        matches!(self, Self::NotConfigured)
    }

    pub fn is_empty_response(&self) -> bool {
        matches!(self, Self::EmptyResponse)
    }
}

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Tool not found: {0}")]
    NotFound(String),

    #[error("Invalid arguments for tool {tool}: {message}")]
    InvalidArguments { tool: String, message: String },
}

impl ToolError {
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    pub fn invalid_arguments(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArguments {
            tool: tool.into(),
            message: message.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
