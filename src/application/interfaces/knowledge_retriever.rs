use async_trait::async_trait;

use crate::domain::RetrievalError;

/// Answers free-text questions from an external knowledge base.
///
/// Implementors encapsulate transport and vendor-specific API details so the
/// tool layer stays decoupled from any particular backend.
#[async_trait]
pub trait KnowledgeRetriever: Send + Sync {
    /// Look up `query` and report failures as typed errors.
    async fn try_retrieve(&self, query: &str) -> Result<String, RetrievalError>;

    /// Look up `query`, rendering every failure as a human-readable string.
    ///
    /// Never fails: agents always receive text.
    async fn retrieve(&self, query: &str) -> String {
        match self.try_retrieve(query).await {
            Ok(content) => content,
            Err(e) => e.to_string(),
        }
    }
}
