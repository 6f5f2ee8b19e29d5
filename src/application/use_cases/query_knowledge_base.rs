use std::sync::Arc;

use tracing::info;

use crate::application::KnowledgeRetriever;

/// Agent-facing entry point for knowledge base questions.
///
/// Pure pass-through: whatever the retriever returns, including failure
/// messages, is handed back unchanged.
pub struct QueryKnowledgeBaseUseCase {
    retriever: Arc<dyn KnowledgeRetriever>,
}

impl QueryKnowledgeBaseUseCase {
    pub fn new(retriever: Arc<dyn KnowledgeRetriever>) -> Self {
        Self { retriever }
    }

    pub async fn execute(&self, query: &str) -> String {
        info!(query, "query_knowledge_base_tool_called");
        self.retriever.retrieve(query).await
    }
}
