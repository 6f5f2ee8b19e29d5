use anyhow::Result;

use crate::RagflowConfig;

use super::super::Container;

/// Smoke test against the configured backend: shows what is configured, then
/// runs the same query through the client and through the tool wrapper.
pub struct CheckController<'a> {
    container: &'a Container,
}

impl<'a> CheckController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn check(&self, query: String) -> Result<String> {
        let result = self.container.retriever().retrieve(&query).await;
        let tool_result = self.container.query_use_case().execute(&query).await;
        Ok(self.format_check(self.container.config(), &query, &result, &tool_result))
    }

    fn format_check(
        &self,
        config: &RagflowConfig,
        query: &str,
        result: &str,
        tool_result: &str,
    ) -> String {
        format!(
            "RAGFlow Base URL: {}\nRAGFlow Chat ID: {}\nRAGFlow API Key set: {}\n\n\
             Testing retrieve with query: '{}'\nResult: {}\n\n\
             Testing query_knowledge_base tool with query: '{}'\nTool Result: {}",
            config.base_url(),
            config.chat_id(),
            config.has_api_key(),
            query,
            result,
            query,
            tool_result
        )
    }
}
