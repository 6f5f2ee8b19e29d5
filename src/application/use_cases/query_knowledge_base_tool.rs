use std::sync::Arc;

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use crate::application::{Tool, ToolDefinition};
use crate::domain::ToolError;

use super::QueryKnowledgeBaseUseCase;

pub const QUERY_KNOWLEDGE_BASE_TOOL: &str = "query_knowledge_base";

pub const QUERY_KNOWLEDGE_BASE_DESCRIPTION: &str = "\
Searches the unified knowledge base for information related to the query. \
Use this tool whenever you need to find factual information, documentation, \
or specific domain knowledge that might be stored in the internal knowledge base.";

/// Input parameters for the query_knowledge_base tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct QueryKnowledgeBaseInput {
    /// The search query to look up in the knowledge base.
    pub query: String,
}

pub struct QueryKnowledgeBaseTool {
    use_case: Arc<QueryKnowledgeBaseUseCase>,
    input_schema: Value,
}

impl QueryKnowledgeBaseTool {
    pub fn new(use_case: Arc<QueryKnowledgeBaseUseCase>) -> Self {
        Self {
            use_case,
            input_schema: schemars::schema_for!(QueryKnowledgeBaseInput).to_value(),
        }
    }
}

#[async_trait]
impl Tool for QueryKnowledgeBaseTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: QUERY_KNOWLEDGE_BASE_TOOL.to_string(),
            description: QUERY_KNOWLEDGE_BASE_DESCRIPTION.to_string(),
            input_schema: self.input_schema.clone(),
        }
    }

    async fn call(&self, args: Value) -> Result<String, ToolError> {
        let input: QueryKnowledgeBaseInput = serde_json::from_value(args)
            .map_err(|e| ToolError::invalid_arguments(QUERY_KNOWLEDGE_BASE_TOOL, e.to_string()))?;
        Ok(self.use_case.execute(&input.query).await)
    }
}
